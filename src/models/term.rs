use serde::{Deserialize, Serialize};

/// Categories and tags share one shape; `TermKind` picks the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Category,
    Tag,
}

impl TermKind {
    pub fn table(self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Tag => "tags",
        }
    }

    /// Column of the posts table holding this kind's membership array.
    pub(crate) fn post_column(self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Tag => "tags",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Tag => "tag",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: String,
}

/// A term plus its derived usage count. The count is recomputed from the
/// live published posts on every read and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct TermWithCount {
    #[serde(flatten)]
    pub term: Term,
    pub count: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTerm {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateTerm {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}
