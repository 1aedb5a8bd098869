use super::Term;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl FromStr for PostStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
        }
    }
}

/// A post as stored: categories and tags are soft references by id.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub slug: String,
    pub status: PostStatus,
    pub categories: Vec<i64>,
    pub tags: Vec<i64>,
    pub published_at: Option<String>,
    pub created_at: String,
}

/// A post with its term references resolved. Ids that no longer resolve
/// (term deleted after the post was written) are dropped, not errors.
#[derive(Debug, Clone, Serialize)]
pub struct PostWithTerms {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub slug: String,
    pub status: PostStatus,
    pub categories: Vec<Term>,
    pub tags: Vec<Term>,
    pub published_at: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub body: String,
    pub slug: String,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub categories: Vec<i64>,
    #[serde(default)]
    pub tags: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub body: Option<String>,
    pub slug: Option<String>,
    pub status: Option<PostStatus>,
    pub categories: Option<Vec<i64>>,
    pub tags: Option<Vec<i64>>,
    pub published_at: Option<String>,
}
