//! Pure predicate layer applied to a page of posts *after* pagination.
//!
//! Because filtering happens post-pagination, a page can come back with
//! fewer items than requested even when more matching rows exist later in
//! the scan. That is the accepted contract, not a bug.

use crate::models::Post;
use chrono::{DateTime, Datelike, NaiveDateTime};

/// In-memory filter set for post listings. Membership filters use any-of
/// semantics: a post matches an inclusion set if at least one of its ids is
/// in the set. A set that is present but empty therefore matches nothing.
#[derive(Debug, Clone, Default)]
pub struct PostFilters {
    pub include: Option<Vec<i64>>,
    pub exclude: Option<Vec<i64>>,
    pub slug: Option<Vec<String>>,
    pub categories: Option<Vec<i64>>,
    pub categories_exclude: Option<Vec<i64>>,
    pub tags: Option<Vec<i64>>,
    pub tags_exclude: Option<Vec<i64>>,
    /// "YYYY-MM" bucket over published_at, falling back to created_at.
    pub month_year: Option<String>,
}

impl PostFilters {
    pub fn apply(&self, mut posts: Vec<Post>) -> Vec<Post> {
        if let Some(ids) = &self.include {
            posts.retain(|post| ids.contains(&post.id));
        }
        if let Some(ids) = &self.exclude {
            posts.retain(|post| !ids.contains(&post.id));
        }
        if let Some(slugs) = &self.slug {
            posts.retain(|post| slugs.iter().any(|s| s == &post.slug));
        }
        if let Some(ids) = &self.categories {
            posts.retain(|post| post.categories.iter().any(|id| ids.contains(id)));
        }
        if let Some(ids) = &self.categories_exclude {
            posts.retain(|post| !post.categories.iter().any(|id| ids.contains(id)));
        }
        if let Some(ids) = &self.tags {
            posts.retain(|post| post.tags.iter().any(|id| ids.contains(id)));
        }
        if let Some(ids) = &self.tags_exclude {
            posts.retain(|post| !post.tags.iter().any(|id| ids.contains(id)));
        }
        if let Some(token) = &self.month_year {
            let wanted = parse_month_token(token);
            posts.retain(|post| {
                let ts = post.published_at.as_deref().unwrap_or(&post.created_at);
                wanted.is_some() && month_bucket(ts) == wanted
            });
        }

        posts
    }
}

/// Parses a "YYYY-MM" token. A malformed token makes the month filter match
/// no posts rather than fail the call.
fn parse_month_token(token: &str) -> Option<(i32, u32)> {
    let (year, month) = token.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Wall-clock (year, month) of a stored timestamp. Accepts RFC 3339 and the
/// bare datetime formats SQLite writes; anything unparseable buckets nowhere.
pub(crate) fn month_bucket(ts: &str) -> Option<(i32, u32)> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        let local = dt.naive_local();
        return Some((local.year(), local.month()));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(ts, fmt) {
            return Some((dt.year(), dt.month()));
        }
    }
    None
}
