//! Title search over the FTS index, constrained to one status.
//!
//! The search path collects every matching id up front and pages into that
//! match list by offset: the continuation cursor is the decimal offset of
//! the next slice, produced and consumed only by this adapter. Callers
//! still treat it as opaque.

use crate::db::pagination::{Page, PaginationOpts};
use crate::error::{Error, Result};
use crate::models::{Post, PostStatus};
use crate::services::posts;
use crate::Database;

pub(crate) fn search_posts(
    db: &Database,
    query: &str,
    status: PostStatus,
    opts: &PaginationOpts,
) -> Result<Page<Post>> {
    let offset: usize = match opts.cursor.as_deref() {
        Some(cursor) => cursor.parse().map_err(|_| Error::InvalidCursor)?,
        None => 0,
    };

    let ids = matching_ids(db, query, status)?;
    let total = ids.len();
    let end = total.min(offset.saturating_add(opts.num_items));
    let slice: &[i64] = if offset >= total { &[] } else { &ids[offset..end] };

    let mut page = Vec::with_capacity(slice.len());
    for id in slice {
        // deleted between indexing and resolution: dropped, not an error
        if let Some(post) = posts::get_post_by_id(db, *id)? {
            page.push(post);
        }
    }

    let is_done = end >= total;
    let continue_cursor = (!is_done).then(|| end.to_string());

    Ok(Page { page, is_done, continue_cursor })
}

/// All matching post ids in rank order, unbounded.
fn matching_ids(db: &Database, query: &str, status: PostStatus) -> Result<Vec<i64>> {
    let phrase = phrase_query(query);
    if phrase.is_empty() {
        return Ok(Vec::new());
    }

    let conn = db.get()?;
    let mut stmt = conn.prepare(
        "SELECT p.id FROM posts_fts JOIN posts p ON p.id = posts_fts.rowid \
         WHERE posts_fts MATCH ?1 AND p.status = ?2 ORDER BY rank",
    )?;
    let ids = stmt
        .query_map(
            rusqlite::params![phrase, status.to_string()],
            |row| row.get(0),
        )?
        .collect::<Result<Vec<i64>, _>>()?;

    Ok(ids)
}

/// Quotes every whitespace token as an FTS phrase term so user input can
/// never hit the query syntax.
pub(crate) fn phrase_query(raw: &str) -> String {
    raw.split_whitespace()
        .map(|token| format!("\"{}\"", token.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(" ")
}
