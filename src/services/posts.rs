use crate::db::pagination::{decode_cursor, page_from_scan, Order, Page, PaginationOpts, ScanKey};
use crate::error::{Error, Result};
use crate::models::{CreatePost, Post, PostStatus, PostWithTerms, TermKind, UpdatePost};
use crate::services::filters::PostFilters;
use crate::services::slug::{ensure_slug_available, map_constraint};
use crate::services::{search, terms};
use crate::Database;
use rusqlite::OptionalExtension;

const POST_COLUMNS: &str =
    "id, title, body, slug, status, categories, tags, published_at, created_at";

/// Arguments to a post listing call.
pub struct ListPosts {
    pub pagination: PaginationOpts,
    pub search: Option<String>,
    pub filters: PostFilters,
    pub order: Option<Order>,
    pub status: Option<PostStatus>,
}

impl Default for ListPosts {
    fn default() -> Self {
        Self {
            pagination: PaginationOpts::first_page(10),
            search: None,
            filters: PostFilters::default(),
            order: None,
            status: None,
        }
    }
}

/// Lists posts: one indexed page by status in creation order, then the
/// in-memory filter set over that page. A search term bypasses the indexed
/// path entirely and ignores the other filters.
pub fn list_posts(db: &Database, args: ListPosts) -> Result<Page<Post>> {
    if let Some(query) = args.search.as_deref().filter(|q| !q.trim().is_empty()) {
        let status = args.status.unwrap_or(PostStatus::Published);
        return search::search_posts(db, query, status, &args.pagination);
    }

    let status = args.status.unwrap_or(PostStatus::Published);
    let order = args.order.unwrap_or(Order::Desc);
    let scanned = scan_posts_by_status(db, status, order, &args.pagination)?;

    Ok(Page {
        page: args.filters.apply(scanned.page),
        is_done: scanned.is_done,
        continue_cursor: scanned.continue_cursor,
    })
}

fn scan_posts_by_status(
    db: &Database,
    status: PostStatus,
    order: Order,
    opts: &PaginationOpts,
) -> Result<Page<Post>> {
    let after = opts.cursor.as_deref().map(decode_cursor).transpose()?;
    let conn = db.get()?;

    let sql = match order {
        Order::Desc => format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE status = ?1 AND (?2 IS NULL OR id < ?2) \
             ORDER BY id DESC LIMIT ?3"
        ),
        Order::Asc => format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE status = ?1 AND (?2 IS NULL OR id > ?2) \
             ORDER BY id ASC LIMIT ?3"
        ),
    };

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(
            rusqlite::params![
                status.to_string(),
                after.as_ref().map(|key| key.id),
                opts.num_items as i64 + 1,
            ],
            row_to_post,
        )?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(page_from_scan(rows, opts.num_items, |post| ScanKey {
        key: None,
        id: post.id,
    }))
}

pub(crate) fn get_post_by_id(db: &Database, id: i64) -> Result<Option<Post>> {
    let conn = db.get()?;
    let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = ?1");
    Ok(conn.query_row(&sql, [id], row_to_post).optional()?)
}

/// Most-recently-created match wins when duplicate slugs exist. Referenced
/// categories and tags are resolved; dangling ids are dropped.
pub fn get_post_by_slug(db: &Database, slug: &str) -> Result<Option<PostWithTerms>> {
    let post = {
        let conn = db.get()?;
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = ?1 ORDER BY id DESC LIMIT 1");
        conn.query_row(&sql, [slug], row_to_post).optional()?
    };

    match post {
        Some(post) => {
            let categories = terms::resolve_ids(db, TermKind::Category, &post.categories)?;
            let tags = terms::resolve_ids(db, TermKind::Tag, &post.tags)?;
            Ok(Some(PostWithTerms {
                id: post.id,
                title: post.title,
                body: post.body,
                slug: post.slug,
                status: post.status,
                categories,
                tags,
                published_at: post.published_at,
                created_at: post.created_at,
            }))
        }
        None => Ok(None),
    }
}

pub fn create_post(db: &Database, input: CreatePost) -> Result<i64> {
    ensure_slug_available(db, "posts", "post", &input.slug, None)?;

    let conn = db.get()?;
    conn.execute(
        "INSERT INTO posts (title, body, slug, status, categories, tags) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![
            input.title,
            input.body,
            input.slug,
            input.status.to_string(),
            serde_json::to_string(&input.categories)?,
            serde_json::to_string(&input.tags)?,
        ],
    )
    .map_err(|e| map_constraint(e, "post", &input.slug))?;

    Ok(conn.last_insert_rowid())
}

/// Partial-field patch. The slug guard runs only when the patch carries a
/// slug, and the post's own unchanged slug is not a conflict.
pub fn update_post(db: &Database, id: i64, patch: UpdatePost) -> Result<()> {
    if let Some(slug) = patch.slug.as_deref() {
        ensure_slug_available(db, "posts", "post", slug, Some(id))?;
    }
    let patched_slug = patch.slug.clone();

    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if let Some(title) = patch.title {
        sets.push("title = ?");
        values.push(Box::new(title));
    }
    if let Some(body) = patch.body {
        sets.push("body = ?");
        values.push(Box::new(body));
    }
    if let Some(slug) = patch.slug {
        sets.push("slug = ?");
        values.push(Box::new(slug));
    }
    if let Some(status) = patch.status {
        sets.push("status = ?");
        values.push(Box::new(status.to_string()));
    }
    if let Some(categories) = patch.categories {
        sets.push("categories = ?");
        values.push(Box::new(serde_json::to_string(&categories)?));
    }
    if let Some(tags) = patch.tags {
        sets.push("tags = ?");
        values.push(Box::new(serde_json::to_string(&tags)?));
    }
    if let Some(published_at) = patch.published_at {
        sets.push("published_at = ?");
        values.push(Box::new(published_at));
    }

    if sets.is_empty() {
        return Ok(());
    }
    values.push(Box::new(id));

    let sql = format!("UPDATE posts SET {} WHERE id = ?", sets.join(", "));
    let params: Vec<&dyn rusqlite::ToSql> = values.iter().map(|v| v.as_ref()).collect();

    let conn = db.get()?;
    conn.execute(&sql, params.as_slice()).map_err(|e| match &patched_slug {
        Some(slug) => map_constraint(e, "post", slug),
        None => Error::Db(e),
    })?;

    Ok(())
}

/// Deletes by id. No cascade: term membership arrays elsewhere are
/// untouched, and nothing cleans up references to this post.
pub fn delete_post(db: &Database, id: i64) -> Result<()> {
    let conn = db.get()?;
    conn.execute("DELETE FROM posts WHERE id = ?1", [id])?;
    Ok(())
}

fn row_to_post(row: &rusqlite::Row) -> rusqlite::Result<Post> {
    let categories: Vec<i64> =
        serde_json::from_str(&row.get::<_, String>(5)?).unwrap_or_default();
    let tags: Vec<i64> = serde_json::from_str(&row.get::<_, String>(6)?).unwrap_or_default();

    Ok(Post {
        id: row.get(0)?,
        title: row.get(1)?,
        body: row.get(2)?,
        slug: row.get(3)?,
        status: row.get::<_, String>(4)?.parse().unwrap_or_default(),
        categories,
        tags,
        published_at: row.get(7)?,
        created_at: row.get(8)?,
    })
}
