//! Category and tag listings, mutations, and the derived usage count.
//!
//! The count of a term is the number of published posts whose membership
//! array contains it. It is recomputed from a single full fetch of the
//! published posts on every listing call and never cached, so it is always
//! consistent with committed state.

use crate::db::pagination::{decode_cursor, page_from_scan, Order, Page, PaginationOpts, ScanKey};
use crate::error::{Error, Result};
use crate::models::{CreateTerm, Term, TermKind, TermWithCount, UpdateTerm};
use crate::services::slug::{ensure_slug_available, map_constraint};
use crate::Database;
use rusqlite::OptionalExtension;
use std::str::FromStr;

const TERM_COLUMNS: &str = "id, name, slug, description, created_at";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    Name,
    Count,
}

impl FromStr for OrderBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "count" => Ok(Self::Count),
            _ => Err(()),
        }
    }
}

/// Arguments to a category/tag listing call.
pub struct ListTerms {
    pub pagination: PaginationOpts,
    pub include: Option<Vec<i64>>,
    pub exclude: Option<Vec<i64>>,
    pub order: Option<Order>,
    pub orderby: Option<OrderBy>,
    pub hide_empty: bool,
}

impl Default for ListTerms {
    fn default() -> Self {
        Self {
            pagination: PaginationOpts::first_page(10),
            include: None,
            exclude: None,
            order: None,
            orderby: None,
            hide_empty: false,
        }
    }
}

/// Lists terms ordered by name, with counts attached, id filters and
/// hide_empty applied after counting, and an optional in-memory re-sort by
/// count. The re-sort is stable, so ties keep the scan's name order.
pub fn list_terms(db: &Database, kind: TermKind, args: ListTerms) -> Result<Page<TermWithCount>> {
    let order = args.order.unwrap_or(Order::Asc);
    let scanned = scan_terms_by_name(db, kind, order, &args.pagination)?;
    let membership = published_membership(db, kind)?;

    let mut page: Vec<TermWithCount> = scanned
        .page
        .into_iter()
        .map(|term| {
            let count = membership.iter().filter(|ids| ids.contains(&term.id)).count() as i64;
            TermWithCount { term, count }
        })
        .collect();

    if let Some(ids) = &args.include {
        page.retain(|item| ids.contains(&item.term.id));
    }
    if let Some(ids) = &args.exclude {
        page.retain(|item| !ids.contains(&item.term.id));
    }
    if args.hide_empty {
        page.retain(|item| item.count > 0);
    }

    if args.orderby.unwrap_or_default() == OrderBy::Count {
        match order {
            Order::Asc => page.sort_by_key(|item| item.count),
            Order::Desc => page.sort_by(|a, b| b.count.cmp(&a.count)),
        }
    }

    Ok(Page {
        page,
        is_done: scanned.is_done,
        continue_cursor: scanned.continue_cursor,
    })
}

fn scan_terms_by_name(
    db: &Database,
    kind: TermKind,
    order: Order,
    opts: &PaginationOpts,
) -> Result<Page<Term>> {
    let after = opts.cursor.as_deref().map(decode_cursor).transpose()?;
    let (after_name, after_id) = match &after {
        Some(key) => (key.key.clone(), Some(key.id)),
        None => (None, None),
    };
    let conn = db.get()?;

    let sql = match order {
        Order::Asc => format!(
            "SELECT {TERM_COLUMNS} FROM {} \
             WHERE (?1 IS NULL OR (name, id) > (?1, ?2)) \
             ORDER BY name ASC, id ASC LIMIT ?3",
            kind.table()
        ),
        Order::Desc => format!(
            "SELECT {TERM_COLUMNS} FROM {} \
             WHERE (?1 IS NULL OR (name, id) < (?1, ?2)) \
             ORDER BY name DESC, id DESC LIMIT ?3",
            kind.table()
        ),
    };

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(
            rusqlite::params![after_name, after_id, opts.num_items as i64 + 1],
            row_to_term,
        )?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(page_from_scan(rows, opts.num_items, |term| ScanKey {
        key: Some(term.name.clone()),
        id: term.id,
    }))
}

/// Membership arrays of every published post, fetched once per listing call.
fn published_membership(db: &Database, kind: TermKind) -> Result<Vec<Vec<i64>>> {
    let conn = db.get()?;
    let sql = format!(
        "SELECT {} FROM posts WHERE status = 'published'",
        kind.post_column()
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(rows
        .into_iter()
        .map(|raw| serde_json::from_str(&raw).unwrap_or_default())
        .collect())
}

/// Most-recently-created match wins when duplicate slugs exist.
pub fn get_term_by_slug(db: &Database, kind: TermKind, slug: &str) -> Result<Option<TermWithCount>> {
    let term = {
        let conn = db.get()?;
        let sql = format!(
            "SELECT {TERM_COLUMNS} FROM {} WHERE slug = ?1 ORDER BY id DESC LIMIT 1",
            kind.table()
        );
        conn.query_row(&sql, [slug], row_to_term).optional()?
    };

    match term {
        Some(term) => {
            let membership = published_membership(db, kind)?;
            let count = membership.iter().filter(|ids| ids.contains(&term.id)).count() as i64;
            Ok(Some(TermWithCount { term, count }))
        }
        None => Ok(None),
    }
}

/// Resolves soft references to full terms, dropping ids that no longer
/// exist. Order of the surviving ids is preserved.
pub(crate) fn resolve_ids(db: &Database, kind: TermKind, ids: &[i64]) -> Result<Vec<Term>> {
    let conn = db.get()?;
    let sql = format!("SELECT {TERM_COLUMNS} FROM {} WHERE id = ?1", kind.table());
    let mut stmt = conn.prepare(&sql)?;

    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(term) = stmt.query_row([id], row_to_term).optional()? {
            resolved.push(term);
        }
    }
    Ok(resolved)
}

pub fn create_term(db: &Database, kind: TermKind, input: CreateTerm) -> Result<i64> {
    ensure_slug_available(db, kind.table(), kind.label(), &input.slug, None)?;

    let conn = db.get()?;
    let sql = format!(
        "INSERT INTO {} (name, slug, description) VALUES (?1, ?2, ?3)",
        kind.table()
    );
    conn.execute(
        &sql,
        rusqlite::params![input.name, input.slug, input.description],
    )
    .map_err(|e| map_constraint(e, kind.label(), &input.slug))?;

    Ok(conn.last_insert_rowid())
}

pub fn update_term(db: &Database, kind: TermKind, id: i64, patch: UpdateTerm) -> Result<()> {
    if let Some(slug) = patch.slug.as_deref() {
        ensure_slug_available(db, kind.table(), kind.label(), slug, Some(id))?;
    }
    let patched_slug = patch.slug.clone();

    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if let Some(name) = patch.name {
        sets.push("name = ?");
        values.push(Box::new(name));
    }
    if let Some(slug) = patch.slug {
        sets.push("slug = ?");
        values.push(Box::new(slug));
    }
    if let Some(description) = patch.description {
        sets.push("description = ?");
        values.push(Box::new(description));
    }

    if sets.is_empty() {
        return Ok(());
    }
    values.push(Box::new(id));

    let sql = format!("UPDATE {} SET {} WHERE id = ?", kind.table(), sets.join(", "));
    let params: Vec<&dyn rusqlite::ToSql> = values.iter().map(|v| v.as_ref()).collect();

    let conn = db.get()?;
    conn.execute(&sql, params.as_slice()).map_err(|e| match &patched_slug {
        Some(slug) => map_constraint(e, kind.label(), slug),
        None => Error::Db(e),
    })?;

    Ok(())
}

/// Deletes by id. Posts keep their dangling membership ids; read paths drop
/// them on resolution.
pub fn delete_term(db: &Database, kind: TermKind, id: i64) -> Result<()> {
    let conn = db.get()?;
    let sql = format!("DELETE FROM {} WHERE id = ?1", kind.table());
    conn.execute(&sql, [id])?;
    Ok(())
}

fn row_to_term(row: &rusqlite::Row) -> rusqlite::Result<Term> {
    Ok(Term {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        created_at: row.get(4)?,
    })
}
