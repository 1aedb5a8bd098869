use crate::error::{Error, Result};
use crate::Database;
use rusqlite::OptionalExtension;
use slug::slugify;

pub fn generate_slug(title: &str) -> String {
    slugify(title)
}

pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > 200 {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Best-effort uniqueness guard: indexed lookup by the candidate slug, with
/// the entity's own id exempt on update. The UNIQUE slug index backstops the
/// window between this check and the write.
pub(crate) fn ensure_slug_available(
    db: &Database,
    table: &'static str,
    kind: &'static str,
    slug: &str,
    exclude_id: Option<i64>,
) -> Result<()> {
    if !validate_slug(slug) {
        return Err(Error::InvalidSlug { slug: slug.to_string() });
    }

    let conn = db.get()?;
    let sql = format!("SELECT id FROM {table} WHERE slug = ?1 ORDER BY id DESC LIMIT 1");
    let existing: Option<i64> = conn.query_row(&sql, [slug], |row| row.get(0)).optional()?;

    match existing {
        Some(id) if Some(id) != exclude_id => Err(Error::DuplicateSlug {
            kind,
            slug: slug.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Translates a UNIQUE-constraint failure on write into the same
/// DuplicateSlug error the guard raises.
pub(crate) fn map_constraint(err: rusqlite::Error, kind: &'static str, slug: &str) -> Error {
    if let rusqlite::Error::SqliteFailure(e, _) = &err {
        if e.code == rusqlite::ErrorCode::ConstraintViolation {
            return Error::DuplicateSlug {
                kind,
                slug: slug.to_string(),
            };
        }
    }
    Error::Db(err)
}
