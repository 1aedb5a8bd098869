//! Bulk random-content generation, for development and demos.
//!
//! Single insert failures are logged and skipped; the batch continues and
//! the returned count reflects only actual inserts.

use crate::error::{Error, Result};
use crate::models::{CreatePost, CreateTerm, PostStatus, TermKind};
use crate::services::slug::generate_slug;
use crate::services::{posts, terms};
use crate::Database;
use rand::seq::SliceRandom;
use rand::Rng;

const MIN_COUNT: i64 = 1;
const MAX_COUNT: i64 = 1000;

const WORDS: &[&str] = &[
    "rust", "cargo", "borrow", "lifetime", "async", "trait", "closure", "iterator", "macro",
    "module", "crate", "pattern", "thread", "channel", "future", "stream", "socket", "buffer",
    "parser", "index", "query", "schema", "cursor", "journal", "vector",
];

const TERM_NAMES: &[&str] = &[
    "Tutorials", "Releases", "Deep Dives", "Opinion", "News", "Performance", "Tooling",
    "Testing", "Web", "Databases", "Concurrency", "Ecosystem",
];

pub fn generate_posts(db: &Database, count: i64) -> Result<usize> {
    if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
        return Err(Error::CountOutOfRange {
            requested: count,
            min: MIN_COUNT,
            max: MAX_COUNT,
        });
    }

    let categories = all_term_ids(db, TermKind::Category)?;
    let tags = all_term_ids(db, TermKind::Tag)?;
    if categories.is_empty() && tags.is_empty() {
        return Err(Error::NoTermsToAssign);
    }

    let mut rng = rand::thread_rng();
    let mut created = 0;
    for n in 0..count {
        let title = random_title(&mut rng);
        let input = CreatePost {
            slug: format!("{}-{}-{}", generate_slug(&title), n, rng.gen_range(1000..10000)),
            body: random_body(&mut rng),
            status: if rng.gen_bool(0.8) {
                PostStatus::Published
            } else {
                PostStatus::Draft
            },
            categories: pick_ids(&mut rng, &categories),
            tags: pick_ids(&mut rng, &tags),
            title,
        };

        match posts::create_post(db, input) {
            Ok(_) => created += 1,
            Err(err) => tracing::warn!("skipping generated post: {err}"),
        }
    }

    Ok(created)
}

pub fn generate_terms(db: &Database, kind: TermKind, count: i64) -> Result<usize> {
    if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
        return Err(Error::CountOutOfRange {
            requested: count,
            min: MIN_COUNT,
            max: MAX_COUNT,
        });
    }

    let mut rng = rand::thread_rng();
    let mut created = 0;
    for n in 0..count {
        let base = TERM_NAMES[rng.gen_range(0..TERM_NAMES.len())];
        let name = format!("{} {}", base, rng.gen_range(1..100));
        let input = CreateTerm {
            slug: format!("{}-{}-{}", generate_slug(&name), n, rng.gen_range(1000..10000)),
            name,
            description: None,
        };

        match terms::create_term(db, kind, input) {
            Ok(_) => created += 1,
            Err(err) => tracing::warn!("skipping generated {}: {err}", kind.label()),
        }
    }

    Ok(created)
}

fn all_term_ids(db: &Database, kind: TermKind) -> Result<Vec<i64>> {
    let conn = db.get()?;
    let sql = format!("SELECT id FROM {}", kind.table());
    let mut stmt = conn.prepare(&sql)?;
    let ids = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<i64>, _>>()?;
    Ok(ids)
}

fn random_title(rng: &mut impl Rng) -> String {
    let count = rng.gen_range(3..=5);
    let words: Vec<&str> = WORDS
        .choose_multiple(rng, count)
        .copied()
        .collect();
    let mut title = words.join(" ");
    if let Some(first) = title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    title
}

fn random_body(rng: &mut impl Rng) -> String {
    let sentences = rng.gen_range(3..=8);
    (0..sentences)
        .map(|_| {
            let count = rng.gen_range(6..=12);
            let words: Vec<&str> = WORDS
                .choose_multiple(rng, count)
                .copied()
                .collect();
            format!("{}.", words.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn pick_ids(rng: &mut impl Rng, pool: &[i64]) -> Vec<i64> {
    if pool.is_empty() {
        return Vec::new();
    }
    let take = rng.gen_range(0..=pool.len().min(3));
    pool.choose_multiple(rng, take).copied().collect()
}
