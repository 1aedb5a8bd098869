use crate::models::TermKind;
use crate::services::seed;
use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, posts: i64, categories: i64, tags: i64) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path, config.database.pool_size)?;
    db.migrate()?;

    if categories > 0 {
        let created = seed::generate_terms(&db, TermKind::Category, categories)?;
        println!("Created {} categories", created);
    }
    if tags > 0 {
        let created = seed::generate_terms(&db, TermKind::Tag, tags)?;
        println!("Created {} tags", created);
    }
    if posts > 0 {
        let created = seed::generate_posts(&db, posts)?;
        println!("Created {} posts", created);
    }

    Ok(())
}
