use anyhow::Result;
use std::path::Path;

const STARTER_CONFIG: &str = r#"[server]
host = "127.0.0.1"
port = 3000

[database]
path = "data/quill.db"

[api]
default_page_size = 10
max_page_size = 100
"#;

pub async fn run(path: &Path) -> Result<()> {
    let config_path = path.join("quill.toml");
    if config_path.exists() {
        anyhow::bail!("'{}' already exists", config_path.display());
    }

    std::fs::create_dir_all(path)?;
    std::fs::write(&config_path, STARTER_CONFIG)?;
    println!("Wrote {}", config_path.display());
    println!("Next: quill migrate && quill serve");

    Ok(())
}
