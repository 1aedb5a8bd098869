pub mod init;
pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quill")]
#[command(version)]
#[command(about = "A minimal blogging backend", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "quill.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter config file
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Run the HTTP server
    Serve {
        #[arg(short = 'H', long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Apply pending database migrations
    Migrate,
    /// Generate random content
    Seed {
        #[arg(long, default_value = "25")]
        posts: i64,
        #[arg(long, default_value = "0")]
        categories: i64,
        #[arg(long, default_value = "0")]
        tags: i64,
    },
}
