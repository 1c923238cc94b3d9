//! Knowledge Base Server
//!
//! Stores text, file uploads and video transcripts with a deterministic
//! pseudo-embedding and serves similarity search over them.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kb_infrastructure::config::ConfigLoader;
use kb_infrastructure::config::loader::to_toml;
use kb_server::{ServerOverrides, load_config, run_server};

/// Command line interface for the knowledge base server
#[derive(Parser, Debug)]
#[command(name = "kb-server")]
#[command(about = "Knowledge base service with similarity search")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Bind address, overriding `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port, overriding `server.port`
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Print the effective configuration as TOML, or write it to PATH, and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub dump_config: Option<Option<PathBuf>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let overrides = ServerOverrides {
        host: cli.host,
        port: cli.port,
    };

    if let Some(target) = cli.dump_config {
        let config = load_config(cli.config.as_deref(), &overrides)?;
        match target {
            Some(path) => ConfigLoader::new()
                .save_to_file(&config, &path)
                .with_context(|| format!("Failed to write {}", path.display()))?,
            None => print!("{}", to_toml(&config)?),
        }
        return Ok(());
    }

    run_server(cli.config.as_deref(), &overrides).await
}
