//! Server Initialization
//!
//! Loads configuration, installs logging, wires the embedder, document store
//! and knowledge service together and launches Rocket. Shutdown on Ctrl+C is
//! handled by Rocket itself.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use kb_application::{KnowledgeServiceImpl, KnowledgeServiceInterface};
use kb_domain::ports::{DocumentStore, EmbeddingProvider};
use kb_infrastructure::config::loader::validate_app_config;
use kb_infrastructure::config::{AppConfig, ConfigLoader};
use kb_infrastructure::logging::{init_logging, log_config_loaded};
use kb_providers::store::{InMemoryDocumentStore, InstrumentedDocumentStore};
use tracing::info;

use crate::api::{ApiState, build_rocket};

/// Command line values that take precedence over every config source
#[derive(Debug, Clone, Default)]
pub struct ServerOverrides {
    /// Bind address
    pub host: Option<String>,
    /// Listen port
    pub port: Option<u16>,
}

impl ServerOverrides {
    /// Apply the overrides to `config`
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

fn config_loader(config_path: Option<&Path>) -> ConfigLoader {
    match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    }
}

/// Load configuration from an optional path and apply CLI overrides
pub fn load_config(
    config_path: Option<&Path>,
    overrides: &ServerOverrides,
) -> anyhow::Result<AppConfig> {
    let mut config = config_loader(config_path)
        .load()
        .context("Failed to load configuration")?;
    overrides.apply(&mut config);
    validate_app_config(&config).context("Invalid command line override")?;
    Ok(config)
}

/// Build the knowledge service described by `config`
///
/// The store is owned by the returned service; there is no process-wide
/// instance.
pub fn build_service(config: &AppConfig) -> Arc<dyn KnowledgeServiceInterface> {
    let embedder: Arc<dyn EmbeddingProvider> = Arc::new(config.embedding.provider());
    let store: Arc<dyn DocumentStore> = Arc::new(InstrumentedDocumentStore::new(
        InMemoryDocumentStore::new(),
        config.store.slow_threshold(),
    ));

    Arc::new(KnowledgeServiceImpl::new(
        embedder,
        store,
        config.search.ranker(),
        config.search.settings(),
    ))
}

/// Run the knowledge base server
///
/// This is the main entry point: it loads configuration, initializes
/// logging, creates the upload directory and serves until shutdown.
pub async fn run_server(
    config_path: Option<&Path>,
    overrides: &ServerOverrides,
) -> anyhow::Result<()> {
    let config = load_config(config_path, overrides)?;
    init_logging(&config.logging).context("Failed to initialize logging")?;
    // Loading ran before a subscriber existed, so the source is reported here.
    log_config_loaded(config_loader(config_path).source_path().as_deref());

    std::fs::create_dir_all(&config.server.upload_dir).with_context(|| {
        format!(
            "Failed to create upload directory {}",
            config.server.upload_dir.display()
        )
    })?;

    info!(
        address = %config.server.bind_address(),
        api_prefix = %config.server.api_prefix,
        dimensions = config.embedding.dimensions,
        mode = %config.embedding.mode,
        "Starting knowledge base server"
    );

    let service = build_service(&config);
    let state = ApiState::new(service, config.server.clone());

    build_rocket(state)
        .launch()
        .await
        .context("Rocket launch failed")?;

    info!("Knowledge base server stopped");
    Ok(())
}
