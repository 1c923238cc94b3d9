//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{EmbeddingConfig, LoggingConfig, SearchConfig, ServerConfig, StoreConfig};

/// Complete service configuration
///
/// Every section falls back to its defaults, so an empty TOML file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Embedding settings
    pub embedding: EmbeddingConfig,
    /// Search settings
    pub search: SearchConfig,
    /// Document store settings
    pub store: StoreConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}
