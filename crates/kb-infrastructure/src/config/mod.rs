//! Configuration
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Serializable configuration sections with defaults |
//! | [`loader`] | Figment loader, validation and TOML export |

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, EmbeddingConfig, LoggingConfig, SearchConfig, ServerConfig, StoreConfig,
};
