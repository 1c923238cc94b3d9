//! Configuration loader
//!
//! Configuration sources are merged in this order (later sources override
//! earlier ones):
//!
//! 1. Default values from [`AppConfig::default()`]
//! 2. TOML configuration file (explicit path, or the first default location found)
//! 3. Environment variables prefixed `KB__`, with `__` separating nested keys
//!    (e.g. `KB__SERVER__PORT=9000`)

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use kb_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::parse_log_level;

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// An explicitly configured file that does not exist is an error; the
    /// default locations are optional.
    pub fn load(&self) -> Result<AppConfig> {
        let app_config: AppConfig = self
            .figment()?
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Build the merged figment without extracting it
    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(path) = self.source_path() {
            if !path.exists() {
                return Err(Error::configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }

        let prefix = format!("{}{CONFIG_ENV_SEPARATOR}", self.env_prefix);
        Ok(figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR)))
    }

    /// TOML file [`load`](Self::load) reads: the explicit path when one is
    /// set, otherwise the first default location that exists
    ///
    /// Nothing is logged here; callers report the source once logging is up.
    pub fn source_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = to_toml(config)?;
        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;
        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(current_dir) = env::current_dir() {
            candidates.push(current_dir.join(DEFAULT_CONFIG_FILENAME));
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(
                config_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            );
        }

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a configuration as pretty TOML
pub fn to_toml(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")
}

fn invalid(message: impl Into<String>) -> Error {
    Error::configuration(message)
}

/// Validate application configuration
///
/// Performs validation of all configuration sections.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_embedding_config(config)?;
    validate_search_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    let server = &config.server;
    if server.port == 0 {
        return Err(invalid("Server port cannot be 0"));
    }
    if !server.api_prefix.starts_with('/') {
        return Err(invalid(format!(
            "API prefix must start with '/', got '{}'",
            server.api_prefix
        )));
    }
    if server.max_upload_bytes == 0 {
        return Err(invalid("Maximum upload size cannot be 0"));
    }
    Ok(())
}

fn validate_embedding_config(config: &AppConfig) -> Result<()> {
    if config.embedding.dimensions == 0 {
        return Err(invalid("Embedding dimensions cannot be 0"));
    }
    Ok(())
}

fn validate_search_config(config: &AppConfig) -> Result<()> {
    let search = &config.search;
    if search.default_k == 0 {
        return Err(invalid("Default search k cannot be 0"));
    }
    if search.default_k > search.max_k {
        return Err(invalid(format!(
            "Default search k ({}) cannot exceed max k ({})",
            search.default_k, search.max_k
        )));
    }
    Ok(())
}
