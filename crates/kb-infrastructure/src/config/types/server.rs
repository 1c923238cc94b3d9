//! HTTP server configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ALLOWED_CONTENT_TYPES, DEFAULT_API_PREFIX, DEFAULT_HTTP_PORT,
    DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_SERVER_HOST, DEFAULT_UPLOAD_DIR,
};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Prefix under which the routes are mounted in addition to `/`
    pub api_prefix: String,
    /// Add CORS headers to every response
    pub cors_enabled: bool,
    /// Directory for temporary upload files
    pub upload_dir: PathBuf,
    /// Largest accepted upload in bytes
    pub max_upload_bytes: u64,
    /// Accepted upload MIME types; defaults to PDF, plain text, Word and
    /// Markdown, and an empty list accepts everything
    pub allowed_content_types: Vec<String>,
    /// Include error chains in error responses (development only)
    pub expose_error_details: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            cors_enabled: true,
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_content_types: DEFAULT_ALLOWED_CONTENT_TYPES
                .iter()
                .map(ToString::to_string)
                .collect(),
            expose_error_details: false,
        }
    }
}

impl ServerConfig {
    /// Whether an upload declared as `content_type` may be stored
    ///
    /// Parameters such as `; charset=utf-8` are ignored and the comparison is
    /// case-insensitive.
    pub fn accepts_content_type(&self, content_type: Option<&str>) -> bool {
        if self.allowed_content_types.is_empty() {
            return true;
        }
        let Some(content_type) = content_type else {
            return false;
        };
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim();
        self.allowed_content_types
            .iter()
            .any(|allowed| allowed.trim().eq_ignore_ascii_case(essence))
    }

    /// Socket address string for logging
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
