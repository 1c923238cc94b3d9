//! Infrastructure constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration file looked up when no path is given
pub const DEFAULT_CONFIG_FILENAME: &str = "kb.toml";

/// Directory name under the platform config dir
pub const DEFAULT_CONFIG_DIR: &str = "kb";

/// Prefix of configuration environment variables (`KB__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "KB";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING
// ============================================================================

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "KB_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File stem used for rolling log files when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "kb";

// ============================================================================
// SERVER
// ============================================================================

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// Default bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default prefix under which the API is mounted a second time
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Default directory for temporary uploads
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Default upload size cap (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Upload MIME types accepted out of the box: PDF, plain text, Word and Markdown
pub const DEFAULT_ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "text/plain",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/markdown",
];

// ============================================================================
// STORE
// ============================================================================

/// Store calls at or above this many milliseconds are logged as slow
pub const DEFAULT_SLOW_OPERATION_MS: u64 = 250;
