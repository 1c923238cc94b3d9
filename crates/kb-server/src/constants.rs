//! Server-specific constants

// ============================================================================
// SERVICE IDENTITY
// ============================================================================

/// Service name reported by the info endpoint
pub const SERVICE_NAME: &str = "Knowledge Base API";

/// Crate version reported by the info and health endpoints
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// HTTP
// ============================================================================

/// Response header carrying the per-request id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Methods advertised to CORS preflight requests
pub const CORS_ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Error message for a request body that cannot be parsed
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Headroom on top of the file limit for multipart boundaries and text fields
pub const MULTIPART_OVERHEAD_BYTES: u64 = 64 * 1024;

// ============================================================================
// PAGING
// ============================================================================

/// Page size used by `GET /documents` when none is given
pub const DEFAULT_PAGE_LIMIT: usize = 10;
