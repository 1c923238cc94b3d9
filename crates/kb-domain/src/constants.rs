//! Domain constants
//!
//! Defaults that more than one layer needs to agree on. Infrastructure-only
//! values (file names, env prefixes, ports) live in `kb_infrastructure::constants`.

// ============================================================================
// EMBEDDING CONSTANTS
// ============================================================================

/// Default embedding dimension for the hash embedder
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 10;

/// Dimension used by deployments that mimic OpenAI-sized vectors
pub const WIDE_EMBEDDING_DIMENSIONS: usize = 1536;

/// Model identifier recorded on every hash embedding
pub const HASH_EMBEDDING_MODEL: &str = "sin-hash";

/// Multiplier of the rolling string hash
pub const HASH_MULTIPLIER: u32 = 31;

// ============================================================================
// SEARCH CONSTANTS
// ============================================================================

/// Number of results returned when the caller does not ask for a limit
pub const DEFAULT_SEARCH_K: usize = 5;

/// Upper bound accepted for `k`
pub const DEFAULT_MAX_SEARCH_K: usize = 100;

/// Candidate count above which ranking is sharded across threads
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

// ============================================================================
// DOCUMENT CONSTANTS
// ============================================================================

/// Label reported when a document carries no `source` metadata
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// Metadata key holding the ingestion timestamp
pub const METADATA_ADDED_AT: &str = "added_at";

/// Metadata key holding the display title
pub const METADATA_TITLE: &str = "title";

/// Metadata key holding the free-form source label
pub const METADATA_SOURCE: &str = "source";

/// Metadata value tagging video transcripts
pub const VIDEO_CONTENT_TYPE: &str = "video_transcription";
