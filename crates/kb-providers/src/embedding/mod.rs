//! Embedding Provider Implementations
//!
//! | Provider | Type | Notes |
//! |----------|------|-------|
//! | [`HashEmbeddingProvider`] | Local, deterministic | Sinusoidal projection of a rolling string hash |
//!
//! The hash embedder carries no semantic signal beyond exact token overlap.
//! It exists so the ranking pipeline can run without an external model.

pub mod hash;

pub use hash::{HashEmbeddingProvider, TokenizationMode, rolling_hash};
