//! Domain Port Interfaces
//!
//! Contracts the outer layers implement. The application layer depends only
//! on these traits; concrete providers are injected at start-up.
//!
//! | Port | Purpose |
//! |------|---------|
//! | [`EmbeddingProvider`] | Maps text to a fixed-dimension vector |
//! | [`DocumentStore`] | Assigns ids and holds embedded documents |

/// Embedding provider port
pub mod embedding;
/// Document store port
pub mod store;

pub use embedding::EmbeddingProvider;
pub use store::DocumentStore;
