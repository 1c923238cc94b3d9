//! Configuration types module

pub mod app;
pub mod embedding;
pub mod logging;
pub mod search;
pub mod server;
pub mod store;

// Re-export main types
pub use app::AppConfig;
pub use embedding::EmbeddingConfig;
pub use logging::LoggingConfig;
pub use search::SearchConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;
