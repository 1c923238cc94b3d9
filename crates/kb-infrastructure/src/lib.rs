//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns shared by the server binary.
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-backed configuration (defaults, TOML, `KB__` env) |
//! | [`constants`] | File names, env prefixes and default values |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`utils`] | Timing helpers |
//!
//! ### Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context extension trait mapping foreign errors into the domain error |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use utils::TimedOperation;
