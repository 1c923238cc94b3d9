//! # Knowledge Base Server
//!
//! HTTP surface of the knowledge base service: ingestion of text, file
//! uploads and video transcripts, similarity search and document management,
//! served with Rocket.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Routes, request/response models, fairings and catchers |
//! | [`init`] | Configuration loading, wiring and launch |
//! | [`constants`] | Server-level constants |

pub mod api;
pub mod constants;
pub mod init;

pub use api::{ApiState, build_rocket};
pub use init::{ServerOverrides, build_service, load_config, run_server};
