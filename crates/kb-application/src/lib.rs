//! Application Layer - Knowledge Base
//!
//! Use cases and the ranking service, written against the ports defined in
//! `kb-domain`.
//!
//! ## Architecture
//!
//! The application layer:
//! - Ranks stored documents against a query vector ([`domain_services::ranking`])
//! - Defines the knowledge service contract used by the HTTP layer
//! - Implements that contract over an injected embedder and document store
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `kb-domain`: For value objects, errors and port traits
//! - `rayon`: For sharded ranking of large candidate sets

pub mod domain_services;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
