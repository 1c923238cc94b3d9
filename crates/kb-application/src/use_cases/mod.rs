//! Use Case Implementations

/// Knowledge service backed by an embedder and a document store
pub mod knowledge_service;

pub use knowledge_service::KnowledgeServiceImpl;
