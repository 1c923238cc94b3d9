//! Document Store Implementations
//!
//! | Store | Persistence | Notes |
//! |-------|-------------|-------|
//! | [`InMemoryDocumentStore`] | None | Concurrent map, sequential ids |
//! | [`InstrumentedDocumentStore`] | Delegates | Decorator adding timing and tracing |

pub mod in_memory;
pub mod instrumented;

pub use in_memory::InMemoryDocumentStore;
pub use instrumented::InstrumentedDocumentStore;
