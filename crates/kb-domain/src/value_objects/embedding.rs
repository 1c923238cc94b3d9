//! Embedding Value Objects
//!
//! Vector representation of a piece of text.

use serde::{Deserialize, Serialize};

/// Value Object: Text Embedding
///
/// A fixed-length vector produced by an [`EmbeddingProvider`](crate::ports::EmbeddingProvider).
/// Two embeddings are only comparable when their `dimensions` agree.
///
/// ## Example
///
/// ```rust
/// use kb_domain::value_objects::Embedding;
///
/// let embedding = Embedding::new(vec![0.5, 0.25, 0.75], "sin-hash");
/// assert_eq!(embedding.dimensions, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f64>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Build an embedding, deriving `dimensions` from the vector length
    pub fn new(vector: Vec<f64>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// Borrow the raw vector
    pub fn as_slice(&self) -> &[f64] {
        &self.vector
    }

    /// Euclidean norm of the vector
    pub fn magnitude(&self) -> f64 {
        self.vector.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Whether every component is finite
    pub fn is_finite(&self) -> bool {
        self.vector.iter().all(|v| v.is_finite())
    }
}

impl AsRef<[f64]> for Embedding {
    fn as_ref(&self) -> &[f64] {
        &self.vector
    }
}
