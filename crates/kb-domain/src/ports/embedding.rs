use crate::value_objects::Embedding;

/// Text Embedding Interface
///
/// Transforms text into a fixed-dimension vector. Implementations must be
/// pure and total: the same input always produces the same vector, every
/// vector has exactly [`dimensions`](Self::dimensions) components, and no
/// input (including the empty string) is rejected.
///
/// The port is synchronous because the only embedder in this service is a
/// local computation; callers on an async runtime can call it inline.
///
/// # Example
///
/// ```ignore
/// use kb_domain::ports::EmbeddingProvider;
///
/// let embedding = provider.embed("hello world");
/// assert_eq!(embedding.dimensions, provider.dimensions());
/// ```
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text
    fn embed(&self, text: &str) -> Embedding;

    /// Embed several texts, preserving order
    fn embed_batch(&self, texts: &[String]) -> Vec<Embedding> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    /// Number of components in every produced vector
    fn dimensions(&self) -> usize;

    /// Identifier of this provider implementation (e.g. "hash")
    fn provider_name(&self) -> &str;
}
