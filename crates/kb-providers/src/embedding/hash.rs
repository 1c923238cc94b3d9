//! Hash embedding provider
//!
//! Deterministic embeddings built from a 32-bit rolling string hash.
//! No external dependencies - always works offline.
//!
//! ## Algorithm
//!
//! For a token `t` the hash is `h = h * 31 + codepoint(c)` over its characters,
//! starting at 0 and wrapping like a signed 32-bit integer. Component `i` of
//! the token vector is `sin(h * (i + 1)) * 0.5 + 0.5`, so every component lies
//! in `[0, 1]`.
//!
//! In [`TokenizationMode::Words`] the text is lowercased and split with
//! [`str::split_whitespace`]: runs of Unicode `White_Space` separate tokens
//! and leading or trailing whitespace yields no empty tokens, so
//! `"  hello world "` embeds exactly like `"hello world"`. U+FEFF is not
//! `White_Space` and stays part of its token. Text with no tokens at all
//! embeds as the empty token. The first token seeds the vector; each following token folds
//! in as `v[i] = (v[i] + t[i]) / 2`. This is a running average that weights
//! later tokens more heavily, not an arithmetic mean.

use std::fmt;
use std::str::FromStr;

use kb_domain::constants::{HASH_EMBEDDING_MODEL, HASH_MULTIPLIER};
use kb_domain::error::Error;
use kb_domain::ports::EmbeddingProvider;
use kb_domain::value_objects::Embedding;
use serde::{Deserialize, Serialize};

/// How text is split into tokens before hashing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizationMode {
    /// Lowercase and split on whitespace, then fold token vectors together
    #[default]
    Words,
    /// Hash the whole text as a single token, case preserved
    Whole,
}

impl TokenizationMode {
    /// Configuration name of the mode
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Whole => "whole",
        }
    }
}

impl fmt::Display for TokenizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenizationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "words" => Ok(Self::Words),
            "whole" => Ok(Self::Whole),
            other => Err(Error::invalid_argument(format!(
                "Unknown tokenization mode '{other}', expected 'words' or 'whole'"
            ))),
        }
    }
}

/// 32-bit signed rolling hash over the Unicode scalar values of `token`
pub fn rolling_hash(token: &str) -> i32 {
    // Two's complement wrapping is identical for u32 and i32.
    let hash = token.chars().fold(0_u32, |acc, c| {
        acc.wrapping_mul(HASH_MULTIPLIER).wrapping_add(u32::from(c))
    });
    i32::from_ne_bytes(hash.to_ne_bytes())
}

/// Hash embedding provider
///
/// # Example
///
/// ```rust
/// use kb_domain::ports::EmbeddingProvider;
/// use kb_providers::embedding::HashEmbeddingProvider;
///
/// let provider = HashEmbeddingProvider::new(10);
/// let embedding = provider.embed("");
/// assert!(embedding.vector.iter().all(|v| *v == 0.5));
/// ```
#[derive(Debug, Clone)]
pub struct HashEmbeddingProvider {
    dimensions: usize,
    mode: TokenizationMode,
}

impl HashEmbeddingProvider {
    /// Create a provider in the default word mode
    pub fn new(dimensions: usize) -> Self {
        Self::with_mode(dimensions, TokenizationMode::default())
    }

    /// Create a provider with an explicit tokenization mode
    pub fn with_mode(dimensions: usize, mode: TokenizationMode) -> Self {
        Self { dimensions, mode }
    }

    /// Tokenization mode in use
    pub fn mode(&self) -> TokenizationMode {
        self.mode
    }

    fn token_vector(&self, token: &str) -> Vec<f64> {
        let hash = f64::from(rolling_hash(token));
        (0..self.dimensions)
            .map(|i| (hash * (i + 1) as f64).sin() * 0.5 + 0.5)
            .collect()
    }

    fn embed_words(&self, text: &str) -> Vec<f64> {
        let lowered = text.to_lowercase();
        let mut tokens = lowered.split_whitespace();

        let Some(first) = tokens.next() else {
            return self.token_vector("");
        };

        tokens.fold(self.token_vector(first), |mut acc, token| {
            for (slot, value) in acc.iter_mut().zip(self.token_vector(token)) {
                *slot = (*slot + value) / 2.0;
            }
            acc
        })
    }
}

impl Default for HashEmbeddingProvider {
    fn default() -> Self {
        Self::new(kb_domain::constants::DEFAULT_EMBEDDING_DIMENSIONS)
    }
}

impl EmbeddingProvider for HashEmbeddingProvider {
    fn embed(&self, text: &str) -> Embedding {
        let vector = match self.mode {
            TokenizationMode::Words => self.embed_words(text),
            TokenizationMode::Whole => self.token_vector(text),
        };
        Embedding::new(vector, HASH_EMBEDDING_MODEL)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "hash"
    }
}
