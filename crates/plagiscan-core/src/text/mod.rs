//! Text processing utilities for tokenization
//!
//! Tokens are lower-cased, whitespace-delimited words. Punctuation stays
//! attached to its word and no stemming or stop word removal is applied, so
//! scores stay comparable with those already stored for past submissions.

use std::collections::HashSet;

/// Lower-case the text and split it on runs of whitespace
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|s| s.to_string())
        .collect()
}

/// Distinct tokens of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: HashSet<String>,
}

impl TokenSet {
    /// Tokenize `text` and collapse duplicate tokens
    pub fn from_text(text: &str) -> Self {
        TokenSet {
            tokens: tokenize(text).into_iter().collect(),
        }
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Size of the intersection with `other`
    pub fn shared_with(&self, other: &TokenSet) -> usize {
        // Iterate the smaller set
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .tokens
            .iter()
            .filter(|t| large.tokens.contains(*t))
            .count()
    }

    /// Size of the union with `other`
    pub fn union_len(&self, other: &TokenSet) -> usize {
        self.len() + other.len() - self.shared_with(other)
    }
}

/// Whether `text` contains at least one token
pub fn has_tokens(text: &str) -> bool {
    text.split_whitespace().next().is_some()
}

/// Trim and lower-case content for fingerprinting
pub fn normalize_for_fingerprint(text: &str) -> String {
    text.trim().to_lowercase()
}
