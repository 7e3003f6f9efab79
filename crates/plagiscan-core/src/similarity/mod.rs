//! Similarity engine for submissions
//!
//! Similarity is the Jaccard coefficient of the two documents' distinct
//! lower-cased whitespace tokens, expressed as a percentage. Word order and
//! repetition are ignored.

mod pairs;

pub use pairs::{find_similar_pairs, SimilarPair};

use crate::text::TokenSet;

/// Similarity of two token sets as a percentage in `[0, 100]`
///
/// Two empty sets have similarity 0.
pub fn similarity_of_sets(a: &TokenSet, b: &TokenSet) -> f64 {
    let union = a.union_len(b);
    if union == 0 {
        return 0.0;
    }
    (a.shared_with(b) as f64 / union as f64) * 100.0
}

/// Similarity of two texts as a percentage in `[0, 100]`
pub fn similarity(text_a: &str, text_b: &str) -> f64 {
    similarity_of_sets(&TokenSet::from_text(text_a), &TokenSet::from_text(text_b))
}

/// Similarity of two texts rounded to a whole percentage
pub fn similarity_score(text_a: &str, text_b: &str) -> u8 {
    round_score(similarity(text_a, text_b))
}

/// Round a percentage half-up to the integer surfaced as a score
pub fn round_score(precise: f64) -> u8 {
    if precise.is_nan() {
        return 0;
    }
    precise.clamp(0.0, 100.0).round() as u8
}
