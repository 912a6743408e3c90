//! # Fuzzy Search Scoring
//!
//! Approximate text matching for the storefront search box.
//!
//! ## Scoring Model
//! ```text
//! score ∈ [0.0, 1.0]    0.0 = perfect match, 1.0 = no similarity
//!
//! "ipone" vs "iPhone 15"
//!      │
//!      ▼
//! substring? ── yes ──► score from match position (always ≤ 0.2)
//!      │
//!      no
//!      ▼
//! best normalized edit distance against each word
//! ("ipone" vs "iphone" = 0.167) ──► match (≤ 0.4)
//! ```
//!
//! A candidate matches when its best score over name and description is
//! at or below [`MATCH_THRESHOLD`] — loose enough to forgive a typo,
//! strict enough to reject unrelated text. Results are ranked by
//! ascending score, so closer matches surface first.

use crate::types::Product;

/// Maximum score that still counts as a match.
///
/// Tuned to tolerate minor typos (one edit in a five-letter word scores
/// 0.2) while rejecting free-association matches.
pub const MATCH_THRESHOLD: f64 = 0.4;

/// Scores `query` against a single text field.
///
/// Substring hits always win: they score by relative match position
/// (earlier is better) and never exceed 0.2. Otherwise the score is the
/// best normalized Levenshtein distance between the query and each
/// whitespace-separated word (or the whole field, for multi-word
/// queries).
pub fn score_text(query: &str, text: &str) -> f64 {
    let query = query.to_lowercase();
    let text = text.to_lowercase();

    if query.is_empty() || text.is_empty() {
        return 1.0;
    }

    // Exact substring: rank by how early the match starts.
    if let Some(pos) = text.find(&query) {
        return 0.2 * pos as f64 / text.len() as f64;
    }

    // Approximate: best edit distance over individual words and the
    // whole field (the latter catches multi-word queries).
    let mut best = 1.0 - strsim::normalized_levenshtein(&query, &text);
    for word in text.split_whitespace() {
        let distance = 1.0 - strsim::normalized_levenshtein(&query, word);
        if distance < best {
            best = distance;
        }
    }

    best.clamp(0.0, 1.0)
}

/// Scores `query` against a product, taking the best of name and
/// description.
pub fn score_product(query: &str, product: &Product) -> f64 {
    let name = score_text(query, &product.name);
    let description = score_text(query, &product.description);
    name.min(description)
}

/// Whether a score counts as a match.
#[inline]
pub fn is_match(score: f64) -> bool {
    score <= MATCH_THRESHOLD
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_substring_scores_low() {
        let score = score_text("desk", "Walnut Desk");
        assert!(score <= 0.2, "substring score was {score}");
        assert!(is_match(score));
    }

    #[test]
    fn test_earlier_substring_ranks_better() {
        let early = score_text("walnut", "Walnut Desk");
        let late = score_text("desk", "Walnut Desk");
        assert!(early < late);
    }

    #[test]
    fn test_single_typo_still_matches() {
        // One edit in a six-letter word: distance 1/6 ≈ 0.17
        assert!(is_match(score_text("walnot", "Walnut Desk")));
        assert!(is_match(score_text("ipone", "iphone case")));
    }

    #[test]
    fn test_unrelated_text_rejected() {
        assert!(!is_match(score_text("bicycle", "Walnut Desk")));
        assert!(!is_match(score_text("zzzz", "Ceramic Mug")));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            score_text("DESK", "walnut desk"),
            score_text("desk", "Walnut Desk")
        );
    }

    #[test]
    fn test_empty_inputs_never_match() {
        assert!(!is_match(score_text("", "Walnut Desk")));
        assert!(!is_match(score_text("desk", "")));
    }
}
