//! # Slug Generation
//!
//! Deterministic display-name → URL-safe identifier transform.
//!
//! ## Rules
//! ```text
//! "Walnut Desk (Large)"  →  "walnut-desk-large"
//!
//! 1. Lowercase everything
//! 2. Collapse every run of non-alphanumeric characters to one hyphen
//! 3. Trim leading/trailing hyphens
//! ```
//!
//! The generator does NOT guarantee uniqueness. Two names that differ
//! only in punctuation slugify identically; the orchestration layer
//! runs an existence check before any write.

/// Derives a URL-safe slug from a display name.
///
/// Deterministic and idempotent: `slugify(slugify(x)) == slugify(x)`.
///
/// ## Example
/// ```rust
/// use shoplite_core::slug::slugify;
///
/// assert_eq!(slugify("Walnut Desk"), "walnut-desk");
/// assert_eq!(slugify("  100% Cotton -- Tee!  "), "100-cotton-tee");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            // Any non-alphanumeric run collapses to a single hyphen,
            // and only between alphanumeric segments.
            pending_hyphen = true;
        }
    }

    slug
}

/// Checks whether a string is already in canonical slug form
/// (`^[a-z0-9-]+$`, the validator's rule).
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// =============================================================================
// Unit Tests
// =============================================================================
