//! # Error Types
//!
//! Validation errors for shoplite-core.
//!
//! ## Error Hierarchy
//! ```text
//! shoplite-core errors (this file)
//! └── ValidationError   - Per-field input validation failures
//!
//! shoplite-store errors (separate crate)
//! └── StoreError        - Persistence failures
//!
//! shoplite-catalog errors (separate crate)
//! └── CatalogError      - Validation / DuplicateSlug / NotFound / Store
//!
//! Flow: ValidationError → CatalogError → caller-facing message
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant names the offending field
//! 3. Errors are enum variants, never bare strings
//! 4. Validation collects ALL violations, never just the first

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// One value per violated rule. The validator returns a `Vec` of these
/// so the caller can surface every problem in a form at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value must not be negative.
    #[error("{field} must be 0 or greater")]
    Negative { field: String },

    /// Value could not be parsed as a number at all.
    #[error("{field} must be a number")]
    NotANumber { field: String },

    /// Value must be a whole number (stock counts, never fractions).
    #[error("{field} must be a whole number")]
    NotAnInteger { field: String },

    /// Invalid format (bad slug characters, malformed UUID or URL).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in the allowed set (product status).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    /// The field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::Negative { field }
            | ValidationError::NotANumber { field }
            | ValidationError::NotAnInteger { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. } => field,
        }
    }
}

/// Joins a batch of validation errors into one human-readable line.
///
/// Matches the form-boundary contract: every violated rule is reported
/// together, comma separated.
pub fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for validation: `Ok(())` or every violated rule.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 255,
        };
        assert_eq!(err.to_string(), "name must be at most 255 characters");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::NotANumber {
            field: "price".to_string(),
        };
        assert_eq!(err.field(), "price");
    }

    #[test]
    fn test_join_messages() {
        let errors = vec![
            ValidationError::Required {
                field: "name".to_string(),
            },
            ValidationError::Negative {
                field: "price".to_string(),
            },
        ];
        assert_eq!(
            join_messages(&errors),
            "name is required, price must be 0 or greater"
        );
    }
}
