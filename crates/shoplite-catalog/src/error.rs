//! # Catalog Error Types
//!
//! Caller-facing errors for catalog operations.
//!
//! ## Error Flow
//! ```text
//! Vec<ValidationError> ──► CatalogError::Validation
//!                              "Validation failed: name is required, ..."
//!
//! get_by_slug hit     ──► CatalogError::DuplicateSlug
//!                              "A product with this slug already exists"
//!
//! update on missing id ──► CatalogError::NotFound
//!
//! StoreError           ──► CatalogError::Store (via #[from])
//! ```
//!
//! Every variant is per-request and recoverable; nothing here is fatal.

use thiserror::Error;

use shoplite_core::error::{join_messages, ValidationError};
use shoplite_store::StoreError;

/// Errors returned by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One or more field rules were violated. Carries every violation
    /// so a form can highlight all of them at once.
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// The requested slug is already taken by another entity of the
    /// same kind. Distinguishable from a generic validation failure so
    /// the admin form can point at the slug field.
    #[error("A {entity} with this slug already exists")]
    DuplicateSlug { entity: &'static str },

    /// Update referenced an id that does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<Vec<ValidationError>> for CatalogError {
    fn from(errors: Vec<ValidationError>) -> Self {
        CatalogError::Validation(errors)
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================
