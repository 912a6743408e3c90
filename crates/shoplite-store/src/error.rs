//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! Backend failure (sqlx::Error / std::io::Error / serde_json::Error)
//!      │
//!      ▼
//! StoreError (this module) ← adds context and categorization
//!      │
//!      ▼
//! CatalogError::Store (in shoplite-catalog) ← what callers see
//! ```
//!
//! Note that "row not found" is deliberately NOT an error here: the
//! store contract expresses missing records as `Option`/`bool`, so the
//! orchestration layer decides whether that is benign (delete) or a
//! real failure (update).

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique constraint violation (duplicate slug reaching the
    /// database despite the pre-write check — the accepted race).
    #[error("duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Database connection failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Flat-file backend could not read or write its data files.
    #[error("data file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Flat-file backend holds unparseable JSON.
    #[error("data file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Backend configuration is unusable.
    #[error("invalid store configuration: {0}")]
    Config(String),

    /// Internal store error.
    #[error("internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a UniqueViolation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Convert sqlx errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database (UNIQUE)  → StoreError::UniqueViolation
/// sqlx::Error::PoolTimedOut       → StoreError::ConnectionFailed
/// Other                           → StoreError::QueryFailed
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message().to_string();

                // SQLite reports "UNIQUE constraint failed: <table>.<column>"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    StoreError::UniqueViolation {
                        field,
                        value: "unknown".to_string(),
                    }
                } else {
                    StoreError::QueryFailed(msg)
                }
            }

            sqlx::Error::PoolTimedOut => {
                StoreError::ConnectionFailed("pool timed out".to_string())
            }
            sqlx::Error::PoolClosed => StoreError::ConnectionFailed("pool is closed".to_string()),

            _ => StoreError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::MigrationFailed(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
