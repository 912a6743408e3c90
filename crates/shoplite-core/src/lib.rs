//! # shoplite-core: Pure Business Logic for the Storefront
//!
//! This crate is the heart of shoplite. It contains all catalog
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   shoplite-catalog                          │
//! │     form boundary → CRUD orchestration → read path          │
//! └──────────────────────────┬──────────────────────────────────┘
//!                            │
//! ┌──────────────────────────▼──────────────────────────────────┐
//! │              ★ shoplite-core (THIS CRATE) ★                 │
//! │                                                             │
//! │   types      validation    slug        money                │
//! │   Product    field rules   slugify     Money + ₹ format     │
//! │   Category   joint errors                                   │
//! │                                                             │
//! │   search                   query                            │
//! │   fuzzy scoring            filter → search → sort pipeline  │
//! │                                                             │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │
//! └──────────────────────────┬──────────────────────────────────┘
//!                            │
//! ┌──────────────────────────▼──────────────────────────────────┐
//! │                    shoplite-store                           │
//! │        memory / JSON file / SQLite entity stores            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, filters)
//! - [`validation`] - Schema validation with joint error reporting
//! - [`slug`] - Display name → URL-safe slug transform
//! - [`money`] - Integer-cent money and price formatting
//! - [`search`] - Fuzzy text match scoring
//! - [`query`] - The storefront filter/search/sort pipeline
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: deterministic, same input = same output
//! 2. **No I/O**: database, network and file access are forbidden here
//! 3. **Integer Money**: prices are cents (i64), never floats
//! 4. **Joint Errors**: validation reports every violation, not the first

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod query;
pub mod search;
pub mod slug;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use money::Money;
pub use slug::slugify;
pub use types::{
    Category, CategoryPatch, Product, ProductFilter, ProductPatch, ProductStatus, SortKey,
    ALL_CATEGORIES,
};
