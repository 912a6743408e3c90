//! # shoplite-store: Persistence Layer for Shoplite
//!
//! This crate provides the pluggable entity store for the Shoplite
//! catalog. Three interchangeable backends implement one async
//! contract.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Shoplite Data Flow                         │
//! │                                                                 │
//! │  CatalogService (shoplite-catalog)                              │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                shoplite-store (THIS CRATE)                │  │
//! │  │                                                           │  │
//! │  │   Arc<dyn EntityStore>  (store.rs)                        │  │
//! │  │        │                                                  │  │
//! │  │        ├── MemoryStore    (memory.rs, volatile)           │  │
//! │  │        ├── JsonFileStore  (json.rs, flat files)           │  │
//! │  │        └── Database       (pool.rs + repository/, sqlx)   │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │                                                                 │
//! │  All three return the same domain types from shoplite-core and  │
//! │  honor the same semantics (missing id = Ok(None), duplicate     │
//! │  slug = UniqueViolation).                                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `ProductStore` / `CategoryStore` / `EntityStore` traits
//! - [`memory`] - In-memory backend for tests and demos
//! - [`json`] - Flat JSON file backend
//! - [`pool`] - SQLite connection pool and `Database`
//! - [`repository`] - SQL repositories used by the SQLite backend
//! - [`migrations`] - Embedded SQLite migrations
//! - [`config`] - Backend selection, including from the environment
//! - [`seed`] - Default sample catalog
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shoplite_store::StoreConfig;
//!
//! let store = StoreConfig::from_env()?.open().await?;
//! let products = store.get_all_products().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod json;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Backend, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use pool::{Database, DbConfig};
pub use seed::seed_if_empty;
pub use store::{CategoryStore, EntityStore, ProductStore};

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::product::ProductRepository;

// =============================================================================
// Test Fixtures
// =============================================================================

#[cfg(test)]
pub(crate) mod testutil {
    use chrono::Utc;
    use shoplite_core::{Category, Product, ProductStatus};

    /// A valid product whose id and name derive from the slug.
    pub fn sample_product(slug: &str) -> Product {
        let now = Utc::now();
        Product {
            id: format!("{slug}-id"),
            name: slug.replace('-', " "),
            slug: slug.to_string(),
            description: format!("A fine {}", slug.replace('-', " ")),
            price_cents: 1_999_00,
            stock: 5,
            category_id: "11111111-1111-4111-8111-111111111111".to_string(),
            image: format!("https://images.shoplite.test/{slug}.jpg"),
            status: ProductStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// A valid category whose id and name derive from the slug.
    pub fn sample_category(slug: &str) -> Category {
        Category {
            id: format!("{slug}-cat-id"),
            name: slug.replace('-', " "),
            slug: slug.to_string(),
            description: format!("All things {}", slug.replace('-', " ")),
        }
    }
}
