//! # Entity Store Contract
//!
//! The abstract persistence boundary for catalog records.
//!
//! ## Interchangeable Backends
//! ```text
//! CatalogService (shoplite-catalog)
//!      │
//!      │   Arc<dyn EntityStore>
//!      ▼
//! ┌──────────────┬──────────────┬──────────────┐
//! │ MemoryStore  │ JsonFileStore│ SqliteStore  │
//! │ RwLock<Vec>  │ *.json files │ sqlx pool    │
//! └──────────────┴──────────────┴──────────────┘
//! ```
//!
//! Any backend satisfying this contract is interchangeable; the
//! business logic never knows which one it is talking to.
//!
//! ## Contract Notes
//! - `update` merges only the patch's `Some` fields and refreshes the
//!   product's `updated_at`; `id` and `created_at` never change.
//! - `update` of a missing id returns `Ok(None)`, `delete` of a missing
//!   id returns `Ok(false)` — absence is data, not an error.
//! - Each write is atomic per record; there are no multi-entity
//!   transactions in this contract.

use async_trait::async_trait;

use shoplite_core::{Category, CategoryPatch, Product, ProductPatch};

use crate::error::StoreResult;

// =============================================================================
// Product Store
// =============================================================================

/// Durable, key-addressable storage for products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Returns every product in insertion order.
    async fn get_all_products(&self) -> StoreResult<Vec<Product>>;

    /// Looks up a product by its immutable id.
    async fn get_product_by_id(&self, id: &str) -> StoreResult<Option<Product>>;

    /// Looks up a product by its unique slug.
    async fn get_product_by_slug(&self, slug: &str) -> StoreResult<Option<Product>>;

    /// Persists a fully-formed product record.
    async fn create_product(&self, product: &Product) -> StoreResult<Product>;

    /// Merges the patch into the stored record and refreshes
    /// `updated_at`. Returns the updated record, or `None` when the id
    /// does not exist.
    async fn update_product(&self, id: &str, patch: &ProductPatch)
        -> StoreResult<Option<Product>>;

    /// Removes a product. Returns `false` when the id did not exist;
    /// the store is left unchanged in that case.
    async fn delete_product(&self, id: &str) -> StoreResult<bool>;
}

// =============================================================================
// Category Store
// =============================================================================

/// Durable, key-addressable storage for categories.
///
/// Deleting a category never cascades to products; their
/// `category_id` references are simply orphaned.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Returns every category in insertion order.
    async fn get_all_categories(&self) -> StoreResult<Vec<Category>>;

    /// Looks up a category by its immutable id.
    async fn get_category_by_id(&self, id: &str) -> StoreResult<Option<Category>>;

    /// Looks up a category by its unique slug.
    async fn get_category_by_slug(&self, slug: &str) -> StoreResult<Option<Category>>;

    /// Persists a fully-formed category record.
    async fn create_category(&self, category: &Category) -> StoreResult<Category>;

    /// Merges the patch into the stored record. Returns the updated
    /// record, or `None` when the id does not exist.
    async fn update_category(
        &self,
        id: &str,
        patch: &CategoryPatch,
    ) -> StoreResult<Option<Category>>;

    /// Removes a category. Returns `false` when the id did not exist.
    async fn delete_category(&self, id: &str) -> StoreResult<bool>;
}

// =============================================================================
// Combined Contract
// =============================================================================

/// The full persistence boundary: one backend stores both entity kinds.
pub trait EntityStore: ProductStore + CategoryStore {}

/// Every type implementing both halves is an EntityStore.
impl<T: ProductStore + CategoryStore> EntityStore for T {}
