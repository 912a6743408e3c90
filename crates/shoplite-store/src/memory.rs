//! # In-Memory Store
//!
//! A volatile [`EntityStore`](crate::store::EntityStore) backend.
//!
//! This replaces the browser-local persisted state of an earlier
//! revision with an explicit store passed by reference: same
//! single-session semantics, no hidden global.
//!
//! ## When To Use
//! - Tests (no filesystem, no database)
//! - Demos and previews that should start from the seed dataset
//!
//! Records live in `tokio::sync::RwLock`-guarded vectors, preserving
//! insertion order the way the JSON files do.

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use async_trait::async_trait;
use shoplite_core::{Category, CategoryPatch, Product, ProductPatch};

use crate::error::StoreResult;
use crate::store::{CategoryStore, ProductStore};

/// Volatile in-memory entity store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    products: RwLock<Vec<Product>>,
    categories: RwLock<Vec<Category>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn get_all_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn get_product_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn get_product_by_slug(&self, slug: &str) -> StoreResult<Option<Product>> {
        Ok(self
            .products
            .read()
            .await
            .iter()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn create_product(&self, product: &Product) -> StoreResult<Product> {
        debug!(id = %product.id, slug = %product.slug, "memory: create product");
        self.products.write().await.push(product.clone());
        Ok(product.clone())
    }

    async fn update_product(
        &self,
        id: &str,
        patch: &ProductPatch,
    ) -> StoreResult<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(existing) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        patch.apply_to(existing);
        existing.updated_at = Utc::now();
        debug!(id = %id, "memory: update product");
        Ok(Some(existing.clone()))
    }

    async fn delete_product(&self, id: &str) -> StoreResult<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        let deleted = products.len() < before;
        debug!(id = %id, deleted, "memory: delete product");
        Ok(deleted)
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn get_all_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.categories.read().await.clone())
    }

    async fn get_category_by_id(&self, id: &str) -> StoreResult<Option<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn get_category_by_slug(&self, slug: &str) -> StoreResult<Option<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .iter()
            .find(|c| c.slug == slug)
            .cloned())
    }

    async fn create_category(&self, category: &Category) -> StoreResult<Category> {
        debug!(id = %category.id, slug = %category.slug, "memory: create category");
        self.categories.write().await.push(category.clone());
        Ok(category.clone())
    }

    async fn update_category(
        &self,
        id: &str,
        patch: &CategoryPatch,
    ) -> StoreResult<Option<Category>> {
        let mut categories = self.categories.write().await;
        let Some(existing) = categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        patch.apply_to(existing);
        debug!(id = %id, "memory: update category");
        Ok(Some(existing.clone()))
    }

    async fn delete_category(&self, id: &str) -> StoreResult<bool> {
        let mut categories = self.categories.write().await;
        let before = categories.len();
        categories.retain(|c| c.id != id);
        Ok(categories.len() < before)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{sample_category, sample_product};

    #[tokio::test]
    async fn test_product_crud_roundtrip() {
        let store = MemoryStore::new();
        let product = sample_product("walnut-desk");

        store.create_product(&product).await.unwrap();
        assert_eq!(store.get_all_products().await.unwrap().len(), 1);

        let by_id = store.get_product_by_id(&product.id).await.unwrap();
        assert!(by_id.is_some());

        let by_slug = store.get_product_by_slug("walnut-desk").await.unwrap();
        assert_eq!(by_slug.unwrap().id, product.id);

        assert!(store.delete_product(&product.id).await.unwrap());
        assert!(store.get_all_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_and_refreshes_timestamp() {
        let store = MemoryStore::new();
        let product = sample_product("walnut-desk");
        store.create_product(&product).await.unwrap();

        let patch = ProductPatch {
            price_cents: Some(999),
            ..Default::default()
        };
        let updated = store
            .update_product(&product.id, &patch)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.price_cents, 999);
        assert_eq!(updated.id, product.id);
        assert_eq!(updated.created_at, product.created_at);
        assert_eq!(updated.name, product.name);
        assert!(updated.updated_at >= product.updated_at);
    }

    #[tokio::test]
    async fn test_missing_ids_are_data_not_errors() {
        let store = MemoryStore::new();
        let product = sample_product("walnut-desk");
        store.create_product(&product).await.unwrap();

        assert!(store.get_product_by_id("ghost").await.unwrap().is_none());
        assert!(store
            .update_product("ghost", &ProductPatch::default())
            .await
            .unwrap()
            .is_none());

        // Deleting a missing id reports false and leaves the store alone.
        assert!(!store.delete_product("ghost").await.unwrap());
        assert_eq!(store.get_all_products().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_category_delete_does_not_touch_products() {
        let store = MemoryStore::new();
        let category = sample_category("furniture");
        let mut product = sample_product("walnut-desk");
        product.category_id = category.id.clone();

        store.create_category(&category).await.unwrap();
        store.create_product(&product).await.unwrap();

        assert!(store.delete_category(&category.id).await.unwrap());

        // The product survives with its orphaned reference intact.
        let survivor = store
            .get_product_by_id(&product.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(survivor.category_id, category.id);
    }
}
