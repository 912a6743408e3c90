//! # Flat-File JSON Store
//!
//! An [`EntityStore`](crate::store::EntityStore) backend persisting to
//! JSON files under a data directory.
//!
//! ## Layout
//! ```text
//! <data_dir>/
//! ├── products.json     {"products": [ ... ]}
//! └── categories.json   {"categories": [ ... ]}
//! ```
//!
//! ## Semantics
//! - Every operation is read → modify → write of the whole file; one
//!   record write is atomic at the file level, matching the per-record
//!   atomicity the contract requires.
//! - A missing file reads as an empty collection; the directory is
//!   created on first write.
//! - Files are pretty-printed so they stay hand-editable.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use async_trait::async_trait;
use shoplite_core::{Category, CategoryPatch, Product, ProductPatch};

use crate::error::StoreResult;
use crate::store::{CategoryStore, ProductStore};

const PRODUCTS_FILE: &str = "products.json";
const CATEGORIES_FILE: &str = "categories.json";

/// On-disk envelope for the products file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ProductsFile {
    products: Vec<Product>,
}

/// On-disk envelope for the categories file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CategoriesFile {
    categories: Vec<Category>,
}

/// Flat-file JSON entity store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `data_dir`. The directory does not
    /// need to exist yet.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            data_dir: data_dir.into(),
        }
    }

    /// The directory holding the data files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    async fn read_file<T: DeserializeOwned + Default>(&self, name: &str) -> StoreResult<T> {
        let path = self.data_dir.join(name);
        match fs::read(&path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            // First run: no file means no records yet.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_file<T: Serialize>(&self, name: &str, data: &T) -> StoreResult<()> {
        fs::create_dir_all(&self.data_dir).await?;
        let path = self.data_dir.join(name);
        let bytes = serde_json::to_vec_pretty(data)?;
        fs::write(&path, bytes).await?;
        debug!(path = %path.display(), "json: wrote data file");
        Ok(())
    }

    async fn read_products(&self) -> StoreResult<ProductsFile> {
        self.read_file(PRODUCTS_FILE).await
    }

    async fn write_products(&self, data: &ProductsFile) -> StoreResult<()> {
        self.write_file(PRODUCTS_FILE, data).await
    }

    async fn read_categories(&self) -> StoreResult<CategoriesFile> {
        self.read_file(CATEGORIES_FILE).await
    }

    async fn write_categories(&self, data: &CategoriesFile) -> StoreResult<()> {
        self.write_file(CATEGORIES_FILE, data).await
    }
}

#[async_trait]
impl ProductStore for JsonFileStore {
    async fn get_all_products(&self) -> StoreResult<Vec<Product>> {
        Ok(self.read_products().await?.products)
    }

    async fn get_product_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        let data = self.read_products().await?;
        Ok(data.products.into_iter().find(|p| p.id == id))
    }

    async fn get_product_by_slug(&self, slug: &str) -> StoreResult<Option<Product>> {
        let data = self.read_products().await?;
        Ok(data.products.into_iter().find(|p| p.slug == slug))
    }

    async fn create_product(&self, product: &Product) -> StoreResult<Product> {
        let mut data = self.read_products().await?;
        data.products.push(product.clone());
        self.write_products(&data).await?;
        debug!(id = %product.id, slug = %product.slug, "json: create product");
        Ok(product.clone())
    }

    async fn update_product(
        &self,
        id: &str,
        patch: &ProductPatch,
    ) -> StoreResult<Option<Product>> {
        let mut data = self.read_products().await?;
        let Some(existing) = data.products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        patch.apply_to(existing);
        existing.updated_at = Utc::now();
        let updated = existing.clone();

        self.write_products(&data).await?;
        debug!(id = %id, "json: update product");
        Ok(Some(updated))
    }

    async fn delete_product(&self, id: &str) -> StoreResult<bool> {
        let mut data = self.read_products().await?;
        let before = data.products.len();
        data.products.retain(|p| p.id != id);

        if data.products.len() == before {
            // Nothing removed; skip the rewrite entirely.
            return Ok(false);
        }

        self.write_products(&data).await?;
        debug!(id = %id, "json: delete product");
        Ok(true)
    }
}

#[async_trait]
impl CategoryStore for JsonFileStore {
    async fn get_all_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read_categories().await?.categories)
    }

    async fn get_category_by_id(&self, id: &str) -> StoreResult<Option<Category>> {
        let data = self.read_categories().await?;
        Ok(data.categories.into_iter().find(|c| c.id == id))
    }

    async fn get_category_by_slug(&self, slug: &str) -> StoreResult<Option<Category>> {
        let data = self.read_categories().await?;
        Ok(data.categories.into_iter().find(|c| c.slug == slug))
    }

    async fn create_category(&self, category: &Category) -> StoreResult<Category> {
        let mut data = self.read_categories().await?;
        data.categories.push(category.clone());
        self.write_categories(&data).await?;
        debug!(id = %category.id, slug = %category.slug, "json: create category");
        Ok(category.clone())
    }

    async fn update_category(
        &self,
        id: &str,
        patch: &CategoryPatch,
    ) -> StoreResult<Option<Category>> {
        let mut data = self.read_categories().await?;
        let Some(existing) = data.categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        patch.apply_to(existing);
        let updated = existing.clone();

        self.write_categories(&data).await?;
        Ok(Some(updated))
    }

    async fn delete_category(&self, id: &str) -> StoreResult<bool> {
        let mut data = self.read_categories().await?;
        let before = data.categories.len();
        data.categories.retain(|c| c.id != id);

        if data.categories.len() == before {
            return Ok(false);
        }

        self.write_categories(&data).await?;
        Ok(true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{sample_category, sample_product};
    use tempfile::TempDir;

    fn store() -> (TempDir, JsonFileStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn test_missing_files_read_as_empty() {
        let (_dir, store) = store();
        assert!(store.get_all_products().await.unwrap().is_empty());
        assert!(store.get_all_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_product_crud_roundtrip() {
        let (_dir, store) = store();
        let product = sample_product("walnut-desk");

        store.create_product(&product).await.unwrap();

        // A fresh store handle over the same directory sees the write.
        let reopened = JsonFileStore::new(store.data_dir());
        let loaded = reopened
            .get_product_by_slug("walnut-desk")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.id, product.id);
        assert_eq!(loaded.price_cents, product.price_cents);

        assert!(reopened.delete_product(&product.id).await.unwrap());
        assert!(reopened.get_all_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_refreshes_timestamp_and_preserves_identity() {
        let (_dir, store) = store();
        let product = sample_product("walnut-desk");
        store.create_product(&product).await.unwrap();

        let patch = ProductPatch {
            name: Some("Walnut Desk XL".to_string()),
            ..Default::default()
        };
        let updated = store
            .update_product(&product.id, &patch)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Walnut Desk XL");
        assert_eq!(updated.id, product.id);
        assert_eq!(updated.created_at, product.created_at);
        assert!(updated.updated_at >= product.updated_at);
    }

    #[tokio::test]
    async fn test_delete_missing_id_leaves_files_untouched() {
        let (_dir, store) = store();
        let product = sample_product("walnut-desk");
        store.create_product(&product).await.unwrap();

        assert!(!store.delete_product("ghost").await.unwrap());
        assert_eq!(store.get_all_products().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_files_are_pretty_printed_envelopes() {
        let (_dir, store) = store();
        store
            .create_category(&sample_category("furniture"))
            .await
            .unwrap();

        let raw = tokio::fs::read_to_string(store.data_dir().join("categories.json"))
            .await
            .unwrap();
        assert!(raw.starts_with("{\n"));
        assert!(raw.contains("\"categories\""));
    }
}
