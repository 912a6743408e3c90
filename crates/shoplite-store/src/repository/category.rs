//! # Category Repository
//!
//! SQL operations for category rows.
//!
//! Deletion is a plain row delete: no cascade, no reference cleanup.
//! Products keep their `category_id` and the storefront shows them as
//! uncategorized.

use sqlx::SqlitePool;
use tracing::debug;

use shoplite_core::{Category, CategoryPatch};

use crate::error::StoreResult;

const COLUMNS: &str = "id, name, slug, description";

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Returns every category in insertion order.
    pub async fn get_all(&self) -> StoreResult<Vec<Category>> {
        let sql = format!("SELECT {COLUMNS} FROM categories ORDER BY rowid");
        let categories = sqlx::query_as::<_, Category>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    /// Looks up a category by id.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Category>> {
        let sql = format!("SELECT {COLUMNS} FROM categories WHERE id = ?1");
        let category = sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(category)
    }

    /// Looks up a category by its unique slug.
    pub async fn get_by_slug(&self, slug: &str) -> StoreResult<Option<Category>> {
        let sql = format!("SELECT {COLUMNS} FROM categories WHERE slug = ?1");
        let category = sqlx::query_as::<_, Category>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(category)
    }

    /// Inserts a new category row.
    pub async fn insert(&self, category: &Category) -> StoreResult<Category> {
        debug!(id = %category.id, slug = %category.slug, "sqlite: insert category");

        sqlx::query(
            "INSERT INTO categories (id, name, slug, description) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&category.id)
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .execute(&self.pool)
        .await?;

        Ok(category.clone())
    }

    /// Merges a patch into an existing row. Returns `Ok(None)` when
    /// the id does not exist.
    pub async fn update(&self, id: &str, patch: &CategoryPatch) -> StoreResult<Option<Category>> {
        let Some(mut category) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        patch.apply_to(&mut category);

        debug!(id = %id, "sqlite: update category");

        sqlx::query(
            "UPDATE categories SET name = ?2, slug = ?3, description = ?4 WHERE id = ?1",
        )
        .bind(id)
        .bind(&category.name)
        .bind(&category.slug)
        .bind(&category.description)
        .execute(&self.pool)
        .await?;

        Ok(Some(category))
    }

    /// Deletes a category row. Returns `false` when nothing matched.
    pub async fn delete(&self, id: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        debug!(id = %id, deleted, "sqlite: delete category");
        Ok(deleted)
    }

    /// Counts category rows (for the seed check).
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::pool::{Database, DbConfig};
    use crate::store::{CategoryStore, ProductStore};
    use crate::testutil::{sample_category, sample_product};
    use shoplite_core::{CategoryPatch, ProductPatch};

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_product_crud_roundtrip() {
        let db = db().await;
        let product = sample_product("walnut-desk");

        db.create_product(&product).await.unwrap();
        assert_eq!(db.products().count().await.unwrap(), 1);

        let by_slug = db
            .get_product_by_slug("walnut-desk")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_slug.id, product.id);
        assert_eq!(by_slug.price_cents, product.price_cents);
        assert_eq!(by_slug.status, product.status);

        assert!(db.delete_product(&product.id).await.unwrap());
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_slug_hits_unique_index() {
        let db = db().await;
        let first = sample_product("walnut-desk");
        let mut second = sample_product("walnut-desk");
        second.id = "another-id".to_string();

        db.create_product(&first).await.unwrap();
        let err = db.create_product(&second).await.unwrap_err();
        assert!(
            matches!(err, crate::error::StoreError::UniqueViolation { .. }),
            "expected unique violation, got {err:?}"
        );
    }

    #[tokio::test]
    async fn test_update_merges_and_refreshes_timestamp() {
        let db = db().await;
        let product = sample_product("walnut-desk");
        db.create_product(&product).await.unwrap();

        let patch = ProductPatch {
            stock: Some(42),
            ..Default::default()
        };
        let updated = db
            .update_product(&product.id, &patch)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.stock, 42);
        assert_eq!(updated.name, product.name);
        assert_eq!(updated.created_at, product.created_at);
        assert!(updated.updated_at >= product.updated_at);

        // Missing id is data, not an error.
        assert!(db
            .update_product("ghost", &patch)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_category_crud_and_orphaning_delete() {
        let db = db().await;
        let category = sample_category("furniture");
        let mut product = sample_product("walnut-desk");
        product.category_id = category.id.clone();

        db.create_category(&category).await.unwrap();
        db.create_product(&product).await.unwrap();

        let renamed = db
            .update_category(
                &category.id,
                &CategoryPatch {
                    name: Some("Fine Furniture".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.name, "Fine Furniture");
        assert_eq!(renamed.slug, category.slug);

        // Deleting the category leaves the product row untouched.
        assert!(db.delete_category(&category.id).await.unwrap());
        let survivor = db.get_product_by_id(&product.id).await.unwrap().unwrap();
        assert_eq!(survivor.category_id, category.id);

        assert!(!db.delete_category("ghost").await.unwrap());
    }
}
