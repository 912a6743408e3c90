//! # Product Repository
//!
//! SQL operations for product rows.
//!
//! ## Merge-on-Update
//! ```text
//! update(id, patch)
//!      │
//!      ▼
//! SELECT existing row ── missing? ──► Ok(None)
//!      │
//!      ▼
//! apply patch fields in memory (id/created_at untouched)
//!      │
//!      ▼
//! UPDATE full row, updated_at = now
//! ```
//! Merging in memory keeps the patch semantics identical across all
//! three backends.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use shoplite_core::{Product, ProductPatch};

use crate::error::StoreResult;

/// All product columns, in the order the table defines them.
const COLUMNS: &str =
    "id, name, slug, description, price_cents, stock, category_id, image, status, \
     created_at, updated_at";

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Returns every product, oldest first (insertion order).
    pub async fn get_all(&self) -> StoreResult<Vec<Product>> {
        let sql = format!("SELECT {COLUMNS} FROM products ORDER BY created_at, rowid");
        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    /// Looks up a product by id.
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Product>> {
        let sql = format!("SELECT {COLUMNS} FROM products WHERE id = ?1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    /// Looks up a product by its unique slug.
    pub async fn get_by_slug(&self, slug: &str) -> StoreResult<Option<Product>> {
        let sql = format!("SELECT {COLUMNS} FROM products WHERE slug = ?1");
        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    /// Inserts a new product row.
    ///
    /// The UNIQUE slug index surfaces as
    /// [`StoreError::UniqueViolation`](crate::error::StoreError) if the
    /// pre-write duplicate check raced with another writer.
    pub async fn insert(&self, product: &Product) -> StoreResult<Product> {
        debug!(id = %product.id, slug = %product.slug, "sqlite: insert product");

        sqlx::query(
            "INSERT INTO products ( \
                 id, name, slug, description, price_cents, stock, \
                 category_id, image, status, created_at, updated_at \
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.slug)
        .bind(&product.description)
        .bind(product.price_cents)
        .bind(product.stock)
        .bind(&product.category_id)
        .bind(&product.image)
        .bind(product.status)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(product.clone())
    }

    /// Merges a patch into an existing row. Returns `Ok(None)` when
    /// the id does not exist.
    pub async fn update(&self, id: &str, patch: &ProductPatch) -> StoreResult<Option<Product>> {
        let Some(mut product) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        patch.apply_to(&mut product);
        product.updated_at = Utc::now();

        debug!(id = %id, "sqlite: update product");

        sqlx::query(
            "UPDATE products SET \
                 name = ?2, slug = ?3, description = ?4, price_cents = ?5, \
                 stock = ?6, category_id = ?7, image = ?8, status = ?9, \
                 updated_at = ?10 \
             WHERE id = ?1",
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.slug)
        .bind(&product.description)
        .bind(product.price_cents)
        .bind(product.stock)
        .bind(&product.category_id)
        .bind(&product.image)
        .bind(product.status)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(Some(product))
    }

    /// Deletes a product row. Returns `false` when nothing matched.
    pub async fn delete(&self, id: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        debug!(id = %id, deleted, "sqlite: delete product");
        Ok(deleted)
    }

    /// Counts product rows (for diagnostics and the seed check).
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
