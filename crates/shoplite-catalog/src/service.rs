//! # Catalog Service
//!
//! CRUD orchestration over the entity store.
//!
//! ## Write Path
//! ```text
//! RawProductForm
//!      │  parse + validate (ALL errors jointly)
//!      ▼
//! duplicate slug check (get_by_slug; on update, own id excluded)
//!      │
//!      ▼
//! UUID + timestamps assigned / patch merged by the store
//!      │
//!      ▼
//! store write ──► view version bump
//! ```
//!
//! ## Read Path
//! `list_products` fetches everything and runs the pure query pipeline
//! from shoplite-core; the service never filters in SQL so the three
//! store backends stay behaviorally identical.
//!
//! Known race: the slug check is read-then-write. Two simultaneous
//! creates with the same slug can both pass the check; the SQLite
//! backend then rejects the loser via its UNIQUE index, the file
//! backends keep the duplicate. Single-writer admin deployments make
//! this acceptable.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use shoplite_core::types::{Category, CategoryPatch, Product, ProductFilter, ProductPatch};
use shoplite_core::validation::{CategoryDraft, ProductDraft};
use shoplite_core::query;
use shoplite_store::EntityStore;

use crate::error::{CatalogError, CatalogResult};
use crate::forms::{RawCategoryForm, RawProductForm};
use crate::invalidate::ViewVersion;

/// The catalog service: all product and category operations callers
/// are expected to go through.
pub struct CatalogService {
    store: Arc<dyn EntityStore>,
    views: ViewVersion,
}

impl CatalogService {
    /// Wraps an opened entity store.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        CatalogService {
            store,
            views: ViewVersion::new(),
        }
    }

    /// The view generation counter, for cache staleness checks.
    pub fn views(&self) -> &ViewVersion {
        &self.views
    }

    // =========================================================================
    // Products: write path
    // =========================================================================

    /// Creates a product from a submitted form.
    ///
    /// Validates every field, derives the slug from the name when the
    /// form left it blank, and rejects slugs already in use.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create_product(&self, form: RawProductForm) -> CatalogResult<Product> {
        let draft = form.parse()?;

        if self.store.get_product_by_slug(&draft.slug).await?.is_some() {
            debug!(slug = %draft.slug, "create rejected: slug taken");
            return Err(CatalogError::DuplicateSlug { entity: "product" });
        }

        let now = Utc::now();
        let product = product_from_draft(draft, Uuid::new_v4().to_string(), now);

        let created = self.store.create_product(&product).await?;
        let generation = self.views.bump();
        info!(id = %created.id, slug = %created.slug, generation, "product created");
        Ok(created)
    }

    /// Updates an existing product from a submitted form.
    ///
    /// The slug check excludes the product itself, so resubmitting an
    /// unchanged form is not a duplicate. `id` and `created_at` are
    /// never touched; the store refreshes `updated_at`.
    #[instrument(skip(self, form))]
    pub async fn update_product(&self, id: &str, form: RawProductForm) -> CatalogResult<Product> {
        let draft = form.parse()?;

        if let Some(holder) = self.store.get_product_by_slug(&draft.slug).await? {
            if holder.id != id {
                debug!(slug = %draft.slug, holder = %holder.id, "update rejected: slug taken");
                return Err(CatalogError::DuplicateSlug { entity: "product" });
            }
        }

        let patch = product_patch_from_draft(draft);
        let updated = self
            .store
            .update_product(id, &patch)
            .await?
            .ok_or_else(|| CatalogError::NotFound {
                entity: "product",
                id: id.to_string(),
            })?;

        let generation = self.views.bump();
        info!(id = %updated.id, generation, "product updated");
        Ok(updated)
    }

    /// Deletes a product. A missing id is a benign no-op returning
    /// `false`, never an error.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> CatalogResult<bool> {
        let deleted = self.store.delete_product(id).await?;
        if deleted {
            let generation = self.views.bump();
            info!(id, generation, "product deleted");
        } else {
            debug!(id, "delete was a no-op: id not found");
        }
        Ok(deleted)
    }

    // =========================================================================
    // Products: read path
    // =========================================================================

    /// The public storefront listing: active products filtered,
    /// searched and sorted per the filter.
    pub async fn list_products(&self, filter: &ProductFilter) -> CatalogResult<Vec<Product>> {
        let products = self.store.get_all_products().await?;
        Ok(query::run(products, filter))
    }

    /// Every product regardless of status, for the admin dashboard.
    pub async fn all_products(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.store.get_all_products().await?)
    }

    /// Detail-page lookup by slug.
    pub async fn get_product_by_slug(&self, slug: &str) -> CatalogResult<Option<Product>> {
        Ok(self.store.get_product_by_slug(slug).await?)
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Creates a category from a submitted form.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create_category(&self, form: RawCategoryForm) -> CatalogResult<Category> {
        let draft = form.parse()?;

        if self.store.get_category_by_slug(&draft.slug).await?.is_some() {
            debug!(slug = %draft.slug, "create rejected: slug taken");
            return Err(CatalogError::DuplicateSlug { entity: "category" });
        }

        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            slug: draft.slug,
            description: draft.description,
        };

        let created = self.store.create_category(&category).await?;
        let generation = self.views.bump();
        info!(id = %created.id, slug = %created.slug, generation, "category created");
        Ok(created)
    }

    /// Updates an existing category from a submitted form.
    #[instrument(skip(self, form))]
    pub async fn update_category(&self, id: &str, form: RawCategoryForm) -> CatalogResult<Category> {
        let draft = form.parse()?;

        if let Some(holder) = self.store.get_category_by_slug(&draft.slug).await? {
            if holder.id != id {
                return Err(CatalogError::DuplicateSlug { entity: "category" });
            }
        }

        let patch = CategoryPatch {
            name: Some(draft.name),
            slug: Some(draft.slug),
            description: Some(draft.description),
        };
        let updated = self
            .store
            .update_category(id, &patch)
            .await?
            .ok_or_else(|| CatalogError::NotFound {
                entity: "category",
                id: id.to_string(),
            })?;

        let generation = self.views.bump();
        info!(id = %updated.id, generation, "category updated");
        Ok(updated)
    }

    /// Deletes a category. Products referencing it are left untouched
    /// and render as uncategorized. Missing id returns `false`.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: &str) -> CatalogResult<bool> {
        let deleted = self.store.delete_category(id).await?;
        if deleted {
            let generation = self.views.bump();
            info!(id, generation, "category deleted");
        }
        Ok(deleted)
    }

    /// All categories in display order (name, case-insensitive).
    pub async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        let mut categories = self.store.get_all_categories().await?;
        categories.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(categories)
    }

    /// Category lookup by slug, for the filtered storefront pages.
    pub async fn get_category_by_slug(&self, slug: &str) -> CatalogResult<Option<Category>> {
        Ok(self.store.get_category_by_slug(slug).await?)
    }
}

// =============================================================================
// Draft Conversion
// =============================================================================

/// Materializes a validated draft into a full product record.
fn product_from_draft(
    draft: ProductDraft,
    id: String,
    now: chrono::DateTime<Utc>,
) -> Product {
    Product {
        id,
        name: draft.name,
        slug: draft.slug,
        description: draft.description,
        price_cents: draft.price_cents,
        stock: draft.stock,
        category_id: draft.category_id,
        image: draft.image,
        status: draft.status,
        created_at: now,
        updated_at: now,
    }
}

/// Turns a full-form draft into a patch covering every mutable field.
fn product_patch_from_draft(draft: ProductDraft) -> ProductPatch {
    ProductPatch {
        name: Some(draft.name),
        slug: Some(draft.slug),
        description: Some(draft.description),
        price_cents: Some(draft.price_cents),
        stock: Some(draft.stock),
        category_id: Some(draft.category_id),
        image: Some(draft.image),
        status: Some(draft.status),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
