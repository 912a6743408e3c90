//! # Domain Types
//!
//! Core domain types for the storefront catalog.
//!
//! ## Type Hierarchy
//! ```text
//! Product                      Category
//! ─────────────────            ─────────────────
//! id (UUID)                    id (UUID)
//! slug (business key)          slug (business key)
//! name / description           name / description
//! price_cents / stock
//! category_id → Category
//! image / status
//! created_at / updated_at
//!
//! ProductFilter: what the storefront listing asked for
//! SortKey:       how the listing is ordered
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every entity has:
//! - `id`: UUID v4 - immutable, used for references
//! - `slug`: URL-safe business key - unique, shown in URLs, mutable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Product Status
// =============================================================================

/// Publication status of a product.
///
/// Only `Active` products ever appear on the public storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Visible on the storefront.
    Active,
    /// Hidden from the storefront but kept in the admin listing.
    Inactive,
    /// Work in progress, never shown publicly.
    Draft,
}

impl ProductStatus {
    /// All accepted wire values, used in validation error messages.
    pub const ALLOWED: [&'static str; 3] = ["active", "inactive", "draft"];

    /// Parses the lowercase wire form (`"active"` etc.).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(ProductStatus::Active),
            "inactive" => Some(ProductStatus::Inactive),
            "draft" => Some(ProductStatus::Draft),
            _ => None,
        }
    }

    /// The lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Draft => "draft",
        }
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Draft
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4). Immutable once created.
    pub id: String,

    /// Display name shown in listings and on the detail page.
    pub name: String,

    /// URL-safe business key. Unique across all products.
    pub slug: String,

    /// Long-form description, also searched by the fuzzy matcher.
    pub description: String,

    /// Price in cents (smallest currency unit, never floats).
    pub price_cents: i64,

    /// Units on hand.
    pub stock: i64,

    /// Owning category. Deleting the category orphans this reference;
    /// the product is then treated as uncategorized.
    pub category_id: String,

    /// Image URL (hosted elsewhere, only the URL is stored).
    pub image: String,

    /// Publication status.
    pub status: ProductStatus,

    /// When the product was created. Immutable.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated. Refreshed on every write.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the product belongs on the public storefront.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == ProductStatus::Active
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category.
///
/// Lifecycle note: deleting a category does not cascade. Products that
/// referenced it keep their `category_id` and render as uncategorized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    /// Unique identifier (UUID v4). Immutable once created.
    pub id: String,

    /// Display name.
    pub name: String,

    /// URL-safe business key. Unique across all categories.
    pub slug: String,

    /// Short description shown in the admin dashboard.
    pub description: String,
}

// =============================================================================
// Patches (partial updates)
// =============================================================================

/// Partial update for a product. `None` fields are left untouched.
///
/// The store merges the patch into the existing record and refreshes
/// `updated_at`; `id` and `created_at` never change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i64>,
    pub category_id: Option<String>,
    pub image: Option<String>,
    pub status: Option<ProductStatus>,
}

impl ProductPatch {
    /// Applies the patch to a product in place, excluding `id`,
    /// `created_at` and `updated_at` (the store owns the timestamp).
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(slug) = &self.slug {
            product.slug = slug.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price_cents) = self.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(category_id) = &self.category_id {
            product.category_id = category_id.clone();
        }
        if let Some(image) = &self.image {
            product.image = image.clone();
        }
        if let Some(status) = self.status {
            product.status = status;
        }
    }
}

/// Partial update for a category. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl CategoryPatch {
    /// Applies the patch to a category in place, excluding `id`.
    pub fn apply_to(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name = name.clone();
        }
        if let Some(slug) = &self.slug {
            category.slug = slug.clone();
        }
        if let Some(description) = &self.description {
            category.description = description.clone();
        }
    }
}

// =============================================================================
// Listing Filter
// =============================================================================

/// Sort order for the storefront listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep the order produced by the earlier pipeline steps.
    Default,
    /// Price, cheapest first.
    PriceAsc,
    /// Price, most expensive first.
    PriceDesc,
    /// Name A-Z (case-insensitive).
    NameAsc,
    /// Name Z-A (case-insensitive).
    NameDesc,
    /// Most recently created first.
    Newest,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Default
    }
}

/// Filter specification for the public product listing.
///
/// All fields optional; an empty filter shows every active product in
/// insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Category id to restrict to. `None` or the sentinel `"all"`
    /// means no category restriction.
    pub category_id: Option<String>,

    /// Fuzzy search text over name and description. Empty or `None`
    /// skips the search step.
    pub search: Option<String>,

    /// Sort order applied last.
    #[serde(default)]
    pub sort: SortKey,
}

/// Sentinel category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

impl ProductFilter {
    /// Whether the category step should restrict the result.
    pub fn category_restriction(&self) -> Option<&str> {
        match self.category_id.as_deref() {
            None | Some(ALL_CATEGORIES) => None,
            Some(id) => Some(id),
        }
    }

    /// Non-empty search text, if any.
    pub fn search_text(&self) -> Option<&str> {
        match self.search.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(text),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
