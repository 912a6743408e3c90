//! # Seed Data
//!
//! Default catalog for a fresh installation.
//!
//! `seed_if_empty` is idempotent: it only writes when the store has no
//! products at all, so running the seed binary twice (or pointing it at
//! a live store) changes nothing.

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use shoplite_core::{Category, Product, ProductStatus};

use crate::error::StoreResult;
use crate::store::EntityStore;

/// One product blueprint: name, description, price in minor units,
/// stock, category slug, image URL and status.
struct ProductSeed {
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    stock: i64,
    category: &'static str,
    image: &'static str,
    status: ProductStatus,
}

const CATEGORY_SEEDS: &[(&str, &str, &str)] = &[
    (
        "Furniture",
        "furniture",
        "Desks, chairs and shelving for the home office",
    ),
    (
        "Kitchen",
        "kitchen",
        "Cookware and small appliances",
    ),
    (
        "Lighting",
        "lighting",
        "Lamps and fixtures for every room",
    ),
];

const PRODUCT_SEEDS: &[ProductSeed] = &[
    ProductSeed {
        name: "Walnut Standing Desk",
        description: "Solid walnut top with a dual-motor height adjustable frame",
        price_cents: 24_999_00,
        stock: 8,
        category: "furniture",
        image: "https://images.shoplite.test/walnut-standing-desk.jpg",
        status: ProductStatus::Active,
    },
    ProductSeed {
        name: "Ergonomic Mesh Chair",
        description: "Breathable mesh back with adjustable lumbar support",
        price_cents: 12_499_00,
        stock: 15,
        category: "furniture",
        image: "https://images.shoplite.test/ergonomic-mesh-chair.jpg",
        status: ProductStatus::Active,
    },
    ProductSeed {
        name: "Cast Iron Skillet 26cm",
        description: "Pre-seasoned cast iron skillet for stovetop and oven",
        price_cents: 2_199_00,
        stock: 40,
        category: "kitchen",
        image: "https://images.shoplite.test/cast-iron-skillet.jpg",
        status: ProductStatus::Active,
    },
    ProductSeed {
        name: "Stainless Stock Pot 8L",
        description: "Heavy-gauge stainless steel stock pot with glass lid",
        price_cents: 3_499_00,
        stock: 22,
        category: "kitchen",
        image: "https://images.shoplite.test/stainless-stock-pot.jpg",
        status: ProductStatus::Active,
    },
    ProductSeed {
        name: "Brass Desk Lamp",
        description: "Adjustable brass arm lamp with a warm LED bulb",
        price_cents: 4_299_00,
        stock: 12,
        category: "lighting",
        image: "https://images.shoplite.test/brass-desk-lamp.jpg",
        status: ProductStatus::Active,
    },
    ProductSeed {
        name: "Paper Floor Lantern",
        description: "Rice paper floor lantern, ships flat packed",
        price_cents: 1_899_00,
        stock: 0,
        category: "lighting",
        image: "https://images.shoplite.test/paper-floor-lantern.jpg",
        status: ProductStatus::Draft,
    },
];

/// Seeds the default catalog when the store holds no products.
///
/// Returns `true` when data was written, `false` when the store
/// already had content.
#[instrument(skip(store))]
pub async fn seed_if_empty(store: &dyn EntityStore) -> StoreResult<bool> {
    if !store.get_all_products().await?.is_empty()
        || !store.get_all_categories().await?.is_empty()
    {
        info!("store already has content, skipping seed");
        return Ok(false);
    }

    let now = Utc::now();
    let mut category_ids = Vec::with_capacity(CATEGORY_SEEDS.len());

    for (name, slug, description) in CATEGORY_SEEDS {
        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: (*name).to_string(),
            slug: (*slug).to_string(),
            description: (*description).to_string(),
        };
        category_ids.push((*slug, category.id.clone()));
        store.create_category(&category).await?;
    }

    for seed in PRODUCT_SEEDS {
        let category_id = category_ids
            .iter()
            .find(|(slug, _)| *slug == seed.category)
            .map(|(_, id)| id.clone())
            .unwrap_or_default();

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: seed.name.to_string(),
            slug: shoplite_core::slugify(seed.name),
            description: seed.description.to_string(),
            price_cents: seed.price_cents,
            stock: seed.stock,
            category_id,
            image: seed.image.to_string(),
            status: seed.status,
            created_at: now,
            updated_at: now,
        };
        store.create_product(&product).await?;
    }

    info!(
        categories = CATEGORY_SEEDS.len(),
        products = PRODUCT_SEEDS.len(),
        "seeded default catalog"
    );
    Ok(true)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::store::{CategoryStore, ProductStore};

    #[tokio::test]
    async fn test_seed_populates_empty_store() {
        let store = MemoryStore::new();
        assert!(seed_if_empty(&store).await.unwrap());

        let products = store.get_all_products().await.unwrap();
        let categories = store.get_all_categories().await.unwrap();
        assert_eq!(products.len(), PRODUCT_SEEDS.len());
        assert_eq!(categories.len(), CATEGORY_SEEDS.len());

        // Every product points at a seeded category.
        for product in &products {
            assert!(
                categories.iter().any(|c| c.id == product.category_id),
                "product {} has a dangling category_id",
                product.slug
            );
        }
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = MemoryStore::new();
        assert!(seed_if_empty(&store).await.unwrap());
        assert!(!seed_if_empty(&store).await.unwrap());
        assert_eq!(
            store.get_all_products().await.unwrap().len(),
            PRODUCT_SEEDS.len()
        );
    }
}
