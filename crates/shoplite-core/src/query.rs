//! # Product Query Pipeline
//!
//! The read path behind the public storefront listing.
//!
//! ## Fixed Step Order
//! ```text
//! full product set
//!      │
//!      ▼
//! 1. status filter      keep status == active (always)
//!      │
//!      ▼
//! 2. category filter    skip when absent or "all"
//!      │
//!      ▼
//! 3. fuzzy search       skip when empty; reorders by relevance
//!      │
//!      ▼
//! 4. sort               skip when "default"; stable, overrides step 3
//!      │
//!      ▼
//! ordered result (empty is a valid, non-error outcome)
//! ```

use crate::search;
use crate::types::{Product, ProductFilter, SortKey};

/// Runs the full filter → search → sort pipeline.
///
/// Consumes the product set (the caller just fetched it from the
/// store) and returns the ordered storefront listing.
///
/// ## Example
/// ```rust,ignore
/// let filter = ProductFilter {
///     category_id: Some("all".to_string()),
///     search: Some("desk".to_string()),
///     sort: SortKey::PriceAsc,
/// };
/// let listing = query::run(store.get_all().await?, &filter);
/// ```
pub fn run(products: Vec<Product>, filter: &ProductFilter) -> Vec<Product> {
    // Step 1: the public view only ever shows active products.
    let mut result: Vec<Product> = products.into_iter().filter(Product::is_active).collect();

    // Step 2: category restriction, unless absent or the "all" sentinel.
    if let Some(category_id) = filter.category_restriction() {
        result.retain(|p| p.category_id == category_id);
    }

    // Step 3: fuzzy search over name + description. The relevance
    // order replaces insertion order.
    if let Some(text) = filter.search_text() {
        let mut scored: Vec<(f64, Product)> = result
            .into_iter()
            .map(|p| (search::score_product(text, &p), p))
            .filter(|(score, _)| search::is_match(*score))
            .collect();
        // Stable sort: equal scores keep their relative order.
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));
        result = scored.into_iter().map(|(_, p)| p).collect();
    }

    // Step 4: explicit sort overrides whatever order step 3 produced.
    sort_products(&mut result, filter.sort);

    result
}

/// Applies a sort key in place. `SortKey::Default` leaves the order
/// untouched. All sorts are stable.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Default => {}
        SortKey::PriceAsc => products.sort_by_key(|p| p.price_cents),
        SortKey::PriceDesc => products.sort_by_key(|p| std::cmp::Reverse(p.price_cents)),
        SortKey::NameAsc => products.sort_by(|a, b| name_key(&a.name).cmp(&name_key(&b.name))),
        SortKey::NameDesc => products.sort_by(|a, b| name_key(&b.name).cmp(&name_key(&a.name))),
        SortKey::Newest => products.sort_by_key(|p| std::cmp::Reverse(p.created_at)),
    }
}

/// Case-insensitive collation key for name sorts.
///
/// Full Unicode lowercasing rather than ASCII-only, so accented names
/// collate with their base letters close enough for a shop listing.
fn name_key(name: &str) -> String {
    name.to_lowercase()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProductStatus, ALL_CATEGORIES};
    use chrono::{TimeZone, Utc};

    fn product(name: &str, price_cents: i64, status: ProductStatus, day: u32) -> Product {
        Product {
            id: format!("id-{name}"),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: format!("{name} description"),
            price_cents,
            stock: 10,
            category_id: "cat-1".to_string(),
            image: "https://example.com/p.jpg".to_string(),
            status,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("Alpha", 1000, ProductStatus::Active, 1),
            product("Bravo", 500, ProductStatus::Active, 2),
            product("Charlie", 2000, ProductStatus::Draft, 3),
        ]
    }

    #[test]
    fn test_status_filter_and_price_asc() {
        let filter = ProductFilter {
            sort: SortKey::PriceAsc,
            ..Default::default()
        };
        let result = run(sample(), &filter);
        let prices: Vec<i64> = result.iter().map(|p| p.price_cents).collect();
        // Draft item excluded, remaining sorted cheapest first.
        assert_eq!(prices, vec![500, 1000]);
    }

    #[test]
    fn test_all_sentinel_equals_no_category_filter() {
        let unfiltered = run(sample(), &ProductFilter::default());
        let all = run(
            sample(),
            &ProductFilter {
                category_id: Some(ALL_CATEGORIES.to_string()),
                ..Default::default()
            },
        );
        let ids = |v: &[Product]| v.iter().map(|p| p.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&unfiltered), ids(&all));
    }

    #[test]
    fn test_category_filter_restricts() {
        let mut products = sample();
        products[1].category_id = "cat-2".to_string();

        let filter = ProductFilter {
            category_id: Some("cat-2".to_string()),
            ..Default::default()
        };
        let result = run(products, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bravo");
    }

    #[test]
    fn test_search_orders_by_relevance() {
        let mut products = sample();
        // Bravo matches mid-description; Alpha matches at the start of
        // its name, so Alpha must rank first.
        products[1].description = "an alpha adjacent accessory".to_string();

        let filter = ProductFilter {
            search: Some("alpha".to_string()),
            ..Default::default()
        };
        let result = run(products, &filter);
        assert_eq!(result.len(), 2);
        // Name-start hit ranks above a mid-description hit.
        assert_eq!(result[0].name, "Alpha");
        assert_eq!(result[1].name, "Bravo");
    }

    #[test]
    fn test_search_with_no_hits_is_empty_not_error() {
        let filter = ProductFilter {
            search: Some("submarine".to_string()),
            ..Default::default()
        };
        assert!(run(sample(), &filter).is_empty());
    }

    #[test]
    fn test_sort_overrides_search_order() {
        let mut products = sample();
        products[0].description = "ceramic mug".to_string();
        products[1].description = "ceramic mug holder".to_string();

        let filter = ProductFilter {
            search: Some("ceramic".to_string()),
            sort: SortKey::PriceAsc,
            ..Default::default()
        };
        let result = run(products, &filter);
        let prices: Vec<i64> = result.iter().map(|p| p.price_cents).collect();
        assert_eq!(prices, vec![500, 1000]);
    }

    #[test]
    fn test_name_sorts_case_insensitive() {
        let mut products = vec![
            product("banana stand", 100, ProductStatus::Active, 1),
            product("Apple Crate", 200, ProductStatus::Active, 2),
        ];
        sort_products(&mut products, SortKey::NameAsc);
        assert_eq!(products[0].name, "Apple Crate");

        sort_products(&mut products, SortKey::NameDesc);
        assert_eq!(products[0].name, "banana stand");
    }

    #[test]
    fn test_newest_first() {
        let filter = ProductFilter {
            sort: SortKey::Newest,
            ..Default::default()
        };
        let result = run(sample(), &filter);
        assert_eq!(result[0].name, "Bravo"); // created Jan 2
        assert_eq!(result[1].name, "Alpha"); // created Jan 1
    }

    #[test]
    fn test_price_sort_is_stable() {
        let mut products = vec![
            product("First", 1000, ProductStatus::Active, 1),
            product("Second", 1000, ProductStatus::Active, 2),
        ];
        sort_products(&mut products, SortKey::PriceAsc);
        assert_eq!(products[0].name, "First");
        assert_eq!(products[1].name, "Second");
    }
}
