//! # Schema Validation
//!
//! Field-level validation for product and category input.
//!
//! ## Validation Strategy
//! ```text
//! Raw form fields (strings)
//!      │  parsed by the form boundary (shoplite-catalog)
//!      ▼
//! Typed draft (ProductDraft / CategoryDraft)
//!      │
//!      ▼
//! THIS MODULE: field rules, ALL violations collected
//!      │
//!      ▼
//! Storage constraints (UNIQUE slug) checked by orchestration
//! ```
//!
//! ## Rules
//! - name: non-empty, ≤ 255 characters
//! - slug: non-empty, `^[a-z0-9-]+$`
//! - description: non-empty
//! - price: ≥ 0
//! - stock: ≥ 0 (whole units; the form boundary rejects fractions)
//! - category_id: well-formed UUID
//! - image: syntactically valid URL
//! - status: parsed into the enum before it reaches this module
//!
//! Validation never partially applies anything: a draft either passes
//! every rule or the caller receives the full list of violations.

use url::Url;

use crate::error::{ValidationError, ValidationResult};
use crate::slug::is_valid_slug;
use crate::types::ProductStatus;

/// Maximum length for display names, matching the storage column width.
pub const MAX_NAME_LEN: usize = 255;

// =============================================================================
// Typed Drafts
// =============================================================================

/// A typed product record as submitted, before any rule has passed.
///
/// Produced by the form boundary; consumed by [`validate_product`].
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price_cents: i64,
    pub stock: i64,
    pub category_id: String,
    pub image: String,
    pub status: ProductStatus,
}

/// A typed category record as submitted.
#[derive(Debug, Clone)]
pub struct CategoryDraft {
    pub name: String,
    pub slug: String,
    pub description: String,
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a display name: non-empty, at most 255 characters.
pub fn validate_name(name: &str, errors: &mut Vec<ValidationError>) {
    let name = name.trim();

    if name.is_empty() {
        errors.push(ValidationError::Required {
            field: "name".to_string(),
        });
    } else if name.chars().count() > MAX_NAME_LEN {
        errors.push(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }
}

/// Validates a slug: non-empty, lowercase alphanumerics and hyphens only.
pub fn validate_slug(slug: &str, errors: &mut Vec<ValidationError>) {
    if slug.is_empty() {
        errors.push(ValidationError::Required {
            field: "slug".to_string(),
        });
    } else if !is_valid_slug(slug) {
        errors.push(ValidationError::InvalidFormat {
            field: "slug".to_string(),
            reason: "only lowercase letters, numbers, and hyphens".to_string(),
        });
    }
}

/// Validates a description: non-empty.
pub fn validate_description(description: &str, errors: &mut Vec<ValidationError>) {
    if description.trim().is_empty() {
        errors.push(ValidationError::Required {
            field: "description".to_string(),
        });
    }
}

/// Validates a price in cents: zero or greater.
pub fn validate_price_cents(cents: i64, errors: &mut Vec<ValidationError>) {
    if cents < 0 {
        errors.push(ValidationError::Negative {
            field: "price".to_string(),
        });
    }
}

/// Validates a stock count: zero or greater.
pub fn validate_stock(stock: i64, errors: &mut Vec<ValidationError>) {
    if stock < 0 {
        errors.push(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }
}

/// Validates a category reference: must be a well-formed UUID.
pub fn validate_category_id(id: &str, errors: &mut Vec<ValidationError>) {
    if id.trim().is_empty() {
        errors.push(ValidationError::Required {
            field: "categoryId".to_string(),
        });
    } else if uuid::Uuid::parse_str(id).is_err() {
        errors.push(ValidationError::InvalidFormat {
            field: "categoryId".to_string(),
            reason: "must be a valid UUID".to_string(),
        });
    }
}

/// Validates an image reference: must parse as an absolute URL.
pub fn validate_image_url(image: &str, errors: &mut Vec<ValidationError>) {
    if image.trim().is_empty() {
        errors.push(ValidationError::Required {
            field: "image".to_string(),
        });
    } else if Url::parse(image).is_err() {
        errors.push(ValidationError::InvalidFormat {
            field: "image".to_string(),
            reason: "must be a valid URL".to_string(),
        });
    }
}

// =============================================================================
// Joint Validators
// =============================================================================

/// Validates a complete product draft, collecting every violation.
///
/// ## Example
/// ```rust
/// use shoplite_core::types::ProductStatus;
/// use shoplite_core::validation::{validate_product, ProductDraft};
///
/// let draft = ProductDraft {
///     name: "".to_string(),
///     slug: "Bad Slug".to_string(),
///     description: "desc".to_string(),
///     price_cents: -1,
///     stock: 3,
///     category_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
///     image: "https://example.com/x.jpg".to_string(),
///     status: ProductStatus::Active,
/// };
///
/// let errors = validate_product(&draft).unwrap_err();
/// assert_eq!(errors.len(), 3); // name, slug, price — all at once
/// ```
pub fn validate_product(draft: &ProductDraft) -> ValidationResult {
    let mut errors = Vec::new();

    validate_name(&draft.name, &mut errors);
    validate_slug(&draft.slug, &mut errors);
    validate_description(&draft.description, &mut errors);
    validate_price_cents(draft.price_cents, &mut errors);
    validate_stock(draft.stock, &mut errors);
    validate_category_id(&draft.category_id, &mut errors);
    validate_image_url(&draft.image, &mut errors);
    // status is already a ProductStatus; unknown values were rejected
    // when the raw form was parsed.

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a complete category draft, collecting every violation.
pub fn validate_category(draft: &CategoryDraft) -> ValidationResult {
    let mut errors = Vec::new();

    validate_name(&draft.name, &mut errors);
    validate_slug(&draft.slug, &mut errors);
    validate_description(&draft.description, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORY_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: "Walnut Desk".to_string(),
            slug: "walnut-desk".to_string(),
            description: "Solid walnut writing desk".to_string(),
            price_cents: 2_499_900,
            stock: 4,
            category_id: CATEGORY_ID.to_string(),
            image: "https://example.com/desk.jpg".to_string(),
            status: ProductStatus::Active,
        }
    }

    #[test]
    fn test_valid_product_passes() {
        assert!(validate_product(&valid_draft()).is_ok());
    }

    #[test]
    fn test_each_broken_field_is_reported() {
        let cases: Vec<(&str, ProductDraft)> = vec![
            (
                "name",
                ProductDraft {
                    name: "".to_string(),
                    ..valid_draft()
                },
            ),
            (
                "name",
                ProductDraft {
                    name: "x".repeat(256),
                    ..valid_draft()
                },
            ),
            (
                "slug",
                ProductDraft {
                    slug: "Not A Slug".to_string(),
                    ..valid_draft()
                },
            ),
            (
                "description",
                ProductDraft {
                    description: "  ".to_string(),
                    ..valid_draft()
                },
            ),
            (
                "price",
                ProductDraft {
                    price_cents: -100,
                    ..valid_draft()
                },
            ),
            (
                "stock",
                ProductDraft {
                    stock: -1,
                    ..valid_draft()
                },
            ),
            (
                "categoryId",
                ProductDraft {
                    category_id: "not-a-uuid".to_string(),
                    ..valid_draft()
                },
            ),
            (
                "image",
                ProductDraft {
                    image: "not a url".to_string(),
                    ..valid_draft()
                },
            ),
        ];

        for (field, draft) in cases {
            let errors = validate_product(&draft).unwrap_err();
            assert!(
                errors.iter().any(|e| e.field() == field),
                "expected an error mentioning {field}, got {errors:?}"
            );
        }
    }

    #[test]
    fn test_all_violations_collected_jointly() {
        let draft = ProductDraft {
            name: "".to_string(),
            slug: "".to_string(),
            price_cents: -5,
            ..valid_draft()
        };
        let errors = validate_product(&draft).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["name", "slug", "price"]);
    }

    #[test]
    fn test_name_at_exact_limit_passes() {
        let draft = ProductDraft {
            name: "x".repeat(255),
            ..valid_draft()
        };
        assert!(validate_product(&draft).is_ok());
    }

    #[test]
    fn test_zero_price_and_stock_are_valid() {
        let draft = ProductDraft {
            price_cents: 0,
            stock: 0,
            ..valid_draft()
        };
        assert!(validate_product(&draft).is_ok());
    }

    #[test]
    fn test_category_validation() {
        let draft = CategoryDraft {
            name: "Furniture".to_string(),
            slug: "furniture".to_string(),
            description: "Desks and chairs".to_string(),
        };
        assert!(validate_category(&draft).is_ok());

        let draft = CategoryDraft {
            name: "".to_string(),
            slug: "UPPER".to_string(),
            description: "".to_string(),
        };
        let errors = validate_category(&draft).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
