//! # Form Boundary
//!
//! Parsing of raw form submissions into validated drafts.
//!
//! ## Parse Pipeline
//! ```text
//! RawProductForm (all fields as submitted strings)
//!      │
//!      ├── price  "249.99" ──► cents (NotANumber on garbage)
//!      ├── stock  "12"     ──► i64   (NotAnInteger on "12.5")
//!      ├── status "active" ──► ProductStatus (NotAllowed otherwise)
//!      └── slug   ""       ──► slugify(name)
//!      │
//!      ▼
//! ProductDraft ──► validate_product (field rules)
//!      │
//!      ▼
//! Ok(draft)  or  Err(ALL parse + validation errors together)
//! ```
//!
//! Parse failures and rule violations are reported in one batch so the
//! admin form can highlight every bad field at once.

use serde::Deserialize;

use shoplite_core::error::ValidationError;
use shoplite_core::slugify;
use shoplite_core::types::ProductStatus;
use shoplite_core::validation::{validate_category, validate_product, CategoryDraft, ProductDraft};

// =============================================================================
// Numeric Field Parsing
// =============================================================================

/// Parses a decimal price string (major units) into cents.
///
/// Pushes `NotANumber` and returns 0 on garbage so the remaining
/// fields still get validated.
fn parse_price(raw: &str, errors: &mut Vec<ValidationError>) -> i64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => (value * 100.0).round() as i64,
        _ => {
            errors.push(ValidationError::NotANumber {
                field: "price".to_string(),
            });
            0
        }
    }
}

/// Parses a stock count string into a whole number.
///
/// `"12"` and `"12.0"` are accepted; `"12.5"` is `NotAnInteger`;
/// garbage is `NotANumber`.
fn parse_stock(raw: &str, errors: &mut Vec<ValidationError>) -> i64 {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return value;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => value as i64,
        Ok(_) => {
            errors.push(ValidationError::NotAnInteger {
                field: "stock".to_string(),
            });
            0
        }
        Err(_) => {
            errors.push(ValidationError::NotANumber {
                field: "stock".to_string(),
            });
            0
        }
    }
}

/// Parses a status string into the enum.
fn parse_status(raw: &str, errors: &mut Vec<ValidationError>) -> ProductStatus {
    match ProductStatus::parse(raw.trim()) {
        Some(status) => status,
        None => {
            errors.push(ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: ProductStatus::ALLOWED.iter().map(|s| s.to_string()).collect(),
            });
            ProductStatus::default()
        }
    }
}

// =============================================================================
// Raw Forms
// =============================================================================

/// A product form exactly as submitted: every field a string.
///
/// `slug` is optional; when empty or absent it is derived from the
/// name with [`slugify`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProductForm {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub category_id: String,
    pub image: String,
    pub status: String,
}

impl RawProductForm {
    /// Parses and validates the form into a typed draft.
    ///
    /// On failure returns every parse error and rule violation at once.
    pub fn parse(self) -> Result<ProductDraft, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let price_cents = parse_price(&self.price, &mut errors);
        let stock = parse_stock(&self.stock, &mut errors);
        let status = parse_status(&self.status, &mut errors);

        let slug = match self.slug.as_deref().map(str::trim) {
            None | Some("") => slugify(&self.name),
            Some(slug) => slug.to_string(),
        };

        let draft = ProductDraft {
            name: self.name.trim().to_string(),
            slug,
            description: self.description.trim().to_string(),
            price_cents,
            stock,
            category_id: self.category_id.trim().to_string(),
            image: self.image.trim().to_string(),
            status,
        };

        if let Err(rule_errors) = validate_product(&draft) {
            errors.extend(rule_errors);
        }

        if errors.is_empty() {
            Ok(draft)
        } else {
            Err(errors)
        }
    }
}

/// A category form exactly as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCategoryForm {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub description: String,
}

impl RawCategoryForm {
    /// Parses and validates the form into a typed draft.
    pub fn parse(self) -> Result<CategoryDraft, Vec<ValidationError>> {
        let slug = match self.slug.as_deref().map(str::trim) {
            None | Some("") => slugify(&self.name),
            Some(slug) => slug.to_string(),
        };

        let draft = CategoryDraft {
            name: self.name.trim().to_string(),
            slug,
            description: self.description.trim().to_string(),
        };

        validate_category(&draft)?;
        Ok(draft)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
