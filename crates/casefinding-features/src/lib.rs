//! casefinding-features
//!
//! Maps clinic intake answers onto the flat one-hot feature vector the HIV
//! case-finding model scores. Pure data and pure functions, no HTTP.

pub mod categories;
pub mod category;
pub mod error;
pub mod form;
pub mod mapper;

use casefinding_core::models::features::FeatureVector;

use category::{Category, CategoryViolation};
use error::FeatureError;

/// Return every mapped category, in evaluation order.
pub fn all_categories() -> &'static [Category] {
    categories::CATEGORIES
}

/// Look up a category by ID.
pub fn get_category(id: &str) -> Option<&'static Category> {
    all_categories().iter().find(|c| c.id == id)
}

/// Look up a category by ID, failing on unknown IDs.
pub fn require_category(id: &str) -> Result<&'static Category, FeatureError> {
    get_category(id).ok_or_else(|| FeatureError::UnknownCategory(id.to_string()))
}

/// Check that every exhaustive category raised exactly one indicator.
pub fn validate_vector(vector: &FeatureVector) -> Vec<CategoryViolation> {
    let mut violations = Vec::new();
    for category in all_categories().iter().filter(|c| c.is_exhaustive()) {
        let raised: Vec<String> = category
            .flags()
            .into_iter()
            .filter(|flag| vector.is_set(flag))
            .map(str::to_string)
            .collect();
        if raised.len() != 1 {
            violations.push(CategoryViolation {
                category_id: category.id.to_string(),
                message: format!(
                    "{}: expected exactly one indicator, found {} ({})",
                    category.id,
                    raised.len(),
                    raised.join(", "),
                ),
                raised,
            });
        }
    }
    violations
}

/// Like [`validate_vector`], but fails on the first violation.
pub fn check_vector(vector: &FeatureVector) -> Result<(), FeatureError> {
    match validate_vector(vector).into_iter().next() {
        Some(violation) => Err(violation.into()),
        None => Ok(()),
    }
}
