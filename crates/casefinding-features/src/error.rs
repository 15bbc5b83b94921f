use thiserror::Error;

use crate::category::CategoryViolation;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("invalid feature vector: {0}")]
    Violation(#[from] CategoryViolation),
}
