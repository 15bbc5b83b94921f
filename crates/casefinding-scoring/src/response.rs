use casefinding_core::models::risk::RiskThresholds;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ScoringError;

/// Key of the positive-class probability in `result.predictions`.
pub const PROBABILITY_KEY: &str = "probability(Positive)";

/// The parts of a scoring-service response the classifier reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringResponse {
    pub probability: Option<f64>,
    pub thresholds: RiskThresholds,
}

#[derive(Deserialize)]
struct Envelope {
    result: ResultBody,
}

#[derive(Deserialize)]
struct ResultBody {
    predictions: Predictions,
    thresholds: Thresholds,
}

#[derive(Deserialize)]
struct Predictions {
    #[serde(rename = "probability(Positive)", default)]
    probability: Option<f64>,
}

#[derive(Deserialize)]
struct Thresholds {
    #[serde(rename = "Medium")]
    medium: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Very_High")]
    very_high: f64,
}

impl ScoringResponse {
    /// Parse a response body.
    ///
    /// `result`, `result.predictions`, and all three thresholds are required.
    /// The probability itself may be missing or null; that is a valid
    /// "no result" answer, not a malformed one.
    pub fn from_value(value: Value) -> Result<Self, ScoringError> {
        let envelope: Envelope = serde_json::from_value(value)
            .map_err(|e| ScoringError::MalformedResponse(e.to_string()))?;

        let ResultBody {
            predictions,
            thresholds,
        } = envelope.result;

        Ok(Self {
            probability: predictions.probability,
            thresholds: RiskThresholds {
                medium: thresholds.medium,
                high: thresholds.high,
                very_high: thresholds.very_high,
            },
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| ScoringError::MalformedResponse(e.to_string()))?;
        Self::from_value(value)
    }
}
