use casefinding_core::models::risk::{RiskAssessment, RiskTier};
use tracing::{debug, warn};

use crate::response::ScoringResponse;

/// Classify a prediction against the thresholds returned with it.
///
/// A missing, null, zero, or NaN probability is "no result". Otherwise the
/// probability must be strictly greater than a cut point to reach its tier,
/// so a value equal to a threshold lands in the tier below.
pub fn classify_risk(response: &ScoringResponse) -> RiskAssessment {
    let thresholds = response.thresholds;

    debug!(
        medium = thresholds.medium,
        high = thresholds.high,
        very_high = thresholds.very_high,
        probability = ?response.probability,
        "classifying prediction"
    );

    if !thresholds.is_ascending() {
        warn!(
            medium = thresholds.medium,
            high = thresholds.high,
            very_high = thresholds.very_high,
            "risk thresholds are not ascending"
        );
    }

    let probability = match response.probability {
        Some(p) if p != 0.0 && !p.is_nan() => p,
        other => return RiskAssessment::new(RiskTier::NoResult, other),
    };

    let tier = if probability > thresholds.very_high {
        RiskTier::VeryHigh
    } else if probability > thresholds.high {
        RiskTier::High
    } else if probability > thresholds.medium {
        RiskTier::Medium
    } else {
        RiskTier::Low
    };

    RiskAssessment::new(tier, Some(probability))
}
