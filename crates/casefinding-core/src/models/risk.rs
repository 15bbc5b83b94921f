use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Discrete HIV-test risk category, 0 (no result) through 4 (very high).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    NoResult,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskTier {
    pub fn as_u8(&self) -> u8 {
        match self {
            RiskTier::NoResult => 0,
            RiskTier::Low => 1,
            RiskTier::Medium => 2,
            RiskTier::High => 3,
            RiskTier::VeryHigh => 4,
        }
    }

    /// The message shown to the clinician for this tier.
    pub fn message(&self) -> &'static str {
        match self {
            RiskTier::VeryHigh => {
                "Client has a very high probability of a HIV positive test result. Testing is strongly recommended"
            }
            RiskTier::High => {
                "Client has a high probability of a HIV positive test result. Testing is strongly recommended"
            }
            RiskTier::Medium => {
                "Client has a medium probability of a HIV positive test result. Testing is recommended"
            }
            RiskTier::Low => {
                "Client has a low probability of a HIV positive test result. Testing may not be recommended"
            }
            RiskTier::NoResult => "No results found",
        }
    }
}

/// Cut points returned by the scoring service alongside each prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskThresholds {
    pub medium: f64,
    pub high: f64,
    pub very_high: f64,
}

impl RiskThresholds {
    pub fn is_ascending(&self) -> bool {
        self.medium <= self.high && self.high <= self.very_high
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    pub message: String,
    pub probability: Option<f64>,
}

impl RiskAssessment {
    pub fn new(tier: RiskTier, probability: Option<f64>) -> Self {
        Self {
            tier,
            message: tier.message().to_string(),
            probability,
        }
    }
}
