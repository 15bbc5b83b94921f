use std::time::Duration;

use casefinding_core::models::features::FeatureVector;
use casefinding_core::models::intake::{IntakeRecord, Sex};
use casefinding_core::models::risk::RiskAssessment;
use casefinding_features::mapper::map_to_features;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::response::ScoringResponse;
use crate::risk::classify_risk;
use crate::transport::{HttpTransport, Transport};

const JSON: &str = "application/json";

pub struct ScoringClient<T = HttpTransport> {
    config: ScoringConfig,
    transport: T,
}

impl ScoringClient<HttpTransport> {
    /// Build a client that talks to the configured endpoint over HTTP.
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringError> {
        config.validate()?;
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs));
        Ok(Self { config, transport })
    }
}

impl<T: Transport> ScoringClient<T> {
    pub fn with_transport(config: ScoringConfig, transport: T) -> Result<Self, ScoringError> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// The fixed header set sent with every scoring request.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("Content-Type", JSON.to_string()),
            ("Accept", JSON.to_string()),
        ];
        if let Some(origin) = &self.config.allow_origin {
            headers.push(("Access-Control-Allow-Origin", origin.clone()));
        }
        if let Some(authorization) = self.config.credentials.authorization() {
            headers.push(("Authorization", authorization));
        }
        headers
    }

    /// POST a prediction payload and parse the response.
    ///
    /// The payload is usually a feature vector, optionally extended by the
    /// caller with extra fields.
    pub fn fetch_prediction_score(&self, payload: &Value) -> Result<ScoringResponse, ScoringError> {
        let request_id = Uuid::new_v4();
        info!(
            request_id = %request_id,
            endpoint = %self.config.endpoint,
            credentials = self.config.credentials.kind(),
            "requesting prediction score"
        );

        let body = self
            .transport
            .post_json(&self.config.endpoint, &self.headers(), payload)?;
        let response = ScoringResponse::from_value(body)?;

        info!(
            request_id = %request_id,
            probability = ?response.probability,
            "prediction score received"
        );
        Ok(response)
    }

    pub fn score_features(&self, features: &FeatureVector) -> Result<ScoringResponse, ScoringError> {
        self.fetch_prediction_score(&Value::Object(features.to_payload()))
    }

    /// Map an intake record, score it, and classify the result.
    pub fn predict(&self, intake: &IntakeRecord, sex: Sex) -> Result<RiskAssessment, ScoringError> {
        let features = map_to_features(intake, sex);
        let response = self.score_features(&features)?;
        Ok(classify_risk(&response))
    }
}
