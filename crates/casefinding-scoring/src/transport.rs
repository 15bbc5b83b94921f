use std::time::Duration;

use serde_json::Value;

use crate::error::ScoringError;

/// Sends one JSON POST and returns the decoded JSON body.
///
/// Retries, proxies, and connection pooling belong to the implementation;
/// the client only ever makes a single call per prediction.
pub trait Transport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&'static str, String)],
        body: &Value,
    ) -> Result<Value, ScoringError>;
}

/// Blocking HTTP transport backed by `ureq`.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
        }
    }
}

impl Transport for HttpTransport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&'static str, String)],
        body: &Value,
    ) -> Result<Value, ScoringError> {
        let mut request = self.agent.post(url);
        for (name, value) in headers {
            request = request.header(*name, value.as_str());
        }

        let mut response = request.send_json(body)?;
        response
            .body_mut()
            .read_json::<Value>()
            .map_err(|e| ScoringError::MalformedResponse(e.to_string()))
    }
}
