use std::cell::RefCell;

use casefinding_core::models::intake::{IntakeField, IntakeRecord, Sex};
use casefinding_core::models::risk::RiskTier;
use casefinding_scoring::client::ScoringClient;
use casefinding_scoring::config::{Credentials, ScoringConfig};
use casefinding_scoring::error::ScoringError;
use casefinding_scoring::transport::Transport;
use serde_json::{Value, json};

const ENDPOINT: &str = "http://localhost:9677/openmrs/ws/rest/v1/keml/casefindingscore";

#[derive(Debug)]
struct Request {
    url: String,
    headers: Vec<(&'static str, String)>,
    body: Value,
}

/// Records every request and answers with a canned response.
struct FakeTransport {
    reply: Result<Value, u16>,
    requests: RefCell<Vec<Request>>,
}

impl FakeTransport {
    fn replying(reply: Value) -> Self {
        Self {
            reply: Ok(reply),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for &FakeTransport {
    fn post_json(
        &self,
        url: &str,
        headers: &[(&'static str, String)],
        body: &Value,
    ) -> Result<Value, ScoringError> {
        self.requests.borrow_mut().push(Request {
            url: url.to_string(),
            headers: headers.to_vec(),
            body: body.clone(),
        });
        self.reply.clone().map_err(ScoringError::Status)
    }
}

fn scored(probability: f64) -> Value {
    json!({
        "result": {
            "predictions": { "probability(Positive)": probability },
            "thresholds": { "Medium": 0.2, "High": 0.5, "Very_High": 0.8 }
        }
    })
}

fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request
        .headers
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v.as_str())
}

#[test]
fn sends_fixed_headers_with_injected_credentials() {
    let transport = FakeTransport::replying(scored(0.3));
    let config = ScoringConfig::new(ENDPOINT).with_credentials(Credentials::basic("admin", "Admin123"));
    let client = ScoringClient::with_transport(config, &transport).unwrap();

    client.fetch_prediction_score(&json!({ "Age": 30 })).unwrap();

    let requests = transport.requests.borrow();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.url, ENDPOINT);
    assert_eq!(header(request, "Content-Type"), Some("application/json"));
    assert_eq!(header(request, "Accept"), Some("application/json"));
    assert_eq!(header(request, "Access-Control-Allow-Origin"), Some("*"));
    assert_eq!(header(request, "Authorization"), Some("Basic YWRtaW46QWRtaW4xMjM="));
}

#[test]
fn no_credentials_means_no_authorization_header() {
    let transport = FakeTransport::replying(scored(0.3));
    let mut config = ScoringConfig::new(ENDPOINT);
    config.allow_origin = None;
    let client = ScoringClient::with_transport(config, &transport).unwrap();

    let headers = client.headers();
    assert!(headers.iter().all(|(name, _)| *name != "Authorization"));
    assert!(headers.iter().all(|(name, _)| *name != "Access-Control-Allow-Origin"));
}

#[test]
fn predict_posts_the_feature_vector_and_classifies() {
    let transport = FakeTransport::replying(scored(0.85));
    let client = ScoringClient::with_transport(ScoringConfig::new(ENDPOINT), &transport).unwrap();

    let intake = IntakeRecord {
        age: Some(29),
        ..IntakeRecord::default()
    }
    .with(IntakeField::ActiveSexually, 1065);

    let assessment = client.predict(&intake, Sex::Male).unwrap();
    assert_eq!(assessment.tier, RiskTier::VeryHigh);

    let requests = transport.requests.borrow();
    let body = requests[0].body.as_object().unwrap();
    assert_eq!(body["Age"], 29);
    assert_eq!(body["GenderMALE"], 1);
    assert_eq!(body["SexuallyActiveYES"], 1);
    assert_eq!(body["SexuallyActiveNR"], 0);
}

#[test]
fn callers_can_extend_the_payload() {
    let transport = FakeTransport::replying(scored(0.1));
    let client = ScoringClient::with_transport(ScoringConfig::new(ENDPOINT), &transport).unwrap();

    let features = casefinding_features::mapper::map_to_features(&IntakeRecord::default(), Sex::Female);
    let mut payload = features.to_payload();
    payload.insert("facilityCode".to_string(), json!("13939"));

    client.fetch_prediction_score(&Value::Object(payload)).unwrap();

    let requests = transport.requests.borrow();
    assert_eq!(requests[0].body["facilityCode"], "13939");
    assert_eq!(requests[0].body["GenderFEMALE"], 1);
}

#[test]
fn http_errors_surface_as_status() {
    let transport = FakeTransport::failing(503);
    let client = ScoringClient::with_transport(ScoringConfig::new(ENDPOINT), &transport).unwrap();

    let err = client.predict(&IntakeRecord::default(), Sex::Female).unwrap_err();
    assert!(matches!(err, ScoringError::Status(503)));
}

#[test]
fn malformed_replies_are_errors_not_tiers() {
    let transport = FakeTransport::replying(json!({ "status": "ok" }));
    let client = ScoringClient::with_transport(ScoringConfig::new(ENDPOINT), &transport).unwrap();

    let err = client.predict(&IntakeRecord::default(), Sex::Female).unwrap_err();
    assert!(matches!(err, ScoringError::MalformedResponse(_)));
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let transport = FakeTransport::replying(scored(0.3));
    assert!(matches!(
        ScoringClient::with_transport(ScoringConfig::new(""), &transport),
        Err(ScoringError::Config(_))
    ));
    assert!(matches!(
        ScoringClient::with_transport(ScoringConfig::new("localhost:9677"), &transport),
        Err(ScoringError::Config(_))
    ));
}
