use casefinding_scoring::error::ScoringError;
use casefinding_scoring::response::{PROBABILITY_KEY, ScoringResponse};
use serde_json::json;

#[test]
fn parses_probability_and_thresholds() {
    let response = ScoringResponse::from_value(json!({
        "result": {
            "predictions": { PROBABILITY_KEY: 0.42, "probability(Negative)": 0.58 },
            "thresholds": { "Medium": 0.1, "High": 0.3, "Very_High": 0.6 }
        }
    }))
    .unwrap();

    assert_eq!(response.probability, Some(0.42));
    assert_eq!(response.thresholds.medium, 0.1);
    assert_eq!(response.thresholds.high, 0.3);
    assert_eq!(response.thresholds.very_high, 0.6);
}

#[test]
fn null_or_missing_probability_is_not_malformed() {
    let missing = ScoringResponse::from_json(
        r#"{"result":{"predictions":{},"thresholds":{"Medium":0.1,"High":0.3,"Very_High":0.6}}}"#,
    )
    .unwrap();
    assert_eq!(missing.probability, None);

    let null = ScoringResponse::from_json(
        r#"{"result":{"predictions":{"probability(Positive)":null},"thresholds":{"Medium":0.1,"High":0.3,"Very_High":0.6}}}"#,
    )
    .unwrap();
    assert_eq!(null.probability, None);
}

#[test]
fn missing_sections_are_malformed() {
    let cases = [
        json!({}),
        json!({ "result": null }),
        json!({ "result": { "thresholds": { "Medium": 0.1, "High": 0.3, "Very_High": 0.6 } } }),
        json!({ "result": { "predictions": { PROBABILITY_KEY: 0.4 } } }),
        json!({ "result": { "predictions": {}, "thresholds": { "Medium": 0.1, "High": 0.3 } } }),
        json!({ "result": { "predictions": { PROBABILITY_KEY: "high" },
                            "thresholds": { "Medium": 0.1, "High": 0.3, "Very_High": 0.6 } } }),
    ];

    for case in cases {
        let err = ScoringResponse::from_value(case.clone()).unwrap_err();
        assert!(
            matches!(err, ScoringError::MalformedResponse(_)),
            "{case}: {err}"
        );
    }
}

#[test]
fn invalid_json_is_malformed() {
    assert!(matches!(
        ScoringResponse::from_json("<html>"),
        Err(ScoringError::MalformedResponse(_))
    ));
}
