use casefinding_core::models::features::{AGE_FEATURE, FEATURE_NAMES, FeatureVectorBuilder};
use casefinding_core::models::risk::RiskTier;

#[test]
fn builder_starts_all_zero() {
    let vector = FeatureVectorBuilder::new(None).build();
    assert_eq!(vector.len(), FEATURE_NAMES.len());
    assert!(vector.iter().all(|(_, v)| v == 0));
    assert_eq!(vector.get(AGE_FEATURE), None);
}

#[test]
fn age_is_emitted_first() {
    let vector = FeatureVectorBuilder::new(Some(31)).build();
    assert_eq!(vector.iter().next(), Some((AGE_FEATURE, 31)));
}

#[test]
fn raise_rejects_unknown_names() {
    let mut builder = FeatureVectorBuilder::new(Some(40));
    assert!(builder.raise("CoughYES"));
    assert!(!builder.raise("CoughMAYBE"));
    assert!(!builder.raise(AGE_FEATURE));

    let vector = builder.build();
    assert!(vector.is_set("CoughYES"));
    assert_eq!(vector.get(AGE_FEATURE), Some(40));
}

#[test]
fn payload_serializes_in_schema_order() {
    let mut builder = FeatureVectorBuilder::new(Some(19));
    builder.raise("GenderFEMALE");
    let vector = builder.build();

    let json = serde_json::to_string(&vector).unwrap();
    assert!(json.starts_with(r#"{"Age":19,"TbScreeningNo_Signs":0"#));
    assert!(json.contains(r#""GenderFEMALE":1"#));

    let payload = vector.to_payload();
    assert_eq!(payload.len(), FEATURE_NAMES.len() + 1);
    assert_eq!(payload["GenderFEMALE"], 1);
}

#[test]
fn schema_names_are_unique() {
    let mut names = FEATURE_NAMES.to_vec();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), FEATURE_NAMES.len());
}

#[test]
fn tiers_are_numbered_zero_to_four() {
    let tiers = [
        RiskTier::NoResult,
        RiskTier::Low,
        RiskTier::Medium,
        RiskTier::High,
        RiskTier::VeryHigh,
    ];
    for (i, tier) in tiers.iter().enumerate() {
        assert_eq!(usize::from(tier.as_u8()), i);
    }
    assert_eq!(RiskTier::NoResult.message(), "No results found");
}
