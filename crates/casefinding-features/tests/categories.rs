use casefinding_core::models::answer::Answer;
use casefinding_core::models::features::FeatureVectorBuilder;
use casefinding_features::category::Predicate;
use casefinding_features::error::FeatureError;
use casefinding_features::{check_vector, get_category, require_category, validate_vector};

#[test]
fn lookup_by_id() {
    assert!(get_category("key_population").is_some());
    assert!(get_category("nope").is_none());
    assert!(matches!(
        require_category("nope"),
        Err(FeatureError::UnknownCategory(id)) if id == "nope"
    ));
}

#[test]
fn fallback_applies_only_when_no_rule_matches() {
    let category = require_category("partner_hiv_status").unwrap();
    assert_eq!(category.resolve(&Answer::from(664)), Some("PartnerHIVStatusNEGATIVE"));
    assert_eq!(category.resolve(&Answer::from(999)), Some("PartnerHIVStatusNR"));
    assert!(category.is_exhaustive());

    let department = require_category("department").unwrap();
    assert_eq!(department.resolve(&Answer::from(999)), None);
    assert!(!department.is_exhaustive());
}

#[test]
fn not_above_matches_non_numeric_answers() {
    let predicate = Predicate::NotAbove(0.0);
    assert!(predicate.matches(&Answer::Empty));
    assert!(predicate.matches(&Answer::from("n/a")));
    assert!(predicate.matches(&Answer::from(0.0)));
    assert!(!predicate.matches(&Answer::from(0.1)));
}

#[test]
fn within_is_inclusive() {
    let predicate = Predicate::Within(7.0, 12.0);
    assert!(predicate.matches(&Answer::from(7.0)));
    assert!(predicate.matches(&Answer::from(12.0)));
    assert!(!predicate.matches(&Answer::from(12.5)));
}

#[test]
fn validation_reports_missing_and_duplicate_indicators() {
    let mut builder = FeatureVectorBuilder::new(None);
    builder.raise("MoneySexYES");
    builder.raise("MoneySexNO");
    let vector = builder.build();

    let violations = validate_vector(&vector);
    let money = violations
        .iter()
        .find(|v| v.category_id == "money_sex")
        .unwrap();
    assert_eq!(money.raised, vec!["MoneySexYES", "MoneySexNO"]);
    // Nothing else was raised, so every other exhaustive category is empty.
    assert!(violations.iter().any(|v| v.category_id == "new_partner" && v.raised.is_empty()));

    assert!(matches!(check_vector(&vector), Err(FeatureError::Violation(_))));
}
