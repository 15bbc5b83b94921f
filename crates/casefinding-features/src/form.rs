//! Extraction of an [`IntakeRecord`] from raw HTS screening form answers.
//!
//! The form keys its questions by the question ids the form schema assigns
//! (`preGnant`, `cricAdulT`, ...). This module is the only place that knows
//! those ids; everything downstream works on [`IntakeRecord`].

use casefinding_core::models::answer::Answer;
use casefinding_core::models::intake::{IntakeField, IntakeRecord};
use jiff::Unit;
use jiff::civil::Date;
use serde_json::{Map, Value};
use tracing::debug;

/// Concept for "sexual contact" in the relationship-with-contact question.
pub const SEXUAL_CONTACT_CONCEPT: &str = "163565AAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
/// Concept for "none" in the relationship-with-contact question.
pub const NONE_CONTACT_CONCEPT: &str = "1107AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

const CONTACT_RELATIONSHIP_KEY: &str = "cricAdulT";

/// Last-test dates, most trusted first.
const LAST_TEST_DATE_KEYS: [&str; 2] = ["dateProvider", "dateSelf"];

/// Key population is asked separately for male and female clients.
const KEY_POPULATION_KEYS: [&str; 2] = ["kpTypeMale", "kpTypeFemale"];

/// Form question id → intake field, for answers copied through unchanged.
///
/// The facility strategy question feeds both the entry point and the
/// strategy fields; the form has no separate entry-point question.
const DIRECT_FIELDS: &[(&str, IntakeField)] = &[
    ("populationType", IntakeField::PopulationType),
    ("ppType", IntakeField::PriorityPopulation),
    ("testHistory", IntakeField::TestHistory),
    ("facilityHTStrategy", IntakeField::HtsEntryPoint),
    ("facilityHTStrategy", IntakeField::TestStrategy),
    ("patDepart", IntakeField::HtsDepartment),
    ("tbResultstaTuS", IntakeField::TbScreeningStatus),
    ("fever", IntakeField::TbFever),
    ("experiencingSweats", IntakeField::TbNightSweats),
    ("coughDuration", IntakeField::TbCough),
    ("activeSexually", IntakeField::ActiveSexually),
    ("newPartner", IntakeField::NewPartner),
    ("partnerHivStatus", IntakeField::PartnerHivStatus),
    ("noSexPartners", IntakeField::NumberOfPartners),
    ("alcoholicSex", IntakeField::AlcoholicSex),
    ("moneySex", IntakeField::MoneySex),
    ("strangerSex", IntakeField::StrangerSex),
    ("knownPositive", IntakeField::PositiveSex),
    ("preGnant", IntakeField::PatientPregnant),
    ("breastfeeding", IntakeField::PatientBreastFeeding),
    ("coupleDiscordant", IntakeField::DiscordantCouple),
];

/// Build an intake record from the raw form answers.
///
/// `age` comes from the patient context rather than the form. `today`
/// anchors the months-since-last-test calculation.
pub fn intake_from_form(answers: &Map<String, Value>, age: Option<u32>, today: Date) -> IntakeRecord {
    let mut intake = IntakeRecord {
        age,
        ..IntakeRecord::default()
    };

    for (key, field) in DIRECT_FIELDS {
        if let Some(value) = present(answers, key) {
            *intake.answer_mut(*field) = Answer::from(value.clone());
        }
    }

    if let Some(value) = KEY_POPULATION_KEYS.iter().find_map(|key| present(answers, key)) {
        intake.key_population_val = Answer::from(value.clone());
    }

    let contact = answers.get(CONTACT_RELATIONSHIP_KEY).and_then(Value::as_str);
    intake.sexual_contact_checked = Answer::Flag(contact == Some(SEXUAL_CONTACT_CONCEPT));
    intake.none_contact_checked = Answer::Flag(contact == Some(NONE_CONTACT_CONCEPT));

    if let Some(months) = months_since_last_test(answers, today) {
        intake.months_since_last_test_int = Answer::Number(months as f64);
    }

    debug!(
        answered = answers.len(),
        age = ?age,
        "extracted intake record from form answers"
    );
    intake
}

/// Whole months from the most trusted last-test date to `today`.
///
/// A partly elapsed month counts as a full one, so a test three weeks ago is
/// one month ago. Dates in the future give zero or a negative count.
pub fn months_since_last_test(answers: &Map<String, Value>, today: Date) -> Option<i64> {
    let last_test = LAST_TEST_DATE_KEYS
        .iter()
        .filter_map(|key| answers.get(*key).and_then(Value::as_str))
        .find_map(parse_form_date)?;

    months_between(last_test, today)
}

pub fn months_between(earlier: Date, later: Date) -> Option<i64> {
    let span = earlier.until((Unit::Month, later)).ok()?;
    let months = i64::from(span.get_months());
    if span.get_days() > 0 {
        Some(months + 1)
    } else {
        Some(months)
    }
}

/// Accepts a plain date or a date-time; only the calendar date is used.
fn parse_form_date(raw: &str) -> Option<Date> {
    raw.trim().get(..10)?.parse().ok()
}

/// The answer for `key`, treating JSON null like a missing key.
fn present<'a>(answers: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    answers.get(key).filter(|v| !v.is_null())
}
