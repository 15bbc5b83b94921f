use casefinding_core::models::intake::IntakeField;

use super::{NO, YES};
use crate::category::{Category, Predicate::AnyOf, rule};

pub const PREGNANT: Category = Category {
    id: "pregnant",
    field: IntakeField::PatientPregnant,
    rules: &[
        rule(AnyOf(&[YES]), "PregnantYES"),
        rule(AnyOf(&[NO]), "PregnantNO"),
    ],
    fallback: Some("PregnantNR"),
};

pub const BREASTFEEDING_MOTHER: Category = Category {
    id: "breastfeeding_mother",
    field: IntakeField::PatientBreastFeeding,
    rules: &[
        rule(AnyOf(&[YES]), "BreastfeedingMotherYES"),
        rule(AnyOf(&[NO]), "BreastfeedingMotherNO"),
    ],
    fallback: Some("BreastfeedingMotherNR"),
};
