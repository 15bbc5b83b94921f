//! Coded-answer tables, one file per area of the HTS screening form.

pub mod maternal;
pub mod population;
pub mod sexual;
pub mod testing;

use crate::category::Category;

/// Concept code for "Yes".
pub(crate) const YES: u32 = 1065;
/// Concept code for "No".
pub(crate) const NO: u32 = 1066;

pub(crate) static CATEGORIES: &[Category] = &[
    population::MARITAL_STATUS,
    population::POPULATION_TYPE,
    population::KEY_POPULATION,
    population::PRIORITY_POPULATION,
    testing::HTS_ENTRY_POINT,
    testing::DEPARTMENT,
    testing::MONTHS_SINCE_LAST_TEST,
    testing::HTS_STRATEGY,
    sexual::SEXUALLY_ACTIVE,
    sexual::NEW_PARTNER,
    sexual::PARTNER_HIV_STATUS,
    sexual::NUMBER_OF_PARTNERS,
    sexual::ALCOHOL_SEX,
    sexual::MONEY_SEX,
    sexual::UNKNOWN_STATUS_PARTNER,
    sexual::KNOWN_STATUS_PARTNER,
    maternal::PREGNANT,
    maternal::BREASTFEEDING_MOTHER,
    sexual::COUPLE_DISCORDANT,
    sexual::SEXUAL_CONTACT,
    sexual::NONE_CONTACT,
];
