use casefinding_core::models::intake::IntakeField;

use super::{NO, YES};
use crate::category::{
    Category,
    Predicate::{Above, AnyOf, Checked, Equals, NotAbove},
    rule,
};

pub const SEXUALLY_ACTIVE: Category = Category {
    id: "sexually_active",
    field: IntakeField::ActiveSexually,
    rules: &[
        rule(AnyOf(&[YES]), "SexuallyActiveYES"),
        rule(AnyOf(&[NO]), "SexuallyActiveNO"),
    ],
    fallback: Some("SexuallyActiveNR"),
};

pub const NEW_PARTNER: Category = Category {
    id: "new_partner",
    field: IntakeField::NewPartner,
    rules: &[
        rule(AnyOf(&[YES]), "NewPartnerYES"),
        rule(AnyOf(&[NO]), "NewPartnerNO"),
    ],
    fallback: Some("NewPartnerNR"),
};

pub const PARTNER_HIV_STATUS: Category = Category {
    id: "partner_hiv_status",
    field: IntakeField::PartnerHivStatus,
    rules: &[
        rule(AnyOf(&[703]), "PartnerHIVStatusPOSITIVE"),
        rule(AnyOf(&[664]), "PartnerHIVStatusNEGATIVE"),
        rule(AnyOf(&[1067]), "PartnerHIVStatusUNKNOWN"),
    ],
    fallback: Some("PartnerHIVStatusNR"),
};

/// Fractional counts below 2 other than exactly 1 raise nothing.
pub const NUMBER_OF_PARTNERS: Category = Category {
    id: "number_of_partners",
    field: IntakeField::NumberOfPartners,
    rules: &[
        rule(NotAbove(0.0), "NumberOfPartnersNR"),
        rule(Above(1.0), "NumberOfPartnersMULTIPLE"),
        rule(Equals(1.0), "NumberOfPartnersSINGLE"),
    ],
    fallback: None,
};

pub const ALCOHOL_SEX: Category = Category {
    id: "alcohol_sex",
    field: IntakeField::AlcoholicSex,
    rules: &[
        rule(AnyOf(&[NO]), "AlcoholSexNEVER"),
        rule(AnyOf(&[1385]), "AlcoholSexSOMETIMES"),
        rule(AnyOf(&[165027]), "AlcoholSexALWAYS"),
    ],
    fallback: Some("AlcoholSexNR"),
};

pub const MONEY_SEX: Category = Category {
    id: "money_sex",
    field: IntakeField::MoneySex,
    rules: &[
        rule(AnyOf(&[YES]), "MoneySexYES"),
        rule(AnyOf(&[NO]), "MoneySexNO"),
    ],
    fallback: Some("MoneySexNR"),
};

/// Sex with a partner of unknown HIV status.
pub const UNKNOWN_STATUS_PARTNER: Category = Category {
    id: "unknown_status_partner",
    field: IntakeField::StrangerSex,
    rules: &[
        rule(AnyOf(&[YES]), "UnknownStatusPartnerYES"),
        rule(AnyOf(&[NO]), "UnknownStatusPartnerNO"),
    ],
    fallback: Some("UnknownStatusPartnerNR"),
};

/// Sex with a partner known to be HIV positive.
pub const KNOWN_STATUS_PARTNER: Category = Category {
    id: "known_status_partner",
    field: IntakeField::PositiveSex,
    rules: &[
        rule(AnyOf(&[YES]), "KnownStatusPartnerYES"),
        rule(AnyOf(&[NO]), "KnownStatusPartnerNO"),
    ],
    fallback: Some("KnownStatusPartnerNR"),
};

pub const COUPLE_DISCORDANT: Category = Category {
    id: "couple_discordant",
    field: IntakeField::DiscordantCouple,
    rules: &[
        rule(AnyOf(&[YES]), "CoupleDiscordantYES"),
        rule(AnyOf(&[NO]), "CoupleDiscordantNO"),
    ],
    fallback: Some("CoupleDiscordantNR"),
};

/// Relationship with the index contact: sexual.
pub const SEXUAL_CONTACT: Category = Category {
    id: "sexual_contact",
    field: IntakeField::SexualContactChecked,
    rules: &[rule(Checked, "SEXUALYES")],
    fallback: Some("SEXUALNO"),
};

/// Relationship with the index contact: none.
pub const NONE_CONTACT: Category = Category {
    id: "none_contact",
    field: IntakeField::NoneContactChecked,
    rules: &[rule(Checked, "NONEYES")],
    fallback: Some("NONENO"),
};
