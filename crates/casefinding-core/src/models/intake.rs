use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::Answer;
use crate::error::CoreError;

/// Patient sex as the scoring model encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Sex::Male),
            "f" | "female" => Ok(Sex::Female),
            _ => Err(CoreError::InvalidSex(s.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The clinic intake answers consumed by the feature mapper.
///
/// Every field is optional and defaults to [`Answer::Empty`]; the wire names
/// match the prediction object the HTS screening form assembles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct IntakeRecord {
    #[serde(rename = "pAge")]
    pub age: Option<u32>,
    pub latest_marital_status: Answer,
    pub population_type: Answer,
    pub key_population_val: Answer,
    pub pri_population_val: Answer,
    pub test_history: Answer,
    pub hts_entry_point: Answer,
    pub hts_department: Answer,
    pub months_since_last_test_int: Answer,
    pub test_strategy: Answer,
    pub tb_screening_status: Answer,
    pub tb_fever: Answer,
    pub tb_night_sweats: Answer,
    pub tb_cough: Answer,
    pub active_sexually: Answer,
    pub new_partner: Answer,
    #[serde(rename = "partnerHIVStatus")]
    pub partner_hiv_status: Answer,
    pub number_of_partners_int: Answer,
    pub alcoholic_sex: Answer,
    pub money_sex: Answer,
    pub stranger_sex: Answer,
    pub positive_sex: Answer,
    pub patient_pregnant: Answer,
    pub patient_breast_feeding: Answer,
    pub discordant_couple: Answer,
    pub sexual_contact_checked: Answer,
    pub none_contact_checked: Answer,
}

impl IntakeRecord {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn answer(&self, field: IntakeField) -> &Answer {
        match field {
            IntakeField::LatestMaritalStatus => &self.latest_marital_status,
            IntakeField::PopulationType => &self.population_type,
            IntakeField::KeyPopulation => &self.key_population_val,
            IntakeField::PriorityPopulation => &self.pri_population_val,
            IntakeField::TestHistory => &self.test_history,
            IntakeField::HtsEntryPoint => &self.hts_entry_point,
            IntakeField::HtsDepartment => &self.hts_department,
            IntakeField::MonthsSinceLastTest => &self.months_since_last_test_int,
            IntakeField::TestStrategy => &self.test_strategy,
            IntakeField::TbScreeningStatus => &self.tb_screening_status,
            IntakeField::TbFever => &self.tb_fever,
            IntakeField::TbNightSweats => &self.tb_night_sweats,
            IntakeField::TbCough => &self.tb_cough,
            IntakeField::ActiveSexually => &self.active_sexually,
            IntakeField::NewPartner => &self.new_partner,
            IntakeField::PartnerHivStatus => &self.partner_hiv_status,
            IntakeField::NumberOfPartners => &self.number_of_partners_int,
            IntakeField::AlcoholicSex => &self.alcoholic_sex,
            IntakeField::MoneySex => &self.money_sex,
            IntakeField::StrangerSex => &self.stranger_sex,
            IntakeField::PositiveSex => &self.positive_sex,
            IntakeField::PatientPregnant => &self.patient_pregnant,
            IntakeField::PatientBreastFeeding => &self.patient_breast_feeding,
            IntakeField::DiscordantCouple => &self.discordant_couple,
            IntakeField::SexualContactChecked => &self.sexual_contact_checked,
            IntakeField::NoneContactChecked => &self.none_contact_checked,
        }
    }

    pub fn answer_mut(&mut self, field: IntakeField) -> &mut Answer {
        match field {
            IntakeField::LatestMaritalStatus => &mut self.latest_marital_status,
            IntakeField::PopulationType => &mut self.population_type,
            IntakeField::KeyPopulation => &mut self.key_population_val,
            IntakeField::PriorityPopulation => &mut self.pri_population_val,
            IntakeField::TestHistory => &mut self.test_history,
            IntakeField::HtsEntryPoint => &mut self.hts_entry_point,
            IntakeField::HtsDepartment => &mut self.hts_department,
            IntakeField::MonthsSinceLastTest => &mut self.months_since_last_test_int,
            IntakeField::TestStrategy => &mut self.test_strategy,
            IntakeField::TbScreeningStatus => &mut self.tb_screening_status,
            IntakeField::TbFever => &mut self.tb_fever,
            IntakeField::TbNightSweats => &mut self.tb_night_sweats,
            IntakeField::TbCough => &mut self.tb_cough,
            IntakeField::ActiveSexually => &mut self.active_sexually,
            IntakeField::NewPartner => &mut self.new_partner,
            IntakeField::PartnerHivStatus => &mut self.partner_hiv_status,
            IntakeField::NumberOfPartners => &mut self.number_of_partners_int,
            IntakeField::AlcoholicSex => &mut self.alcoholic_sex,
            IntakeField::MoneySex => &mut self.money_sex,
            IntakeField::StrangerSex => &mut self.stranger_sex,
            IntakeField::PositiveSex => &mut self.positive_sex,
            IntakeField::PatientPregnant => &mut self.patient_pregnant,
            IntakeField::PatientBreastFeeding => &mut self.patient_breast_feeding,
            IntakeField::DiscordantCouple => &mut self.discordant_couple,
            IntakeField::SexualContactChecked => &mut self.sexual_contact_checked,
            IntakeField::NoneContactChecked => &mut self.none_contact_checked,
        }
    }

    /// Builder-style setter, mostly for assembling records in code.
    pub fn with(mut self, field: IntakeField, answer: impl Into<Answer>) -> Self {
        *self.answer_mut(field) = answer.into();
        self
    }
}

/// The coded answer fields of an [`IntakeRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntakeField {
    LatestMaritalStatus,
    PopulationType,
    KeyPopulation,
    PriorityPopulation,
    TestHistory,
    HtsEntryPoint,
    HtsDepartment,
    MonthsSinceLastTest,
    TestStrategy,
    TbScreeningStatus,
    TbFever,
    TbNightSweats,
    TbCough,
    ActiveSexually,
    NewPartner,
    PartnerHivStatus,
    NumberOfPartners,
    AlcoholicSex,
    MoneySex,
    StrangerSex,
    PositiveSex,
    PatientPregnant,
    PatientBreastFeeding,
    DiscordantCouple,
    SexualContactChecked,
    NoneContactChecked,
}

impl IntakeField {
    pub const ALL: [IntakeField; 26] = [
        IntakeField::LatestMaritalStatus,
        IntakeField::PopulationType,
        IntakeField::KeyPopulation,
        IntakeField::PriorityPopulation,
        IntakeField::TestHistory,
        IntakeField::HtsEntryPoint,
        IntakeField::HtsDepartment,
        IntakeField::MonthsSinceLastTest,
        IntakeField::TestStrategy,
        IntakeField::TbScreeningStatus,
        IntakeField::TbFever,
        IntakeField::TbNightSweats,
        IntakeField::TbCough,
        IntakeField::ActiveSexually,
        IntakeField::NewPartner,
        IntakeField::PartnerHivStatus,
        IntakeField::NumberOfPartners,
        IntakeField::AlcoholicSex,
        IntakeField::MoneySex,
        IntakeField::StrangerSex,
        IntakeField::PositiveSex,
        IntakeField::PatientPregnant,
        IntakeField::PatientBreastFeeding,
        IntakeField::DiscordantCouple,
        IntakeField::SexualContactChecked,
        IntakeField::NoneContactChecked,
    ];

    /// The JSON key of this field in a serialized [`IntakeRecord`].
    pub fn key(&self) -> &'static str {
        match self {
            IntakeField::LatestMaritalStatus => "latestMaritalStatus",
            IntakeField::PopulationType => "populationType",
            IntakeField::KeyPopulation => "keyPopulationVal",
            IntakeField::PriorityPopulation => "priPopulationVal",
            IntakeField::TestHistory => "testHistory",
            IntakeField::HtsEntryPoint => "htsEntryPoint",
            IntakeField::HtsDepartment => "htsDepartment",
            IntakeField::MonthsSinceLastTest => "monthsSinceLastTestInt",
            IntakeField::TestStrategy => "testStrategy",
            IntakeField::TbScreeningStatus => "tbScreeningStatus",
            IntakeField::TbFever => "tbFever",
            IntakeField::TbNightSweats => "tbNightSweats",
            IntakeField::TbCough => "tbCough",
            IntakeField::ActiveSexually => "activeSexually",
            IntakeField::NewPartner => "newPartner",
            IntakeField::PartnerHivStatus => "partnerHIVStatus",
            IntakeField::NumberOfPartners => "numberOfPartnersInt",
            IntakeField::AlcoholicSex => "alcoholicSex",
            IntakeField::MoneySex => "moneySex",
            IntakeField::StrangerSex => "strangerSex",
            IntakeField::PositiveSex => "positiveSex",
            IntakeField::PatientPregnant => "patientPregnant",
            IntakeField::PatientBreastFeeding => "patientBreastFeeding",
            IntakeField::DiscordantCouple => "discordantCouple",
            IntakeField::SexualContactChecked => "sexualContactChecked",
            IntakeField::NoneContactChecked => "noneContactChecked",
        }
    }
}
