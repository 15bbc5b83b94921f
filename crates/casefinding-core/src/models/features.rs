use serde::ser::{Serialize, SerializeMap, Serializer};

/// Name of the numeric age feature. Emitted first, and only when known.
pub const AGE_FEATURE: &str = "Age";

/// Every indicator the scoring model expects, in the model's column order.
pub const FEATURE_NAMES: &[&str] = &[
    "TbScreeningNo_Signs",
    "TbScreeningNot_Done",
    "TbScreeningOn_TB_Treatment",
    "TbScreeningPresumed_TB",
    "HTSStrategyHB",
    "HTSStrategyHP",
    "HTSStrategyINDEX",
    "HTSStrategyMO",
    "HTSStrategyNP",
    "HTSStrategyOTHER",
    "HTSStrategySNS",
    "HTSStrategyVI",
    "HTSStrategyVS",
    "GenderFEMALE",
    "GenderMALE",
    "MaritalStatusDIVORCED",
    "MaritalStatusMARRIED",
    "MaritalStatusMINOR",
    "MaritalStatusOTHER",
    "MaritalStatusPOLYGAMOUS",
    "MaritalStatusSINGLE",
    "HTSEntryPointHOMEBASED",
    "HTSEntryPointIPD",
    "HTSEntryPointOPD",
    "HTSEntryPointOTHER",
    "HTSEntryPointPEDIATRIC",
    "HTSEntryPointPMTCT_ANC",
    "HTSEntryPointPMTCT_MAT_PNC",
    "HTSEntryPointTB",
    "HTSEntryPointVCT",
    "HTSEntryPointVMMC",
    "CoupleDiscordantNO",
    "CoupleDiscordantNR",
    "CoupleDiscordantYES",
    "KnownStatusPartnerDECLINE",
    "KnownStatusPartnerNO",
    "KnownStatusPartnerNR",
    "KnownStatusPartnerYES",
    "PregnantDECLINE",
    "PregnantNO",
    "PregnantNR",
    "PregnantYES",
    "MultiplePartnersNO",
    "MultiplePartnersNR",
    "MultiplePartnersYES",
    "TBStatusNO_TBSIGNS",
    "TBStatusNR",
    "TBStatusTBCONFIRMED",
    "TBStatusTBPRESUMED",
    "SEXUALNO",
    "SEXUALNR",
    "SEXUALYES",
    "NONENO",
    "NONEYES",
    "DepartmentEMERGENCY",
    "DepartmentIPD",
    "DepartmentOPD",
    "DepartmentPMTCT",
    "DepartmentVCT",
    "PatientTypeHP",
    "PatientTypeNon_HP",
    "PopulationTypeGP",
    "PopulationTypeKP",
    "PopulationTypePRIORITY",
    "FeverNO",
    "FeverNR",
    "FeverYES",
    "MonthsSinceLastTestLASTSIXMONTHS",
    "MonthsSinceLastTestMORETHANTWOYEARS",
    "MonthsSinceLastTestNR",
    "MonthsSinceLastTestONETOTWOYEARS",
    "MonthsSinceLastTestSEVENTOTWELVE",
    "NightSweatsNO",
    "NightSweatsNR",
    "NightSweatsYES",
    "CoughNO",
    "CoughNR",
    "CoughYES",
    "PartnerHIVStatusDECLINE",
    "PartnerHIVStatusNEGATIVE",
    "PartnerHIVStatusNR",
    "PartnerHIVStatusPOSITIVE",
    "PartnerHIVStatusUNKNOWN",
    "BreastfeedingMotherDECLINE",
    "BreastfeedingMotherNO",
    "BreastfeedingMotherNR",
    "BreastfeedingMotherYES",
    "UnknownStatusPartnerDECLINE",
    "UnknownStatusPartnerNO",
    "UnknownStatusPartnerNR",
    "UnknownStatusPartnerYES",
    "PriorityPopulationAGYW",
    "PriorityPopulationFISHERMEN",
    "PriorityPopulationNR",
    "PriorityPopulationOTHER",
    "MoneySexDECLINE",
    "MoneySexNO",
    "MoneySexNR",
    "MoneySexYES",
    "AlcoholSexALWAYS",
    "AlcoholSexNEVER",
    "AlcoholSexNR",
    "AlcoholSexSOMETIMES",
    "NewPartnerDECLINE",
    "NewPartnerNO",
    "NewPartnerNR",
    "NewPartnerYES",
    "TestedHIVBeforeNo",
    "TestedHIVBeforeYes",
    "NumberOfPartnersMULTIPLE",
    "NumberOfPartnersNR",
    "NumberOfPartnersSINGLE",
    "SexuallyActiveDECLINE",
    "SexuallyActiveNO",
    "SexuallyActiveNR",
    "SexuallyActiveYES",
    "KeyPopulationFSW",
    "KeyPopulationMSM",
    "KeyPopulationNR",
    "KeyPopulationOther",
    "KeyPopulationPWID",
];

/// The flat feature vector posted to the scoring service.
///
/// Entries keep schema order so the serialized payload is stable. There are
/// no mutators; build one with [`FeatureVectorBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    entries: Vec<(&'static str, i64)>,
}

impl FeatureVector {
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    /// Whether the named indicator is set. Unknown names are never set.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name) == Some(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The vector as a JSON object, ready for callers to add extra fields
    /// before posting.
    pub fn to_payload(&self) -> serde_json::Map<String, serde_json::Value> {
        self.entries
            .iter()
            .map(|(name, value)| (name.to_string(), serde_json::Value::from(*value)))
            .collect()
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Starts from an all-zero vector and raises individual indicators.
#[derive(Debug, Clone)]
pub struct FeatureVectorBuilder {
    entries: Vec<(&'static str, i64)>,
}

impl FeatureVectorBuilder {
    pub fn new(age: Option<u32>) -> Self {
        let mut entries = Vec::with_capacity(FEATURE_NAMES.len() + 1);
        if let Some(age) = age {
            entries.push((AGE_FEATURE, i64::from(age)));
        }
        entries.extend(FEATURE_NAMES.iter().map(|name| (*name, 0)));
        Self { entries }
    }

    /// Set an indicator to 1. Returns `false` if the name is not in the schema.
    pub fn raise(&mut self, name: &str) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|(n, _)| *n != AGE_FEATURE && *n == name)
        {
            Some(entry) => {
                entry.1 = 1;
                true
            }
            None => false,
        }
    }

    pub fn build(self) -> FeatureVector {
        FeatureVector {
            entries: self.entries,
        }
    }
}
