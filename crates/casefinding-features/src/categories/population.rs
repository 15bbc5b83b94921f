use casefinding_core::models::intake::IntakeField;

use crate::category::{Category, Predicate::AnyOf, rule};

/// Marital status. Widowed counts as single. Minors are flagged separately
/// from age, so this group can carry two indicators for a married minor.
pub const MARITAL_STATUS: Category = Category {
    id: "marital_status",
    field: IntakeField::LatestMaritalStatus,
    rules: &[
        rule(AnyOf(&[5555]), "MaritalStatusMARRIED"),
        rule(AnyOf(&[159715]), "MaritalStatusPOLYGAMOUS"),
        rule(AnyOf(&[1058]), "MaritalStatusDIVORCED"),
        rule(AnyOf(&[1059, 1057]), "MaritalStatusSINGLE"),
    ],
    fallback: None,
};

pub const POPULATION_TYPE: Category = Category {
    id: "population_type",
    field: IntakeField::PopulationType,
    rules: &[
        rule(AnyOf(&[164928]), "PopulationTypeGP"),
        rule(AnyOf(&[164929]), "PopulationTypeKP"),
        rule(AnyOf(&[138643]), "PopulationTypePRIORITY"),
    ],
    fallback: None,
};

pub const KEY_POPULATION: Category = Category {
    id: "key_population",
    field: IntakeField::KeyPopulation,
    rules: &[
        // People who inject drugs
        rule(AnyOf(&[105]), "KeyPopulationPWID"),
        rule(AnyOf(&[160578]), "KeyPopulationMSM"),
        rule(AnyOf(&[160579]), "KeyPopulationFSW"),
        // other, prisoner, transgender
        rule(AnyOf(&[5622, 162277, 165100]), "KeyPopulationOther"),
    ],
    fallback: Some("KeyPopulationNR"),
};

pub const PRIORITY_POPULATION: Category = Category {
    id: "priority_population",
    field: IntakeField::PriorityPopulation,
    rules: &[
        rule(AnyOf(&[159674]), "PriorityPopulationFISHERMEN"),
        rule(AnyOf(&[160549]), "PriorityPopulationAGYW"),
        // military, prisoner, truck driver
        rule(AnyOf(&[165192, 162277, 162198]), "PriorityPopulationOTHER"),
    ],
    fallback: Some("PriorityPopulationNR"),
};
