use casefinding_core::models::intake::IntakeField;

use crate::category::{
    Category,
    Predicate::{AnyOf, AtLeast, AtMost, NotAbove, Within},
    rule,
};

pub const HTS_ENTRY_POINT: Category = Category {
    id: "hts_entry_point",
    field: IntakeField::HtsEntryPoint,
    rules: &[
        rule(AnyOf(&[159940]), "HTSEntryPointVCT"),
        rule(AnyOf(&[160542]), "HTSEntryPointOPD"),
        rule(AnyOf(&[160456, 1623]), "HTSEntryPointPMTCT_MAT_PNC"),
        rule(AnyOf(&[5485]), "HTSEntryPointIPD"),
        rule(AnyOf(&[162181]), "HTSEntryPointPEDIATRIC"),
        rule(
            AnyOf(&[
                5622, 160552, 162050, 159938, 159939, 160546, 160522, 163096,
            ]),
            "HTSEntryPointOTHER",
        ),
        rule(AnyOf(&[162223]), "HTSEntryPointVMMC"),
        rule(AnyOf(&[160541]), "HTSEntryPointTB"),
        rule(AnyOf(&[160538]), "HTSEntryPointPMTCT_ANC"),
    ],
    fallback: None,
};

pub const DEPARTMENT: Category = Category {
    id: "department",
    field: IntakeField::HtsDepartment,
    rules: &[
        rule(AnyOf(&[159940]), "DepartmentVCT"),
        rule(AnyOf(&[160542]), "DepartmentOPD"),
        rule(AnyOf(&[160456, 1623]), "DepartmentPMTCT"),
        rule(AnyOf(&[5485]), "DepartmentIPD"),
        rule(AnyOf(&[160473]), "DepartmentEMERGENCY"),
    ],
    fallback: None,
};

/// Months since the last HIV test.
///
/// The 7–12 and 12–24 buckets both include 12; first match wins, so 12 is
/// "seven to twelve". Fractional values between 6 and 7 raise nothing.
pub const MONTHS_SINCE_LAST_TEST: Category = Category {
    id: "months_since_last_test",
    field: IntakeField::MonthsSinceLastTest,
    rules: &[
        rule(NotAbove(0.0), "MonthsSinceLastTestNR"),
        rule(AtMost(6.0), "MonthsSinceLastTestLASTSIXMONTHS"),
        rule(AtLeast(24.0), "MonthsSinceLastTestMORETHANTWOYEARS"),
        rule(Within(7.0, 12.0), "MonthsSinceLastTestSEVENTOTWELVE"),
        rule(Within(12.0, 24.0), "MonthsSinceLastTestONETOTWOYEARS"),
    ],
    fallback: None,
};

pub const HTS_STRATEGY: Category = Category {
    id: "hts_strategy",
    field: IntakeField::TestStrategy,
    rules: &[
        // home based
        rule(AnyOf(&[159938]), "HTSStrategyHB"),
        // mobile outreach
        rule(AnyOf(&[159939]), "HTSStrategyMO"),
        rule(AnyOf(&[164163]), "HTSStrategyHP"),
        rule(AnyOf(&[164953]), "HTSStrategyNP"),
        // integrated VCT site
        rule(AnyOf(&[164954]), "HTSStrategyVI"),
        // stand-alone VCT centre
        rule(AnyOf(&[164955]), "HTSStrategyVS"),
        rule(AnyOf(&[161557]), "HTSStrategyINDEX"),
        rule(AnyOf(&[5622]), "HTSStrategyOTHER"),
        rule(AnyOf(&[166606]), "HTSStrategySNS"),
    ],
    fallback: None,
};
