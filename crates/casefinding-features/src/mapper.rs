use casefinding_core::models::features::{AGE_FEATURE, FeatureVector, FeatureVectorBuilder};
use casefinding_core::models::intake::{IntakeRecord, Sex};
use tracing::{debug, warn};

use crate::all_categories;

/// Patients at or below this age are flagged as minors regardless of
/// recorded marital status.
pub const MINOR_MAX_AGE: u32 = 15;

const MINOR_FLAG: &str = "MaritalStatusMINOR";

/// Map an intake record onto the scoring model's feature vector.
///
/// Never fails: missing or unrecognised answers fall through to the
/// category's catch-all, or leave the category at zero when it has none.
/// The input is not modified and every call builds a fresh vector.
pub fn map_to_features(intake: &IntakeRecord, sex: Sex) -> FeatureVector {
    let mut builder = FeatureVectorBuilder::new(intake.age);

    raise(&mut builder, match sex {
        Sex::Male => "GenderMALE",
        Sex::Female => "GenderFEMALE",
    });

    for category in all_categories() {
        if let Some(flag) = category.resolve(intake.answer(category.field)) {
            raise(&mut builder, flag);
        }
    }

    if intake.age.is_some_and(|age| age <= MINOR_MAX_AGE) {
        raise(&mut builder, MINOR_FLAG);
    }

    let vector = builder.build();
    debug!(
        sex = %sex,
        age = ?intake.age,
        raised = vector.iter().filter(|(name, v)| *v == 1 && *name != AGE_FEATURE).count(),
        "mapped intake to features"
    );
    vector
}

fn raise(builder: &mut FeatureVectorBuilder, flag: &str) {
    if !builder.raise(flag) {
        warn!(flag, "indicator is not part of the feature schema");
    }
}
