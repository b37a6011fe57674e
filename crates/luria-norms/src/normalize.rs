use jiff::civil::Date;
use tracing::{info, warn};
use uuid::Uuid;

use luria_core::models::norms::NormativeTable;
use luria_core::models::patient::PatientDemographics;
use luria_core::models::result::NormalizationResult;
use luria_core::models::score::RawScore;

use crate::classify;
use crate::error::NormsError;
use crate::percentile::percentile_for;
use crate::ranges::find_range;
use crate::standard::{t_score, z_score};

/// Normalize a raw score for one test-finalization event.
///
/// Sequences band matching, percentile interpolation, z/t conversion,
/// and classification. The matcher's error passes through unchanged when
/// no band is available; everything after the match is total.
pub fn normalize(
    raw: &RawScore,
    patient: &PatientDemographics,
    table: &NormativeTable,
    today: Date,
) -> Result<NormalizationResult, NormsError> {
    let matched = find_range(patient, table, today)?;
    let range = matched.range;

    if let Some((p_low, p_high)) = range.anchors.monotonicity_violation() {
        warn!(
            table = %table.name,
            p_low,
            p_high,
            "anchor values decrease between percentiles; interpolation clamps to the lower bound"
        );
    }

    let percentile = percentile_for(raw.total, &range.anchors);
    let z = z_score(raw.total, range.mean, range.std_dev);
    let classification = classify::classify(percentile);

    let result = NormalizationResult {
        id: Uuid::new_v4(),
        table_name: table.name.clone(),
        applied_range: range.describe(),
        percentile,
        z_score: z,
        t_score: t_score(z),
        classification,
        description: classify::describe(classification, matched.out_of_norms),
        out_of_norms: matched.out_of_norms,
    };

    if result.out_of_norms {
        warn!(
            result_id = %result.id,
            table = %table.name,
            range = %result.applied_range,
            "patient outside sampled norms; nearest range applied"
        );
    }
    info!(
        result_id = %result.id,
        table = %table.name,
        percentile = result.percentile,
        out_of_norms = result.out_of_norms,
        "normalization complete"
    );

    Ok(result)
}
