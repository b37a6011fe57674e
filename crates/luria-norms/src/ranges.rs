use jiff::civil::Date;

use luria_core::models::norms::{NormRange, NormativeTable};
use luria_core::models::patient::PatientDemographics;

use crate::error::NormsError;

/// A matched stratification band.
#[derive(Debug, Clone, Copy)]
pub struct RangeMatch<'a> {
    pub range: &'a NormRange,
    /// True when no band covered the patient and the nearest one was used.
    pub out_of_norms: bool,
}

/// Completed years of age on `today`.
pub fn age_on(birth_date: Date, today: Date) -> u32 {
    let mut age = i32::from(today.year()) - i32::from(birth_date.year());
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// Find the band applicable to a patient.
///
/// Exact match first: age and education inside the band's bounds, sex
/// compatible, first band in table order wins. When nothing covers the
/// patient, the sex-compatible band at the smallest combined
/// age+education distance is used instead and the match is flagged
/// out-of-norms; ties break to the earliest band in table order.
pub fn find_range<'a>(
    patient: &PatientDemographics,
    table: &'a NormativeTable,
    today: Date,
) -> Result<RangeMatch<'a>, NormsError> {
    let age = age_on(patient.birth_date, today);
    let education = patient.education_years;

    for range in &table.ranges {
        if range.sex_matches(patient.sex) && range.covers(age, education) {
            return Ok(RangeMatch {
                range,
                out_of_norms: false,
            });
        }
    }

    let mut nearest: Option<(&NormRange, u32)> = None;
    for range in &table.ranges {
        if !range.sex_matches(patient.sex) {
            continue;
        }
        let distance = range.distance_to(age, education);
        // Strict comparison keeps the earliest band on ties.
        if nearest.is_none_or(|(_, best)| distance < best) {
            nearest = Some((range, distance));
        }
    }

    match nearest {
        Some((range, _)) => Ok(RangeMatch {
            range,
            out_of_norms: true,
        }),
        None => Err(NormsError::NoApplicableRange),
    }
}
