use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sex as recorded on the normative sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    M,
    F,
}

/// The subset of the patient record the normalization engine consumes.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientDemographics {
    pub birth_date: jiff::civil::Date,
    pub education_years: u32,
    pub sex: Option<Sex>,
}
