use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Qualitative bins over the percentile scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Classification {
    VeryInferior,
    Inferior,
    Average,
    Superior,
    VerySuperior,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::VeryInferior => "Very Inferior",
            Classification::Inferior => "Inferior",
            Classification::Average => "Average",
            Classification::Superior => "Superior",
            Classification::VerySuperior => "Very Superior",
        }
    }
}

/// The statistically grounded outcome of one test finalization.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormalizationResult {
    pub id: Uuid,
    pub table_name: String,
    /// Which band produced the result, e.g. "18–25 years, 8–12 years education".
    pub applied_range: String,
    pub percentile: u8,
    pub z_score: f64,
    pub t_score: i32,
    pub classification: Classification,
    pub description: String,
    /// True when the patient fell outside every band and the nearest one
    /// was used instead; report wording must flag the extrapolation.
    pub out_of_norms: bool,
}
