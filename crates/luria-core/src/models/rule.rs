use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a test template turns answers into a raw score.
///
/// Loaded from test configuration; immutable at scoring time.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringRule {
    /// Sum of the included questions, with selected questions inverted
    /// against the scale maximum.
    SimpleSum {
        included: Vec<u32>,
        #[serde(default)]
        inverted: Vec<u32>,
        max_scale_value: i64,
    },
    /// Weighted sum over (question, weight) pairs.
    WeightedSum { weights: Vec<QuestionWeight> },
    /// Named sections scored independently, each with its own weight.
    Sectioned { sections: Vec<Section> },
    /// A declarative arithmetic formula evaluated against the answers.
    Custom { expression: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionWeight {
    pub question: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Section {
    pub name: String,
    pub questions: Vec<u32>,
    #[serde(default)]
    pub inverted: Vec<u32>,
    pub weight: f64,
    /// Scale maximum for inverted questions. Sections without one fall
    /// back to `ScoringConfig::sectioned_inversion_max`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_scale_value: Option<i64>,
}
