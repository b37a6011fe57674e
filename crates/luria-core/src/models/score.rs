use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An unnormalized score, produced fresh per scoring call and handed to
/// the workflow; this engine never persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawScore {
    pub total: f64,
    /// Per-section subtotals, present only for sectioned rules.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sections: Option<BTreeMap<String, f64>>,
}
