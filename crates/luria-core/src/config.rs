use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Engine defaults, injected explicitly by the calling workflow.
///
/// Nothing in the engine reads ambient or global state; anything tunable
/// lives here with a named field and a default.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringConfig {
    /// Scale maximum used to invert sectioned questions when the section
    /// does not declare its own. Historically fixed at 4 even for tests
    /// with a different answer scale; sections that need the real maximum
    /// set `max_scale_value` in their configuration.
    pub sectioned_inversion_max: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            sectioned_inversion_max: 4,
        }
    }
}
