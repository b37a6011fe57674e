use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::Sex;

/// Raw-score values at the seven reference percentiles of a band's sample.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PercentileAnchors {
    pub p5: f64,
    pub p10: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
}

impl PercentileAnchors {
    /// Anchor points ordered by percentile.
    pub fn points(&self) -> [(u8, f64); 7] {
        [
            (5, self.p5),
            (10, self.p10),
            (25, self.p25),
            (50, self.p50),
            (75, self.p75),
            (90, self.p90),
            (95, self.p95),
        ]
    }

    /// First adjacent anchor pair whose values decrease, if any.
    /// Interpolation only behaves monotonically when this is `None`.
    pub fn monotonicity_violation(&self) -> Option<(u8, u8)> {
        self.points()
            .windows(2)
            .find(|pair| pair[1].1 < pair[0].1)
            .map(|pair| (pair[0].0, pair[1].0))
    }
}

/// One demographic stratification band of a normative table.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormRange {
    pub age_min: u32,
    pub age_max: u32,
    pub education_min: u32,
    pub education_max: u32,
    /// `None` means the band pools both sexes.
    pub sex: Option<Sex>,
    pub sample_size: u32,
    pub mean: f64,
    pub std_dev: f64,
    pub anchors: PercentileAnchors,
}

impl NormRange {
    /// Whether this band's sample applies to a patient of the given sex.
    pub fn sex_matches(&self, sex: Option<Sex>) -> bool {
        match self.sex {
            None => true,
            Some(own) => sex == Some(own),
        }
    }

    /// Whether age and education both fall inside this band.
    pub fn covers(&self, age: u32, education_years: u32) -> bool {
        (self.age_min..=self.age_max).contains(&age)
            && (self.education_min..=self.education_max).contains(&education_years)
    }

    /// Combined distance from this band's bounds; zero when covered.
    pub fn distance_to(&self, age: u32, education_years: u32) -> u32 {
        axis_distance(age, self.age_min, self.age_max)
            + axis_distance(education_years, self.education_min, self.education_max)
    }

    /// Human-readable descriptor for reports, e.g.
    /// "18–25 years, 8–12 years education, female norms".
    pub fn describe(&self) -> String {
        let mut descriptor = format!(
            "{}–{} years, {}–{} years education",
            self.age_min, self.age_max, self.education_min, self.education_max
        );
        match self.sex {
            Some(Sex::M) => descriptor.push_str(", male norms"),
            Some(Sex::F) => descriptor.push_str(", female norms"),
            None => {}
        }
        descriptor
    }
}

fn axis_distance(value: u32, min: u32, max: u32) -> u32 {
    if value < min {
        min - value
    } else if value > max {
        value - max
    } else {
        0
    }
}

/// A normative reference table: stratification bands plus sample metadata.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormativeTable {
    pub name: String,
    pub sample_size: u32,
    pub year: u16,
    #[serde(default)]
    pub is_default: bool,
    pub ranges: Vec<NormRange>,
}

/// Pick the table to normalize against: the default-flagged one, else the
/// first loaded for the test.
pub fn select_table(tables: &[NormativeTable]) -> Option<&NormativeTable> {
    tables
        .iter()
        .find(|table| table.is_default)
        .or_else(|| tables.first())
}
