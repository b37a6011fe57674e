use luria_core::models::result::Classification;

/// Classification bins over the percentile scale, boundaries inclusive.
pub fn classify(percentile: u8) -> Classification {
    match percentile {
        0..=5 => Classification::VeryInferior,
        6..=16 => Classification::Inferior,
        17..=84 => Classification::Average,
        85..=95 => Classification::Superior,
        _ => Classification::VerySuperior,
    }
}

/// Report wording for a classification, with the extrapolation caveat
/// appended when the match fell outside the sampled norms.
pub fn describe(classification: Classification, out_of_norms: bool) -> String {
    let base = match classification {
        Classification::VeryInferior => "Performance well below the reference population",
        Classification::Inferior => "Performance below the reference population",
        Classification::Average => {
            "Performance within the expected range for the reference population"
        }
        Classification::Superior => "Performance above the reference population",
        Classification::VerySuperior => "Performance well above the reference population",
    };
    if out_of_norms {
        format!("{base} (outside sampled norms; nearest reference range applied)")
    } else {
        base.to_string()
    }
}
