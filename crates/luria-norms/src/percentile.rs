use luria_core::models::norms::PercentileAnchors;

/// Percentile for a raw total by piecewise-linear interpolation across
/// the seven anchors.
///
/// Total: saturates at 5 below the sampled span and 95 above it, and a
/// zero-width segment yields its lower percentile bound rather than a
/// division by zero. Rounds half-to-even.
pub fn percentile_for(raw_total: f64, anchors: &PercentileAnchors) -> u8 {
    let points = anchors.points();
    let (floor_percentile, floor_score) = points[0];
    let (ceiling_percentile, ceiling_score) = points[6];

    if raw_total <= floor_score {
        return floor_percentile;
    }
    if raw_total >= ceiling_score {
        return ceiling_percentile;
    }

    for pair in points.windows(2) {
        let (p_low, s_low) = pair[0];
        let (p_high, s_high) = pair[1];
        if raw_total < s_low || raw_total > s_high {
            continue;
        }
        if s_high == s_low {
            return p_low;
        }
        let fraction = (raw_total - s_low) / (s_high - s_low);
        let interpolated = f64::from(p_low) + (f64::from(p_high) - f64::from(p_low)) * fraction;
        return interpolated.round_ties_even() as u8;
    }

    // Non-monotonic anchors can leave gaps between segments; saturate high.
    ceiling_percentile
}
