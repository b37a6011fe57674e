//! Standard scores derived from a band's sample statistics.

/// z-score rounded to 2 decimals. A degenerate sample with zero spread
/// pins z to 0 rather than dividing.
pub fn z_score(raw_total: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return 0.0;
    }
    ((raw_total - mean) / std_dev * 100.0).round_ties_even() / 100.0
}

/// t-score on the mean-50, SD-10 scale.
pub fn t_score(z: f64) -> i32 {
    (50.0 + z * 10.0).round_ties_even() as i32
}
