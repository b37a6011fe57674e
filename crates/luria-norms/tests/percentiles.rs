use luria_core::models::norms::PercentileAnchors;
use luria_norms::percentile::percentile_for;

fn anchors() -> PercentileAnchors {
    PercentileAnchors {
        p5: 0.0,
        p10: 5.0,
        p25: 10.0,
        p50: 20.0,
        p75: 30.0,
        p90: 40.0,
        p95: 50.0,
    }
}

#[test]
fn on_anchor_score_returns_the_anchor_percentile() {
    let a = anchors();
    assert_eq!(percentile_for(0.0, &a), 5);
    assert_eq!(percentile_for(5.0, &a), 10);
    assert_eq!(percentile_for(20.0, &a), 50);
    assert_eq!(percentile_for(50.0, &a), 95);
}

#[test]
fn interpolates_between_anchors() {
    // Halfway between the p50 and p75 scores: 50 + 25 * 0.5, ties to even.
    assert_eq!(percentile_for(25.0, &anchors()), 62);
}

#[test]
fn saturates_at_the_sample_floor() {
    let a = anchors();
    assert_eq!(percentile_for(0.0, &a), 5);
    assert_eq!(percentile_for(-10.0, &a), 5);
}

#[test]
fn saturates_at_the_sample_ceiling() {
    let a = anchors();
    assert_eq!(percentile_for(50.0, &a), 95);
    assert_eq!(percentile_for(120.0, &a), 95);
}

#[test]
fn monotone_in_the_raw_score() {
    let a = anchors();
    let mut previous = 0;
    let mut raw = -5.0;
    while raw <= 55.0 {
        let percentile = percentile_for(raw, &a);
        assert!(
            percentile >= previous,
            "percentile dropped from {previous} to {percentile} at raw {raw}"
        );
        previous = percentile;
        raw += 0.25;
    }
}

#[test]
fn flat_anchor_run_resolves_to_its_boundary_percentile() {
    let a = PercentileAnchors {
        p5: 0.0,
        p10: 2.0,
        p25: 2.0,
        p50: 2.0,
        p75: 20.0,
        p90: 30.0,
        p95: 40.0,
    };
    // The score shared by the flat run lands on its first boundary.
    assert_eq!(percentile_for(2.0, &a), 10);
}

#[test]
fn fully_degenerate_anchors_never_panic() {
    let a = PercentileAnchors {
        p5: 3.0,
        p10: 3.0,
        p25: 3.0,
        p50: 3.0,
        p75: 3.0,
        p90: 3.0,
        p95: 3.0,
    };
    assert_eq!(percentile_for(2.0, &a), 5);
    assert_eq!(percentile_for(3.0, &a), 5);
    assert_eq!(percentile_for(4.0, &a), 95);
}

#[test]
fn monotonicity_violation_names_the_offending_pair() {
    let mut a = anchors();
    assert!(a.monotonicity_violation().is_none());

    a.p50 = 8.0;
    assert_eq!(a.monotonicity_violation(), Some((25, 50)));
}
