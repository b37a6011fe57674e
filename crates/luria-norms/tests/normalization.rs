use jiff::civil::date;

use luria_core::models::norms::{
    select_table, NormRange, NormativeTable, PercentileAnchors,
};
use luria_core::models::patient::{PatientDemographics, Sex};
use luria_core::models::result::Classification;
use luria_core::models::score::RawScore;
use luria_norms::error::NormsError;
use luria_norms::normalize::normalize;

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

fn band(age: (u32, u32), education: (u32, u32), sex: Option<Sex>) -> NormRange {
    NormRange {
        age_min: age.0,
        age_max: age.1,
        education_min: education.0,
        education_max: education.1,
        sex,
        sample_size: 60,
        mean: 20.0,
        std_dev: 5.0,
        anchors: anchors(),
    }
}

fn table(ranges: Vec<NormRange>) -> NormativeTable {
    NormativeTable {
        name: "norms-2019".to_string(),
        sample_size: 240,
        year: 2019,
        is_default: true,
        ranges,
    }
}

fn raw(total: f64) -> RawScore {
    RawScore {
        total,
        sections: None,
    }
}

#[test]
fn pipeline_assembles_the_full_result() {
    let table = table(vec![band((26, 35), (8, 12), None)]);
    let patient = PatientDemographics {
        birth_date: date(1995, 3, 10),
        education_years: 10,
        sex: None,
    };

    let result = normalize(&raw(25.0), &patient, &table, date(2025, 6, 15)).unwrap();

    assert_eq!(result.table_name, "norms-2019");
    assert_eq!(result.applied_range, "26–35 years, 8–12 years education");
    assert_eq!(result.percentile, 62);
    assert_eq!(result.z_score, 1.0);
    assert_eq!(result.t_score, 60);
    assert_eq!(result.classification, Classification::Average);
    assert!(!result.out_of_norms);
    assert!(!result.description.contains("outside sampled norms"));
}

#[test]
fn sexed_band_is_named_in_the_descriptor() {
    let table = table(vec![band((18, 60), (0, 20), Some(Sex::F))]);
    let patient = PatientDemographics {
        birth_date: date(1990, 1, 1),
        education_years: 12,
        sex: Some(Sex::F),
    };

    let result = normalize(&raw(20.0), &patient, &table, date(2025, 6, 15)).unwrap();
    assert_eq!(
        result.applied_range,
        "18–60 years, 0–20 years education, female norms"
    );
}

#[test]
fn out_of_norms_match_flags_the_result_and_description() {
    // Patient aged 30; nothing covers age past 28.
    let table = table(vec![band((18, 28), (5, 12), None)]);
    let patient = PatientDemographics {
        birth_date: date(1995, 3, 10),
        education_years: 10,
        sex: None,
    };

    let result = normalize(&raw(20.0), &patient, &table, date(2025, 6, 15)).unwrap();
    assert!(result.out_of_norms);
    assert!(result.description.contains("outside sampled norms"));
}

#[test]
fn matcher_error_passes_through_unchanged() {
    let table = table(vec![]);
    let patient = PatientDemographics {
        birth_date: date(1995, 3, 10),
        education_years: 10,
        sex: None,
    };

    assert!(matches!(
        normalize(&raw(20.0), &patient, &table, date(2025, 6, 15)),
        Err(NormsError::NoApplicableRange)
    ));
}

#[test]
fn results_get_distinct_identifiers() {
    let table = table(vec![band((18, 60), (0, 20), None)]);
    let patient = PatientDemographics {
        birth_date: date(1990, 1, 1),
        education_years: 12,
        sex: None,
    };

    let first = normalize(&raw(20.0), &patient, &table, date(2025, 6, 15)).unwrap();
    let second = normalize(&raw(20.0), &patient, &table, date(2025, 6, 15)).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn select_table_prefers_the_default_flag() {
    let mut first = table(vec![]);
    first.name = "norms-2012".to_string();
    first.is_default = false;
    let second = table(vec![]);

    let tables = vec![first, second];
    assert_eq!(select_table(&tables).unwrap().name, "norms-2019");
}

#[test]
fn select_table_falls_back_to_the_first_loaded() {
    let mut first = table(vec![]);
    first.name = "norms-2012".to_string();
    first.is_default = false;
    let mut second = table(vec![]);
    second.is_default = false;

    let tables = vec![first, second];
    assert_eq!(select_table(&tables).unwrap().name, "norms-2012");
    assert!(select_table(&[]).is_none());
}
