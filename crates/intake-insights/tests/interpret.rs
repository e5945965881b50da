use intake_core::reference;
use intake_insights::error::InsightError;
use intake_insights::interpret::{interpret_score, row_percentile, RowInterpretation, Severity};

#[test]
fn row_percentile_uses_the_rows_own_range() {
    assert_eq!(row_percentile(18.0, 18.0, 126.0), Some(0));
    assert_eq!(row_percentile(126.0, 18.0, 126.0), Some(100));
    assert_eq!(row_percentile(5.5, 1.0, 10.0), Some(50));
    assert_eq!(row_percentile(5.0, 5.0, 5.0), None);
}

#[test]
fn row_interpretation_thresholds() {
    assert_eq!(RowInterpretation::for_percentile(85), RowInterpretation::AboveAverage);
    assert_eq!(RowInterpretation::for_percentile(84), RowInterpretation::Average);
    assert_eq!(RowInterpretation::for_percentile(70), RowInterpretation::Average);
    assert_eq!(RowInterpretation::for_percentile(50), RowInterpretation::BelowAverage);
    assert_eq!(
        RowInterpretation::for_percentile(49),
        RowInterpretation::SignificantlyBelowAverage
    );
}

#[test]
fn catalog_interpretation_for_adl_instrument() {
    let fim = &reference::standard_assessments()[1];
    // (72 - 18) / 108 = 50% → moderate
    let result = interpret_score(fim, 72.0, None).unwrap();
    assert_eq!(result.percentage, 50);
    assert_eq!(result.severity, Severity::Moderate);
    assert_eq!(result.interpretation, "Moderate impairment");
    assert_eq!(
        result.recommendations,
        ["Occupational therapy 2x/week", "Caregiver training"]
    );
    assert!(result.age_adjusted.is_none());
}

#[test]
fn normal_severity_and_unlisted_categories_fall_back() {
    let fim = &reference::standard_assessments()[1];
    let normal = interpret_score(fim, 126.0, None).unwrap();
    assert_eq!(normal.severity, Severity::Normal);
    assert_eq!(normal.recommendations, ["Consult with healthcare provider"]);

    let sp = &reference::standard_assessments()[4];
    let sensory = interpret_score(sp, 40.0, None).unwrap();
    assert_eq!(sensory.severity, Severity::Severe);
    assert_eq!(sensory.recommendations, ["Consult with healthcare provider"]);
}

#[test]
fn older_adults_get_capped_uplift() {
    let moca = &reference::standard_assessments()[2];
    let result = interpret_score(moca, 29.0, Some(70)).unwrap();
    let adjusted = result.age_adjusted.unwrap();
    assert_eq!(adjusted.age_group, "Older Adult");
    assert_eq!(adjusted.adjusted_score, 30.0);
    assert!((adjusted.adjustment - 2.9).abs() < 1e-9);

    let adult = interpret_score(moca, 20.0, Some(40)).unwrap().age_adjusted.unwrap();
    assert_eq!(adult.age_group, "Adult");
    assert_eq!(adult.adjusted_score, 20.0);
    assert_eq!(adult.adjustment, 0.0);
}

#[test]
fn empty_range_is_rejected() {
    let mut broken = reference::standard_assessments()[0].clone();
    broken.max_score = broken.min_score;
    let err = interpret_score(&broken, 3.0, None).unwrap_err();
    assert!(matches!(err, InsightError::DegenerateRange { ref code, .. } if code == "COPM"));
}
