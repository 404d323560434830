// Whole-pipeline tests against known study datasets
//
// The hippocampal culture study is the reference dataset: its means, SEMs,
// t-statistic, and p-value were verified against an independent SciPy run,
// so these tests pin the arithmetic, not just the plumbing.

use super::*;

/// Reference dataset: wild-type vs APP/PSEN1 cultures, 60 s recordings
fn reference_study() -> (f32, Sample, Sample) {
    let wild_type = Sample::new("WT AS2", vec![7.0, 2.0, 16.0, 18.0, 12.0, 7.0, 8.0]);
    let transgenic = Sample::new(
        "APP/PSEN1",
        vec![35.0, 32.0, 22.0, 17.0, 19.0, 30.0, 45.0, 30.0],
    );
    (60.0, wild_type, transgenic)
}

#[test]
fn test_reference_study_means_and_sems() {
    let (duration, wt, tg) = reference_study();
    let outcome = evaluate(duration, &wt, &tg).unwrap();

    // 70 spikes over 7 cells and 230 over 8, each divided by 60 s
    assert!((outcome.summary_a.mean - 0.16667).abs() < 1e-4);
    assert!((outcome.summary_b.mean - 0.47917).abs() < 1e-4);

    assert!((outcome.summary_a.sem - 0.03282).abs() < 1e-4);
    assert!((outcome.summary_b.sem - 0.05084).abs() < 1e-4);

    // Median counts 8 and 30, divided by 60 s
    assert!((outcome.summary_a.median - 0.13333).abs() < 1e-4);
    assert!((outcome.summary_b.median - 0.5).abs() < 1e-4);

    assert_eq!(outcome.summary_a.n, 7);
    assert_eq!(outcome.summary_b.n, 8);
}

#[test]
fn test_reference_study_welch_statistics() {
    let (duration, wt, tg) = reference_study();
    let outcome = evaluate(duration, &wt, &tg).unwrap();

    // SciPy: t = -4.816, df = 11.74, p = 4.26e-4
    assert!(
        (outcome.comparison.t_statistic + 4.816).abs() < 0.01,
        "t = {}",
        outcome.comparison.t_statistic
    );
    assert!(
        (outcome.comparison.df - 11.74).abs() < 0.1,
        "df = {}",
        outcome.comparison.df
    );
    assert!(
        (outcome.comparison.p_value - 4.26e-4).abs() < 2e-5,
        "p = {}",
        outcome.comparison.p_value
    );
}

#[test]
fn test_reference_study_classified_highly_significant() {
    let (duration, wt, tg) = reference_study();
    let outcome = evaluate(duration, &wt, &tg).unwrap();

    assert_eq!(
        outcome.comparison.significance,
        SignificanceTier::HighlySignificant
    );
    assert_eq!(outcome.comparison.significance.annotation(), "***");
}

#[test]
fn test_reference_study_group_order_flipped() {
    let (duration, wt, tg) = reference_study();

    let forward = evaluate(duration, &wt, &tg).unwrap();
    let flipped = evaluate(duration, &tg, &wt).unwrap();

    // Direction flips, strength does not
    assert!(forward.comparison.t_statistic < 0.0);
    assert!(flipped.comparison.t_statistic > 0.0);
    assert_eq!(
        forward.comparison.significance,
        flipped.comparison.significance
    );
}

/// Overlapping groups with a real but modest separation
#[test]
fn test_modest_separation_lands_in_middle_tier() {
    let a = Sample::new("sham", vec![10.0, 12.0, 11.0, 13.0, 10.0]);
    let b = Sample::new("lesion", vec![13.0, 15.0, 12.0, 16.0, 13.0]);

    let outcome = evaluate(60.0, &a, &b).unwrap();

    // SciPy: t = -2.77, df = 7.6, p = 0.0256
    assert!(
        (outcome.comparison.p_value - 0.0256).abs() < 5e-4,
        "p = {}",
        outcome.comparison.p_value
    );
    assert_eq!(
        outcome.comparison.significance,
        SignificanceTier::Significant
    );
}

/// Overlap too wide to clear the 0.05 bar
#[test]
fn test_weak_separation_not_significant() {
    let a = Sample::new("sham", vec![10.0, 12.0, 11.0, 13.0, 10.0]);
    let b = Sample::new("lesion", vec![12.0, 14.0, 11.0, 15.0, 12.0]);

    let outcome = evaluate(60.0, &a, &b).unwrap();

    // Welch on these counts: t = -1.71, df = 7.6, p = 0.13
    assert!(
        outcome.comparison.p_value > 0.05,
        "p = {}",
        outcome.comparison.p_value
    );
    assert!(
        outcome.comparison.p_value < 0.25,
        "p = {}",
        outcome.comparison.p_value
    );
    assert_eq!(
        outcome.comparison.significance,
        SignificanceTier::NotSignificant
    );
}

#[test]
fn test_identical_distributions_not_significant() {
    let a = Sample::new("a", vec![10.0, 12.0, 11.0, 13.0, 10.0]);
    let b = Sample::new("b", vec![11.0, 13.0, 10.0, 12.0, 11.0]);

    let outcome = evaluate(60.0, &a, &b).unwrap();

    assert_eq!(
        outcome.comparison.significance,
        SignificanceTier::NotSignificant
    );
    assert_eq!(outcome.comparison.significance.annotation(), "ns");
}

#[test]
fn test_duration_scales_frequencies_not_significance() {
    let a = Sample::new("a", vec![10.0, 12.0, 11.0, 13.0, 10.0]);
    let b = Sample::new("b", vec![25.0, 27.0, 26.0, 28.0, 25.0]);

    let short = evaluate(30.0, &a, &b).unwrap();
    let long = evaluate(300.0, &a, &b).unwrap();

    // Frequencies scale by 10x, but the t-statistic is scale-invariant
    assert!((short.summary_a.mean - 10.0 * long.summary_a.mean).abs() < 1e-5);
    assert!(
        (short.comparison.t_statistic - long.comparison.t_statistic).abs() < 1e-3,
        "t should be duration-invariant: {} vs {}",
        short.comparison.t_statistic,
        long.comparison.t_statistic
    );
    assert_eq!(
        short.comparison.significance,
        long.comparison.significance
    );
}

#[test]
fn test_unequal_group_sizes_supported() {
    let small = Sample::new("small", vec![5.0, 7.0, 6.0]);
    let large = Sample::new(
        "large",
        vec![20.0, 22.0, 21.0, 23.0, 20.0, 22.0, 21.0, 19.0, 24.0, 20.0],
    );

    let outcome = evaluate(60.0, &small, &large).unwrap();

    assert_eq!(outcome.summary_a.n, 3);
    assert_eq!(outcome.summary_b.n, 10);
    assert!(outcome.comparison.p_value < 0.05);
}

#[test]
fn test_silent_cells_do_not_break_pipeline() {
    // Zero counts are valid observations as long as the group still varies
    let quiet = Sample::new("quiet", vec![0.0, 1.0, 0.0, 2.0, 1.0]);
    let active = Sample::new("active", vec![30.0, 32.0, 31.0, 29.0, 33.0]);

    let outcome = evaluate(60.0, &quiet, &active).unwrap();

    assert!(outcome.summary_a.mean < outcome.summary_b.mean);
    assert!(outcome.comparison.p_value < 0.001);
}
