// Welch's two-sample comparison of group firing frequencies
//
// Wraps aprender's independent t-test with the unequal-variance (Welch)
// assumption. The two groups come from different animals, so the samples
// are independent and no equal-variance assumption is made. The t-statistic
// and degrees of freedom come from aprender; the two-tailed p-value is
// taken from statrs' Student-t CDF, since aprender 0.13's own p-value is
// inaccurate away from the extreme tails.

use crate::analysis::error::{AnalysisError, Result};
use crate::analysis::frequency::NormalizedSample;
use crate::analysis::significance::{classify_significance, SignificanceTier};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Result of comparing two groups' firing frequencies
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    /// Welch t-statistic (negative when the first group's mean is lower)
    pub t_statistic: f32,

    /// Welch-Satterthwaite degrees of freedom
    pub df: f32,

    /// Two-tailed p-value
    pub p_value: f32,

    /// Tier classification of the p-value
    pub significance: SignificanceTier,
}

/// Compare two normalized groups using Welch's independent t-test
///
/// Uses aprender's `ttest_ind()` with the unequal variance assumption for
/// the statistic and degrees of freedom; the two-tailed p-value comes from
/// statrs' Student-t CDF. Group order matters only for the sign of the
/// t-statistic; the p-value and tier are symmetric.
///
/// # Errors
/// `DegenerateInput` when either group has fewer than 2 cells or zero
/// variance; `InvalidInput` when any frequency is non-finite.
pub fn compare(a: &NormalizedSample, b: &NormalizedSample) -> Result<ComparisonResult> {
    for sample in [a, b] {
        if sample.frequencies_hz.iter().any(|f| !f.is_finite()) {
            return Err(AnalysisError::InvalidInput(format!(
                "group '{}' contains non-finite frequencies",
                sample.label
            )));
        }

        if sample.frequencies_hz.len() < 2 {
            return Err(AnalysisError::DegenerateInput(format!(
                "group '{}' needs at least 2 cells for a t-test, got {}",
                sample.label,
                sample.frequencies_hz.len()
            )));
        }

        // f32 variance of a constant group rounds to cancellation noise
        // rather than zero, so constancy is checked on the values directly
        if sample
            .frequencies_hz
            .windows(2)
            .all(|pair| pair[0] == pair[1])
        {
            return Err(AnalysisError::DegenerateInput(format!(
                "group '{}' has zero variance",
                sample.label
            )));
        }
    }

    // aprender's independent t-test (Welch's variant: unequal variances)
    let ttest = aprender::stats::hypothesis::ttest_ind(&a.frequencies_hz, &b.frequencies_hz, false)
        .map_err(|e| AnalysisError::DegenerateInput(format!("t-test failed: {}", e)))?;

    let p_value = two_tailed_p(ttest.statistic, ttest.df)?;
    let significance = classify_significance(p_value)?;

    Ok(ComparisonResult {
        t_statistic: ttest.statistic,
        df: ttest.df,
        p_value,
        significance,
    })
}

/// Two-tailed p-value for a t-statistic under the Student-t distribution
fn two_tailed_p(t_statistic: f32, df: f32) -> Result<f32> {
    let tdist = StudentsT::new(0.0, 1.0, f64::from(df)).map_err(|e| {
        AnalysisError::DegenerateInput(format!("t-distribution undefined for df {}: {}", df, e))
    })?;
    let cdf = tdist.cdf(f64::from(t_statistic.abs()));
    Ok((2.0 * (1.0 - cdf)) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(label: &str, frequencies_hz: Vec<f32>) -> NormalizedSample {
        NormalizedSample {
            label: label.to_string(),
            frequencies_hz,
        }
    }

    #[test]
    fn test_compare_detects_clear_difference() {
        let low = sample("low", vec![0.10, 0.12, 0.11, 0.13, 0.10]);
        let high = sample("high", vec![0.25, 0.27, 0.26, 0.28, 0.25]);

        let result = compare(&low, &high).unwrap();

        assert!(
            result.p_value < 0.05,
            "p-value {} should be < 0.05",
            result.p_value
        );
        assert!(result.significance.is_significant());
    }

    #[test]
    fn test_compare_similar_groups_not_significant() {
        let a = sample("a", vec![0.10, 0.12, 0.11, 0.13, 0.10]);
        let b = sample("b", vec![0.11, 0.13, 0.10, 0.12, 0.11]);

        let result = compare(&a, &b).unwrap();

        assert!(
            result.p_value >= 0.05,
            "p-value {} should be >= 0.05",
            result.p_value
        );
        assert_eq!(result.significance, SignificanceTier::NotSignificant);
    }

    #[test]
    fn test_compare_sign_follows_group_order() {
        let low = sample("low", vec![0.1, 0.2, 0.15, 0.12]);
        let high = sample("high", vec![0.9, 1.0, 0.95, 0.92]);

        let forward = compare(&low, &high).unwrap();
        let reverse = compare(&high, &low).unwrap();

        assert!(forward.t_statistic < 0.0);
        assert!(reverse.t_statistic > 0.0);
        assert!((forward.t_statistic + reverse.t_statistic).abs() < 1e-4);
        assert!((forward.p_value - reverse.p_value).abs() < 1e-6);
        assert_eq!(forward.significance, reverse.significance);
    }

    #[test]
    fn test_compare_single_cell_group_degenerate() {
        let single = sample("single", vec![0.5]);
        let pair = sample("pair", vec![0.4, 0.6]);

        let err = compare(&single, &pair).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateInput(_)));
    }

    #[test]
    fn test_compare_empty_group_degenerate() {
        let empty = sample("empty", vec![]);
        let pair = sample("pair", vec![0.4, 0.6]);

        assert!(compare(&empty, &pair).is_err());
    }

    #[test]
    fn test_compare_zero_variance_degenerate() {
        let flat = sample("flat", vec![0.5, 0.5, 0.5]);
        let varied = sample("varied", vec![0.4, 0.6, 0.5]);

        let err = compare(&flat, &varied).unwrap_err();
        match err {
            AnalysisError::DegenerateInput(msg) => assert!(msg.contains("flat")),
            other => panic!("expected DegenerateInput, got {:?}", other),
        }
    }

    #[test]
    fn test_compare_second_group_checked_too() {
        let varied = sample("varied", vec![0.4, 0.6, 0.5]);
        let flat = sample("flat", vec![0.5, 0.5, 0.5]);

        let err = compare(&varied, &flat).unwrap_err();
        assert!(matches!(err, AnalysisError::DegenerateInput(_)));
    }

    #[test]
    fn test_compare_constant_inexact_frequencies_degenerate() {
        // 5/60 Hz is not representable in f32, so a naive variance of this
        // group computes as ~5e-10 rather than zero
        let flat = sample("flat", vec![5.0 / 60.0; 3]);
        let varied = sample("varied", vec![3.0 / 60.0, 4.0 / 60.0, 5.0 / 60.0]);

        let err = compare(&flat, &varied).unwrap_err();
        match err {
            AnalysisError::DegenerateInput(msg) => assert!(msg.contains("zero variance")),
            other => panic!("expected DegenerateInput, got {:?}", other),
        }
    }

    #[test]
    fn test_compare_non_finite_frequency_invalid() {
        let bad = sample("bad", vec![0.4, f32::NAN, 0.5]);
        let ok = sample("ok", vec![0.4, 0.6, 0.5]);

        let err = compare(&bad, &ok).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn test_compare_reports_degrees_of_freedom() {
        let a = sample("a", vec![0.1, 0.2, 0.15, 0.12, 0.18]);
        let b = sample("b", vec![0.3, 0.4, 0.35, 0.32, 0.38]);

        let result = compare(&a, &b).unwrap();

        // Welch df for two groups of 5 lies in (2, 8]
        assert!(result.df > 2.0 && result.df <= 8.0, "df = {}", result.df);
    }

    #[test]
    fn test_two_tailed_p_matches_critical_value() {
        // t = 2.228 at df = 10 is the textbook 0.05 two-tailed critical value
        let p = two_tailed_p(2.228, 10.0).unwrap();
        assert!((p - 0.05).abs() < 5e-4, "p = {}", p);

        // Sign of t must not matter
        let p_neg = two_tailed_p(-2.228, 10.0).unwrap();
        assert!((p - p_neg).abs() < 1e-7);
    }

    #[test]
    fn test_two_tailed_p_moderate_t() {
        // SciPy: 2 * t.sf(2.0131, 8) = 0.0727
        let p = two_tailed_p(2.0131, 8.0).unwrap();
        assert!((p - 0.0727).abs() < 5e-4, "p = {}", p);
    }

    #[test]
    fn test_two_tailed_p_zero_t_is_one() {
        let p = two_tailed_p(0.0, 8.0).unwrap();
        assert!((p - 1.0).abs() < 1e-6, "p = {}", p);
    }
}
