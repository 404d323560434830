// Whole-study evaluation
//
// Runs the full pipeline over both groups (normalize, summarize, compare)
// and bundles everything the report and chart layers need.

use crate::analysis::comparison::{compare, ComparisonResult};
use crate::analysis::error::Result;
use crate::analysis::frequency::{NormalizedSample, Sample};
use crate::analysis::summary::{summarize, GroupSummary};

/// Everything produced by evaluating one two-group study
#[derive(Debug, Clone)]
pub struct StudyOutcome {
    /// Recording duration the counts were normalized by (seconds)
    pub duration_s: f32,

    pub sample_a: NormalizedSample,
    pub sample_b: NormalizedSample,

    pub summary_a: GroupSummary,
    pub summary_b: GroupSummary,

    pub comparison: ComparisonResult,
}

/// Evaluate a two-group study end to end
///
/// Normalizes both groups by the shared recording duration, summarizes each
/// (n, mean, SEM, median), and runs Welch's t-test between them. The first
/// error in that order is returned unchanged.
pub fn evaluate(duration_s: f32, group_a: &Sample, group_b: &Sample) -> Result<StudyOutcome> {
    let sample_a = group_a.normalize(duration_s)?;
    let sample_b = group_b.normalize(duration_s)?;

    let summary_a = summarize(&sample_a)?;
    let summary_b = summarize(&sample_b)?;

    let comparison = compare(&sample_a, &sample_b)?;

    tracing::debug!(
        "evaluated study: '{}' (n={}) vs '{}' (n={}), t={:.4}, p={:.6}",
        summary_a.label,
        summary_a.n,
        summary_b.label,
        summary_b.n,
        comparison.t_statistic,
        comparison.p_value
    );

    Ok(StudyOutcome {
        duration_s,
        sample_a,
        sample_b,
        summary_a,
        summary_b,
        comparison,
    })
}
