// Descriptive statistics for a normalized group
//
// Mean and standard deviation come from trueno's SIMD vector primitives.
// trueno's stddev is the population form (divide by n), so the SEM here is
// population stddev / sqrt(n). Median comes from aprender's DescriptiveStats
// quantile(0.5), which is robust to the occasional hyperactive cell.

use crate::analysis::error::{AnalysisError, Result};
use crate::analysis::frequency::NormalizedSample;
use aprender::stats::DescriptiveStats;
use trueno::Vector;

/// Descriptive summary of one group's firing frequencies
#[derive(Debug, Clone)]
pub struct GroupSummary {
    pub label: String,

    /// Number of cells in the group
    pub n: usize,

    /// Mean firing frequency (Hz)
    pub mean: f32,

    /// Standard error of the mean (Hz)
    pub sem: f32,

    /// Median firing frequency (Hz)
    pub median: f32,
}

/// Summarize one normalized group: n, mean, median, and SEM
///
/// A single-cell group summarizes with SEM 0; it only becomes an error later
/// if fed into the t-test.
pub fn summarize(sample: &NormalizedSample) -> Result<GroupSummary> {
    if sample.frequencies_hz.is_empty() {
        return Err(AnalysisError::InvalidInput(format!(
            "group '{}' has no frequencies to summarize",
            sample.label
        )));
    }

    let vec = Vector::from_slice(&sample.frequencies_hz);

    // trueno 0.7.0 returns Result<f32> for mean and stddev
    let mean = vec.mean().map_err(|e| {
        AnalysisError::InvalidInput(format!(
            "failed to compute mean for group '{}': {}",
            sample.label, e
        ))
    })?;

    // aprender's quantile(0.5) implements the R-7 method
    let median = DescriptiveStats::new(&vec).quantile(0.5).map_err(|e| {
        AnalysisError::InvalidInput(format!(
            "failed to compute median for group '{}': {}",
            sample.label, e
        ))
    })?;

    // f32 stddev of a constant group rounds to cancellation noise rather
    // than zero, so constancy is checked on the values directly
    let constant = sample
        .frequencies_hz
        .windows(2)
        .all(|pair| pair[0] == pair[1]);

    let n = sample.frequencies_hz.len();
    let sem = if n < 2 || constant {
        0.0
    } else {
        let stddev = vec.stddev().map_err(|e| {
            AnalysisError::InvalidInput(format!(
                "failed to compute stddev for group '{}': {}",
                sample.label, e
            ))
        })?;
        stddev / (n as f32).sqrt()
    };

    Ok(GroupSummary {
        label: sample.label.clone(),
        n,
        mean,
        sem,
        median,
    })
}
