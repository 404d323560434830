//! JSON output format for study results
//!
//! `--format json` emits one self-describing document with both group
//! summaries and the Welch comparison, for downstream notebooks and CI.

use serde::{Deserialize, Serialize};

use crate::analysis::StudyOutcome;

/// Format tag embedded in every report
pub const REPORT_FORMAT: &str = "spikefreq-report-v1";

/// One group's summary block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonGroup {
    /// Group label
    pub label: String,
    /// Number of cells
    pub n: usize,
    /// Mean firing frequency (Hz)
    pub mean_hz: f32,
    /// Standard error of the mean (Hz)
    pub sem_hz: f32,
    /// Median firing frequency (Hz)
    pub median_hz: f32,
    /// Per-cell firing frequencies (Hz), in recording order
    pub frequencies_hz: Vec<f32>,
}

/// Welch comparison block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonComparison {
    /// Welch t-statistic
    pub t_statistic: f32,
    /// Welch-Satterthwaite degrees of freedom
    pub df: f32,
    /// Two-tailed p-value
    pub p_value: f32,
    /// Tier name ("highly significant", ..., "not significant")
    pub significance: String,
    /// Star annotation ("***", "**", "*", "ns")
    pub annotation: String,
}

/// Root JSON document for one study
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonReport {
    /// Tool version that produced the report
    pub version: String,
    /// Report format tag
    pub format: String,
    /// Recording duration in seconds
    pub recording_duration_s: f32,
    /// Both groups, study order preserved
    pub groups: Vec<JsonGroup>,
    pub comparison: JsonComparison,
}

impl JsonReport {
    /// Build the report from a study outcome
    pub fn from_outcome(outcome: &StudyOutcome) -> Self {
        let groups = [
            (&outcome.summary_a, &outcome.sample_a),
            (&outcome.summary_b, &outcome.sample_b),
        ]
        .iter()
        .map(|(summary, sample)| JsonGroup {
            label: summary.label.clone(),
            n: summary.n,
            mean_hz: summary.mean,
            sem_hz: summary.sem,
            median_hz: summary.median,
            frequencies_hz: sample.frequencies_hz.clone(),
        })
        .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: REPORT_FORMAT.to_string(),
            recording_duration_s: outcome.duration_s,
            groups,
            comparison: JsonComparison {
                t_statistic: outcome.comparison.t_statistic,
                df: outcome.comparison.df,
                p_value: outcome.comparison.p_value,
                significance: outcome.comparison.significance.label().to_string(),
                annotation: outcome.comparison.significance.annotation().to_string(),
            },
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
