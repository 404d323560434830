// Spike-count normalization
//
// Raw spike counts from different recordings are only comparable after
// dividing by the shared recording duration, which converts them to firing
// frequencies in Hz. Everything downstream (summaries, the t-test, the
// chart) operates on frequencies.

use crate::analysis::error::{AnalysisError, Result};

/// Raw spike counts for one named experimental group
///
/// One entry per recorded cell, in recording order. Counts are `f32` because
/// upstream acquisition software sometimes exports fractional event counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub label: String,
    pub counts: Vec<f32>,
}

impl Sample {
    pub fn new(label: impl Into<String>, counts: Vec<f32>) -> Self {
        Self {
            label: label.into(),
            counts,
        }
    }

    /// Convert raw counts to firing frequencies for a recording duration
    ///
    /// Errors carry the group label so a two-group study reports which side
    /// was malformed.
    pub fn normalize(&self, duration_s: f32) -> Result<NormalizedSample> {
        let frequencies_hz = normalize(&self.counts, duration_s).map_err(|e| match e {
            AnalysisError::InvalidInput(msg) => {
                AnalysisError::InvalidInput(format!("group '{}': {}", self.label, msg))
            }
            other => other,
        })?;

        Ok(NormalizedSample {
            label: self.label.clone(),
            frequencies_hz,
        })
    }
}

/// Firing frequencies (Hz) for one named experimental group
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSample {
    pub label: String,
    pub frequencies_hz: Vec<f32>,
}

impl NormalizedSample {
    /// Number of cells in the group
    pub fn n(&self) -> usize {
        self.frequencies_hz.len()
    }
}

/// Normalize spike counts to firing frequencies (count / duration)
///
/// Elementwise and order-preserving: output index `i` is the frequency of
/// the cell at input index `i`.
///
/// # Errors
/// `InvalidInput` when the duration is non-positive or non-finite, when
/// `counts` is empty, or when any count is negative or non-finite.
pub fn normalize(counts: &[f32], duration_s: f32) -> Result<Vec<f32>> {
    if !duration_s.is_finite() || duration_s <= 0.0 {
        return Err(AnalysisError::InvalidInput(format!(
            "recording duration must be positive and finite, got {}",
            duration_s
        )));
    }

    if counts.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "spike counts must not be empty".to_string(),
        ));
    }

    for (i, &count) in counts.iter().enumerate() {
        if !count.is_finite() {
            return Err(AnalysisError::InvalidInput(format!(
                "spike count at index {} is not finite",
                i
            )));
        }
        if count < 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "spike count at index {} is negative ({})",
                i, count
            )));
        }
    }

    Ok(counts.iter().map(|&c| c / duration_s).collect())
}
