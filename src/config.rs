//! Study configuration: recording duration and the two groups' spike counts
//!
//! A study arrives either as a TOML file (`--study`) or assembled from CLI
//! flags; either way it is validated here before any statistics run.
//!
//! # Study file format
//! ```toml
//! recording_duration = 60.0
//!
//! [group_a]
//! label = "WT AS2"
//! counts = [7, 2, 16, 18, 12, 7, 8]
//!
//! [group_b]
//! label = "APP/PSEN1"
//! counts = [35, 32, 22, 17, 19, 30, 45, 30]
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::analysis::Sample;

/// One group's section of a study file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Display label, also the value of the CSV `Group` column
    pub label: String,

    /// Raw spike counts, one per recorded cell
    pub counts: Vec<f32>,
}

impl GroupConfig {
    pub fn to_sample(&self) -> Sample {
        Sample::new(self.label.clone(), self.counts.clone())
    }
}

/// A complete two-group study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Shared recording duration in seconds
    pub recording_duration: f32,

    pub group_a: GroupConfig,
    pub group_b: GroupConfig,
}

impl StudyConfig {
    /// Load a study from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
    }

    /// Parse a study from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse study TOML")
    }

    /// Empty scaffold for assembly from CLI flags
    ///
    /// Not valid as-is: `validate()` rejects it until a duration and both
    /// count lists are filled in.
    pub fn empty() -> Self {
        Self {
            recording_duration: 0.0,
            group_a: GroupConfig {
                label: "Group A".to_string(),
                counts: Vec::new(),
            },
            group_b: GroupConfig {
                label: "Group B".to_string(),
                counts: Vec::new(),
            },
        }
    }

    /// Validate the study before analysis
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.recording_duration.is_finite() || self.recording_duration <= 0.0 {
            return Err(format!(
                "recording_duration must be positive and finite, got {}",
                self.recording_duration
            ));
        }

        for group in [&self.group_a, &self.group_b] {
            if group.label.trim().is_empty() {
                return Err("group labels must not be empty".to_string());
            }

            if group.counts.is_empty() {
                return Err(format!("group '{}' has no spike counts", group.label));
            }

            if group.counts.iter().any(|c| !c.is_finite() || *c < 0.0) {
                return Err(format!(
                    "group '{}' contains negative or non-finite counts",
                    group.label
                ));
            }
        }

        Ok(())
    }

    /// Convert both groups into analysis samples
    pub fn to_samples(&self) -> (Sample, Sample) {
        (self.group_a.to_sample(), self.group_b.to_sample())
    }
}
