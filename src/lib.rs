//! Spikefreq - spike-frequency statistics for two-group neuronal recordings
//!
//! This library normalizes per-cell spike counts by recording duration,
//! summarizes each group (n, mean, SEM, median), compares the groups with
//! Welch's t-test, and renders the results as a CSV frequency table and a
//! significance-annotated SVG bar chart.

pub mod analysis;
pub mod chart;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod json_output;
pub mod report;
