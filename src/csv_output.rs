//! CSV output: the long-format frequency table
//!
//! One row per cell, `Group,Spike Frequency (Hz)`, the layout GraphPad
//! Prism and pandas both ingest directly.

use crate::analysis::NormalizedSample;

/// Header row of the frequency table
pub const CSV_HEADER: &str = "Group,Spike Frequency (Hz)";

/// CSV record for a single cell's firing frequency
#[derive(Debug, Clone)]
pub struct FrequencyRow {
    pub group: String,
    pub frequency_hz: f32,
}

/// CSV formatter for the two-group frequency table
#[derive(Debug, Default)]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build the table from both groups, first group's rows first
    ///
    /// Row order inside a group follows cell order, so the file lines up
    /// with the recording sheet.
    pub fn from_samples(a: &NormalizedSample, b: &NormalizedSample) -> Self {
        let mut table = Self::new();
        for sample in [a, b] {
            for &frequency_hz in &sample.frequencies_hz {
                table.add_row(FrequencyRow {
                    group: sample.label.clone(),
                    frequency_hz,
                });
            }
        }
        table
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: FrequencyRow) {
        self.rows.push(row);
    }

    /// Number of data rows (excluding the header)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        // If field contains comma, quote, or newline, wrap in quotes and escape quotes
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Format a single row
    fn format_row(row: &FrequencyRow) -> String {
        format!(
            "{},{}",
            Self::escape_field(&row.group),
            row.frequency_hz
        )
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(CSV_HEADER);
        output.push('\n');

        for row in &self.rows {
            output.push_str(&Self::format_row(row));
            output.push('\n');
        }

        output
    }
}
