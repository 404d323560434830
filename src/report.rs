//! Human-readable study report
//!
//! The default `--format text` output: group summaries, the Welch test
//! line, and confirmation of the written artifacts.

use std::path::Path;

use crate::analysis::StudyOutcome;

/// Render the text report for a completed study
pub fn render_report(outcome: &StudyOutcome, csv_path: &Path, plot_path: Option<&Path>) -> String {
    let mut report = String::new();

    report.push_str("📊 Spike Frequency Comparison\n");
    report.push_str("=============================\n\n");

    report.push_str(&format!("Recording duration: {} s\n\n", outcome.duration_s));

    let label_width = outcome
        .summary_a
        .label
        .len()
        .max(outcome.summary_b.label.len());
    for summary in [&outcome.summary_a, &outcome.summary_b] {
        report.push_str(&format!(
            "  {:<width$}  n = {:<3} mean = {:.4} Hz  SEM = {:.4} Hz  median = {:.4} Hz\n",
            summary.label,
            summary.n,
            summary.mean,
            summary.sem,
            summary.median,
            width = label_width
        ));
    }

    let comparison = &outcome.comparison;
    report.push_str(&format!(
        "\nWelch's t-test: t = {:.4}, df = {:.1}, p = {:.4}\n",
        comparison.t_statistic, comparison.df, comparison.p_value
    ));
    report.push_str(&format!(
        "Result: {} ({})\n",
        comparison.significance.label(),
        comparison.significance.annotation()
    ));

    report.push_str(&format!(
        "\n✅ Frequency table written to {}\n",
        csv_path.display()
    ));
    if let Some(path) = plot_path {
        report.push_str(&format!("✅ Chart written to {}\n", path.display()));
    }

    report
}
