//! Significance-annotated bar chart
//!
//! Reproduces the standard two-group figure: mean bars with SEM error bars,
//! individual cells overlaid as points, per-group n labels, and a bracket
//! between the bars carrying the significance stars.
//!
//! Rendering targets SVG only. The SVG backend emits `<text>` elements
//! without rasterizing glyphs, so charts render on hosts with no installed
//! fonts.

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use crate::analysis::{GroupSummary, NormalizedSample, StudyOutcome};

/// Visual parameters of the figure
#[derive(Clone, Debug)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,

    /// Half the bar width in group-axis units (bars sit at x = 0 and x = 1)
    pub bar_half_width: f32,

    /// Fill colors for the first and second group's bars
    pub bar_colors: [RGBColor; 2],
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            bar_half_width: 0.3,
            bar_colors: [RGBColor(0, 128, 0), RGBColor(128, 0, 128)],
        }
    }
}

/// Vertical geometry of the figure, derived from the data
///
/// Kept separate from rendering so the stacking order (points below error
/// bars below bracket below stars) is testable without a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Top of the y axis
    pub y_axis_max: f32,

    /// Baseline of the significance bracket
    pub bracket_y: f32,

    /// Height of the bracket's two vertical ticks
    pub bracket_tick: f32,

    /// Gap between an error-bar cap and its n label (also the star gap)
    pub n_label_offset: f32,
}

/// Compute the vertical layout for two summarized groups
///
/// The bracket clears every bar top, error-bar cap, and individual point;
/// the axis leaves room for the stars above the bracket. Near-flat data is
/// clamped to a minimum span so the figure never collapses.
pub fn compute_layout(
    summaries: [&GroupSummary; 2],
    samples: [&NormalizedSample; 2],
) -> ChartLayout {
    let mut data_top = 0.0f32;
    for summary in summaries {
        data_top = data_top.max(summary.mean + summary.sem);
    }
    for sample in samples {
        for &f in &sample.frequencies_hz {
            data_top = data_top.max(f);
        }
    }

    let span = data_top.max(1e-3);

    ChartLayout {
        y_axis_max: data_top + span * 0.23,
        bracket_y: data_top + span * 0.08,
        bracket_tick: span * 0.03,
        n_label_offset: span * 0.04,
    }
}

/// Render the figure to an SVG file
pub fn render_svg(path: &Path, outcome: &StudyOutcome, style: &ChartStyle) -> Result<()> {
    let root = SVGBackend::new(path, (style.width, style.height)).into_drawing_area();
    draw_chart(&root, outcome, style)?;
    tracing::info!("chart written to {}", path.display());
    Ok(())
}

/// Render the figure into an SVG string
pub fn render_svg_string(outcome: &StudyOutcome, style: &ChartStyle) -> Result<String> {
    let mut buffer = String::new();
    {
        let root =
            SVGBackend::with_string(&mut buffer, (style.width, style.height)).into_drawing_area();
        draw_chart(&root, outcome, style)?;
    }
    Ok(buffer)
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    outcome: &StudyOutcome,
    style: &ChartStyle,
) -> Result<()>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    if outcome.sample_a.frequencies_hz.is_empty() || outcome.sample_b.frequencies_hz.is_empty() {
        anyhow::bail!("chart requires at least one frequency per group");
    }

    let summaries = [&outcome.summary_a, &outcome.summary_b];
    let samples = [&outcome.sample_a, &outcome.sample_b];
    let layout = compute_layout(summaries, samples);

    root.fill(&WHITE)?;

    let label_a = outcome.summary_a.label.as_str();
    let label_b = outcome.summary_b.label.as_str();

    let mut chart = ChartBuilder::on(root)
        .margin(16)
        .x_label_area_size(42)
        .y_label_area_size(64)
        .build_cartesian_2d(-0.6f32..1.6f32, 0.0f32..layout.y_axis_max)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(5)
        .y_labels(6)
        .x_label_formatter(&|x: &f32| {
            if (*x).abs() < 0.25 {
                label_a.to_string()
            } else if (*x - 1.0).abs() < 0.25 {
                label_b.to_string()
            } else {
                String::new()
            }
        })
        .y_label_formatter(&|y: &f32| format!("{:.2}", y))
        .y_desc("Spike Frequency (Hz)")
        .axis_desc_style(("sans-serif", 16))
        .label_style(("sans-serif", 13))
        .draw()?;

    let centered = Pos::new(HPos::Center, VPos::Bottom);
    let n_style = TextStyle::from(("sans-serif", 14).into_font()).pos(centered);
    let star_style = TextStyle::from(("sans-serif", 22).into_font()).pos(centered);

    for (i, (summary, sample)) in summaries.iter().zip(samples.iter()).enumerate() {
        let x = i as f32;
        let half = style.bar_half_width;
        let color = style.bar_colors[i % style.bar_colors.len()];

        // Mean bar, filled then outlined
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - half, 0.0), (x + half, summary.mean)],
            color.mix(0.85).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x - half, 0.0), (x + half, summary.mean)],
            BLACK.stroke_width(1),
        )))?;

        // SEM error bar with caps, clipped at zero
        if summary.sem > 0.0 {
            let lo = (summary.mean - summary.sem).max(0.0);
            let hi = summary.mean + summary.sem;
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(x, lo), (x, hi)],
                BLACK.stroke_width(2),
            )))?;
            let cap = half * 0.25;
            for y in [lo, hi] {
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![(x - cap, y), (x + cap, y)],
                    BLACK.stroke_width(2),
                )))?;
            }
        }

        // Individual cells on top of the bar
        chart.draw_series(
            sample
                .frequencies_hz
                .iter()
                .map(|&f| Circle::new((x, f), 4, color.filled())),
        )?;
        chart.draw_series(
            sample
                .frequencies_hz
                .iter()
                .map(|&f| Circle::new((x, f), 4, BLACK.stroke_width(1))),
        )?;

        chart.draw_series(std::iter::once(Text::new(
            format!("n = {}", summary.n),
            (x, summary.mean + summary.sem + layout.n_label_offset),
            n_style.clone(),
        )))?;
    }

    // Bracket between the bars with the significance annotation above it
    let y = layout.bracket_y;
    let tick = layout.bracket_tick;
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, y), (0.0, y + tick), (1.0, y + tick), (1.0, y)],
        BLACK.stroke_width(2),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        outcome.comparison.significance.annotation().to_string(),
        (0.5, y + tick + layout.n_label_offset),
        star_style,
    )))?;

    root.present()?;
    Ok(())
}
