use anyhow::{Context, Result};
use clap::Parser;
use spikefreq::{
    analysis, chart,
    cli::{Cli, OutputFormat},
    config::StudyConfig,
    csv_output::FrequencyTable,
    json_output::JsonReport,
    report,
};
use std::fs;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for diagnostic output on stderr
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Assemble the study from the file (if given) plus CLI overrides
fn resolve_study(args: &Cli) -> Result<StudyConfig> {
    if args.study.is_none() && (args.counts_a.is_none() || args.counts_b.is_none()) {
        anyhow::bail!(
            "Must provide either --study FILE or both --counts-a and --counts-b. See --help."
        );
    }
    if args.study.is_none() && args.duration.is_none() {
        anyhow::bail!("Must provide --duration when no study file is given.");
    }

    let mut study = match &args.study {
        Some(path) => StudyConfig::from_file(path)?,
        None => StudyConfig::empty(),
    };

    if let Some(duration) = args.duration {
        study.recording_duration = duration;
    }
    if let Some(label) = &args.label_a {
        study.group_a.label = label.clone();
    }
    if let Some(counts) = &args.counts_a {
        study.group_a.counts = counts.clone();
    }
    if let Some(label) = &args.label_b {
        study.group_b.label = label.clone();
    }
    if let Some(counts) = &args.counts_b {
        study.group_b.counts = counts.clone();
    }

    study.validate().map_err(|e| anyhow::anyhow!(e))?;

    Ok(study)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let study = resolve_study(&args)?;
    tracing::info!(
        "study: '{}' ({} cells) vs '{}' ({} cells), duration {} s",
        study.group_a.label,
        study.group_a.counts.len(),
        study.group_b.label,
        study.group_b.counts.len(),
        study.recording_duration
    );

    let (group_a, group_b) = study.to_samples();
    let outcome = analysis::evaluate(study.recording_duration, &group_a, &group_b)?;

    let table = FrequencyTable::from_samples(&outcome.sample_a, &outcome.sample_b);
    fs::write(&args.csv, table.to_csv())
        .with_context(|| format!("Failed to write {}", args.csv.display()))?;
    tracing::info!("frequency table written to {}", args.csv.display());

    let plot_path = if args.no_plot {
        None
    } else {
        chart::render_svg(&args.plot, &outcome, &chart::ChartStyle::default())
            .with_context(|| format!("Failed to render chart to {}", args.plot.display()))?;
        Some(args.plot.as_path())
    };

    match args.format {
        OutputFormat::Text => {
            print!("{}", report::render_report(&outcome, &args.csv, plot_path));
        }
        OutputFormat::Json => {
            println!("{}", JsonReport::from_outcome(&outcome).to_string_pretty()?);
        }
    }

    Ok(())
}
