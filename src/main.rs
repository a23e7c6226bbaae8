//! plotgen - Line, Bar & Pie Charts from Text Data
//!
//! Picks a `.txt` data file, renders it as a line, pie and bar chart and saves
//! each one under the output directory.

use anyhow::{bail, Context};
use clap::Parser;
use plotgen::charts::{save_figure, ChartKind, ChartLabels, ChartRenderer};
use plotgen::config::RenderConfig;
use plotgen::data::check_extension;
use plotgen::pipeline::{plot_file, PlotError};
use std::path::PathBuf;

/// Render a two-column text file as line, pie and bar charts
#[derive(Parser, Debug)]
#[command(name = "plotgen", version)]
struct Cli {
    /// Data file; a file dialog opens when omitted
    file: Option<PathBuf>,

    /// JSON render settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory charts are saved to (overrides the config file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

/// Ask the user for a data file. `None` when the dialog is cancelled.
fn choose_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Text Files", &["txt"])
        .pick_file()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }

    let Some(path) = cli.file.or_else(choose_file) else {
        return Err(PlotError::NoFileSelected.into());
    };
    check_extension(&path)?;

    let renderer = ChartRenderer::new(config);
    let jobs = [
        (
            ChartKind::Line,
            ChartLabels::new("X Label", "Y Label", "Line Plot"),
        ),
        (ChartKind::Pie, ChartLabels::titled("Pie Chart")),
        (
            ChartKind::Bar,
            ChartLabels::new("X Label", "Y Label", "Bar Plot"),
        ),
    ];

    let mut failed = Vec::new();
    for (kind, labels) in &jobs {
        let result = plot_file(Some(path.as_path()), *kind, labels, &renderer)
            .map_err(anyhow::Error::from)
            .and_then(|figure| {
                save_figure(Some(&figure), &labels.title, renderer.config())
                    .map_err(anyhow::Error::from)
            });
        if let Err(e) = result {
            log::error!("{} chart: {e}", kind);
            failed.push(*kind);
        }
    }

    if !failed.is_empty() {
        bail!("{} of {} charts failed", failed.len(), jobs.len());
    }
    Ok(())
}
