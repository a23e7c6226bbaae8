//! File-to-figure pipeline: load, validate, render.

use crate::charts::{ChartKind, ChartLabels, ChartRenderer, Figure, RenderError};
use crate::data::{load_and_validate, LoaderError};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("No file selected")]
    NoFileSelected,
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Load `path` for `kind` and render it.
///
/// The dataset is read fresh on every call. On error no figure exists.
pub fn plot_file(
    path: Option<&Path>,
    kind: ChartKind,
    labels: &ChartLabels,
    renderer: &ChartRenderer,
) -> Result<Figure, PlotError> {
    let path = path.ok_or(PlotError::NoFileSelected)?;
    let dataset = load_and_validate(path, kind.key_mode())?;
    log::debug!(
        "Plotting {} as a {kind} chart ({} records)",
        path.display(),
        dataset.len()
    );
    Ok(renderer.render(kind, &dataset, labels)?)
}
