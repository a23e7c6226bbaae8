//! Saving figures as trimmed PNG files.

use super::figure::Figure;
use crate::config::RenderConfig;
use image::ImageFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("No chart to save")]
    NoCurrentPlot,
    #[error("{0:?} cannot be used as a file name")]
    InvalidTitle(String),
    #[error("Failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Path a chart titled `title` is saved to.
pub fn plot_path(output_dir: &Path, title: &str) -> PathBuf {
    output_dir.join(format!("{title}.png"))
}

/// Write `figure` to `<output_dir>/<title>.png`, trimmed to its content.
///
/// With no figure nothing on disk is touched. An existing file with the same
/// title is overwritten.
pub fn save_figure(
    figure: Option<&Figure>,
    title: &str,
    config: &RenderConfig,
) -> Result<PathBuf, SaveError> {
    let figure = figure.ok_or(SaveError::NoCurrentPlot)?;
    check_title(title)?;

    let dir = &config.output_dir;
    std::fs::create_dir_all(dir).map_err(|source| SaveError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    let path = plot_path(dir, title);
    figure
        .trimmed(config.trim_padding)
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| SaveError::Encode {
            path: path.clone(),
            source,
        })?;

    log::info!("The chart was saved as {}", path.display());
    Ok(path)
}

fn check_title(title: &str) -> Result<(), SaveError> {
    let bad = title.trim().is_empty()
        || title == "."
        || title == ".."
        || title.contains(['/', '\\', '\0']);
    if bad {
        return Err(SaveError::InvalidTitle(title.to_string()));
    }
    Ok(())
}
