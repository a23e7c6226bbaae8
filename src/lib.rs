//! plotgen - two-column text data to chart images
//!
//! Reads `key,value` lines from a `.txt` file, validates them, renders a
//! line, bar or pie chart and saves it as a trimmed PNG.

pub mod charts;
pub mod config;
pub mod data;
pub mod pipeline;

pub use charts::{save_figure, ChartKind, ChartLabels, ChartRenderer, Figure};
pub use config::RenderConfig;
pub use data::{is_txt, load_and_validate, Dataset, KeyMode};
pub use pipeline::{plot_file, PlotError};
