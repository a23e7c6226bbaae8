//! Charts module - chart rendering and saving

mod figure;
mod persist;
mod renderer;
mod style;

pub use figure::{ChartKind, Figure};
pub use persist::{plot_path, save_figure, SaveError};
pub use renderer::{ChartLabels, ChartRenderer, RenderError};
pub use style::PALETTE;
