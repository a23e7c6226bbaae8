//! Rendered chart handle.

use super::style::BACKGROUND;
use crate::data::KeyMode;
use image::{imageops, Rgb, RgbImage};
use std::fmt;

/// The three supported chart types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Bar, ChartKind::Pie];

    /// How this chart reads the first field of each line.
    pub fn key_mode(self) -> KeyMode {
        match self {
            ChartKind::Line | ChartKind::Pie => KeyMode::Numeric,
            ChartKind::Bar => KeyMode::Label,
        }
    }

    /// Whether the chart draws axes (and so uses axis labels).
    pub fn has_axes(self) -> bool {
        !matches!(self, ChartKind::Pie)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        };
        f.write_str(name)
    }
}

/// A finished chart. Each render call returns a new one; nothing is shared
/// between figures.
#[derive(Debug, Clone)]
pub struct Figure {
    kind: ChartKind,
    title: String,
    image: RgbImage,
}

impl Figure {
    pub(crate) fn new(kind: ChartKind, title: impl Into<String>, image: RgbImage) -> Self {
        Self {
            kind,
            title: title.into(),
            image,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Full canvas as rendered.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Crop to the bounding box of non-background pixels, keeping `padding`
    /// pixels around it. A blank canvas is returned whole.
    pub fn trimmed(&self, padding: u32) -> RgbImage {
        let Some((min_x, min_y, max_x, max_y)) = content_bounds(&self.image) else {
            return self.image.clone();
        };
        let (width, height) = self.image.dimensions();

        let left = min_x.saturating_sub(padding);
        let top = min_y.saturating_sub(padding);
        let right = max_x.saturating_add(padding).min(width - 1);
        let bottom = max_y.saturating_add(padding).min(height - 1);

        imageops::crop_imm(&self.image, left, top, right - left + 1, bottom - top + 1).to_image()
    }
}

/// Inclusive `(min_x, min_y, max_x, max_y)` of pixels that differ from the
/// background, or `None` for a blank image.
fn content_bounds(image: &RgbImage) -> Option<(u32, u32, u32, u32)> {
    let background = Rgb([BACKGROUND.0, BACKGROUND.1, BACKGROUND.2]);
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds
}
