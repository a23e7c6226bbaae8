//! Static Chart Renderer
//! Draws line, bar and pie charts with plotters into an in-memory RGB canvas.
//!
//! Every call allocates its own canvas and returns it inside a [`Figure`], so
//! drawing one chart can never leak into the next.

use super::figure::{ChartKind, Figure};
use super::style::{
    series_color, AXIS_COLOR, AXIS_DESC_SIZE, BACKGROUND, TICK_LABEL_SIZE, TITLE_SIZE,
    WEDGE_LABEL_SIZE,
};
use crate::config::RenderConfig;
use crate::data::Dataset;
use image::RgbImage;
use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Nothing to draw: the dataset has no records")]
    EmptyDataset,
    #[error("Record {index} has a text key; line charts need numeric x values")]
    NonNumericKey { index: usize },
    #[error("Pie weights must be non-negative and not all zero")]
    InvalidPieWeights,
    #[error("Values from {min} to {max} span too wide a range to draw an axis")]
    RangeTooWide { min: f64, max: f64 },
    #[error("Drawing failed: {0}")]
    Backend(String),
}

fn backend<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Backend(err.to_string())
}

/// Axis descriptions and caption. Empty strings are not drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartLabels {
    pub x_label: String,
    pub y_label: String,
    pub title: String,
}

impl ChartLabels {
    pub fn new(
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            x_label: x_label.into(),
            y_label: y_label.into(),
            title: title.into(),
        }
    }

    /// Caption only, no axis descriptions.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Stateless chart renderer; holds only its settings.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    config: RenderConfig,
}

impl ChartRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `dataset` as the given kind. Pie charts ignore axis labels.
    pub fn render(
        &self,
        kind: ChartKind,
        dataset: &Dataset,
        labels: &ChartLabels,
    ) -> Result<Figure, RenderError> {
        match kind {
            ChartKind::Line => self.render_line(dataset, labels),
            ChartKind::Bar => self.render_bar(dataset, labels),
            ChartKind::Pie => self.render_pie(dataset, &labels.title),
        }
    }

    /// Numeric `(x, y)` points in file order, joined by a line.
    pub fn render_line(&self, dataset: &Dataset, labels: &ChartLabels) -> Result<Figure, RenderError> {
        if dataset.is_empty() {
            return Err(RenderError::EmptyDataset);
        }
        let points = dataset
            .records
            .iter()
            .enumerate()
            .map(|(index, r)| {
                r.key
                    .as_f64()
                    .map(|x| (x, r.value))
                    .ok_or(RenderError::NonNumericKey { index })
            })
            .collect::<Result<Vec<(f64, f64)>, _>>()?;

        let x_range = padded_range(points.iter().map(|p| p.0), 0.0)?;
        let y_range = padded_range(points.iter().map(|p| p.1), 0.05)?;
        let x_label = x_axis_label(dataset, labels);
        let font = self.config.font_family.as_str();

        log::debug!("Rendering line chart with {} points", points.len());
        let image = self.draw(|root| {
            let mut builder = ChartBuilder::on(root);
            builder
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(70);
            if !labels.title.is_empty() {
                builder.caption(&labels.title, (font, TITLE_SIZE).into_font());
            }
            let mut chart = builder
                .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)
                .map_err(backend)?;

            let mut mesh = chart.configure_mesh();
            mesh.label_style((font, TICK_LABEL_SIZE).into_font())
                .axis_desc_style((font, AXIS_DESC_SIZE).into_font());
            if !x_label.is_empty() {
                mesh.x_desc(x_label);
            }
            if !labels.y_label.is_empty() {
                mesh.y_desc(&labels.y_label);
            }
            mesh.draw().map_err(backend)?;

            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    series_color(0).stroke_width(2),
                ))
                .map_err(backend)?;
            Ok(())
        })?;

        Ok(Figure::new(ChartKind::Line, labels.title.clone(), image))
    }

    /// One bar per record in file order; the keys become the category ticks.
    pub fn render_bar(&self, dataset: &Dataset, labels: &ChartLabels) -> Result<Figure, RenderError> {
        if dataset.is_empty() {
            return Err(RenderError::EmptyDataset);
        }
        let names = dataset.labels();
        let heights = dataset.values();
        let last = heights.len() - 1;

        // Bars grow from zero, so zero is always in view.
        let y_range = padded_range(heights.iter().copied().chain([0.0]), 0.05)?;
        let x_label = x_axis_label(dataset, labels);
        let font = self.config.font_family.as_str();

        let format_category = |v: &SegmentValue<usize>| match v {
            SegmentValue::CenterOf(i) => names.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        };

        log::debug!("Rendering bar chart with {} bars", heights.len());
        let image = self.draw(|root| {
            let mut builder = ChartBuilder::on(root);
            builder
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(70);
            if !labels.title.is_empty() {
                builder.caption(&labels.title, (font, TITLE_SIZE).into_font());
            }
            let mut chart = builder
                .build_cartesian_2d((0..last).into_segmented(), y_range.0..y_range.1)
                .map_err(backend)?;

            let mut mesh = chart.configure_mesh();
            mesh.disable_x_mesh()
                .x_labels(heights.len())
                .x_label_formatter(&format_category)
                .label_style((font, TICK_LABEL_SIZE).into_font())
                .axis_desc_style((font, AXIS_DESC_SIZE).into_font());
            if !x_label.is_empty() {
                mesh.x_desc(x_label);
            }
            if !labels.y_label.is_empty() {
                mesh.y_desc(&labels.y_label);
            }
            mesh.draw().map_err(backend)?;

            chart
                .draw_series(
                    Histogram::vertical(&chart)
                        .style(series_color(0).filled())
                        .margin(8)
                        .data(heights.iter().copied().enumerate()),
                )
                .map_err(backend)?;
            Ok(())
        })?;

        Ok(Figure::new(ChartKind::Bar, labels.title.clone(), image))
    }

    /// One wedge per record, labelled with its key. No axes.
    pub fn render_pie(&self, dataset: &Dataset, title: &str) -> Result<Figure, RenderError> {
        if dataset.is_empty() {
            return Err(RenderError::EmptyDataset);
        }
        let sizes = dataset.values();
        if sizes.iter().any(|v| *v < 0.0) || sizes.iter().sum::<f64>() <= 0.0 {
            return Err(RenderError::InvalidPieWeights);
        }
        let names = dataset.labels();
        let colors: Vec<RGBColor> = (0..sizes.len()).map(series_color).collect();
        let font = self.config.font_family.as_str();

        log::debug!("Rendering pie chart with {} wedges", sizes.len());
        let image = self.draw(|root| {
            let titled;
            let area = if title.is_empty() {
                root
            } else {
                titled = root
                    .titled(title, (font, TITLE_SIZE).into_font())
                    .map_err(backend)?;
                &titled
            };

            let (width, height) = area.dim_in_pixel();
            let center = (width as i32 / 2, height as i32 / 2);
            let radius = f64::from(width.min(height)) * 0.35;

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &names);
            pie.label_style((font, WEDGE_LABEL_SIZE).into_font().color(&AXIS_COLOR));
            area.draw(&pie).map_err(backend)?;
            Ok(())
        })?;

        Ok(Figure::new(ChartKind::Pie, title, image))
    }

    /// Run `paint` on a fresh white canvas and return the pixels.
    fn draw<F>(&self, paint: F) -> Result<RgbImage, RenderError>
    where
        F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<(), RenderError>,
    {
        let (width, height) = (self.config.width, self.config.height);
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&BACKGROUND).map_err(backend)?;
            paint(&root)?;
            root.present().map_err(backend)?;
        }
        RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| RenderError::Backend("canvas size does not match buffer".to_string()))
    }
}

/// The file's `xlabel:` header wins over the caller's label.
fn x_axis_label<'a>(dataset: &'a Dataset, labels: &'a ChartLabels) -> &'a str {
    dataset.x_label.as_deref().unwrap_or(&labels.x_label)
}

/// Widest axis span plotters can lay out ticks for without overflowing.
const MAX_AXIS_SPAN: f64 = f64::MAX / 16.0;

/// `(min, max)` widened by `fraction` of the span on each side. A zero span
/// is widened by at least one unit so the axis is never degenerate. Padding
/// is dropped when it would push the axis past [`MAX_AXIS_SPAN`].
fn padded_range(
    values: impl Iterator<Item = f64>,
    fraction: f64,
) -> Result<(f64, f64), RenderError> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return Ok((0.0, 1.0));
    }

    let span = max - min;
    if !(span <= MAX_AXIS_SPAN) {
        return Err(RenderError::RangeTooWide { min, max });
    }

    let pad = if span == 0.0 {
        (min.abs() * 0.05).max(1.0)
    } else {
        span * fraction
    };
    let (lo, hi) = (min - pad, max + pad);
    let widened = hi - lo;
    if widened.is_finite() && widened <= MAX_AXIS_SPAN {
        Ok((lo, hi))
    } else if span > 0.0 {
        Ok((min, max))
    } else {
        Err(RenderError::RangeTooWide { min, max })
    }
}
