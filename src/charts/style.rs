//! Chart colors and text sizes.

use plotters::style::RGBColor;

/// Canvas background; also the color trimmed away on save.
pub const BACKGROUND: RGBColor = RGBColor(255, 255, 255);

pub const AXIS_COLOR: RGBColor = RGBColor(0, 0, 0);

pub const PALETTE: [RGBColor; 10] = [
    RGBColor(52, 152, 219),  // Blue
    RGBColor(231, 76, 60),   // Red
    RGBColor(46, 204, 113),  // Green
    RGBColor(155, 89, 182),  // Purple
    RGBColor(243, 156, 18),  // Orange
    RGBColor(26, 188, 156),  // Teal
    RGBColor(233, 30, 99),   // Pink
    RGBColor(0, 188, 212),   // Cyan
    RGBColor(121, 85, 72),   // Brown
    RGBColor(96, 125, 139),  // Blue Grey
];

pub const TITLE_SIZE: u32 = 28;
pub const AXIS_DESC_SIZE: u32 = 18;
pub const TICK_LABEL_SIZE: u32 = 14;
pub const WEDGE_LABEL_SIZE: u32 = 16;

/// Color for the `index`-th series, bar or wedge.
pub fn series_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}
