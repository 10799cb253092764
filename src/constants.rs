//! Sizing, color, and styling constants for the search window.

/// Gap between view elements
pub const GAP: f32 = 8.0;

/// Padding around the whole view
pub const PADDING: f32 = 12.0;

/// Query input width
pub const QUERY_INPUT_WIDTH: f32 = 180.0;

/// Input font size
pub const INPUT_FONT: f32 = 13.0;

/// Label and table font size
pub const LABEL_FONT: f32 = 12.0;

/// Header font size
pub const HEADER_FONT: f32 = 18.0;

/// Swatch cell size in the results table
pub const SWATCH_SIZE: f32 = 20.0;

/// Border radius for swatches and inputs
pub const RADIUS: f32 = 3.0;

/// Result table column widths: name, hex, RGB, HSL
pub const NAME_COLUMN: f32 = 160.0;
pub const HEX_COLUMN: f32 = 72.0;
pub const RGB_COLUMN: f32 = 96.0;
pub const HSL_COLUMN: f32 = 96.0;

/// Error banner text color (r, g, b)
pub const ERROR_RGB: (u8, u8, u8) = (200, 40, 40);
