//! Character constants for terminal presentation.

/// Upper half block: foreground paints the top pixel, background the bottom one.
pub const UPPER_HALF: &str = "▀";

/// Vertical canvas pixels per terminal cell.
pub const PIXELS_PER_CELL: usize = 2;
