//! Colour conversion for terminal output.

use nalssi_core::Rgba;
use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::chars::UPPER_HALF;

/// Convert an engine colour to a 24-bit terminal colour, dropping alpha.
pub fn to_terminal_color(color: Rgba) -> Color {
    let (r, g, b) = color.to_rgb8();
    Color::Rgb(r, g, b)
}

/// A single cell showing two stacked pixels.
pub fn half_block_span(top: Rgba, bottom: Rgba) -> Span<'static> {
    Span::styled(
        UPPER_HALF,
        Style::new()
            .fg(to_terminal_color(top))
            .bg(to_terminal_color(bottom)),
    )
}
