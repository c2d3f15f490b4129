//! Background state for one terminal screen.

use std::time::Duration;

use nalssi_core::{Palette, StyleCategory, Viewport, WeatherCode};
use ratatui::{Frame, text::Line, widgets::Paragraph};

use crate::animations::driver::AnimationDriver;
use crate::chars::PIXELS_PER_CELL;
use crate::clock::FrameClock;
use crate::color::half_block_span;
use crate::compositor::compose;
use crate::raster::{Canvas, rasterize};

/// Smallest accepted pixel scale.
const MIN_PIXEL_SCALE: f32 = 0.25;

/// Background animation state.
///
/// The clock and channels exist only while attached. A detached background
/// draws nothing and holds no running animation.
#[derive(Debug)]
pub struct BackgroundState {
    clock: Option<FrameClock>,
    driver: Option<AnimationDriver>,
    /// Reused pixel buffer, two pixels per cell vertically.
    canvas: Canvas,
    /// Style of the previous frame, for change logging.
    last_style: Option<StyleCategory>,
    /// Viewport pixels per canvas pixel.
    pixel_scale: f32,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundState {
    /// Create a detached background state.
    pub fn new() -> Self {
        Self {
            clock: None,
            driver: None,
            canvas: Canvas::new(0, 0),
            last_style: None,
            pixel_scale: 1.0,
        }
    }

    /// Set how many viewport pixels one canvas pixel spans.
    pub fn with_pixel_scale(mut self, pixel_scale: f32) -> Self {
        self.pixel_scale = if pixel_scale.is_finite() {
            pixel_scale.max(MIN_PIXEL_SCALE)
        } else {
            1.0
        };
        self
    }

    pub fn pixel_scale(&self) -> f32 {
        self.pixel_scale
    }

    /// Start the clock and channels. Does nothing when already attached.
    pub fn attach(&mut self) {
        if self.is_attached() {
            return;
        }
        log::debug!("background attached");
        self.clock = Some(FrameClock::start());
        self.driver = Some(AnimationDriver::new());
    }

    /// Stop the animation and release the clock.
    pub fn detach(&mut self) {
        if !self.is_attached() {
            return;
        }
        log::debug!("background detached");
        self.clock = None;
        self.driver = None;
        self.last_style = None;
    }

    pub fn is_attached(&self) -> bool {
        self.clock.is_some() && self.driver.is_some()
    }

    /// Render the background for `code` to the whole frame.
    pub fn render(&mut self, frame: &mut Frame, code: WeatherCode, palette: &Palette) {
        let Some(elapsed) = self.clock.as_mut().map(FrameClock::sample) else {
            return;
        };
        let area = frame.area();
        let lines = self.draw_lines(code, area.width, area.height, palette, elapsed);
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Draw one frame at `elapsed` as terminal lines of `width` x `height` cells.
    ///
    /// Returns no lines when detached.
    pub fn draw_lines(
        &mut self,
        code: WeatherCode,
        width: u16,
        height: u16,
        palette: &Palette,
        elapsed: Duration,
    ) -> Vec<Line<'static>> {
        let Some(driver) = self.driver.as_ref() else {
            return Vec::new();
        };

        let style = code.style();
        if self.last_style != Some(style) {
            log::debug!("background style {style} for weather code {code}");
            self.last_style = Some(style);
        }

        let cols = usize::from(width);
        let rows = usize::from(height);
        let viewport = Viewport::new(
            cols as f32 * self.pixel_scale,
            (rows * PIXELS_PER_CELL) as f32 * self.pixel_scale,
        );

        let sample = driver.sample(elapsed);
        let scene = compose(style, viewport, &sample, palette);
        log::trace!(
            "frame at {:?}: {} dots, {} streaks",
            elapsed,
            scene.dot_count(),
            scene.stroke_count()
        );

        self.canvas.resize(cols, rows * PIXELS_PER_CELL);
        rasterize(&scene, &mut self.canvas);

        (0..rows)
            .map(|row| {
                let top = row * PIXELS_PER_CELL;
                let spans: Vec<_> = (0..cols)
                    .filter_map(|x| {
                        let upper = self.canvas.pixel(x, top)?;
                        let lower = self.canvas.pixel(x, top + 1)?;
                        Some(half_block_span(upper, lower))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    use crate::chars::UPPER_HALF;

    #[test]
    fn test_detached_draws_nothing() {
        let mut state = BackgroundState::new();
        assert!(!state.is_attached());
        let lines = state.draw_lines(WeatherCode(0), 20, 10, &Palette::dark(), Duration::ZERO);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_attached_fills_every_cell() {
        let mut state = BackgroundState::new();
        state.attach();
        let lines = state.draw_lines(
            WeatherCode(61),
            40,
            12,
            &Palette::dark(),
            Duration::from_millis(1_500),
        );
        assert_eq!(lines.len(), 12);
        for line in &lines {
            assert_eq!(line.spans.len(), 40);
            assert!(line.spans.iter().all(|s| s.content == UPPER_HALF));
        }
    }

    #[test]
    fn test_cells_are_colored() {
        let mut state = BackgroundState::new();
        state.attach();
        let lines = state.draw_lines(WeatherCode(3), 8, 4, &Palette::light(), Duration::ZERO);
        let span = &lines[0].spans[0];
        assert!(matches!(span.style.fg, Some(Color::Rgb(..))));
        assert!(matches!(span.style.bg, Some(Color::Rgb(..))));
    }

    #[test]
    fn test_detach_stops_drawing() {
        let mut state = BackgroundState::new();
        state.attach();
        assert!(state.is_attached());
        state.detach();
        assert!(!state.is_attached());
        let lines = state.draw_lines(WeatherCode(0), 10, 5, &Palette::dark(), Duration::ZERO);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_zero_sized_area() {
        let mut state = BackgroundState::new();
        state.attach();
        let lines = state.draw_lines(WeatherCode(95), 0, 0, &Palette::dark(), Duration::ZERO);
        assert!(lines.is_empty());
    }

    #[test]
    fn test_pixel_scale_is_sanitized() {
        assert_eq!(BackgroundState::new().with_pixel_scale(f32::NAN).pixel_scale(), 1.0);
        assert_eq!(BackgroundState::new().with_pixel_scale(0.0).pixel_scale(), 0.25);
        assert_eq!(BackgroundState::new().with_pixel_scale(2.0).pixel_scale(), 2.0);
    }
}
