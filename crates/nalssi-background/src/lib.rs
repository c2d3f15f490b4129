//! Weather-driven procedural background for the terminal.
//!
//! A weather code is classified into a visual style; a set of long-running
//! channels is sampled once per frame; the compositor layers a fill, a wash,
//! a vignette, particle dots and (for rain) streaks; the rasterizer paints the
//! scene onto a half-block pixel canvas.

pub mod animations;
mod chars;
mod clock;
mod color;
pub mod compositor;
pub mod raster;
mod state;

pub use animations::driver::{AnimationDriver, ChannelSample};
pub use animations::particles::{Particle, Streak, particles, streaks};
pub use clock::FrameClock;
pub use color::{half_block_span, to_terminal_color};
pub use compositor::{Layer, Scene, compose};
pub use raster::{Canvas, rasterize};
pub use state::BackgroundState;
