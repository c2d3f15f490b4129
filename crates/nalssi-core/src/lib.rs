//! Core types shared by the nalssi crates.
//!
//! Weather classification, per-style visual parameters, viewport geometry
//! and the colour palette the background is painted with.

mod color;
mod style;
mod viewport;

pub use color::{Palette, Rgba, ThemeMode};
pub use style::{
    ParamRange, SAMPLE_CODES, StyleCategory, StyleParameters, WeatherCode, classify,
};
pub use viewport::{Point, Viewport};
