//! End-to-end frames for representative weather codes.

use std::time::Duration;

use nalssi_background::{
    AnimationDriver, BackgroundState, Canvas, Layer, Scene, compose, particles, rasterize, streaks,
};
use nalssi_core::{Palette, StyleCategory, Viewport, WeatherCode};

const VIEW: Viewport = Viewport::new(360.0, 640.0);

fn scene_for(code: i32, elapsed_ms: u64) -> Scene {
    let sample = AnimationDriver::new().sample(Duration::from_millis(elapsed_ms));
    compose(WeatherCode(code).style(), VIEW, &sample, &Palette::dark())
}

#[test]
fn clear_sky() {
    let style = WeatherCode(0).style();
    assert_eq!(style, StyleCategory::Clear);
    assert_eq!(style.intensity(), 1.0);

    let scene = scene_for(0, 0);
    assert_eq!(scene.dot_count(), 120);
    assert_eq!(scene.stroke_count(), 0);
}

#[test]
fn rain() {
    let style = WeatherCode(61).style();
    assert_eq!(style, StyleCategory::Rain);
    assert_eq!(style.intensity(), 1.1);

    let scene = scene_for(61, 4_000);
    assert_eq!(scene.dot_count(), 121);
    assert_eq!(scene.stroke_count(), 37);
    let Some(Layer::Strokes(strokes)) = scene.layers.last() else {
        panic!("rain must end with streaks");
    };
    for stroke in strokes {
        assert!((stroke.width - 1.98).abs() < 1e-5);
        assert!((stroke.color.a - 0.066).abs() < 1e-5);
    }
}

#[test]
fn snow() {
    let style = WeatherCode(75).style();
    assert_eq!(style, StyleCategory::Snow);
    assert_eq!(particles(style, 0.0, VIEW).len(), 144);
    for p in particles(style, 0.3, VIEW) {
        assert!(p.radius >= 0.9 * 0.9 - 1e-5 && p.radius <= (0.9 + 1.8) * 0.9 + 1e-5);
        assert!(p.speed >= 0.10 * 0.9 - 1e-5 && p.speed <= (0.10 + 0.35) * 0.9 + 1e-5);
    }
    assert_eq!(streaks(style, 0.3, VIEW).len(), 0);
}

#[test]
fn unmapped_code_falls_back_to_cloudy() {
    let style = WeatherCode(200).style();
    assert_eq!(style, StyleCategory::Cloudy);
    assert_eq!(style.intensity(), 0.95);
    assert_eq!(scene_for(200, 0).dot_count(), 114);
}

#[test]
fn same_instant_gives_same_frame() {
    assert_eq!(scene_for(95, 7_250), scene_for(95, 7_250));
}

#[test]
fn dots_are_painted_over_the_wash() {
    let scene = scene_for(0, 2_000);
    let mut without_dots = scene.clone();
    without_dots.layers.retain(|layer| !matches!(layer, Layer::Dots(_)));

    let mut with = Canvas::new(360, 640);
    let mut bare = Canvas::new(360, 640);
    rasterize(&scene, &mut with);
    rasterize(&without_dots, &mut bare);
    assert_ne!(with, bare);
}

#[test]
fn terminal_frame_dimensions() {
    let mut state = BackgroundState::new();
    state.attach();
    for code in [0, 45, 61, 75, 95] {
        let lines = state.draw_lines(
            WeatherCode(code),
            30,
            8,
            &Palette::light(),
            Duration::from_secs(3),
        );
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|line| line.spans.len() == 30));
    }
}
