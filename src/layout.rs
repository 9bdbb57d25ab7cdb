//! Fitting the logical canvas into the window.

use crate::config::DisplayConfig;

/// Where the scaled canvas lands in the window, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Scale factor for a canvas of `config.width`x`config.height` shown in a
/// window of the given size.
///
/// The margin is taken off each axis first, then the scale is clamped to
/// `min_scale` and afterwards to `max_scale`, so `max_scale` wins when a live
/// update has pushed it below `min_scale`.
pub fn fit_scale(window_width: f32, window_height: f32, config: &DisplayConfig) -> f32 {
    let available_width = window_width - window_width * config.margin;
    let available_height = window_height - window_height * config.margin;

    let scale = (available_width / config.width as f32).min(available_height / config.height as f32);
    scale.max(config.min_scale).min(config.max_scale)
}

pub fn fit(window_width: f32, window_height: f32, config: &DisplayConfig) -> Viewport {
    let scale = fit_scale(window_width, window_height, config);
    let width = config.width as f32 * scale;
    let height = config.height as f32 * scale;

    Viewport {
        scale,
        x: (window_width - width) * 0.5,
        y: (window_height - height) * 0.5,
        width,
        height,
    }
}
