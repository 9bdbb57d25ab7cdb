//! Display options understood by the presentation engine.

use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::ConfigError;

/// How one slide replaces the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    Fade,
    Slide,
    Convex,
    Concave,
    Zoom,
}

impl Transition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transition::None => "none",
            Transition::Fade => "fade",
            Transition::Slide => "slide",
            Transition::Convex => "convex",
            Transition::Concave => "concave",
            Transition::Zoom => "zoom",
        }
    }
}

impl FromStr for Transition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Transition::None),
            "fade" => Ok(Transition::Fade),
            "slide" => Ok(Transition::Slide),
            "convex" => Ok(Transition::Convex),
            "concave" => Ok(Transition::Concave),
            "zoom" => Ok(Transition::Zoom),
            other => Err(ConfigError::UnknownTransition(other.to_string())),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format of the slide number shown in the corner.
///
/// `h`/`v` are the horizontal and vertical positions, `c` the current slide
/// and `t` the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideNumberFormat {
    HorizontalDotVertical,   // h.v
    HorizontalSlashVertical, // h/v
    Current,                 // c
    CurrentOfTotal,          // c/t
}

impl SlideNumberFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideNumberFormat::HorizontalDotVertical => "h.v",
            SlideNumberFormat::HorizontalSlashVertical => "h/v",
            SlideNumberFormat::Current => "c",
            SlideNumberFormat::CurrentOfTotal => "c/t",
        }
    }
}

impl FromStr for SlideNumberFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h.v" => Ok(SlideNumberFormat::HorizontalDotVertical),
            "h/v" => Ok(SlideNumberFormat::HorizontalSlashVertical),
            "c" => Ok(SlideNumberFormat::Current),
            "c/t" => Ok(SlideNumberFormat::CurrentOfTotal),
            other => Err(ConfigError::UnknownSlideNumberFormat(other.to_string())),
        }
    }
}

impl fmt::Display for SlideNumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full engine configuration, handed over once at initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Mirror the current slide as a `#/<index>` fragment (window title).
    pub hash: bool,
    /// Show the previous/next arrows.
    pub controls: bool,
    /// Show the progress bar.
    pub progress: bool,
    /// Center slide content vertically.
    pub center: bool,
    pub transition: Transition,
    pub slide_number: SlideNumberFormat,
    /// Logical canvas size in pixels.
    pub width: u32,
    pub height: u32,
    /// Fraction of the window kept empty around the canvas.
    pub margin: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Wrap around at the first and last slide.
    pub loop_slides: bool,
    /// Randomize slide order at initialization.
    pub shuffle: bool,
    pub keyboard: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hash: true,
            controls: true,
            progress: true,
            center: true,
            transition: Transition::Slide,
            slide_number: SlideNumberFormat::CurrentOfTotal,
            width: RENDER_WIDTH,
            height: RENDER_HEIGHT,
            margin: BASE_MARGIN,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            loop_slides: false,
            shuffle: false,
            keyboard: true,
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale) {
            return Err(ConfigError::ScaleBounds { min: self.min_scale, max: self.max_scale });
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::CanvasSize { width: self.width, height: self.height });
        }
        if !(0.0..1.0).contains(&self.margin) {
            return Err(ConfigError::Margin(self.margin));
        }
        Ok(())
    }

    /// Merge a partial update. Fields left unset in `patch` keep their value.
    pub fn apply(&mut self, patch: &ConfigPatch) {
        fn merge<T: Copy>(field: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *field = value;
            }
        }

        merge(&mut self.hash, patch.hash);
        merge(&mut self.controls, patch.controls);
        merge(&mut self.progress, patch.progress);
        merge(&mut self.center, patch.center);
        merge(&mut self.transition, patch.transition);
        merge(&mut self.slide_number, patch.slide_number);
        merge(&mut self.width, patch.width);
        merge(&mut self.height, patch.height);
        merge(&mut self.margin, patch.margin);
        merge(&mut self.min_scale, patch.min_scale);
        merge(&mut self.max_scale, patch.max_scale);
        merge(&mut self.loop_slides, patch.loop_slides);
        merge(&mut self.shuffle, patch.shuffle);
        merge(&mut self.keyboard, patch.keyboard);
    }
}

/// Partial configuration for live updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigPatch {
    pub hash: Option<bool>,
    pub controls: Option<bool>,
    pub progress: Option<bool>,
    pub center: Option<bool>,
    pub transition: Option<Transition>,
    pub slide_number: Option<SlideNumberFormat>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub margin: Option<f32>,
    pub min_scale: Option<f32>,
    pub max_scale: Option<f32>,
    pub loop_slides: Option<bool>,
    pub shuffle: Option<bool>,
    pub keyboard: Option<bool>,
}

impl ConfigPatch {
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_max_scale(mut self, max_scale: f32) -> Self {
        self.max_scale = Some(max_scale);
        self
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == ConfigPatch::default()
    }
}
