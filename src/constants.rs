pub const RENDER_WIDTH: u32 = 1920;           // Logical canvas width
pub const RENDER_HEIGHT: u32 = 1200;          // Logical canvas height (16:10)
pub const FPS: u32 = 60;                      // Frames per second

pub const BASE_MARGIN: f32 = 0.04;            // Fraction of the window left empty around the canvas
pub const MIN_SCALE: f32 = 0.2;               // Lower bound applied when fitting the canvas
pub const MAX_SCALE: f32 = 2.0;               // Upper bound applied when fitting the canvas

pub const TRANSITION_DURATION: f32 = 0.5;     // Duration of a slide transition (seconds)
pub const SLIDE_FILL: f32 = 0.9;              // Largest fraction of the canvas an image may cover

pub const SCALE_SLIDER_ID: &str = "scaleSlider";
pub const SCALE_READOUT_ID: &str = "scaleValue";
