//! Slide deck viewer core: display configuration, deck navigation, canvas
//! layout and the scale control that reconfigures the engine while it runs.

pub mod config;
pub mod constants;
pub mod controller;
pub mod deck;
pub mod engine;
pub mod error;
pub mod layout;
pub mod transition;
pub mod widgets;

pub use config::{ConfigPatch, DisplayConfig, SlideNumberFormat, Transition};
pub use controller::{ScaleController, ScaleState};
pub use deck::{Deck, Navigation};
pub use engine::PresentationEngine;
pub use error::{ConfigError, EnvironmentError};
pub use layout::Viewport;
pub use transition::SlidePose;
pub use widgets::{InputEvent, Page, RangeInput, TextDisplay, Widget};
