//! Error kinds shared by the library and the viewer binary.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid display configuration values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("scale bounds must satisfy 0 < min_scale <= max_scale (got {min} and {max})")]
    ScaleBounds { min: f32, max: f32 },
    #[error("canvas size must be non-zero (got {width}x{height})")]
    CanvasSize { width: u32, height: u32 },
    #[error("margin must be within [0, 1) (got {0})")]
    Margin(f32),
    #[error("unknown transition style '{0}'")]
    UnknownTransition(String),
    #[error("unknown slide number format '{0}'")]
    UnknownSlideNumberFormat(String),
}

/// Missing or unusable collaborators at startup.
///
/// None of these are recoverable: without the page elements or the engine
/// there is nothing to present, so callers propagate them to the top level.
#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("page element '{0}' not found")]
    MissingElement(String),
    #[error("page element '{id}' is not a {expected}")]
    WrongElementKind { id: String, expected: &'static str },
    /// For engine implementations that cannot reach their rendering backend.
    /// The raylib viewer owns its window, so it reports `NoSlides` or
    /// `InvalidConfig` instead.
    #[error("presentation engine is not available")]
    EngineUnavailable,
    #[error("invalid display configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("no slides to present in {0:?}")]
    NoSlides(PathBuf),
}
