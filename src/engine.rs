use crate::config::{ConfigPatch, DisplayConfig};
use crate::error::EnvironmentError;

/// The slide engine as seen by the code that drives it.
pub trait PresentationEngine {
    fn initialize(&mut self, config: DisplayConfig) -> Result<(), EnvironmentError>;
    fn configure(&mut self, patch: &ConfigPatch);
}

impl<E: PresentationEngine + ?Sized> PresentationEngine for &mut E {
    fn initialize(&mut self, config: DisplayConfig) -> Result<(), EnvironmentError> {
        (**self).initialize(config)
    }

    fn configure(&mut self, patch: &ConfigPatch) {
        (**self).configure(patch)
    }
}

impl<E: PresentationEngine + ?Sized> PresentationEngine for Box<E> {
    fn initialize(&mut self, config: DisplayConfig) -> Result<(), EnvironmentError> {
        (**self).initialize(config)
    }

    fn configure(&mut self, patch: &ConfigPatch) {
        (**self).configure(patch)
    }
}
