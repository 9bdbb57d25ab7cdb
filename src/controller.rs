//! Drives the engine's display scale from a range control on the page.

use log::{debug, warn};

use crate::config::{ConfigPatch, DisplayConfig};
use crate::engine::PresentationEngine;
use crate::error::EnvironmentError;
use crate::widgets::{InputEvent, Page, Widget};

/// Scale as a percentage. Everything else is derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleState {
    pub percent: f32,
}

impl ScaleState {
    pub fn new(percent: f32) -> Self {
        Self { percent }
    }

    pub fn scale(&self) -> f32 {
        self.percent / 100.0
    }

    /// Empty border on each side, shrinking as the scale grows.
    pub fn margin(&self) -> f32 {
        (1.0 - self.scale()) / 2.0
    }

    pub fn readout(&self) -> String {
        format!("{}%", self.percent)
    }

    pub fn patch(&self) -> ConfigPatch {
        ConfigPatch::default()
            .with_margin(self.margin())
            .with_max_scale(self.scale())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Uninitialized,
    Initialized,
}

#[derive(Debug)]
pub struct ScaleController<E> {
    engine: E,
    slider_id: String,
    readout_id: String,
    startup_config: DisplayConfig,
    phase: Phase,
}

impl<E: PresentationEngine> ScaleController<E> {
    /// Binds the controller to its two page elements and subscribes it to
    /// the slider. Both elements must exist with the right kind.
    pub fn attach(
        engine: E,
        page: &Page,
        slider_id: &str,
        readout_id: &str,
    ) -> Result<Self, EnvironmentError> {
        match page.get(slider_id) {
            Some(Widget::Range(_)) => {}
            Some(_) => {
                return Err(EnvironmentError::WrongElementKind {
                    id: slider_id.to_string(),
                    expected: "range input",
                });
            }
            None => return Err(EnvironmentError::MissingElement(slider_id.to_string())),
        }
        match page.get(readout_id) {
            Some(Widget::Text(_)) => {}
            Some(_) => {
                return Err(EnvironmentError::WrongElementKind {
                    id: readout_id.to_string(),
                    expected: "text display",
                });
            }
            None => return Err(EnvironmentError::MissingElement(readout_id.to_string())),
        }

        Ok(Self {
            engine,
            slider_id: slider_id.to_string(),
            readout_id: readout_id.to_string(),
            startup_config: DisplayConfig::default(),
            phase: Phase::Uninitialized,
        })
    }

    /// Attach, initialize the engine, then replay the slider's current value
    /// so the readout and the engine agree from the first frame.
    pub fn start(
        engine: E,
        page: &mut Page,
        slider_id: &str,
        readout_id: &str,
    ) -> Result<Self, EnvironmentError> {
        Self::start_with_config(engine, page, slider_id, readout_id, DisplayConfig::default())
    }

    /// Like [`ScaleController::start`], with launch options layered onto the
    /// startup configuration.
    pub fn start_with_config(
        engine: E,
        page: &mut Page,
        slider_id: &str,
        readout_id: &str,
        config: DisplayConfig,
    ) -> Result<Self, EnvironmentError> {
        let mut controller = Self::attach(engine, page, slider_id, readout_id)?;
        controller.startup_config = config;
        controller.initialize()?;

        let event = page
            .synthesize_input(slider_id)
            .ok_or_else(|| EnvironmentError::MissingElement(slider_id.to_string()))?;
        controller.handle_event(page, &event);

        Ok(controller)
    }

    /// Hands the startup configuration to the engine. Only the first call
    /// reaches the engine.
    pub fn initialize(&mut self) -> Result<(), EnvironmentError> {
        if self.phase == Phase::Initialized {
            warn!("presentation engine already initialized, ignoring");
            return Ok(());
        }
        self.engine.initialize(self.startup_config.clone())?;
        self.phase = Phase::Initialized;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.phase == Phase::Initialized
    }

    /// Observer entry point for page events.
    pub fn handle_event(&mut self, page: &mut Page, event: &InputEvent) {
        if event.target != self.slider_id {
            return;
        }
        match event.value.trim().parse::<i32>() {
            Ok(value) => self.on_scale_changed(page, value as f32),
            Err(e) => warn!("ignoring scale value {:?}: {}", event.value, e),
        }
    }

    /// `raw` is a percentage within the slider's own bounds.
    pub fn on_scale_changed(&mut self, page: &mut Page, raw: f32) {
        let state = ScaleState::new(raw);

        if let Some(readout) = page.text_mut(&self.readout_id) {
            readout.text = state.readout();
        }

        debug!("scale {} -> margin {}, max scale {}", state.percent, state.margin(), state.scale());
        self.engine.configure(&state.patch());
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{RangeInput, TextDisplay};

    const SLIDER: &str = "scaleSlider";
    const READOUT: &str = "scaleValue";

    /// Keeps the merged live configuration and counts calls.
    #[derive(Debug, Default)]
    struct RecordingEngine {
        live: Option<DisplayConfig>,
        initialize_calls: usize,
        patches: Vec<ConfigPatch>,
        fail: bool,
    }

    impl PresentationEngine for RecordingEngine {
        fn initialize(&mut self, config: DisplayConfig) -> Result<(), EnvironmentError> {
            self.initialize_calls += 1;
            if self.fail {
                return Err(EnvironmentError::EngineUnavailable);
            }
            self.live = Some(config);
            Ok(())
        }

        fn configure(&mut self, patch: &ConfigPatch) {
            self.patches.push(patch.clone());
            if let Some(live) = self.live.as_mut() {
                live.apply(patch);
            }
        }
    }

    fn page(default: i32) -> Page {
        let mut page = Page::new();
        page.insert(SLIDER, Widget::Range(RangeInput::new(0, 100, 1, default)));
        page.insert(READOUT, Widget::Text(TextDisplay::default()));
        page
    }

    fn started(default: i32) -> (ScaleController<RecordingEngine>, Page) {
        let mut page = page(default);
        let controller =
            ScaleController::start(RecordingEngine::default(), &mut page, SLIDER, READOUT).unwrap();
        (controller, page)
    }

    fn live(controller: &ScaleController<RecordingEngine>) -> &DisplayConfig {
        controller.engine().live.as_ref().unwrap()
    }

    #[test]
    fn derived_values_for_every_percent() {
        for v in 0..=100 {
            let state = ScaleState::new(v as f32);
            let scale = v as f32 / 100.0;
            assert_eq!(state.scale(), scale);
            assert_eq!(state.margin(), (1.0 - scale) / 2.0);
            assert_eq!(state.readout(), format!("{}%", v));
        }
    }

    #[test]
    fn boundaries() {
        assert_eq!((ScaleState::new(0.0).scale(), ScaleState::new(0.0).margin()), (0.0, 0.5));
        assert_eq!((ScaleState::new(100.0).scale(), ScaleState::new(100.0).margin()), (1.0, 0.0));
        assert_eq!((ScaleState::new(50.0).scale(), ScaleState::new(50.0).margin()), (0.5, 0.25));
    }

    #[test]
    fn monotonic_in_percent() {
        for v in 0..100 {
            let lower = ScaleState::new(v as f32);
            let upper = ScaleState::new((v + 1) as f32);
            assert!(lower.scale() < upper.scale());
            assert!(lower.margin() > upper.margin());
        }
    }

    #[test]
    fn startup_overrides_static_margin() {
        let (controller, page) = started(100);

        assert!(controller.is_initialized());
        assert_eq!(controller.engine().initialize_calls, 1);
        assert_eq!(live(&controller).max_scale, 1.0);
        assert_eq!(live(&controller).margin, 0.0);
        assert_eq!(live(&controller).min_scale, 0.2);
        assert_eq!(page.text(READOUT).unwrap().text, "100%");
    }

    #[test]
    fn change_updates_readout_then_engine() {
        let (mut controller, mut page) = started(100);

        controller.on_scale_changed(&mut page, 50.0);

        assert_eq!(page.text(READOUT).unwrap().text, "50%");
        assert_eq!(
            controller.engine().patches.last(),
            Some(&ConfigPatch::default().with_margin(0.25).with_max_scale(0.5))
        );
        assert_eq!(live(&controller).transition, DisplayConfig::default().transition);
    }

    #[test]
    fn zero_percent_collapses_to_half_margin() {
        let (mut controller, mut page) = started(100);

        let event = page.input(SLIDER, 0).unwrap();
        controller.handle_event(&mut page, &event);

        assert_eq!(page.text(READOUT).unwrap().text, "0%");
        assert_eq!(live(&controller).max_scale, 0.0);
        assert_eq!(live(&controller).margin, 0.5);
    }

    #[test]
    fn every_percent_reaches_the_engine() {
        let (mut controller, mut page) = started(100);

        for v in 0..=100 {
            controller.on_scale_changed(&mut page, v as f32);
            let scale = v as f32 / 100.0;
            assert_eq!(live(&controller).max_scale, scale);
            assert_eq!(live(&controller).margin, (1.0 - scale) / 2.0);
            assert_eq!(page.text(READOUT).unwrap().text, format!("{}%", v));
        }
    }

    #[test]
    fn repeated_value_gives_same_configuration() {
        let (mut controller, mut page) = started(100);

        controller.on_scale_changed(&mut page, 30.0);
        let first = live(&controller).clone();
        controller.on_scale_changed(&mut page, 30.0);

        assert_eq!(live(&controller), &first);
        let patches = &controller.engine().patches;
        assert_eq!(patches[patches.len() - 1], patches[patches.len() - 2]);
    }

    #[test]
    fn slider_events_flow_through_the_observer() {
        let (mut controller, mut page) = started(100);

        let event = page.input(SLIDER, 20).unwrap();
        controller.handle_event(&mut page, &event);

        assert_eq!(page.text(READOUT).unwrap().text, "20%");
        assert_eq!(live(&controller).max_scale, 0.2);
        assert!((live(&controller).margin - 0.4).abs() < 1e-6);
    }

    #[test]
    fn events_for_other_targets_are_ignored() {
        let (mut controller, mut page) = started(100);
        let before = controller.engine().patches.len();

        let event = InputEvent { target: "volume".to_string(), value: "10".to_string() };
        controller.handle_event(&mut page, &event);
        let event = InputEvent { target: SLIDER.to_string(), value: "ten".to_string() };
        controller.handle_event(&mut page, &event);

        assert_eq!(controller.engine().patches.len(), before);
        assert_eq!(page.text(READOUT).unwrap().text, "100%");
    }

    #[test]
    fn launch_options_reach_the_engine_and_scale_still_wins() {
        let mut page = page(80);
        let config = DisplayConfig { loop_slides: true, shuffle: true, ..DisplayConfig::default() };

        let controller =
            ScaleController::start_with_config(RecordingEngine::default(), &mut page, SLIDER, READOUT, config)
                .unwrap();

        assert!(live(&controller).loop_slides);
        assert!(live(&controller).shuffle);
        assert_eq!(live(&controller).max_scale, 0.8);
        assert_eq!(page.text(READOUT).unwrap().text, "80%");
    }

    #[test]
    fn initialize_reaches_the_engine_once() {
        let (mut controller, _page) = started(100);
        controller.initialize().unwrap();
        assert_eq!(controller.engine().initialize_calls, 1);
    }

    #[test]
    fn missing_or_mistyped_elements_fail_at_attach() {
        let mut page = Page::new();
        page.insert(SLIDER, Widget::Range(RangeInput::new(0, 100, 1, 100)));

        let err = ScaleController::attach(RecordingEngine::default(), &page, SLIDER, READOUT).unwrap_err();
        assert!(matches!(err, EnvironmentError::MissingElement(id) if id == READOUT));

        page.insert(READOUT, Widget::Range(RangeInput::new(0, 1, 1, 0)));
        let err = ScaleController::attach(RecordingEngine::default(), &page, SLIDER, READOUT).unwrap_err();
        assert!(matches!(err, EnvironmentError::WrongElementKind { expected: "text display", .. }));

        let err = ScaleController::attach(RecordingEngine::default(), &page, "nope", READOUT).unwrap_err();
        assert!(matches!(err, EnvironmentError::MissingElement(id) if id == "nope"));
    }

    #[test]
    fn engine_failure_propagates_from_start() {
        let mut page = page(100);
        let engine = RecordingEngine { fail: true, ..RecordingEngine::default() };

        let err = ScaleController::start(engine, &mut page, SLIDER, READOUT).unwrap_err();

        assert!(matches!(err, EnvironmentError::EngineUnavailable));
        assert_eq!(page.text(READOUT).unwrap().text, "");
    }

    #[test]
    fn works_through_a_borrowed_engine() {
        let mut engine = RecordingEngine::default();
        let mut page = page(60);
        {
            let controller = ScaleController::start(&mut engine, &mut page, SLIDER, READOUT).unwrap();
            assert!(controller.is_initialized());
        }
        assert_eq!(engine.live.unwrap().max_scale, 0.6);
    }
}
