use std::path::PathBuf;

use log::{debug, info, warn};
use raylib::prelude::*;
use slidedeck::constants::TRANSITION_DURATION;
use slidedeck::{
    ConfigPatch, Deck, DisplayConfig, EnvironmentError, Navigation, PresentationEngine, SlidePose,
    Transition, transition,
};

use crate::viewer::slide::Slide;

struct ActiveTransition {
    style: Transition,
    from_slide: usize,
    direction: f32,
    tween: ease::Tween,
    timer: f32,
    progress: f32,
}

impl ActiveTransition {
    fn new(style: Transition, from_slide: usize, direction: f32) -> Self {
        Self {
            style,
            from_slide,
            direction,
            tween: ease::Tween::new(ease::cubic_out, 0.0, 1.0, TRANSITION_DURATION),
            timer: 0.0,
            progress: 0.0,
        }
    }
}

/// Image slides rendered with raylib into a fixed-size canvas.
pub struct RaylibEngine {
    slides: Vec<Slide>,
    source: PathBuf,
    config: Option<DisplayConfig>,
    deck: Deck,
    transition: Option<ActiveTransition>,
}

impl RaylibEngine {
    pub fn new(slides: Vec<Slide>, source: PathBuf) -> Self {
        Self {
            slides,
            source,
            config: None,
            deck: Deck::new(0),
            transition: None,
        }
    }

    /// Live configuration, once initialized.
    pub fn config(&self) -> Option<&DisplayConfig> {
        self.config.as_ref()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn navigate(&mut self, navigation: Navigation) {
        let Some(config) = self.config.as_ref() else {
            return;
        };
        let Some(from_slide) = self.deck.current_slide() else {
            return;
        };
        if !self.deck.navigate(navigation) {
            return;
        }

        // Wrapping around still travels in the requested direction
        let direction = match navigation {
            Navigation::Next | Navigation::Last => 1.0,
            Navigation::Prev | Navigation::First => -1.0,
        };
        debug!("{:?} -> slide {}", navigation, self.deck.slide_number(config.slide_number));

        self.transition = match config.transition {
            Transition::None => None,
            style => Some(ActiveTransition::new(style, from_slide, direction)),
        };
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(active) = self.transition.as_mut() {
            active.progress = active.tween.apply(dt);
            active.timer += dt;
            if active.timer >= TRANSITION_DURATION {
                self.transition = None;
            }
        }
    }

    /// Draws the current state into `framebuffer`. Returns `false` when
    /// there is nothing to draw yet.
    pub fn render_frame(&self, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool {
        let (Some(config), Some(current)) = (self.config.as_ref(), self.deck.current_slide()) else {
            return false;
        };

        let canvas_width = config.width as f32;
        let canvas_height = config.height as f32;

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLACK);

            match &self.transition {
                Some(active) => {
                    let (outgoing, incoming) = transition::poses(active.style, active.progress, active.direction);
                    self.slides[active.from_slide].draw(&mut d, canvas_width, canvas_height, config.center, outgoing);
                    self.slides[current].draw(&mut d, canvas_width, canvas_height, config.center, incoming);
                }
                None => {
                    self.slides[current].draw(&mut d, canvas_width, canvas_height, config.center, SlidePose::REST);
                }
            }
        });

        true
    }
}

impl PresentationEngine for RaylibEngine {
    fn initialize(&mut self, config: DisplayConfig) -> Result<(), EnvironmentError> {
        config.validate()?;
        if self.slides.is_empty() {
            return Err(EnvironmentError::NoSlides(self.source.clone()));
        }

        let mut deck = if config.shuffle {
            Deck::shuffled(self.slides.len(), &mut rand::rng())
        } else {
            Deck::new(self.slides.len())
        };
        deck.loop_slides = config.loop_slides;

        info!(
            "presenting {} slides from {:?} ({} transition, {}x{} canvas)",
            self.slides.len(),
            self.source,
            config.transition,
            config.width,
            config.height
        );

        self.deck = deck;
        self.config = Some(config);
        Ok(())
    }

    fn configure(&mut self, patch: &ConfigPatch) {
        let Some(config) = self.config.as_mut() else {
            warn!("configure called before initialize, ignoring {:?}", patch);
            return;
        };
        config.apply(patch);
        self.deck.loop_slides = config.loop_slides;
        debug!("configuration updated with {:?}", patch);
    }
}
