use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::SlideNumberFormat;

/// A navigation request from the keyboard or the on-screen controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Prev,
    First,
    Last,
}

/// Navigation state over a flat list of slides.
///
/// `order` maps presentation positions to slide indices, so a shuffled deck
/// keeps the loaded slides where they are.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    order: Vec<usize>,
    index: usize,
    pub loop_slides: bool,
}

impl Deck {
    pub fn new(count: usize) -> Self {
        Self {
            order: (0..count).collect(),
            index: 0,
            loop_slides: false,
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut deck = Self::new(count);
        deck.order.shuffle(rng);
        deck
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Presentation position, zero based.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Index of the slide shown at the current position.
    pub fn current_slide(&self) -> Option<usize> {
        self.order.get(self.index).copied()
    }

    pub fn navigate(&mut self, navigation: Navigation) -> bool {
        match navigation {
            Navigation::Next => self.next(),
            Navigation::Prev => self.prev(),
            Navigation::First => self.first(),
            Navigation::Last => self.last(),
        }
    }

    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.len() {
            self.goto(self.index + 1)
        } else if self.loop_slides {
            self.goto(0)
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.goto(self.index - 1)
        } else if self.loop_slides && !self.is_empty() {
            self.goto(self.len() - 1)
        } else {
            false
        }
    }

    pub fn first(&mut self) -> bool {
        self.goto(0)
    }

    pub fn last(&mut self) -> bool {
        self.goto(self.len().saturating_sub(1))
    }

    /// Moves to `index` if it exists. Returns whether the position changed.
    pub fn goto(&mut self, index: usize) -> bool {
        if index >= self.len() || index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    /// Fraction of the deck already shown, 0.0 on the first slide and 1.0 on
    /// the last.
    pub fn progress(&self) -> f32 {
        if self.len() < 2 {
            return 0.0;
        }
        self.index as f32 / (self.len() - 1) as f32
    }

    /// The deck is flat, so the `h.v` and `h/v` formats never carry a
    /// vertical part and show the horizontal position alone.
    pub fn slide_number(&self, format: SlideNumberFormat) -> String {
        let current = self.index + 1;
        match format {
            SlideNumberFormat::HorizontalDotVertical
            | SlideNumberFormat::HorizontalSlashVertical
            | SlideNumberFormat::Current => format!("{}", current),
            SlideNumberFormat::CurrentOfTotal => format!("{}/{}", current, self.len()),
        }
    }

    pub fn hash_fragment(&self) -> String {
        format!("#/{}", self.index)
    }
}
