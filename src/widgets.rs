//! Page elements the viewer draws on top of the slides.
//!
//! The page owns its elements by id. Anything that needs an element looks it
//! up once, up front, and keeps the id.

use std::collections::HashMap;

/// Change notification emitted by a range control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub target: String,
    pub value: String,
}

/// Integer range control. The value is kept as text, like a form field.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeInput {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    value: String,
}

impl RangeInput {
    /// `value` is clamped into `min..=max`. Inverted bounds are swapped.
    pub fn new(min: i32, max: i32, step: i32, value: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let mut input = Self { min, max, step: step.max(1), value: String::new() };
        input.value = input.constrain(value).to_string();
        input
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn value_as_number(&self) -> Option<i32> {
        self.value.parse().ok()
    }

    /// Clamp to the bounds and snap to the nearest step from `min`.
    pub fn constrain(&self, value: i32) -> i32 {
        let value = value.clamp(self.min, self.max);
        let steps = ((value - self.min) as f32 / self.step as f32).round() as i32;
        (self.min + steps * self.step).min(self.max)
    }

    /// Sets the value. Returns `true` when it changed.
    pub fn set_value(&mut self, value: i32) -> bool {
        let value = self.constrain(value).to_string();
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }

    /// Value at `fraction` (0.0 to 1.0) of the track.
    pub fn value_at(&self, fraction: f32) -> i32 {
        let fraction = fraction.clamp(0.0, 1.0);
        self.constrain(self.min + ((self.max - self.min) as f32 * fraction).round() as i32)
    }

    /// Position of the current value along the track, 0.0 to 1.0.
    pub fn fraction(&self) -> f32 {
        if self.max == self.min {
            return 0.0;
        }
        let value = self.value_as_number().unwrap_or(self.min);
        (value - self.min) as f32 / (self.max - self.min) as f32
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDisplay {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Range(RangeInput),
    Text(TextDisplay),
}

#[derive(Debug, Default)]
pub struct Page {
    widgets: HashMap<String, Widget>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, widget: Widget) {
        self.widgets.insert(id.into(), widget);
    }

    pub fn get(&self, id: &str) -> Option<&Widget> {
        self.widgets.get(id)
    }

    pub fn range(&self, id: &str) -> Option<&RangeInput> {
        match self.widgets.get(id) {
            Some(Widget::Range(range)) => Some(range),
            _ => None,
        }
    }

    pub fn range_mut(&mut self, id: &str) -> Option<&mut RangeInput> {
        match self.widgets.get_mut(id) {
            Some(Widget::Range(range)) => Some(range),
            _ => None,
        }
    }

    pub fn text(&self, id: &str) -> Option<&TextDisplay> {
        match self.widgets.get(id) {
            Some(Widget::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn text_mut(&mut self, id: &str) -> Option<&mut TextDisplay> {
        match self.widgets.get_mut(id) {
            Some(Widget::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// User interaction with a range control. Emits an event only when the
    /// stored value actually changed.
    pub fn input(&mut self, id: &str, value: i32) -> Option<InputEvent> {
        let range = self.range_mut(id)?;
        if !range.set_value(value) {
            return None;
        }
        Some(InputEvent { target: id.to_string(), value: range.value().to_string() })
    }

    /// Builds a change event from the control's current value without
    /// touching it.
    pub fn synthesize_input(&self, id: &str) -> Option<InputEvent> {
        let range = self.range(id)?;
        Some(InputEvent { target: id.to_string(), value: range.value().to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_clamps_and_snaps() {
        let mut range = RangeInput::new(0, 100, 5, 140);
        assert_eq!(range.value(), "100");
        assert!(range.set_value(-3));
        assert_eq!(range.value(), "0");
        assert!(range.set_value(48));
        assert_eq!(range.value(), "50");
        assert!(!range.set_value(51));
    }

    #[test]
    fn inverted_bounds_are_normalised() {
        let mut range = RangeInput::new(100, 0, 1, 50);
        assert_eq!((range.min, range.max), (0, 100));
        assert_eq!(range.value(), "50");
        assert!(range.set_value(250));
        assert_eq!(range.value(), "100");
    }

    #[test]
    fn track_fraction_maps_to_values() {
        let range = RangeInput::new(0, 100, 1, 25);
        assert_eq!(range.fraction(), 0.25);
        assert_eq!(range.value_at(0.0), 0);
        assert_eq!(range.value_at(0.334), 33);
        assert_eq!(range.value_at(1.7), 100);
    }

    #[test]
    fn lookups_check_the_kind() {
        let mut page = Page::new();
        page.insert("slider", Widget::Range(RangeInput::new(0, 100, 1, 100)));
        page.insert("label", Widget::Text(TextDisplay::default()));

        assert!(page.range("slider").is_some());
        assert!(page.range("label").is_none());
        assert!(page.text("label").is_some());
        assert!(page.text("slider").is_none());
        assert!(page.get("missing").is_none());
    }

    #[test]
    fn input_emits_only_on_change() {
        let mut page = Page::new();
        page.insert("slider", Widget::Range(RangeInput::new(0, 100, 1, 100)));

        assert_eq!(page.input("slider", 100), None);
        assert_eq!(
            page.input("slider", 40),
            Some(InputEvent { target: "slider".to_string(), value: "40".to_string() })
        );
        assert_eq!(page.input("missing", 40), None);
    }

    #[test]
    fn synthesized_event_carries_current_value() {
        let mut page = Page::new();
        page.insert("slider", Widget::Range(RangeInput::new(0, 100, 1, 75)));

        let event = page.synthesize_input("slider").unwrap();
        assert_eq!(event.value, "75");
        assert_eq!(page.range("slider").unwrap().value(), "75");
    }
}
