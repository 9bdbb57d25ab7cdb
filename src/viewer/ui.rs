//! Window-space overlays: the scale slider with its readout, the navigation
//! arrows, the progress bar and the slide number.

use raylib::prelude::*;
use slidedeck::{Deck, DisplayConfig, InputEvent, Navigation, Page};

const ACCENT: Color = Color { r: 0x42, g: 0xaf, b: 0xfa, a: 255 };
const TRACK: Color = Color { r: 255, g: 255, b: 255, a: 60 };

const FONT_SIZE: i32 = 20;
const ARROW_RADIUS: f32 = 14.0;
const PROGRESS_HEIGHT: f32 = 4.0;

/// Range control drawn in the top-left corner.
pub struct SliderView {
    track: Rectangle,
    dragging: bool,
}

impl SliderView {
    pub fn new(x: f32, y: f32, width: f32) -> Self {
        Self {
            track: Rectangle::new(x, y, width, 6.0),
            dragging: false,
        }
    }

    /// Area that reacts to the mouse, a little taller than the track itself.
    fn hit_area(&self) -> Rectangle {
        Rectangle::new(self.track.x - 8.0, self.track.y - 10.0, self.track.width + 16.0, self.track.height + 20.0)
    }

    pub fn contains(&self, point: Vector2) -> bool {
        self.hit_area().check_collision_point_rec(point)
    }

    /// Feeds mouse input to the range control `id`. Emits an event while the
    /// knob is dragged to a new value.
    pub fn update(&mut self, rl: &RaylibHandle, page: &mut Page, id: &str) -> Option<InputEvent> {
        let mouse = rl.get_mouse_position();

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) && self.contains(mouse) {
            self.dragging = true;
        }
        if !rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            self.dragging = false;
        }
        if !self.dragging {
            return None;
        }

        let fraction = (mouse.x - self.track.x) / self.track.width;
        let value = page.range(id)?.value_at(fraction);
        page.input(id, value)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, page: &Page, slider_id: &str, readout_id: &str) {
        let Some(range) = page.range(slider_id) else {
            return;
        };

        d.draw_rectangle_rec(self.track, TRACK);
        let filled = Rectangle::new(self.track.x, self.track.y, self.track.width * range.fraction(), self.track.height);
        d.draw_rectangle_rec(filled, ACCENT);

        let knob = Vector2::new(filled.x + filled.width, self.track.y + self.track.height * 0.5);
        d.draw_circle_v(knob, if self.dragging { 9.0 } else { 7.0 }, Color::WHITE);

        if let Some(readout) = page.text(readout_id) {
            let x = (self.track.x + self.track.width + 16.0) as i32;
            let y = (self.track.y + self.track.height * 0.5) as i32 - FONT_SIZE / 2;
            d.draw_text(&readout.text, x, y, FONT_SIZE, Color::WHITE);
        }
    }
}

fn arrow_centers(screen_width: f32, screen_height: f32) -> (Vector2, Vector2) {
    let y = screen_height - 3.0 * ARROW_RADIUS;
    (
        Vector2::new(screen_width - 6.0 * ARROW_RADIUS, y),
        Vector2::new(screen_width - 3.0 * ARROW_RADIUS, y),
    )
}

fn within(point: Vector2, center: Vector2, radius: f32) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx * dx + dy * dy <= radius * radius
}

/// Navigation requested by a click on the on-screen arrows.
pub fn clicked_control(rl: &RaylibHandle, config: &DisplayConfig) -> Option<Navigation> {
    if !config.controls || !rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        return None;
    }

    let mouse = rl.get_mouse_position();
    let (prev, next) = arrow_centers(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
    if within(mouse, prev, ARROW_RADIUS * 1.5) {
        Some(Navigation::Prev)
    } else if within(mouse, next, ARROW_RADIUS * 1.5) {
        Some(Navigation::Next)
    } else {
        None
    }
}

pub fn pressed_navigation(rl: &RaylibHandle, config: &DisplayConfig) -> Option<Navigation> {
    if !config.keyboard {
        return None;
    }

    let pressed = |keys: &[KeyboardKey]| keys.iter().any(|key| rl.is_key_pressed(*key));
    if pressed(&[KeyboardKey::KEY_RIGHT, KeyboardKey::KEY_DOWN, KeyboardKey::KEY_SPACE, KeyboardKey::KEY_PAGE_DOWN]) {
        Some(Navigation::Next)
    } else if pressed(&[KeyboardKey::KEY_LEFT, KeyboardKey::KEY_UP, KeyboardKey::KEY_PAGE_UP]) {
        Some(Navigation::Prev)
    } else if pressed(&[KeyboardKey::KEY_HOME]) {
        Some(Navigation::First)
    } else if pressed(&[KeyboardKey::KEY_END]) {
        Some(Navigation::Last)
    } else {
        None
    }
}

pub fn draw_overlays(d: &mut RaylibDrawHandle, config: &DisplayConfig, deck: &Deck) {
    let screen_width = d.get_screen_width() as f32;
    let screen_height = d.get_screen_height() as f32;

    if config.progress {
        let bar = Rectangle::new(0.0, screen_height - PROGRESS_HEIGHT, screen_width, PROGRESS_HEIGHT);
        d.draw_rectangle_rec(bar, TRACK);
        d.draw_rectangle_rec(Rectangle::new(bar.x, bar.y, bar.width * deck.progress(), bar.height), ACCENT);
    }

    if config.controls {
        let (prev, next) = arrow_centers(screen_width, screen_height);
        let can_prev = deck.loop_slides || deck.index() > 0;
        let can_next = deck.loop_slides || deck.index() + 1 < deck.len();
        let tint = |enabled: bool| if enabled { ACCENT } else { TRACK };

        d.draw_poly(prev, 3, ARROW_RADIUS, 180.0, tint(can_prev));
        d.draw_poly(next, 3, ARROW_RADIUS, 0.0, tint(can_next));
    }

    // Sits left of the arrows when they are shown
    let number = deck.slide_number(config.slide_number);
    let reserved = if config.controls { 8.0 * ARROW_RADIUS } else { 16.0 };
    let estimated_width = number.len() as f32 * FONT_SIZE as f32 * 0.6;
    let x = screen_width - reserved - estimated_width;
    let y = screen_height - 3.0 * ARROW_RADIUS - FONT_SIZE as f32 * 0.5;
    d.draw_text(&number, x as i32, y as i32, FONT_SIZE, Color::WHITE);
}
