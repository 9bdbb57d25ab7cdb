use raylib::prelude::*;
use slidedeck::constants::SLIDE_FILL;
use slidedeck::SlidePose;

pub struct Slide {
    pub image: Texture2D,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image }
    }

    /// Scale that fits the image inside the canvas without enlarging it.
    fn fit_scale(&self, canvas_width: f32, canvas_height: f32) -> f32 {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        (canvas_width * SLIDE_FILL / tex_width)
            .min(canvas_height * SLIDE_FILL / tex_height)
            .min(1.0)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, canvas_width: f32, canvas_height: f32, center: bool, pose: SlidePose) {
        if pose.alpha <= 0.0 {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        let scale = self.fit_scale(canvas_width, canvas_height) * pose.scale;
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        // Top aligned slides keep the same gap above as on the sides
        let center_y = if center {
            canvas_height * 0.5
        } else {
            canvas_height * (1.0 - SLIDE_FILL) * 0.5 + scaled_height * 0.5
        };
        let center_x = canvas_width * (0.5 + pose.offset_x);

        // Relative to the dest rectangle (ie. the center of the image)
        let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(center_x, center_y, scaled_width, scaled_height),
            origin,
            0.0,
            Color::new(255, 255, 255, (pose.alpha.clamp(0.0, 1.0) * 255.0) as u8),
        );
    }
}
