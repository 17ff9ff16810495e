//! Painting game objects onto a `Surface`
//!
//! Drawing only reads game state.

use glam::Vec2;

use super::surface::Surface;
use crate::colors;
use crate::consts::{GUIDE_LINE_OFFSET, GUIDE_LINE_WIDTH};
use crate::sim::{Ball, Game, Paddle};

impl Ball {
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.set_fill_color(self.color);
        surface.fill_circle(self.pos, self.radius);
    }
}

impl Paddle {
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.set_fill_color(self.color);
        surface.fill_rect(self.pos, self.size);
    }
}

impl Game {
    /// Background and the two guide lines
    pub fn draw_field(&self, surface: &mut impl Surface) {
        let (w, h) = (self.field.width, self.field.height);

        surface.set_fill_color(colors::FIELD);
        surface.fill_rect(Vec2::ZERO, Vec2::new(w, h));

        surface.set_stroke_color(colors::WHITE);
        surface.set_line_width(GUIDE_LINE_WIDTH);
        for x in [GUIDE_LINE_OFFSET, w - GUIDE_LINE_OFFSET] {
            surface.stroke_line(Vec2::new(x, 0.0), Vec2::new(x, h));
        }
    }

    /// Repaint the whole frame. Paddles go last so they sit on top of balls.
    pub fn draw(&self, surface: &mut impl Surface) {
        surface.clear_rect(Vec2::ZERO, Vec2::new(self.field.width, self.field.height));
        self.draw_field(surface);

        for ball in &self.balls {
            ball.draw(surface);
        }
        for paddle in self.paddles() {
            paddle.draw(surface);
        }
    }
}
