//! Immediate-mode 2D drawing surface
//!
//! The shape of a canvas 2D context: fill/stroke color and line width are
//! state, shapes are drawn one call at a time. `DrawList` records the calls
//! with the state resolved so a backend can replay them.

use glam::Vec2;

use crate::colors::Rgba;

/// Something game objects can paint on
pub trait Surface {
    /// Erase a rectangle to transparent
    fn clear_rect(&mut self, origin: Vec2, size: Vec2);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
    fn set_fill_color(&mut self, color: Rgba);
    fn set_stroke_color(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f32);
}

/// One recorded drawing call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear {
        origin: Vec2,
        size: Vec2,
    },
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

/// Recording surface
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    fill: Rgba,
    stroke: Rgba,
    line_width: f32,
}

impl Default for DrawList {
    /// Canvas defaults: black fill and stroke, 1px lines
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            fill: [0.0, 0.0, 0.0, 1.0],
            stroke: [0.0, 0.0, 0.0, 1.0],
            line_width: 1.0,
        }
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands and reset the drawing state
    pub fn reset(&mut self) {
        let defaults = Self::default();
        self.commands.clear();
        self.fill = defaults.fill;
        self.stroke = defaults.stroke;
        self.line_width = defaults.line_width;
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DrawList {
    fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::Clear { origin, size });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color: self.fill,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: self.fill,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width: self.line_width,
            color: self.stroke,
        });
    }

    fn set_fill_color(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Rgba) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        // Canvas ignores non-positive and non-finite widths
        if width.is_finite() && width > 0.0 {
            self.line_width = width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    #[test]
    fn test_state_is_captured_per_command() {
        let mut list = DrawList::new();
        list.set_fill_color(colors::RED);
        list.fill_rect(Vec2::ZERO, Vec2::ONE);
        list.set_fill_color(colors::BLUE);
        list.fill_circle(Vec2::ONE, 2.0);

        assert_eq!(
            list.commands,
            vec![
                DrawCommand::Rect {
                    origin: Vec2::ZERO,
                    size: Vec2::ONE,
                    color: colors::RED,
                },
                DrawCommand::Circle {
                    center: Vec2::ONE,
                    radius: 2.0,
                    color: colors::BLUE,
                },
            ]
        );
    }

    #[test]
    fn test_line_width_rejects_invalid() {
        let mut list = DrawList::new();
        list.set_line_width(3.0);
        list.set_line_width(0.0);
        list.set_line_width(f32::NAN);
        list.stroke_line(Vec2::ZERO, Vec2::Y);
        assert!(matches!(
            list.commands[0],
            DrawCommand::Line { width, .. } if width == 3.0
        ));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut list = DrawList::new();
        list.set_fill_color(colors::RED);
        list.fill_rect(Vec2::ZERO, Vec2::ONE);
        list.reset();
        assert!(list.is_empty());
        assert_eq!(list, DrawList::new());
    }
}
