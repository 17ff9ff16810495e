//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in canvas pixel space.

use glam::Vec2;
use std::f32::consts::PI;

use super::surface::{DrawCommand, DrawList};
use super::vertex::Vertex;
use crate::colors::{self, Rgba};
use crate::consts::CIRCLE_SEGMENTS;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Rgba, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(origin: Vec2, size: Vec2, color: Rgba) -> Vec<Vertex> {
    let min = origin;
    let max = origin + size;
    quad(
        [
            Vec2::new(min.x, min.y),
            Vec2::new(max.x, min.y),
            Vec2::new(max.x, max.y),
            Vec2::new(min.x, max.y),
        ],
        color,
    )
}

/// Generate vertices for a stroked segment (butt caps, like canvas)
pub fn line(from: Vec2, to: Vec2, width: f32, color: Rgba) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    quad([from + perp, to + perp, to - perp, from - perp], color)
}

fn quad(corners: [Vec2; 4], color: Rgba) -> Vec<Vertex> {
    let [a, b, c, d] = corners.map(|p| Vertex::new(p.x, p.y, color));
    // Two triangles
    vec![a, b, c, a, c, d]
}

/// Tessellated frame, ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Color the render pass clears to before drawing
    pub clear_color: Rgba,
    pub vertices: Vec<Vertex>,
}

impl Frame {
    /// Replay a draw list at the given viewport size (in pixels).
    ///
    /// A clear covering the viewport discards everything recorded before it.
    /// Partial clears cannot erase blended triangles and are skipped.
    pub fn from_draw_list(list: &DrawList, viewport: Vec2) -> Self {
        let mut frame = Self {
            clear_color: colors::TRANSPARENT,
            vertices: Vec::new(),
        };

        for command in &list.commands {
            match *command {
                DrawCommand::Clear { origin, size } => {
                    let covers =
                        origin.cmple(Vec2::ZERO).all() && (origin + size).cmpge(viewport).all();
                    if covers {
                        frame.vertices.clear();
                        frame.clear_color = colors::TRANSPARENT;
                    } else {
                        log::trace!("Skipping partial clear at {origin:?} size {size:?}");
                    }
                }
                DrawCommand::Rect {
                    origin,
                    size,
                    color,
                } => frame.vertices.extend(rect(origin, size, color)),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => frame
                    .vertices
                    .extend(circle(center, radius, color, CIRCLE_SEGMENTS)),
                DrawCommand::Line {
                    from,
                    to,
                    width,
                    color,
                } => frame.vertices.extend(line(from, to, width, color)),
            }
        }

        frame
    }
}
