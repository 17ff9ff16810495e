//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::colors::Rgba;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Rgba,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Rgba) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Map from canvas pixels (y down) to clip space (y up)
    pub fn to_ndc(self, viewport: (f32, f32)) -> Self {
        let (w, h) = viewport;
        Self::new(
            self.position[0] / w * 2.0 - 1.0,
            1.0 - self.position[1] / h * 2.0,
            self.color,
        )
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    #[test]
    fn test_ndc_corners() {
        let viewport = (800.0, 500.0);
        let top_left = Vertex::new(0.0, 0.0, colors::WHITE).to_ndc(viewport);
        assert_eq!(top_left.position, [-1.0, 1.0]);
        let bottom_right = Vertex::new(800.0, 500.0, colors::WHITE).to_ndc(viewport);
        assert_eq!(bottom_right.position, [1.0, -1.0]);
        let center = Vertex::new(400.0, 250.0, colors::WHITE).to_ndc(viewport);
        assert_eq!(center.position, [0.0, 0.0]);
    }
}
