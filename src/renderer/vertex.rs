//! Vertex types for the textured quad

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position and texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coord: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            tex_coord: [u, v],
        }
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
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Unit quad centred on the origin, two triangles covering the whole texture.
/// v = 0 is the top row of the image.
pub const QUAD: [Vertex; 6] = [
    Vertex::new(-0.5, -0.5, 0.0, 1.0),
    Vertex::new(0.5, -0.5, 1.0, 1.0),
    Vertex::new(0.5, 0.5, 1.0, 0.0),
    Vertex::new(-0.5, -0.5, 0.0, 1.0),
    Vertex::new(0.5, 0.5, 1.0, 0.0),
    Vertex::new(-0.5, 0.5, 0.0, 0.0),
];
