//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex in CSS pixels with straight RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Opaque color from a `0xRRGGBB` literal
pub const fn rgb_hex(hex: u32) -> [f32; 4] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
        1.0,
    ]
}

/// Fixed scene colors
pub mod colors {
    use super::rgb_hex;

    /// Balloon tether (#666)
    pub const TETHER: [f32; 4] = rgb_hex(0x666666);
    /// Host page background (#f0f8ff), used when the canvas cannot be transparent
    pub const PAGE_BACKGROUND: [f32; 4] = rgb_hex(0xf0f8ff);
}
