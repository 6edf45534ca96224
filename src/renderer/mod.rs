//! WebGPU rendering module
//!
//! The simulation draws through [`DrawSurface`] in CSS pixel coordinates
//! (origin top-left, y down). [`FrameBatch`] tessellates those calls into a
//! triangle list and [`RenderState`] uploads and presents it.

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::FrameBatch;
pub use pipeline::RenderState;
pub use vertex::Vertex;

use glam::Vec2;

/// 2D drawing target for one frame
pub trait DrawSurface {
    /// Discard everything drawn so far this frame
    fn clear(&mut self);
    /// Filled disk
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
    /// Straight stroked segment
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]);
}
