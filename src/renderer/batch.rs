//! CPU-side vertex batch for one frame

use glam::Vec2;

use super::DrawSurface;
use super::shapes;
use super::vertex::Vertex;
use crate::consts::CIRCLE_SEGMENTS;

/// Collects tessellated primitives until the frame is submitted
#[derive(Debug, Default)]
pub struct FrameBatch {
    vertices: Vec<Vertex>,
}

impl FrameBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl DrawSurface for FrameBatch {
    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        shapes::circle(&mut self.vertices, center, radius, color, CIRCLE_SEGMENTS);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        shapes::line(&mut self.vertices, from, to, width, color);
    }
}
