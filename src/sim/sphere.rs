//! Rising balloon entity

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::DrawSurface;
use crate::renderer::vertex::{colors, rgb_hex};

/// Drawing area in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Point as a fraction of the viewport (0..1 on each axis)
    pub fn normalize(&self, point: Vec2) -> Vec2 {
        let w = if self.width > 0.0 { self.width } else { 1.0 };
        let h = if self.height > 0.0 { self.height } else { 1.0 };
        Vec2::new(point.x / w, point.y / h)
    }

    /// Y coordinate where spheres enter and re-enter
    pub fn entry_y(&self) -> f32 {
        self.height + SPAWN_OFFSET
    }

    /// Random x in [0, width)
    pub fn random_x<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.random::<f32>() * self.width.max(0.0)
    }
}

/// Balloon palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalloonColor {
    Red,
    Green,
    Blue,
    Yellow,
    Pink,
    Orange,
    Purple,
    Cyan,
    OrangeRed,
    LimeGreen,
}

impl BalloonColor {
    pub const ALL: [BalloonColor; 10] = [
        BalloonColor::Red,
        BalloonColor::Green,
        BalloonColor::Blue,
        BalloonColor::Yellow,
        BalloonColor::Pink,
        BalloonColor::Orange,
        BalloonColor::Purple,
        BalloonColor::Cyan,
        BalloonColor::OrangeRed,
        BalloonColor::LimeGreen,
    ];

    pub const fn hex(&self) -> u32 {
        match self {
            BalloonColor::Red => 0xFF0000,
            BalloonColor::Green => 0x00FF00,
            BalloonColor::Blue => 0x0000FF,
            BalloonColor::Yellow => 0xFFFF00,
            BalloonColor::Pink => 0xFF69B4,
            BalloonColor::Orange => 0xFFA500,
            BalloonColor::Purple => 0x800080,
            BalloonColor::Cyan => 0x00FFFF,
            BalloonColor::OrangeRed => 0xFF4500,
            BalloonColor::LimeGreen => 0x32CD32,
        }
    }

    pub const fn rgba(&self) -> [f32; 4] {
        rgb_hex(self.hex())
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Stable handle to a sphere in a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SphereId(pub u32);

/// A rising balloon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub id: SphereId,
    /// Center in CSS pixels
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per frame
    pub rise_speed: f32,
    pub color: BalloonColor,
}

impl Sphere {
    /// New sphere just below the viewport with random x, radius, speed and color
    pub fn spawn<R: Rng + ?Sized>(id: SphereId, viewport: &Viewport, rng: &mut R) -> Self {
        let x = viewport.random_x(rng);
        let radius = rng.random_range(MIN_RADIUS..MAX_RADIUS);
        let rise_speed = rng.random_range(MIN_RISE_SPEED..MAX_RISE_SPEED);
        Self {
            id,
            pos: Vec2::new(x, viewport.entry_y()),
            radius,
            rise_speed,
            color: BalloonColor::random(rng),
        }
    }

    /// Move up one frame; once fully above the top edge, re-enter from below
    pub fn advance<R: Rng + ?Sized>(&mut self, viewport: &Viewport, rng: &mut R) {
        self.pos.y -= self.rise_speed;
        if self.pos.y < -self.radius {
            self.pos.y = viewport.entry_y();
            self.pos.x = viewport.random_x(rng);
        }
    }

    /// Disk plus tether hanging from its bottom edge
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.pos, self.radius, self.color.rgba());

        let top = Vec2::new(self.pos.x, self.pos.y + self.radius);
        let bottom = Vec2::new(self.pos.x, top.y + TETHER_LENGTH);
        surface.stroke_line(top, bottom, TETHER_WIDTH, colors::TETHER);
    }

    /// Strictly inside the disk
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius
    }
}
