//! Pointer and touch routing
//!
//! Raw events arrive in viewport (client) coordinates. They are converted to
//! surface-local coordinates, hit-tested against the field, and a hit pops
//! exactly one sphere with its side effects.

use glam::Vec2;

use crate::audio::MediaTrack;
use crate::effects::{Burst, BurstEffect};
use crate::scene::Scene;

/// Where an input came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    /// Mouse click / pointer click
    Click,
    /// First active touch point of a touchstart
    Touch,
}

/// One pointer or touch press
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub source: InputSource,
    /// Viewport (client) coordinates
    pub client: Vec2,
}

impl PointerInput {
    pub fn click(x: f32, y: f32) -> Self {
        Self {
            source: InputSource::Click,
            client: Vec2::new(x, y),
        }
    }

    pub fn touch(x: f32, y: f32) -> Self {
        Self {
            source: InputSource::Touch,
            client: Vec2::new(x, y),
        }
    }
}

/// Result of routing one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopOutcome {
    pub popped: bool,
    /// The browser's default touch handling (scrolling) must be cancelled
    pub suppress_default: bool,
}

impl PopOutcome {
    fn new(source: InputSource, popped: bool) -> Self {
        Self {
            popped,
            suppress_default: popped && source == InputSource::Touch,
        }
    }
}

/// Client coordinates to surface-local coordinates
#[inline]
pub fn to_surface_local(client: Vec2, surface_origin: Vec2) -> Vec2 {
    client - surface_origin
}

/// Hit-test and, on a hit, pop the sphere: remove it, play the pop sound,
/// fire the burst at the normalized hit point and show the next quote.
pub fn route_pointer<T, B>(
    scene: &mut Scene<T, B>,
    input: PointerInput,
    surface_origin: Vec2,
    now_ms: f64,
) -> PopOutcome
where
    T: MediaTrack,
    B: BurstEffect,
{
    let local = to_surface_local(input.client, surface_origin);

    let Some(id) = scene.field.hit_test(local) else {
        return PopOutcome::new(input.source, false);
    };
    if scene.field.remove(id).is_none() {
        return PopOutcome::new(input.source, false);
    }
    log::debug!("Popped sphere {:?} at ({:.0}, {:.0})", id, local.x, local.y);

    scene.audio.play_pop();
    scene.burst(&Burst::pop_at(local, &scene.viewport()));
    scene.show_next_quote(now_ms);

    PopOutcome::new(input.source, true)
}
