//! Particle burst hand-off
//!
//! Bursts are drawn by an external page helper; this side only decides where
//! and with which parameters. Fire-and-forget.

use glam::Vec2;
use serde::Serialize;

use crate::consts::{BURST_PARTICLE_COUNT, BURST_SPREAD};
use crate::sim::Viewport;

/// Burst origin as a fraction of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

/// Parameters handed to the burst helper (serialized camelCase)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Burst {
    pub particle_count: u32,
    /// Degrees
    pub spread: f32,
    pub origin: Origin,
}

impl Burst {
    /// Pop burst at a surface-local point
    pub fn pop_at(point: Vec2, viewport: &Viewport) -> Self {
        let n = viewport.normalize(point);
        Self {
            particle_count: BURST_PARTICLE_COUNT,
            spread: BURST_SPREAD,
            origin: Origin { x: n.x, y: n.y },
        }
    }
}

pub trait BurstEffect {
    fn burst(&self, burst: &Burst);
}

/// Logs bursts instead of drawing them
#[derive(Debug, Default, Clone, Copy)]
pub struct NoBurst;

impl BurstEffect for NoBurst {
    fn burst(&self, burst: &Burst) {
        log::debug!(
            "burst x{} at ({:.2}, {:.2})",
            burst.particle_count,
            burst.origin.x,
            burst.origin.y
        );
    }
}

#[cfg(target_arch = "wasm32")]
mod confetti_js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(inline_js = "
        export function fire_confetti(options_json) {
            if (typeof window.confetti !== 'function') {
                return false;
            }
            window.confetti(JSON.parse(options_json));
            return true;
        }
    ")]
    extern "C" {
        pub fn fire_confetti(options_json: &str) -> bool;
    }
}

/// Calls the page's global `confetti(options)` helper when it is loaded
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfettiBurst;

#[cfg(target_arch = "wasm32")]
impl BurstEffect for ConfettiBurst {
    fn burst(&self, burst: &Burst) {
        match serde_json::to_string(burst) {
            Ok(json) => {
                if !confetti_js::fire_confetti(&json) {
                    log::debug!("confetti helper not loaded; burst skipped");
                }
            }
            Err(e) => log::warn!("Failed to encode burst: {}", e),
        }
    }
}
