//! Platform abstraction layer
//!
//! Handles browser specifics for:
//! - Canvas sizing (CSS size vs backing store)
//! - Frame and interval scheduling
//! - Input listener registration
//! - The DOM message overlay

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::*;

use crate::sim::Viewport;

/// Backing store size for a CSS-sized canvas. Never returns a zero dimension.
pub fn backing_size(viewport: Viewport, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let w = (viewport.width as f64 * dpr).round().max(1.0) as u32;
    let h = (viewport.height as f64 * dpr).round().max(1.0) as u32;
    (w, h)
}
