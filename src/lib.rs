//! Balloon Pop - rising balloons with a word of encouragement
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spheres, field, quote deck, banner)
//! - `renderer`: WebGPU rendering pipeline and the `DrawSurface` abstraction
//! - `input`: Pointer/touch routing and hit-to-pop side effects
//! - `audio`: Ambient loop and pop sample with the autoplay unlock latch
//! - `effects`: Particle burst hand-off
//! - `scene`: Owner of all runtime state, driven by the frame loop
//! - `platform`: Browser glue (canvas, timers, DOM overlay)
//! - `settings`: Variant selection (quote set and volume profile)

pub mod audio;
pub mod content;
pub mod effects;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use scene::Scene;
pub use settings::{Settings, Variant};

/// Simulation and presentation constants
pub mod consts {
    /// Maximum number of live spheres
    pub const MAX_SPHERES: usize = 10;
    /// Cadence of the population timer (ms)
    pub const SPAWN_INTERVAL_MS: i32 = 1000;
    /// Distance below the viewport bottom where spheres enter
    pub const SPAWN_OFFSET: f32 = 50.0;

    /// Sphere radius range [min, max)
    pub const MIN_RADIUS: f32 = 20.0;
    pub const MAX_RADIUS: f32 = 50.0;
    /// Rise speed range [min, max), pixels per frame
    pub const MIN_RISE_SPEED: f32 = 1.0;
    pub const MAX_RISE_SPEED: f32 = 3.0;

    /// Tether drawn under each sphere
    pub const TETHER_LENGTH: f32 = 20.0;
    pub const TETHER_WIDTH: f32 = 1.0;
    /// Triangle fan segments per sphere
    pub const CIRCLE_SEGMENTS: u32 = 48;

    /// Particle burst parameters for a pop
    pub const BURST_PARTICLE_COUNT: u32 = 100;
    pub const BURST_SPREAD: f32 = 70.0;

    /// How long a quote stays on screen (ms)
    pub const MESSAGE_DURATION_MS: f64 = 7000.0;
    /// How long the "tap to enable audio" hint stays on screen (ms)
    pub const HINT_DURATION_MS: f64 = 3000.0;
}
