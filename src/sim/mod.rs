//! Deterministic simulation module
//!
//! Everything here is pure given its inputs:
//! - Seeded RNG passed in by the caller
//! - Time passed in as milliseconds, never read from a clock
//! - Drawing only through the `DrawSurface` trait

pub mod banner;
pub mod field;
pub mod quotes;
pub mod sphere;

pub use banner::{BannerState, MessageBanner};
pub use field::SphereField;
pub use quotes::{QuoteDeck, shuffle};
pub use sphere::{BalloonColor, Sphere, SphereId, Viewport};
