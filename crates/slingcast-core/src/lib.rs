//! Core types, math, and error handling for the slingcast toolkit.
//!
//! This crate provides the foundational pieces used throughout the workspace:
//! - Collider shape variants and gameplay tags
//! - Ray and AABB math used by the scene queries
//! - The shared error type

pub mod error;
pub mod math;
pub mod types;

pub use error::{Error, Result};
pub use math::{Aabb, Ray};
pub use types::{Shape, Tag};

/// Toolkit-wide constants
pub mod constants {
    /// Number of probe rays cast per throwable per frame
    pub const PROBE_RAY_COUNT: usize = 8;
    /// Default maximum probe ray length in world units
    pub const DEFAULT_RAY_LENGTH: f32 = 10.0;
    /// Default launch impulse along the world Y axis
    pub const DEFAULT_IMPULSE_Y: f32 = 5.0;
    /// Default launch impulse along the world Z axis
    pub const DEFAULT_IMPULSE_Z: f32 = 10.0;
}
