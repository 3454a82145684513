//! Rigid body component.

use glam::Vec3;
use slingcast_core::{Error, Result};

/// Rigid body component for a simulated object.
///
/// Carries the linear velocity and mass. Impulses change the velocity
/// instantaneously; continuous acceleration (gravity) is applied by the
/// per-frame body system.
#[derive(Debug, Clone, Copy)]
pub struct RigidBody {
    /// Current linear velocity in world units per second
    pub velocity: Vec3,
    mass: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            mass: 1.0,
        }
    }
}

impl RigidBody {
    /// Create a rigid body with the given mass.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMass`] if the mass is not strictly positive
    /// and finite.
    pub fn with_mass(mass: f32) -> Result<Self> {
        if mass > 0.0 && mass.is_finite() {
            Ok(Self {
                velocity: Vec3::ZERO,
                mass,
            })
        } else {
            Err(Error::InvalidMass(mass))
        }
    }

    /// Get the body's mass
    #[inline]
    #[must_use]
    pub const fn mass(&self) -> f32 {
        self.mass
    }

    /// Apply an instantaneous impulse: the velocity changes by `impulse / mass`.
    #[inline]
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse / self.mass;
    }

    /// Advance the velocity by a constant acceleration over `dt` seconds.
    #[inline]
    pub fn accelerate(&mut self, acceleration: Vec3, dt: f32) {
        self.velocity += acceleration * dt;
    }
}
