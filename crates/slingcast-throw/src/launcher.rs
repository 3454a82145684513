//! Impulse launcher component.

use glam::Vec3;
use slingcast_core::constants::{DEFAULT_IMPULSE_Y, DEFAULT_IMPULSE_Z};
use slingcast_physics::RigidBody;
use tracing::info;

/// Launcher component holding the impulse applied on the launch action.
///
/// The impulse has no X component: throws go up and forward.
#[derive(Debug, Clone, Copy)]
pub struct Launcher {
    /// Impulse applied to the rigid body on launch
    pub impulse: Vec3,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(DEFAULT_IMPULSE_Y, DEFAULT_IMPULSE_Z)
    }
}

impl Launcher {
    /// Create a launcher from Y and Z impulse components
    #[must_use]
    pub const fn new(impulse_y: f32, impulse_z: f32) -> Self {
        Self {
            impulse: Vec3::new(0.0, impulse_y, impulse_z),
        }
    }

    /// Apply the configured impulse to a body as an instantaneous velocity
    /// change.
    pub fn fire(&self, body: &mut RigidBody) {
        info!(impulse = ?self.impulse, "launch");
        body.apply_impulse(self.impulse);
    }
}
