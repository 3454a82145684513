//! Static collision scene with tagged colliders and ray queries.

use glam::Vec3;
use slingcast_core::{Aabb, Ray, Tag};

/// Default gravitational acceleration in world units per second squared
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// A static collider in the scene.
#[derive(Debug, Clone)]
pub struct SceneCollider {
    /// World-space bounds
    pub bounds: Aabb,
    /// Gameplay tag, if any
    pub tag: Option<Tag>,
}

/// Result of a scene raycast.
#[derive(Debug, Clone)]
pub struct SceneHit {
    /// Distance from the ray origin to the hit point
    pub distance: f32,
    /// World-space hit point
    pub point: Vec3,
    /// Index of the collider that was hit
    pub collider: usize,
    /// Tag of the hit collider, if any
    pub tag: Option<Tag>,
}

/// Static collision scene.
///
/// Holds the world gravity and a flat list of axis-aligned tagged colliders.
/// Ray queries walk every collider and keep the nearest hit; with the handful
/// of colliders a throwing range holds, nothing smarter is warranted.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Gravitational acceleration applied to rigid bodies
    pub gravity: Vec3,
    colliders: Vec<SceneCollider>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            colliders: Vec::new(),
        }
    }
}

impl Scene {
    /// Create an empty scene with default gravity
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style gravity override
    #[must_use]
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    /// Add a collider to the scene, returning its index
    pub fn add_collider(&mut self, bounds: Aabb, tag: Option<Tag>) -> usize {
        self.colliders.push(SceneCollider { bounds, tag });
        self.colliders.len() - 1
    }

    /// Get the scene's colliders
    #[must_use]
    pub fn colliders(&self) -> &[SceneCollider] {
        &self.colliders
    }

    /// Cast a ray against every collider and return the nearest hit within
    /// `max_len`, or `None` if nothing is in range.
    #[must_use]
    pub fn cast_ray(&self, ray: &Ray, max_len: f32) -> Option<SceneHit> {
        let mut nearest: Option<SceneHit> = None;
        let mut best = max_len;
        for (index, collider) in self.colliders.iter().enumerate() {
            let Some((t_near, _)) = collider.bounds.intersect_ray(ray) else {
                continue;
            };
            if t_near > best {
                continue;
            }
            best = t_near;
            nearest = Some(SceneHit {
                distance: t_near,
                point: ray.at(t_near),
                collider: index,
                tag: collider.tag.clone(),
            });
        }
        nearest
    }
}
