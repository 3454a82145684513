//! Per-frame collision probe: a ray bundle along the velocity direction.

use glam::Vec3;
use slingcast_core::constants::PROBE_RAY_COUNT;
use slingcast_core::{Ray, Tag};
use slingcast_physics::{DebugDraw, LineColor, Scene};
use tracing::{debug, info};

/// Classification of a probe hit by the collider's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitClass {
    /// Collider tagged `"Obstacle"`
    Obstacle,
    /// Collider tagged `"Target"`
    Target,
    /// Collider with no recognized tag; visible to the probe but inert
    Untagged,
}

/// Outcome of a single probe ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeOutcome {
    /// Ray flew its full length without hitting anything
    Clear,
    /// Ray hit a collider
    Hit {
        /// Distance from the ray origin to the hit point
        distance: f32,
        /// Tag-based classification of the hit collider
        class: HitClass,
    },
}

/// Report for a single probe ray.
#[derive(Debug, Clone, Copy)]
pub struct ProbeReport {
    /// Ray origin (object position plus surface offset)
    pub origin: Vec3,
    /// Normalized ray direction
    pub direction: Vec3,
    /// What the ray found
    pub outcome: ProbeOutcome,
}

impl ProbeReport {
    /// Returns `true` if this ray hit a collider
    #[inline]
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Hit { .. })
    }
}

fn classify(tag: Option<&Tag>) -> HitClass {
    match tag {
        Some(t) if t.is(Tag::OBSTACLE) => HitClass::Obstacle,
        Some(t) if t.is(Tag::TARGET) => HitClass::Target,
        _ => HitClass::Untagged,
    }
}

/// Cast the probe bundle for one object.
///
/// Rays start at `position + offset` and run along the normalized velocity
/// for at most `ray_length`. Hits are classified by the collider's tag;
/// obstacle and target hits are logged. Every ray leaves a debug segment:
/// red from origin to the hit point, green over the full length on a miss.
///
/// A zero (or otherwise un-normalizable) velocity skips the pass entirely:
/// no rays, no lines, no reports.
pub fn cast_probes(
    scene: &Scene,
    position: Vec3,
    offsets: &[Vec3; PROBE_RAY_COUNT],
    velocity: Vec3,
    ray_length: f32,
    draw: &mut DebugDraw,
) -> Vec<ProbeReport> {
    let Some(direction) = velocity.try_normalize() else {
        debug!("probe pass skipped: zero velocity");
        return Vec::new();
    };

    let mut reports = Vec::with_capacity(PROBE_RAY_COUNT);
    for offset in offsets {
        let origin = position + *offset;
        let ray = Ray { origin, direction };

        let outcome = if let Some(hit) = scene.cast_ray(&ray, ray_length) {
            draw.line(origin, hit.point, LineColor::Red);
            let class = classify(hit.tag.as_ref());
            match class {
                HitClass::Obstacle => info!(distance = hit.distance, "hit an obstacle"),
                HitClass::Target => info!(distance = hit.distance, "hit the target"),
                HitClass::Untagged => {}
            }
            ProbeOutcome::Hit {
                distance: hit.distance,
                class,
            }
        } else {
            draw.line(origin, origin + direction * ray_length, LineColor::Green);
            ProbeOutcome::Clear
        };

        reports.push(ProbeReport {
            origin,
            direction,
            outcome,
        });
    }
    reports
}
