//! Per-frame systems for throwable objects.
//!
//! Frame order matters: launch first so a fresh impulse shapes this frame's
//! motion, then body integration, then the probe pass over the new state.

use slingcast_entity::{Transform, World};
use slingcast_input::InputManager;
use slingcast_physics::{DebugDraw, RigidBody, Scene};

use crate::launcher::Launcher;
use crate::offsets::probe_offsets;
use crate::probe::{cast_probes, ProbeReport};
use crate::throwable::ProbeCollider;
use crate::tuning::ThrowTuning;

/// Name of the edge-triggered action that fires launchers.
pub const LAUNCH_ACTION: &str = "launch";

/// Apply launch impulses on the frame the launch action goes down.
///
/// Edge-triggered: a held key does not re-fire.
pub fn launch_system(world: &mut World, input: &InputManager) {
    if !input.is_action_just_pressed(LAUNCH_ACTION) {
        return;
    }
    for (_, (body, launcher)) in world.query_mut::<(&mut RigidBody, &Launcher)>() {
        launcher.fire(body);
    }
}

/// Integrate rigid bodies: gravity into velocity, velocity into position.
pub fn body_system(world: &mut World, scene: &Scene, dt: f32) {
    for (_, (transform, body)) in world.query_mut::<(&mut Transform, &mut RigidBody)>() {
        body.accelerate(scene.gravity, dt);
        transform.position += body.velocity * dt;
    }
}

/// Cast the probe bundle for every throwable and collect the reports.
///
/// Offsets are recomputed from the current shape and scale on every pass, so
/// a shape or scale change shows up on the very next frame.
pub fn probe_system(
    world: &World,
    scene: &Scene,
    tuning: &ThrowTuning,
    draw: &mut DebugDraw,
) -> Vec<ProbeReport> {
    let mut reports = Vec::new();
    for (_, (transform, body, collider)) in world
        .query::<(&Transform, &RigidBody, &ProbeCollider)>()
        .iter()
    {
        let offsets = probe_offsets(&collider.shape, transform.scale);
        reports.extend(cast_probes(
            scene,
            transform.position,
            &offsets,
            body.velocity,
            tuning.ray_length,
            draw,
        ));
    }
    reports
}
