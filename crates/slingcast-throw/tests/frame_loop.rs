//! Frame-loop behavior of the throwable systems, driven the way a host
//! application drives them.

use glam::Vec3;
use slingcast_core::{Aabb, Shape, Tag};
use slingcast_entity::{Entity, Transform, World};
use slingcast_input::{ActionMap, InputManager, KeyCode};
use slingcast_physics::{DebugDraw, RigidBody, Scene};
use slingcast_throw::{
    body_system, launch_system, probe_system, spawn_throwable, HitClass, Launcher, ProbeOutcome,
    ProbeReport, ThrowTuning, LAUNCH_ACTION,
};

const DT: f32 = 1.0 / 60.0;

struct TestRig {
    world: World,
    scene: Scene,
    input: InputManager,
    tuning: ThrowTuning,
    draw: DebugDraw,
    throwable: Entity,
}

impl TestRig {
    fn new(scene: Scene, shape: Shape) -> Self {
        let mut world = World::new();
        let throwable = spawn_throwable(
            &mut world,
            Transform::default(),
            RigidBody::default(),
            shape,
            Launcher::default(),
        );
        let input = InputManager::with_actions(
            ActionMap::builder().bind(LAUNCH_ACTION, KeyCode::Space).build(),
        );
        Self {
            world,
            scene,
            input,
            tuning: ThrowTuning::default(),
            draw: DebugDraw::new(),
            throwable,
        }
    }

    /// Run one frame in host order and return the probe reports.
    fn frame(&mut self) -> Vec<ProbeReport> {
        self.draw.clear();
        self.input.update();
        launch_system(&mut self.world, &self.input);
        body_system(&mut self.world, &self.scene, DT);
        let reports = probe_system(&self.world, &self.scene, &self.tuning, &mut self.draw);
        self.input.end_frame();
        reports
    }

    fn velocity(&self) -> Vec3 {
        self.world.get::<&RigidBody>(self.throwable).unwrap().velocity
    }
}

fn free_space() -> Scene {
    Scene::new().with_gravity(Vec3::ZERO)
}

#[test]
fn launch_fires_once_per_press() {
    let mut rig = TestRig::new(free_space(), Shape::sphere(0.5));

    // Idle frames: nothing moves, nothing probes
    for _ in 0..3 {
        let reports = rig.frame();
        assert!(reports.is_empty());
        assert_eq!(rig.velocity(), Vec3::ZERO);
    }

    // Press and hold across several frames
    rig.input.press_key(KeyCode::Space);
    rig.frame();
    let after_press = rig.velocity();
    assert_eq!(after_press, Vec3::new(0.0, 5.0, 10.0));

    rig.frame();
    rig.frame();
    assert_eq!(rig.velocity(), after_press, "held key must not re-fire");

    // Release, then press again: a second impulse
    rig.input.release_key(KeyCode::Space);
    rig.frame();
    rig.input.press_key(KeyCode::Space);
    rig.frame();
    assert_eq!(rig.velocity(), after_press * 2.0);
}

#[test]
fn moving_throwable_probes_every_frame() {
    let mut scene = free_space();
    // Wall far beyond probe range at first, drawing closer as the object flies
    scene.add_collider(
        Aabb::from_center_half_extents(Vec3::new(0.0, 0.0, 30.0), Vec3::new(100.0, 100.0, 0.5)),
        Some(Tag::new("Obstacle")),
    );
    let mut rig = TestRig::new(scene, Shape::sphere(0.5));

    rig.input.press_key(KeyCode::Space);
    let reports = rig.frame();
    assert_eq!(reports.len(), 8, "one report per probe ray");
    assert!(
        reports.iter().all(|r| r.outcome == ProbeOutcome::Clear),
        "wall starts out of probe range"
    );

    // Fly toward the wall until the probes see it
    let mut saw_obstacle = false;
    for _ in 0..200 {
        let reports = rig.frame();
        if reports.iter().any(|r| {
            matches!(
                r.outcome,
                ProbeOutcome::Hit {
                    class: HitClass::Obstacle,
                    ..
                }
            )
        }) {
            saw_obstacle = true;
            break;
        }
    }
    assert!(saw_obstacle, "probes must detect the wall before impact");
}

#[test]
fn shape_switch_changes_offsets_next_frame() {
    let mut rig = TestRig::new(free_space(), Shape::sphere(1.0));
    rig.input.press_key(KeyCode::Space);
    rig.frame();

    let sphere_reports = rig.frame();
    let sphere_origins: Vec<Vec3> = sphere_reports.iter().map(|r| r.origin).collect();

    {
        let mut collider = rig
            .world
            .get::<&mut slingcast_throw::ProbeCollider>(rig.throwable)
            .unwrap();
        collider.shape = Shape::cuboid(Vec3::new(1.0, 2.0, 3.0));
    }

    let box_reports = rig.frame();
    let position = rig
        .world
        .get::<&Transform>(rig.throwable)
        .unwrap()
        .position;

    // Every origin is now a corner of the new half-extents box
    for report in &box_reports {
        let local = report.origin - position;
        assert!((local.x.abs() - 1.0).abs() < 1e-5);
        assert!((local.y.abs() - 2.0).abs() < 1e-5);
        assert!((local.z.abs() - 3.0).abs() < 1e-5);
    }
    assert_ne!(
        sphere_origins,
        box_reports.iter().map(|r| r.origin).collect::<Vec<_>>()
    );
}

#[test]
fn gravity_builds_velocity_and_enables_probing() {
    let mut rig = TestRig::new(Scene::new(), Shape::capsule(0.5, 1.0));

    assert_eq!(rig.velocity(), Vec3::ZERO);
    let reports = rig.frame();
    // Falling already on the first frame: gravity applies before the probe pass
    assert_eq!(reports.len(), 8);
    assert!(rig.velocity().y < 0.0);
    for report in &reports {
        assert!((report.direction - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-5);
    }
}
