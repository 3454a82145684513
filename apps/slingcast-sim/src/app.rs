//! Throwing-range simulation driven by scripted input.

use anyhow::Context as _;
use glam::Vec3;
use tracing::{debug, info};

use slingcast_app::{AppContext, SimApp};
use slingcast_core::{Aabb, Shape, Tag};
use slingcast_entity::{Entity, Transform, World};
use slingcast_input::{ActionMap, InputManager, KeyCode};
use slingcast_physics::{DebugDraw, LineColor, RigidBody, Scene};
use slingcast_throw::{
    body_system, ensure_throwable, launch_system, probe_system, spawn_throwable, ThrowTuning,
    LAUNCH_ACTION,
};

/// Where the ball waits before launch.
const TEE_POSITION: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Radius of the thrown ball.
const BALL_RADIUS: f32 = 0.5;

/// The run ends once the ball falls below this height.
const EXIT_HEIGHT: f32 = -2.0;

/// Scripted stand-in for the player (from CLI or defaults).
#[derive(Debug, Clone)]
pub struct SimParams {
    /// Frame at which the launch key goes down.
    pub launch_frame: u64,
    /// How many frames the key is held before release.
    pub hold_frames: u64,
    /// Optional RON tuning file.
    pub tuning_path: Option<String>,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            launch_frame: 30,
            hold_frames: 5,
            tuning_path: None,
        }
    }
}

impl SimParams {
    /// Parse simulation parameters from command line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        let mut params = Self::default();
        let args: Vec<String> = std::env::args().collect();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--launch-frame" => {
                    if i + 1 < args.len() {
                        if let Ok(v) = args[i + 1].parse() {
                            params.launch_frame = v;
                            i += 1;
                        }
                    }
                }
                "--tuning" => {
                    if i + 1 < args.len() {
                        params.tuning_path = Some(args[i + 1].clone());
                        i += 1;
                    }
                }
                _ => {}
            }
            i += 1;
        }

        params
    }
}

/// Build the throwing range: an untagged floor, an obstacle wall in front of
/// the tee, and a target box around the expected landing zone.
fn build_range() -> Scene {
    let mut scene = Scene::new();
    scene.add_collider(
        Aabb::from_center_half_extents(Vec3::new(0.0, -0.5, 10.0), Vec3::new(20.0, 0.5, 20.0)),
        None,
    );
    scene.add_collider(
        Aabb::from_center_half_extents(Vec3::new(0.0, 1.5, 6.0), Vec3::new(4.0, 1.5, 0.25)),
        Some(Tag::new(Tag::OBSTACLE)),
    );
    scene.add_collider(
        Aabb::from_center_half_extents(Vec3::new(0.0, 1.0, 10.0), Vec3::new(1.5, 1.0, 0.5)),
        Some(Tag::new(Tag::TARGET)),
    );
    scene
}

/// Simulation state for the throwing range.
pub struct ThrowSim {
    world: World,
    scene: Scene,
    input: InputManager,
    tuning: ThrowTuning,
    draw: DebugDraw,
    throwable: Entity,
    params: SimParams,
}

impl SimApp for ThrowSim {
    fn init(_ctx: &mut AppContext) -> anyhow::Result<Self> {
        let params = SimParams::from_args();

        let tuning = match &params.tuning_path {
            Some(path) => ThrowTuning::load(path)
                .with_context(|| format!("loading tuning from {path}"))?,
            None => ThrowTuning::default(),
        };
        info!(
            ray_length = tuning.ray_length,
            impulse_y = tuning.impulse_y,
            impulse_z = tuning.impulse_z,
            "tuning loaded"
        );

        let scene = build_range();
        let mut world = World::new();
        let throwable = spawn_throwable(
            &mut world,
            Transform::from_position(TEE_POSITION),
            RigidBody::with_mass(1.0)?,
            Shape::sphere(BALL_RADIUS),
            tuning.launcher(),
        );
        ensure_throwable(&world, throwable)?;

        let input = InputManager::with_actions(
            ActionMap::builder().bind(LAUNCH_ACTION, KeyCode::Space).build(),
        );

        info!(
            colliders = scene.colliders().len(),
            launch_frame = params.launch_frame,
            "throwing range ready"
        );

        Ok(Self {
            world,
            scene,
            input,
            tuning,
            draw: DebugDraw::new(),
            throwable,
            params,
        })
    }

    fn update(&mut self, ctx: &mut AppContext, dt: f32) -> anyhow::Result<()> {
        self.draw.clear();

        // Scripted player: tap the launch key at the scripted frame
        if ctx.frame_number() == self.params.launch_frame {
            self.input.press_key(KeyCode::Space);
        }
        if ctx.frame_number() == self.params.launch_frame + self.params.hold_frames {
            self.input.release_key(KeyCode::Space);
        }

        self.input.update();
        launch_system(&mut self.world, &self.input);
        body_system(&mut self.world, &self.scene, dt);
        let reports = probe_system(&self.world, &self.scene, &self.tuning, &mut self.draw);

        debug!(
            frame = ctx.frame_number(),
            rays = reports.len(),
            hits = reports.iter().filter(|r| r.is_hit()).count(),
            green = self.draw.count(LineColor::Green),
            red = self.draw.count(LineColor::Red),
            "probe pass"
        );

        let position = self.world.get::<&Transform>(self.throwable)?.position;
        if position.y < EXIT_HEIGHT {
            info!(frame = ctx.frame_number(), ?position, "ball left the range");
            ctx.request_exit();
        }

        self.input.end_frame();
        Ok(())
    }

    fn cleanup(&mut self, ctx: &mut AppContext) {
        if let Ok(body) = self.world.get::<&RigidBody>(self.throwable) {
            info!(
                elapsed = ctx.elapsed(),
                velocity = ?body.velocity,
                "simulation finished"
            );
        }
    }
}
