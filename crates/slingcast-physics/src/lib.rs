//! Collision scene and rigid body simulation for the slingcast toolkit.
//!
//! The scene is deliberately thin: a flat list of tagged axis-aligned
//! colliders answering nearest-hit ray queries, plus a rigid body with
//! impulse semantics. There is no broad phase, no contact resolution and
//! no constraint solver.

pub mod body;
pub mod debug;
pub mod scene;

pub use body::RigidBody;
pub use debug::{DebugDraw, DebugLine, LineColor};
pub use scene::{Scene, SceneCollider, SceneHit, DEFAULT_GRAVITY};
