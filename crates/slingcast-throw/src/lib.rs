//! Throwable-object gameplay systems.
//!
//! Each simulation frame, a throwable casts a bundle of eight rays outward
//! from its surface along its velocity direction to detect upcoming
//! collisions with tagged scene colliders, and an edge-triggered launch
//! action applies an impulse to its rigid body. This crate holds the offset
//! geometry per collider shape, the probe pass, the launcher, and the
//! per-frame systems tying them together.

pub mod launcher;
pub mod offsets;
pub mod probe;
pub mod system;
pub mod throwable;
pub mod tuning;

pub use launcher::Launcher;
pub use offsets::probe_offsets;
pub use probe::{cast_probes, HitClass, ProbeOutcome, ProbeReport};
pub use system::{body_system, launch_system, probe_system, LAUNCH_ACTION};
pub use throwable::{ensure_throwable, spawn_throwable, ProbeCollider};
pub use tuning::ThrowTuning;
