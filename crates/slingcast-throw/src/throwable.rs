//! Throwable entity assembly and validation.

use slingcast_core::{Error, Result, Shape};
use slingcast_entity::{Entity, Transform, World};
use slingcast_physics::RigidBody;

use crate::launcher::Launcher;

/// Collider component the probe offsets are derived from.
#[derive(Debug, Clone, Copy)]
pub struct ProbeCollider {
    /// Shape of the throwable's collider
    pub shape: Shape,
}

/// Spawn a throwable entity with its full component set.
///
/// Going through this function makes a partially-assembled throwable
/// unrepresentable; the systems will see every component they query for.
pub fn spawn_throwable(
    world: &mut World,
    transform: Transform,
    body: RigidBody,
    shape: Shape,
    launcher: Launcher,
) -> Entity {
    world.spawn((transform, body, ProbeCollider { shape }, launcher))
}

/// Check that an entity carries every component the throwable systems need.
///
/// Call once at startup for entities assembled by hand. A missing component
/// fails fast with its name instead of the systems silently skipping the
/// entity every frame.
pub fn ensure_throwable(world: &World, entity: Entity) -> Result<()> {
    let entity_ref = world
        .entity(entity)
        .map_err(|_| Error::MissingComponent("entity"))?;

    if !entity_ref.has::<Transform>() {
        return Err(Error::MissingComponent("Transform"));
    }
    if !entity_ref.has::<RigidBody>() {
        return Err(Error::MissingComponent("RigidBody"));
    }
    if !entity_ref.has::<ProbeCollider>() {
        return Err(Error::MissingComponent("ProbeCollider"));
    }
    if !entity_ref.has::<Launcher>() {
        return Err(Error::MissingComponent("Launcher"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_throwable_validates() {
        let mut world = World::new();
        let entity = spawn_throwable(
            &mut world,
            Transform::default(),
            RigidBody::default(),
            Shape::sphere(0.5),
            Launcher::default(),
        );
        assert!(ensure_throwable(&world, entity).is_ok());
    }

    #[test]
    fn missing_body_is_reported_by_name() {
        let mut world = World::new();
        let entity = world.spawn((Transform::default(), Launcher::default()));

        match ensure_throwable(&world, entity) {
            Err(Error::MissingComponent(name)) => assert_eq!(name, "RigidBody"),
            other => panic!("expected missing component error, got {other:?}"),
        }
    }

    #[test]
    fn despawned_entity_is_rejected() {
        let mut world = World::new();
        let entity = spawn_throwable(
            &mut world,
            Transform::default(),
            RigidBody::default(),
            Shape::sphere(0.5),
            Launcher::default(),
        );
        world.despawn(entity).unwrap();
        assert!(ensure_throwable(&world, entity).is_err());
    }
}
