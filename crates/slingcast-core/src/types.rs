//! Domain types shared across the toolkit.

use std::fmt;

use glam::Vec3;

/// Collider shape of a throwable object.
///
/// Dimensions are in local units; the owning transform's scale is applied
/// by each operation that consumes the shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Ball described by its radius.
    Sphere {
        /// Local-space radius
        radius: f32,
    },
    /// Axis-aligned box described by its half-extents.
    Box {
        /// Local-space half-extents per axis
        half_extents: Vec3,
    },
    /// Capsule described by its cap radius and half-height along the long axis.
    Capsule {
        /// Local-space cap radius
        radius: f32,
        /// Local-space half-height, measured center to cap tip
        half_height: f32,
    },
}

impl Shape {
    /// Create a sphere shape
    #[inline]
    #[must_use]
    pub const fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    /// Create a box shape from half-extents
    #[inline]
    #[must_use]
    pub const fn cuboid(half_extents: Vec3) -> Self {
        Self::Box { half_extents }
    }

    /// Create a capsule shape
    #[inline]
    #[must_use]
    pub const fn capsule(radius: f32, half_height: f32) -> Self {
        Self::Capsule {
            radius,
            half_height,
        }
    }
}

/// Gameplay tag attached to a scene collider.
///
/// Tags are free-form strings; [`Tag::OBSTACLE`] and [`Tag::TARGET`] are the
/// values the collision probe reacts to. Colliders without a tag are still
/// hit by rays but trigger no gameplay response.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    /// Tag value recognized as an obstacle
    pub const OBSTACLE: &'static str = "Obstacle";
    /// Tag value recognized as a target
    pub const TARGET: &'static str = "Target";

    /// Create a new tag
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the tag value as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare the tag against a name
    #[inline]
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_constructors() {
        assert_eq!(Shape::sphere(0.5), Shape::Sphere { radius: 0.5 });
        assert_eq!(
            Shape::cuboid(Vec3::ONE),
            Shape::Box {
                half_extents: Vec3::ONE
            }
        );
        assert_eq!(
            Shape::capsule(0.5, 1.0),
            Shape::Capsule {
                radius: 0.5,
                half_height: 1.0
            }
        );
    }

    #[test]
    fn tag_matching() {
        let tag = Tag::new("Obstacle");
        assert!(tag.is(Tag::OBSTACLE));
        assert!(!tag.is(Tag::TARGET));
        assert_eq!(tag.as_str(), "Obstacle");
        assert_eq!(Tag::from("Target"), Tag::new("Target"));
    }
}
