//! Probe offset generation per collider shape.

use glam::Vec3;
use slingcast_core::constants::PROBE_RAY_COUNT;
use slingcast_core::Shape;

/// Compute the ordered probe offsets for a shape under the given transform
/// scale.
///
/// The layout is fixed per variant: spheres probe the six axis directions
/// plus two upper XY-plane diagonals, boxes probe their corners, capsules
/// probe four points around each cap. Sphere and capsule radii follow the X
/// scale axis and the capsule height the Y scale axis; box corners ignore
/// the transform scale. Non-uniform scales are not supported.
#[must_use]
pub fn probe_offsets(shape: &Shape, scale: Vec3) -> [Vec3; PROBE_RAY_COUNT] {
    match *shape {
        Shape::Sphere { radius } => sphere_offsets(radius * scale.x),
        Shape::Box { half_extents } => box_offsets(half_extents),
        Shape::Capsule {
            radius,
            half_height,
        } => {
            let r = radius * scale.x;
            capsule_offsets(r, half_height * scale.y - r)
        }
    }
}

fn sphere_offsets(r: f32) -> [Vec3; PROBE_RAY_COUNT] {
    let d = r / std::f32::consts::SQRT_2;
    [
        Vec3::new(r, 0.0, 0.0),
        Vec3::new(-r, 0.0, 0.0),
        Vec3::new(0.0, r, 0.0),
        Vec3::new(0.0, -r, 0.0),
        Vec3::new(0.0, 0.0, r),
        Vec3::new(0.0, 0.0, -r),
        Vec3::new(d, d, 0.0),
        Vec3::new(-d, d, 0.0),
    ]
}

fn box_offsets(h: Vec3) -> [Vec3; PROBE_RAY_COUNT] {
    [
        Vec3::new(h.x, h.y, h.z),
        Vec3::new(-h.x, h.y, h.z),
        Vec3::new(h.x, -h.y, h.z),
        Vec3::new(-h.x, -h.y, h.z),
        Vec3::new(h.x, h.y, -h.z),
        Vec3::new(-h.x, h.y, -h.z),
        Vec3::new(h.x, -h.y, -h.z),
        Vec3::new(-h.x, -h.y, -h.z),
    ]
}

fn capsule_offsets(r: f32, h: f32) -> [Vec3; PROBE_RAY_COUNT] {
    [
        Vec3::new(r, 0.0, h),
        Vec3::new(-r, 0.0, h),
        Vec3::new(r, 0.0, -h),
        Vec3::new(-r, 0.0, -h),
        Vec3::new(0.0, r, h),
        Vec3::new(0.0, -r, h),
        Vec3::new(0.0, r, -h),
        Vec3::new(0.0, -r, -h),
    ]
}
