//! Ray/sphere intersection query.

use crate::ray::Ray;
use orb_scene::{Scene, Sphere};
use glam::Vec3;

/// Minimum accepted hit distance. Secondary rays start a hair above
/// the surface they left, so anything closer than this is treated as
/// the surface intersecting itself.
pub const T_MIN: f32 = 0.001;

/// Sentinel "no hit yet" distance.
pub const T_MAX: f32 = 1e10;

/// Result of a successful intersection query.
///
/// Borrows the hit sphere from the scene; the record is only valid for
/// the duration of the shading call that requested it.
#[derive(Clone, Copy)]
pub struct HitInfo<'a> {
    /// Parametric distance along the ray.
    pub t: f32,
    /// World-space hit point.
    pub point: Vec3,
    /// Outward unit normal at the hit point.
    pub normal: Vec3,
    /// The sphere that was hit.
    pub sphere: &'a Sphere,
}

/// Find the nearest sphere the ray hits, if any.
///
/// Solves `a*t^2 + b*t + c = 0` per sphere and keeps the globally
/// smallest accepted `t`. Only the near root is considered, and it must
/// satisfy `T_MIN < t < closest`. The strict comparison means that on
/// an exact distance tie the sphere earlier in the scene list wins; the
/// tie-break is arbitrary but deterministic. All spheres are examined,
/// no early exit.
pub fn nearest_hit<'a>(ray: &Ray, scene: &'a Scene) -> Option<HitInfo<'a>> {
    let mut closest_t = T_MAX;
    let mut closest: Option<HitInfo<'a>> = None;

    for sphere in scene.spheres() {
        let oc = ray.origin() - sphere.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.dot(oc) - sphere.radius * sphere.radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            continue;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if t > T_MIN && t < closest_t {
            let point = ray.at(t);
            closest_t = t;
            closest = Some(HitInfo {
                t,
                point,
                normal: (point - sphere.center).normalize_or_zero(),
                sphere,
            });
        }
    }

    closest
}
