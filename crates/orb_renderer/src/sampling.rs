//! Random sampling helpers.
//!
//! Shading and camera code take `&mut dyn RngCore` so that each worker
//! thread can own its generator outright; nothing here touches shared
//! state.

use glam::Vec3;
use rand::distributions::{Distribution, Standard};
use rand::RngCore;
use std::f32::consts::TAU;

/// Draw a uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    Standard.sample(rng)
}

/// Uniform point on the surface of a sphere of the given radius,
/// centered at the origin.
///
/// Inverse-transform sampling: `theta = 2*pi*u`, `phi = acos(2v - 1)`
/// for independent uniforms u, v. A zero radius collapses every sample
/// to the origin.
pub fn sample_on_sphere(radius: f32, rng: &mut dyn RngCore) -> Vec3 {
    let u = gen_f32(rng);
    let v = gen_f32(rng);
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).acos();

    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}
