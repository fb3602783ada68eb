//! Orb renderer - recursive CPU ray tracing.
//!
//! A Whitted-style ray tracer over sphere scenes:
//! - nearest-hit ray/sphere intersection
//! - ambient/diffuse/Blinn-Phong shading with stochastic soft shadows
//! - depth-bounded mirror reflection
//! - multi-sample anti-aliasing through a fixed pinhole camera
//! - static row partitioning across scoped worker threads

mod camera;
mod hit;
mod image;
mod ray;
mod renderer;
mod sampling;
mod shading;

pub use camera::Camera;
pub use hit::{nearest_hit, HitInfo, T_MAX, T_MIN};
pub use image::{color_to_rgb, linear_to_gamma, ImageBuffer, ImageWriteError};
pub use ray::Ray;
pub use renderer::{render, render_pixel, rows_per_worker, RenderConfig};
pub use sampling::{gen_f32, sample_on_sphere};
pub use shading::{cast_ray, direct_lighting, shadow_factor, SHADOW_SAMPLES, SURFACE_BIAS};

/// Re-export the math and scene types callers need alongside the renderer.
pub use glam::Vec3;
pub use orb_scene::{Color, Light, Material, Scene, Sphere, Texture};
