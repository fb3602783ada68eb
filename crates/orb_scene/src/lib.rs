//! Orb scene model.
//!
//! Data containers consumed by the renderer: spheres with materials,
//! point/area lights, procedural textures, and the scene aggregate.
//! Everything here is immutable once the scene is built, which is what
//! lets the renderer share it freely across worker threads.

mod light;
mod material;
mod scene;
mod sphere;
mod texture;

pub use light::Light;
pub use material::{Color, Material};
pub use scene::Scene;
pub use sphere::Sphere;
pub use texture::Texture;

/// Re-export the vector type the whole workspace uses.
pub use glam::Vec3;
