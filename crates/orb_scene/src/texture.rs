//! Procedural textures.
//!
//! Textures are pure functions from a world-space point to a color.
//! They carry no pixel data and are never mutated after construction,
//! so a single `Arc<Texture>` can be shared by any number of materials.

use crate::material::Color;
use glam::Vec3;
use std::f32::consts::PI;

/// How many checker cells fit in one world unit.
const CHECKER_SCALE: f32 = 10.0;

/// A procedural texture.
#[derive(Clone, Debug, PartialEq)]
pub enum Texture {
    /// A single flat color everywhere.
    Solid(Color),
    /// Alternating cells over the x/z plane.
    Checkerboard { a: Color, b: Color },
    /// Vertical blend between two colors, periodic in y.
    Gradient { a: Color, b: Color },
}

impl Texture {
    /// Solid white, the identity under color modulation.
    pub fn white() -> Self {
        Texture::Solid(Color::ONE)
    }

    /// Sample the texture at a surface point.
    ///
    /// The `u`/`v` parameters are accepted for interface symmetry with
    /// image-mapped textures but the procedural variants only look at
    /// the world-space point.
    pub fn sample(&self, _u: f32, _v: f32, point: Vec3) -> Color {
        match self {
            Texture::Solid(color) => *color,
            Texture::Checkerboard { a, b } => {
                let x_check = (point.x * CHECKER_SCALE) as i32 % 2;
                let z_check = (point.z * CHECKER_SCALE) as i32 % 2;
                if x_check == z_check {
                    *a
                } else {
                    *b
                }
            }
            Texture::Gradient { a, b } => {
                let t = (point.y * PI).sin() * 0.5 + 0.5;
                *a * (1.0 - t) + *b * t
            }
        }
    }
}
