//! Surface materials.

use crate::texture::Texture;
use glam::Vec3;
use std::sync::Arc;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Surface properties for a sphere.
///
/// Coefficients follow the classic ambient/diffuse/specular split and
/// are expected (but not required) to sit in [0, 1]. `reflection`
/// blends in the mirror term: 0.0 is fully matte, 1.0 a perfect
/// mirror. The texture is shared and immutable; cloning a material is
/// cheap and never duplicates texture storage.
#[derive(Clone, Debug)]
pub struct Material {
    pub color: Color,
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub shininess: f32,
    pub reflection: f32,
    pub texture: Arc<Texture>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::ONE,
            ambient: 0.1,
            diffuse: 0.7,
            specular: 0.2,
            shininess: 32.0,
            reflection: 0.0,
            texture: Arc::new(Texture::white()),
        }
    }
}

impl Material {
    /// Create a material with the given base color and reflection
    /// coefficient, default shading coefficients, and a solid white
    /// texture (no modulation).
    pub fn new(color: Color, reflection: f32) -> Self {
        Self {
            color,
            reflection,
            ..Default::default()
        }
    }

    /// Replace the texture.
    pub fn with_texture(mut self, texture: Arc<Texture>) -> Self {
        self.texture = texture;
        self
    }
}
