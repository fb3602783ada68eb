//! Scene aggregate.

use crate::{light::Light, material::Color, sphere::Sphere};

/// Everything the renderer needs: spheres, lights, background.
///
/// Built up front, then read-only for the duration of a render, so a
/// `&Scene` can be handed to every worker thread at once.
#[derive(Clone, Debug)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    background: Color,
}

impl Scene {
    /// Create an empty scene with the default dark-grey background.
    pub fn new() -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            background: Color::new(0.1, 0.1, 0.1),
        }
    }

    /// Set the background color returned for rays that miss everything.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn background(&self) -> Color {
        self.background
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use glam::Vec3;

    #[test]
    fn test_empty_scene_defaults() {
        let scene = Scene::new();
        assert!(scene.spheres().is_empty());
        assert!(scene.lights().is_empty());
        assert_eq!(scene.background(), Color::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_add_preserves_order() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(Vec3::ZERO, 1.0, Material::default()));
        scene.add_sphere(Sphere::new(Vec3::X, 2.0, Material::default()));
        assert_eq!(scene.spheres().len(), 2);
        assert_eq!(scene.spheres()[0].radius, 1.0);
        assert_eq!(scene.spheres()[1].radius, 2.0);
    }
}
