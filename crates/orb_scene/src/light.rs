//! Lights.

use crate::material::Color;
use glam::Vec3;

/// A point light with an optional finite radius for soft shadows.
///
/// `radius` is the sphere over which shadow rays jitter their target:
/// zero collapses every shadow sample onto the light position and
/// produces hard shadows.
#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub position: Vec3,
    pub intensity: Color,
    pub radius: f32,
}

impl Light {
    /// Create a new light.
    pub fn new(position: Vec3, intensity: Color, radius: f32) -> Self {
        Self {
            position,
            intensity,
            radius,
        }
    }

    /// A degenerate point light (hard shadows).
    pub fn point(position: Vec3, intensity: Color) -> Self {
        Self::new(position, intensity, 0.0)
    }
}
