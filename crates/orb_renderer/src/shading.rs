//! Shading: direct lighting, soft shadows, and bounded mirror
//! reflection.

use crate::hit::{nearest_hit, HitInfo};
use crate::ray::Ray;
use crate::renderer::RenderConfig;
use crate::sampling::sample_on_sphere;
use glam::Vec3;
use orb_scene::{Color, Light, Scene};
use rand::RngCore;

/// Number of shadow rays fired per light per shading point.
pub const SHADOW_SAMPLES: u32 = 5;

/// Offset applied along the surface normal when spawning secondary
/// rays, so a surface never occludes or reflects itself.
pub const SURFACE_BIAS: f32 = 0.001;

/// Estimate how exposed a surface point is to one light.
///
/// Fires `SHADOW_SAMPLES` rays toward points jittered uniformly on the
/// light's radius sphere and counts the unoccluded ones. The
/// accumulator is seeded at 1.0 and gains 1/SHADOW_SAMPLES per clear
/// sample, so the result ranges over [1.0, 2.0]: 1.0 fully occluded,
/// 2.0 fully lit. Downstream terms multiply by this factor directly,
/// which brightens lit surfaces beyond the plain Phong sum; the
/// behavior is kept as-is for output compatibility with the scenes this
/// renderer was built against.
pub fn shadow_factor(
    point: Vec3,
    normal: Vec3,
    light: &Light,
    scene: &Scene,
    rng: &mut dyn RngCore,
) -> f32 {
    let mut factor = 1.0;
    let origin = point + normal * SURFACE_BIAS;

    for _ in 0..SHADOW_SAMPLES {
        let target = light.position + sample_on_sphere(light.radius, rng);
        let direction = (target - point).normalize_or_zero();
        if nearest_hit(&Ray::new(origin, direction), scene).is_none() {
            factor += 1.0 / SHADOW_SAMPLES as f32;
        }
    }

    factor
}

/// Local illumination at a hit point: ambient plus, per light,
/// shadow-scaled diffuse and Blinn-Phong specular terms.
///
/// `view_dir` is the unit direction the primary ray was traveling.
pub fn direct_lighting(
    hit: &HitInfo,
    view_dir: Vec3,
    scene: &Scene,
    rng: &mut dyn RngCore,
) -> Color {
    let material = &hit.sphere.material;
    let mut color = material.color * material.ambient;

    for light in scene.lights() {
        let light_dir = (light.position - hit.point).normalize_or_zero();
        let shadow = shadow_factor(hit.point, hit.normal, light, scene, rng);

        let diffuse = hit.normal.dot(light_dir).max(0.0);
        color += material.color * light.intensity * material.diffuse * diffuse * shadow;

        // Blinn-Phong: half-vector between the light direction and the
        // direction back toward the viewer.
        let halfway = (light_dir - view_dir).normalize_or_zero();
        let specular = hit.normal.dot(halfway).max(0.0).powf(material.shininess);
        color += light.intensity * material.specular * specular * shadow;
    }

    color
}

/// Mirror-reflection contribution, bounded by the configured depth.
fn reflected_light(
    hit: &HitInfo,
    view_dir: Vec3,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let material = &hit.sphere.material;
    if material.reflection <= 0.0 || depth >= config.max_depth {
        return Color::ZERO;
    }

    let reflect_dir = reflect(view_dir, hit.normal).normalize_or_zero();
    let origin = hit.point + hit.normal * SURFACE_BIAS;
    let reflected = cast_ray(&Ray::new(origin, reflect_dir), scene, depth + 1, config, rng);

    reflected * material.reflection
}

/// Trace one ray into the scene and return its linear-light color.
///
/// Misses return the scene background. Hits sum direct lighting and
/// the depth-bounded reflection term, then modulate by the texture
/// sampled at the hit point. Components are unclamped and may leave
/// [0, 1]; encoding happens later.
pub fn cast_ray(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let Some(hit) = nearest_hit(ray, scene) else {
        return scene.background();
    };

    let view_dir = ray.direction().normalize_or_zero();
    let mut color = direct_lighting(&hit, view_dir, scene, rng);
    color += reflected_light(&hit, view_dir, scene, depth, config, rng);

    color * hit.sphere.material.texture.sample(0.0, 0.0, hit.point)
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_scene::{Material, Sphere, Texture};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_config() -> RenderConfig {
        RenderConfig {
            samples_per_pixel: 1,
            max_depth: 3,
            num_threads: 1,
        }
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = Scene::new().with_background(Color::new(0.2, 0.3, 0.4));
        let mut rng = StdRng::seed_from_u64(42);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        let color = cast_ray(&ray, &scene, 0, &test_config(), &mut rng);
        assert_eq!(color, Color::new(0.2, 0.3, 0.4));
    }

    #[test]
    fn test_ambient_only_without_lights() {
        let mut scene = Scene::new();
        let base = Color::new(1.0, 0.2, 0.2);
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Material::new(base, 0.0),
        ));
        let mut rng = StdRng::seed_from_u64(42);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = cast_ray(&ray, &scene, 0, &test_config(), &mut rng);

        // No lights, no reflection, white texture: just color * ambient.
        assert!((color - base * 0.1).length() < 1e-6);
    }

    #[test]
    fn test_point_light_shadow_factor_extremes() {
        // A zero-radius light collapses all shadow samples onto one
        // ray, so the factor must land exactly on an extreme of the
        // [1.0, 2.0] accumulator range.
        let light = Light::point(Vec3::new(0.0, 5.0, 0.0), Color::ONE);
        let mut rng = StdRng::seed_from_u64(42);

        // Nothing in the way: fully lit (up to f32 accumulation).
        let open = Scene::new();
        let factor = shadow_factor(Vec3::ZERO, Vec3::Y, &light, &open, &mut rng);
        assert!((factor - 2.0).abs() < 1e-5);

        // A sphere between the point and the light: fully occluded.
        let mut blocked = Scene::new();
        blocked.add_sphere(Sphere::new(
            Vec3::new(0.0, 2.5, 0.0),
            1.0,
            Material::default(),
        ));
        let factor = shadow_factor(Vec3::ZERO, Vec3::Y, &light, &blocked, &mut rng);
        assert_eq!(factor, 1.0);
    }

    #[test]
    fn test_diffuse_uses_shadow_factor() {
        // One light directly above a surface point, nothing occluding:
        // diffuse = color * intensity * kd * (n.l = 1) * 2.0.
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, -1.0, 0.0),
            1.0,
            Material {
                color: Color::new(0.5, 0.5, 0.5),
                ambient: 0.0,
                diffuse: 1.0,
                specular: 0.0,
                ..Default::default()
            },
        ));
        scene.add_light(Light::point(Vec3::new(0.0, 10.0, 0.0), Color::ONE));
        let mut rng = StdRng::seed_from_u64(42);

        // Straight down onto the sphere's north pole.
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let color = cast_ray(&ray, &scene, 0, &test_config(), &mut rng);
        assert!((color - Color::splat(1.0)).length() < 1e-4);
    }

    #[test]
    fn test_mutually_facing_mirrors_terminate() {
        // Two perfect mirrors staring at each other; the depth bound is
        // the only thing stopping the bounce loop.
        let mut scene = Scene::new();
        let mirror = Material {
            color: Color::ONE,
            reflection: 1.0,
            ..Default::default()
        };
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, mirror.clone()));
        scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, mirror));
        let mut rng = StdRng::seed_from_u64(42);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = cast_ray(&ray, &scene, 0, &test_config(), &mut rng);
        assert!(color.is_finite());
    }

    #[test]
    fn test_matte_material_has_no_reflection_term() {
        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Material::new(Color::ONE, 0.0),
        ));
        // A second sphere behind the camera that only a reflection
        // bounce could pick up.
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, 5.0),
            1.0,
            Material::new(Color::ONE, 0.0),
        ));
        let mut rng = StdRng::seed_from_u64(42);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = cast_ray(&ray, &scene, 0, &test_config(), &mut rng);
        assert!((color - Color::ONE * 0.1).length() < 1e-6);
    }

    #[test]
    fn test_texture_modulates_result() {
        use std::sync::Arc;

        let mut scene = Scene::new();
        scene.add_sphere(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Material::new(Color::ONE, 0.0)
                .with_texture(Arc::new(Texture::Solid(Color::new(0.0, 1.0, 0.0)))),
        ));
        let mut rng = StdRng::seed_from_u64(42);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let color = cast_ray(&ray, &scene, 0, &test_config(), &mut rng);

        // Ambient white scaled by a pure green texture.
        assert!((color - Color::new(0.0, 0.1, 0.0)).length() < 1e-6);
    }
}
