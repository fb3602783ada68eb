//! Orb CLI.
//!
//! Renders the built-in demo scene and writes it to `output.ppm`.
//! Positional arguments, all optional:
//!
//! ```text
//! orb [width] [height] [samples_per_pixel] [num_threads]
//! ```

use anyhow::{Context, Result};
use orb_renderer::{render, Camera, RenderConfig};
use orb_scene::{Color, Light, Material, Scene, Sphere, Texture, Vec3};
use std::env;
use std::sync::Arc;
use std::time::Instant;

const OUTPUT_FILE: &str = "output.ppm";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let width: u32 = parse_arg(&args, 1)?.unwrap_or(800);
    let height: u32 = parse_arg(&args, 2)?.unwrap_or(600);
    let samples: u32 = parse_arg(&args, 3)?.unwrap_or(10);
    let num_threads: usize = match parse_arg(&args, 4)? {
        Some(n) => n,
        None => std::thread::available_parallelism().map_or(4, |n| n.get()),
    };

    println!("==== Orb Ray Tracer ====");
    println!("Resolution: {width}x{height}");
    println!("Samples per pixel: {samples}");
    println!("Threads: {num_threads}");

    let scene = build_scene();
    let camera = Camera::new(width, height);
    let config = RenderConfig {
        samples_per_pixel: samples,
        max_depth: 3,
        num_threads,
    };
    log::debug!("render config: {config:?}");

    println!(
        "Rendering {} spheres, {} lights...",
        scene.spheres().len(),
        scene.lights().len()
    );

    let start = Instant::now();
    let image = render(&scene, &camera, &config);
    println!("Rendered in {:?}", start.elapsed());

    image
        .write_ppm(OUTPUT_FILE)
        .with_context(|| format!("writing {OUTPUT_FILE}"))?;
    println!("Saved to {OUTPUT_FILE}");

    Ok(())
}

/// Parse the nth positional argument if present. Malformed numbers
/// bubble up as errors; there is no further validation.
fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    args.get(index)
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("invalid argument {index}: {raw:?}"))
        })
        .transpose()
}

/// The demo scene: a checkerboard ground, four spheres with rising
/// reflectivity, and two tinted area lights.
fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // Ground: a huge sphere just below the floor line, mildly
    // reflective, checkered white/grey.
    let ground = Material::new(Color::new(0.8, 0.8, 0.8), 0.15).with_texture(Arc::new(
        Texture::Checkerboard {
            a: Color::new(1.0, 1.0, 1.0),
            b: Color::new(0.2, 0.2, 0.2),
        },
    ));
    scene.add_sphere(Sphere::new(Vec3::new(0.0, -101.0, -5.0), 100.0, ground));

    // Matte red.
    scene.add_sphere(Sphere::new(
        Vec3::new(-1.5, 0.0, -4.0),
        1.0,
        Material::new(Color::new(1.0, 0.2, 0.2), 0.0),
    ));

    // Reflective green.
    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, 0.0, -5.0),
        1.0,
        Material::new(Color::new(0.2, 1.0, 0.2), 0.4),
    ));

    // Highly reflective blue.
    scene.add_sphere(Sphere::new(
        Vec3::new(1.5, 0.0, -6.0),
        1.0,
        Material::new(Color::new(0.2, 0.2, 1.0), 0.7),
    ));

    // Near-perfect mirror, floating behind the others.
    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, 1.2, -7.0),
        0.8,
        Material::new(Color::new(1.0, 1.0, 1.0), 0.95),
    ));

    // Two area lights with different tints and penumbra sizes.
    scene.add_light(Light::new(
        Vec3::new(3.0, 3.0, -2.0),
        Color::new(1.0, 1.0, 1.0),
        0.3,
    ));
    scene.add_light(Light::new(
        Vec3::new(-3.0, 2.0, -3.0),
        Color::new(0.5, 0.7, 1.0),
        0.2,
    ));

    scene
}
