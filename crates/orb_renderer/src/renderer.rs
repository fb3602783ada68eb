//! Parallel render scheduler.
//!
//! Partitions the image into contiguous row bands, one scoped worker
//! thread per band. Bands are disjoint slices of the framebuffer, so
//! workers write their pixels without any locking; the scene is shared
//! read-only. Threads are spawned fresh per render call and joined
//! before it returns.

use crate::camera::Camera;
use crate::image::ImageBuffer;
use crate::shading::cast_ray;
use orb_scene::{Color, Scene};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::thread;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum mirror-reflection depth
    pub max_depth: u32,
    /// Number of worker threads
    pub num_threads: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 10,
            max_depth: 3,
            num_threads: thread::available_parallelism().map_or(4, |n| n.get()),
        }
    }
}

/// Rows assigned to each worker: `ceil(height / num_threads)`.
///
/// The last band may be shorter when the division is uneven, and when
/// `num_threads` exceeds `height` some workers receive no rows at all;
/// either way the bands cover `[0, height)` exactly once.
pub fn rows_per_worker(height: u32, num_threads: usize) -> u32 {
    let workers = num_threads.max(1) as u32;
    (height + workers - 1) / workers
}

/// Render one pixel: average `samples_per_pixel` jittered primary
/// rays.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let ray = camera.primary_ray(x, y, rng);
        color += cast_ray(&ray, scene, 0, config, rng);
    }

    color / config.samples_per_pixel.max(1) as f32
}

/// Render the scene into a framebuffer using `config.num_threads`
/// workers.
///
/// The framebuffer is split with `chunks_mut` into row-aligned bands of
/// `rows_per_worker * width` pixels; each band is exclusively owned by
/// one worker for the duration of the render, which is the entire
/// concurrency-safety argument. Every worker owns an independently
/// seeded generator, so samples stay uncorrelated across threads
/// without shared state.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    let width = camera.width();
    let height = camera.height();
    let mut image = ImageBuffer::new(width, height);

    if width == 0 || height == 0 {
        return image;
    }

    let band_rows = rows_per_worker(height, config.num_threads);
    log::info!(
        "rendering {}x{} at {} spp, max depth {}, {} worker threads ({} rows per band)",
        width,
        height,
        config.samples_per_pixel,
        config.max_depth,
        config.num_threads,
        band_rows
    );

    thread::scope(|scope| {
        let bands = image.pixels.chunks_mut((band_rows * width) as usize);
        for (band_index, band) in bands.enumerate() {
            let start_row = band_index as u32 * band_rows;
            scope.spawn(move || {
                let mut rng = SmallRng::from_entropy();
                let rows = band.len() as u32 / width;
                for local_y in 0..rows {
                    let y = start_row + local_y;
                    for x in 0..width {
                        band[(local_y * width + x) as usize] =
                            render_pixel(camera, scene, x, y, config, &mut rng);
                    }
                }
            });
        }
    });

    image
}
