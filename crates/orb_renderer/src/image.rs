//! Framebuffer and PPM encoding.

use orb_scene::Color;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing an image to disk.
#[derive(Error, Debug)]
pub enum ImageWriteError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to an 8-bit RGB triplet.
///
/// Each channel is clamped to [0, 1], gamma-corrected, and scaled to
/// [0, 255]; out-of-range inputs (negative, or HDR values above 1)
/// always land on a valid byte.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.99 * linear_to_gamma(color.x.clamp(0.0, 1.0))) as u8;
    let g = (255.99 * linear_to_gamma(color.y.clamp(0.0, 1.0))) as u8;
    let b = (255.99 * linear_to_gamma(color.z.clamp(0.0, 1.0))) as u8;
    [r, g, b]
}

/// Simple image buffer for storing render output.
///
/// Pixels are linear-light colors in row-major order, top row first.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Write the buffer as a plain-text PPM (P3) file.
    pub fn write_ppm<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageWriteError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_ppm_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize as PPM into any writer: three header lines, then one
    /// "R G B" line per pixel in row-major order.
    fn write_ppm_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for pixel in &self.pixels {
            let [r, g, b] = color_to_rgb(*pixel);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }

        Ok(())
    }
}
