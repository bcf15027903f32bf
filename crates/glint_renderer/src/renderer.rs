//! Render driver and image output.
//!
//! Walks every pixel in strict row/column order on the calling thread,
//! traces one primary ray per pixel and writes the result into an
//! [`ImageBuffer`].

use crate::{Camera, Color, RenderConfig, RenderResult, Scene, TraceStats, Tracer, MAX_COLOR};
use glint_math::Interval;
use std::path::Path;
use std::time::Instant;

/// Convert a 0-255 color to 8-bit RGB.
///
/// Channels are clamped to [0, 255] and truncated; NaN maps to 0.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let range = Interval::new(0.0, MAX_COLOR);
    let channel = |c: f32| range.clamp(c) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Simple image buffer for storing render output.
///
/// Pixels are stored row-major with the top row first.
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

    /// Get the pixel at (x, y), y = 0 being the top row.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y), y = 0 being the top row.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    /// Encode as PNG and write to `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Render the entire scene to an image buffer.
///
/// The camera must already be initialized. Camera row 0 is the bottom of the
/// image, so it lands in the last buffer row.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> (ImageBuffer, TraceStats) {
    let width = camera.image_width;
    let height = camera.image_height;
    let mut image = ImageBuffer::new(width, height);
    let mut stats = TraceStats::default();

    if scene.is_empty() {
        log::warn!("Scene has no primitives, image will be black");
    }
    log::info!(
        "Rendering {}x{} with {} primitives, {} lights, max depth {}",
        width,
        height,
        scene.len(),
        scene.lights().len(),
        config.max_depth
    );

    let tracer = Tracer::new(scene, config);
    let start = Instant::now();

    for row in 0..height {
        for col in 0..width {
            let ray = camera.get_ray(col, row);
            let color = tracer.trace_with_stats(&ray, 0, &mut stats);
            image.set(col, height - 1 - row, color);
        }
        log::trace!("Finished row {}/{}", row + 1, height);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    log::debug!(
        "Rays: {} primary, {} reflection, {} shadow; deepest bounce {}",
        stats.primary_rays,
        stats.reflection_rays,
        stats.shadow_rays,
        stats.deepest_bounce
    );

    (image, stats)
}
