//! Pinhole camera for primary ray generation.

use crate::{RenderError, RenderResult};
use glint_math::{Ray, Vec3};

/// World units covered by one pixel on the image plane.
pub const DEFAULT_PIXEL_SIZE: f32 = 0.01;

/// Pinhole camera generating one ray through the center of each pixel.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Camera positioning
    position: Vec3,
    direction: Vec3,
    focal_length: f32,
    pixel_size: f32,

    // Cached computed values (set by initialize())
    forward: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 500,
            image_height: 500,
            position: Vec3::new(0.0, 5.0, 0.0),
            direction: Vec3::new(0.0, -1.0, 0.0),
            focal_length: 1.0,
            pixel_size: DEFAULT_PIXEL_SIZE,
            // Cached values (initialized to defaults)
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set eye position, view direction and distance to the image plane.
    pub fn with_position(mut self, position: Vec3, direction: Vec3, focal_length: f32) -> Self {
        self.position = position;
        self.direction = direction;
        self.focal_length = focal_length;
        self
    }

    /// Set the world-space size of one pixel.
    pub fn with_pixel_size(mut self, pixel_size: f32) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    /// Initialize the camera (must be called before generating rays).
    ///
    /// The image plane is oriented with `right = direction x +Z`, so a view
    /// direction along the Z axis has no usable basis.
    pub fn initialize(&mut self) -> RenderResult<()> {
        if self.image_width == 0 || self.image_height == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.image_width,
                height: self.image_height,
            });
        }

        self.forward = self
            .direction
            .try_normalize()
            .ok_or(RenderError::DegenerateCamera("view direction has zero length"))?;
        self.right = self
            .forward
            .cross(Vec3::Z)
            .try_normalize()
            .ok_or(RenderError::DegenerateCamera("view direction is parallel to the Z axis"))?;
        self.up = self.right.cross(self.forward).normalize();

        log::debug!(
            "Camera basis: forward={:?} right={:?} up={:?}",
            self.forward,
            self.right,
            self.up
        );
        Ok(())
    }

    /// Generate the ray through the center of pixel (`col`, `row`).
    ///
    /// Row 0 is the bottom of the image.
    pub fn get_ray(&self, col: u32, row: u32) -> Ray {
        let u = self.pixel_size * (col as f32 + 0.5 - self.image_width as f32 / 2.0);
        let v = self.pixel_size * (row as f32 + 0.5 - self.image_height as f32 / 2.0);

        let direction = self.focal_length * self.forward + u * self.right + v * self.up;
        Ray::new(self.position, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
