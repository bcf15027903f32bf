//! Scene container: primitives and point lights.

use crate::{Hit, Light, Primitive};
use glint_math::{Interval, Ray};

/// An ordered list of primitives and lights.
///
/// Built once before rendering and only read while tracing.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Add a point light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get the number of primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the scene has no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Find the closest primitive hit inside `ray_t`.
    ///
    /// The upper bound shrinks to each new closest hit, so later primitives
    /// are only tested against the remaining range.
    pub fn nearest_hit(&self, ray: &Ray, ray_t: Interval) -> Option<(Hit, &Primitive)> {
        let mut closest_so_far = ray_t.max;
        let mut nearest = None;

        for primitive in &self.primitives {
            if let Some(hit) = primitive.intersect(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = hit.t;
                nearest = Some((hit, primitive));
            }
        }

        nearest
    }

    /// True if any primitive is hit inside `ray_t`. Stops at the first hit.
    pub fn occluded(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.primitives
            .iter()
            .any(|primitive| primitive.intersect_time(ray, ray_t).is_some())
    }
}
