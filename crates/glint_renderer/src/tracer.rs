//! Recursive Whitted-style tracer.
//!
//! For each ray: find the nearest hit, add ambient light, add every light
//! that a shadow ray reaches, then blend in the mirror-reflected color
//! weighted by the material's reflectance.

use crate::{Color, Hit, Primitive, Scene, MAX_COLOR};
use glint_math::{Interval, Ray, Vec3};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum number of reflection bounces after the primary hit
    pub max_depth: u32,
    /// Constant color added once per shaded hit
    pub ambient: Color,
    /// Lower bound of every ray interval, keeps secondary rays off their own surface
    pub epsilon: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 1,
            ambient: Color::splat(0.1),
            epsilon: 1e-3,
        }
    }
}

/// Ray counts gathered while tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Top-level calls, one per pixel
    pub primary_rays: u64,
    /// Rays cast along the mirror direction
    pub reflection_rays: u64,
    /// Occlusion queries toward lights
    pub shadow_rays: u64,
    /// Deepest recursion level that hit a primitive
    pub deepest_bounce: u32,
}

/// Traces rays against an immutable scene.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
    config: &'a RenderConfig,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene, config: &'a RenderConfig) -> Self {
        Self { scene, config }
    }

    /// Compute the color seen by a ray. Top-level calls pass `depth = 0`.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        let mut stats = TraceStats::default();
        self.trace_with_stats(ray, depth, &mut stats)
    }

    /// Same as [`Tracer::trace`], also counting the rays cast.
    pub fn trace_with_stats(&self, ray: &Ray, depth: u32, stats: &mut TraceStats) -> Color {
        if depth == 0 {
            stats.primary_rays += 1;
        }
        self.trace_ray(ray, depth, stats)
    }

    fn trace_ray(&self, ray: &Ray, depth: u32, stats: &mut TraceStats) -> Color {
        if depth > self.config.max_depth {
            return Color::ZERO;
        }

        // Nothing hit: black, and no material to read
        let Some((hit, primitive)) = self.scene.nearest_hit(ray, self.ray_interval()) else {
            return Color::ZERO;
        };
        stats.deepest_bounce = stats.deepest_bounce.max(depth);

        let direct = self.shade(&hit, primitive, stats);

        let reflected = if depth < self.config.max_depth {
            stats.reflection_rays += 1;
            let bounce = Ray::new(hit.location, reflect(ray.direction(), hit.normal));
            self.trace_ray(&bounce, depth + 1, stats)
        } else {
            Color::ZERO
        };

        (direct + primitive.reflectance() * reflected).min(Color::splat(MAX_COLOR))
    }

    /// Ambient plus every unoccluded light at `hit`, clamped to [`MAX_COLOR`].
    fn shade(&self, hit: &Hit, primitive: &Primitive, stats: &mut TraceStats) -> Color {
        let mut color = self.config.ambient;

        for light in self.scene.lights() {
            stats.shadow_rays += 1;
            let shadow_ray = Ray::between(hit.location, light.position);
            if self.scene.occluded(&shadow_ray, self.ray_interval()) {
                continue;
            }
            color += primitive.shade(hit.normal, light, light.direction_from(hit.location));
        }

        color.min(Color::splat(MAX_COLOR))
    }

    #[inline]
    fn ray_interval(&self) -> Interval {
        Interval::from_min(self.config.epsilon)
    }
}

/// Mirror `v` about the unit normal `n`.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
