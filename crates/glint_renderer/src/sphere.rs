//! Sphere primitive for ray tracing.

use crate::{Hit, Material};
use glint_math::{Interval, Ray, Vec3};

/// A sphere primitive. The radius must be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {radius}");
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Parametric distance of the first surface crossing inside `ray_t`.
    ///
    /// Only the nearer root of the quadratic is ever reported; a ray that
    /// starts inside the sphere therefore misses it.
    pub fn intersect_time(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let omp = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = ray.direction().dot(omp);

        let discriminant = b * b - a * (omp.dot(omp) - self.radius * self.radius);
        if discriminant < 0.0 {
            return None;
        }

        // Tangential hit when the discriminant is exactly zero
        let mut t = (-ray.direction()).dot(omp) / a;
        if discriminant > 0.0 {
            t -= discriminant.sqrt() / a;
        }

        ray_t.surrounds(t).then_some(t)
    }

    /// Like [`Sphere::intersect_time`], also returning the hit location
    /// and the outward unit normal.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        let t = self.intersect_time(ray, ray_t)?;
        let location = ray.at(t);
        let normal = (location - self.center).normalize();
        Some(Hit::new(t, location, normal))
    }
}
