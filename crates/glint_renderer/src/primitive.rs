//! Closed set of scene primitives and the hit record they produce.

use crate::{Color, Light, Material, Sphere, Triangle};
use glint_math::{Interval, Ray, Vec3};

/// Record of a ray-primitive intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub location: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
}

impl Hit {
    pub fn new(t: f32, location: Vec3, normal: Vec3) -> Self {
        Self {
            t,
            location,
            normal,
        }
    }
}

/// Any shape that can be placed in a [`crate::Scene`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Primitive {
    /// Test if a ray hits this primitive strictly inside `ray_t`, returning only `t`.
    pub fn intersect_time(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect_time(ray, ray_t),
            Primitive::Triangle(triangle) => triangle.intersect_time(ray, ray_t),
        }
    }

    /// Test if a ray hits this primitive strictly inside `ray_t`.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray, ray_t),
            Primitive::Triangle(triangle) => triangle.intersect(ray, ray_t),
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            Primitive::Sphere(sphere) => sphere.material(),
            Primitive::Triangle(triangle) => triangle.material(),
        }
    }

    /// Unshadowed diffuse plus specular contribution of `light`.
    #[inline]
    pub fn shade(&self, normal: Vec3, light: &Light, light_dir: Vec3) -> Color {
        self.material().shade(normal, light, light_dir)
    }

    #[inline]
    pub fn reflectance(&self) -> Color {
        self.material().reflectance()
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Triangle> for Primitive {
    fn from(triangle: Triangle) -> Self {
        Primitive::Triangle(triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mirror() -> Material {
        Material::new(Color::splat(50.0), Color::ZERO, 1.0, Color::new(0.5, 0.25, 1.0))
    }

    #[test]
    fn test_dispatch_sphere() {
        let prim: Primitive = Sphere::new(Vec3::ZERO, 1.0, mirror()).into();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), -Vec3::Z);

        let hit = prim.intersect(&ray, Interval::from_min(0.001)).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-5);
        assert_eq!(prim.intersect_time(&ray, Interval::from_min(0.001)), Some(hit.t));
        assert_eq!(prim.reflectance(), Color::new(0.5, 0.25, 1.0));
    }

    #[test]
    fn test_dispatch_triangle() {
        let prim: Primitive = Triangle::new(
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            mirror(),
        )
        .into();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), -Vec3::Z);

        let hit = prim.intersect(&ray, Interval::from_min(0.001)).unwrap();
        assert!((hit.t - 3.0).abs() < 1e-5);
        assert_eq!(hit.normal, Vec3::Z);
        assert_eq!(prim.material(), &mirror());
    }

    #[test]
    fn test_shade_delegates_to_material() {
        let prim: Primitive = Sphere::new(Vec3::ZERO, 1.0, mirror()).into();
        let light = Light::new(Vec3::new(0.0, 0.0, 5.0), Color::ONE);

        assert_eq!(
            prim.shade(Vec3::Z, &light, Vec3::Z),
            mirror().shade(Vec3::Z, &light, Vec3::Z)
        );
    }
}
