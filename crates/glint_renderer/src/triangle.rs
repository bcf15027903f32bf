//! Triangle primitive for ray tracing.
//!
//! Intersection solves the 3x3 barycentric system with Cramer's rule.
//! Shading is flat: the face normal is the same everywhere on the triangle.

use crate::{Hit, Material};
use glint_math::{Interval, Ray, Vec3};

/// A triangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices, counter-clockwise when seen from the front
    vertices: [Vec3; 3],
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three counter-clockwise vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, material: Material) -> Self {
        Self {
            vertices: [v0, v1, v2],
            material,
        }
    }

    /// Get vertex `index` (0, 1 or 2).
    pub fn vertex(&self, index: usize) -> Vec3 {
        self.vertices[index]
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Unit face normal, derived from the winding order.
    pub fn normal(&self) -> Vec3 {
        let [v0, v1, v2] = self.vertices;
        (v1 - v0).cross(v2 - v0).normalize()
    }

    /// Parametric distance of the hit inside `ray_t`, if any.
    ///
    /// A zero determinant (ray parallel to the plane, or a triangle with no
    /// area) is reported as a miss.
    pub fn intersect_time(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let [v0, v1, v2] = self.vertices;
        let edge_ba = v0 - v1;
        let edge_ca = v0 - v2;
        let a_minus_origin = v0 - ray.origin();
        let dir = ray.direction();

        let ei_hf = edge_ca.y * dir.z - dir.y * edge_ca.z;
        let gf_di = -(edge_ca.x * dir.z - dir.x * edge_ca.z);
        let dh_eg = edge_ca.x * dir.y - dir.x * edge_ca.y;

        let m = edge_ba.x * ei_hf + edge_ba.y * gf_di + edge_ba.z * dh_eg;
        if m == 0.0 {
            return None;
        }

        let beta = (a_minus_origin.x * ei_hf + a_minus_origin.y * gf_di + a_minus_origin.z * dh_eg) / m;
        if !(0.0..=1.0).contains(&beta) {
            return None;
        }

        let ak_jb = edge_ba.x * a_minus_origin.y - a_minus_origin.x * edge_ba.y;
        let jc_al = -(edge_ba.x * a_minus_origin.z - a_minus_origin.x * edge_ba.z);
        let bl_kc = edge_ba.y * a_minus_origin.z - a_minus_origin.y * edge_ba.z;

        let gamma = (dir.z * ak_jb + dir.y * jc_al + dir.x * bl_kc) / m;
        if gamma < 0.0 || gamma > 1.0 - beta {
            return None;
        }

        let t = -(edge_ca.z * ak_jb + edge_ca.y * jc_al + edge_ca.x * bl_kc) / m;
        ray_t.surrounds(t).then_some(t)
    }

    /// Like [`Triangle::intersect_time`], also returning the hit location
    /// and the face normal.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        let t = self.intersect_time(ray, ray_t)?;
        Some(Hit::new(t, ray.at(t), self.normal()))
    }
}
