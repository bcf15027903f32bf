//! Phong material and local shading for a single light.

use crate::Light;
use glint_math::Vec3;

/// Color type alias (RGB values on a 0-255 scale)
pub type Color = Vec3;

/// Upper bound of every color channel.
pub const MAX_COLOR: f32 = 255.0;

/// Surface coefficients for Phong shading plus mirror reflectance.
///
/// All color-like fields are expected to be non-negative per channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Material {
    /// Lambertian coefficient per channel
    pub diffuse: Color,
    /// Highlight coefficient per channel
    pub specular: Color,
    /// Exponent applied to the highlight falloff
    pub phong_exponent: f32,
    /// Per-channel weight of the mirror-reflected color (0 = no reflection)
    pub reflectance: Color,
}

impl Material {
    /// Create a new material.
    pub fn new(diffuse: Color, specular: Color, phong_exponent: f32, reflectance: Color) -> Self {
        Self {
            diffuse,
            specular,
            phong_exponent,
            reflectance,
        }
    }

    /// Diffuse plus specular contribution of one light.
    ///
    /// `normal` and `light_dir` must be unit length. No shadow test happens
    /// here; the caller only invokes this for lights that reach the point.
    pub fn shade(&self, normal: Vec3, light: &Light, light_dir: Vec3) -> Color {
        let l_dot_n = light_dir.dot(normal);
        let diffuse = self.diffuse * light.intensity * l_dot_n.max(0.0);

        // Zero when the light sits exactly opposite the normal
        let half_vec = (light_dir + normal).normalize_or_zero();
        let n_dot_h = normal.dot(half_vec);
        let specular = self.specular * light.intensity * n_dot_h.max(0.0).powf(self.phong_exponent);

        (diffuse + specular).min(Color::splat(MAX_COLOR))
    }

    /// Per-channel mirror reflectance.
    #[inline]
    pub fn reflectance(&self) -> Color {
        self.reflectance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_plastic() -> Material {
        Material::new(
            Color::new(200.0, 0.0, 0.0),
            Color::new(100.0, 100.0, 100.0),
            100.0,
            Color::ZERO,
        )
    }

    #[test]
    fn test_default_is_black() {
        let mat = Material::default();
        assert_eq!(mat.diffuse, Color::ZERO);
        assert_eq!(mat.specular, Color::ZERO);
        assert_eq!(mat.reflectance(), Color::ZERO);
    }

    #[test]
    fn test_shade_head_on_is_clamped() {
        let light = Light::new(Vec3::new(0.0, 0.0, 10.0), Color::ONE);
        let color = red_plastic().shade(Vec3::Z, &light, Vec3::Z);

        // 200 diffuse + 100 specular saturates red; green and blue only get the highlight
        assert_eq!(color, Color::new(255.0, 100.0, 100.0));
    }

    #[test]
    fn test_shade_scales_with_intensity() {
        let mat = Material::new(Color::splat(100.0), Color::ZERO, 1.0, Color::ZERO);
        let light = Light::new(Vec3::Z, Color::new(0.5, 1.0, 0.25));
        let color = mat.shade(Vec3::Z, &light, Vec3::Z);

        assert!((color - Color::new(50.0, 100.0, 25.0)).length() < 1e-4);
    }

    #[test]
    fn test_shade_diffuse_follows_cosine() {
        let mat = Material::new(Color::splat(100.0), Color::ZERO, 1.0, Color::ZERO);
        let light = Light::new(Vec3::ZERO, Color::ONE);
        let light_dir = Vec3::new(1.0, 0.0, 1.0).normalize();
        let color = mat.shade(Vec3::Z, &light, light_dir);

        let expected = 100.0 * std::f32::consts::FRAC_1_SQRT_2;
        assert!((color.x - expected).abs() < 1e-3);
    }

    #[test]
    fn test_shade_light_opposite_normal_is_black() {
        let mat = Material::new(Color::splat(100.0), Color::splat(100.0), 8.0, Color::ZERO);
        let light = Light::new(Vec3::new(0.0, 0.0, -10.0), Color::ONE);
        let color = mat.shade(Vec3::Z, &light, -Vec3::Z);

        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_shade_never_exceeds_max() {
        let mat = Material::new(Color::splat(1000.0), Color::splat(1000.0), 2.0, Color::ZERO);
        let light = Light::new(Vec3::Z, Color::splat(10.0));
        let color = mat.shade(Vec3::Z, &light, Vec3::Z);

        assert!(color.max_element() <= MAX_COLOR);
    }
}
