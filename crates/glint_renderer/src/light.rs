//! Point lights.

use crate::Color;
use glint_math::Vec3;

/// A point light. Intensity does not fall off with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub intensity: Color,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }

    /// Unit direction from `point` toward the light.
    #[inline]
    pub fn direction_from(&self, point: Vec3) -> Vec3 {
        (self.position - point).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from() {
        let light = Light::new(Vec3::new(0.0, 5.0, 0.0), Color::ONE);
        let dir = light.direction_from(Vec3::ZERO);

        assert_eq!(dir, Vec3::Y);
        assert!((dir.length() - 1.0).abs() < 1e-6);
    }
}
