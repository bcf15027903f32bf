/// A parametric range `[min, max]` along a ray.
///
/// Intersection queries accept a hit only when `surrounds` holds, so both
/// endpoints are excluded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval from `min` to positive infinity.
    pub fn from_min(min: f32) -> Self {
        Self::new(min, f32::INFINITY)
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Same lower bound, new upper bound.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Exclusive bounds - endpoints NOT included
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));
        assert!(interval.surrounds(9.9));

        assert!(!interval.surrounds(-0.1));
        assert!(!interval.surrounds(10.1));
    }

    #[test]
    fn test_interval_surrounds_rejects_nan() {
        let interval = Interval::from_min(0.001);
        assert!(!interval.surrounds(f32::NAN));
        assert!(!interval.surrounds(f32::INFINITY));
    }

    #[test]
    fn test_interval_with_max() {
        let interval = Interval::from_min(0.001);
        let shrunk = interval.with_max(4.0);

        assert_eq!(shrunk.min, 0.001);
        assert_eq!(shrunk.max, 4.0);
        assert_eq!(interval.max, f32::INFINITY);
    }

    #[test]
    fn test_interval_clamp() {
        let interval = Interval::new(0.0, 255.0);

        assert_eq!(interval.clamp(-5.0), 0.0);
        assert_eq!(interval.clamp(128.0), 128.0);
        assert_eq!(interval.clamp(300.0), 255.0);
    }
}
