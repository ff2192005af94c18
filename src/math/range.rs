use glam::Vec3;

use crate::error::SceneError;

/// Closed interval bounding coordinate generation on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    min: f32,
    max: f32,
}

impl Range {
    pub fn new(min: f32, max: f32) -> Result<Self, SceneError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(SceneError::InvalidRange { min, max });
        }

        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn center(&self) -> f32 {
        self.min + self.span() * 0.5
    }

    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        self.contains(point.x) && self.contains(point.y) && self.contains(point.z)
    }

    /// Maps `value` into [0, 1]. A degenerate range maps everything to 0.
    pub fn normalize(&self, value: f32) -> f32 {
        if self.is_degenerate() {
            return 0.0;
        }

        ((value - self.min) / self.span()).clamp(0.0, 1.0)
    }

    /// Shift that moves the center of the range onto the origin, on every axis.
    pub fn recenter_offset(&self) -> Vec3 {
        Vec3::splat(-self.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_bounds() {
        assert_eq!(
            Range::new(5.0, 1.0),
            Err(SceneError::InvalidRange { min: 5.0, max: 1.0 })
        );
    }

    #[test]
    fn test_rejects_non_finite_bounds() {
        assert!(Range::new(f32::NAN, 1.0).is_err());
        assert!(Range::new(0.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_degenerate_range_is_valid() {
        let range = Range::new(3.0, 3.0).unwrap();
        assert!(range.is_degenerate());
        assert_eq!(range.normalize(3.0), 0.0);
        assert_eq!(range.normalize(100.0), 0.0);
    }

    #[test]
    fn test_normalize_clamps() {
        let range = Range::new(0.0, 10.0).unwrap();
        assert_eq!(range.normalize(-1.0), 0.0);
        assert_eq!(range.normalize(5.0), 0.5);
        assert_eq!(range.normalize(11.0), 1.0);
    }

    #[test]
    fn test_recenter_offset_is_half_range_from_zero() {
        let range = Range::new(0.0, 10.0).unwrap();
        assert_eq!(range.recenter_offset(), Vec3::splat(-5.0));

        let shifted = Range::new(-2.0, 6.0).unwrap();
        assert_eq!(shifted.recenter_offset(), Vec3::splat(-2.0));
    }
}
