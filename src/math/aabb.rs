//! Axis-aligned bounding box

use crate::core::types::Vec3;
use super::axis::Axis;

/// Axis-aligned bounding box defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create AABB from center and full size
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Get center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get size (max - min)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// True when every extent exceeds `epsilon`
    pub fn is_valid(&self, epsilon: f32) -> bool {
        let size = self.size();
        size.x > epsilon && size.y > epsilon && size.z > epsilon
    }

    /// Check if `other` lies entirely within this box
    pub fn contains(&self, other: &Aabb) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }

    /// Strict overlap test: boxes that only touch do not overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x && self.max.x > other.min.x &&
        self.min.y < other.max.y && self.max.y > other.min.y &&
        self.min.z < other.max.z && self.max.z > other.min.z
    }

    /// Volume of the box, zero if inverted
    pub fn volume(&self) -> f32 {
        let size = self.size().max(Vec3::ZERO);
        size.x * size.y * size.z
    }

    /// Return merged AABB containing both
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow every side by `amount`
    pub fn inflated(&self, amount: f32) -> Aabb {
        Aabb {
            min: self.min - Vec3::splat(amount),
            max: self.max + Vec3::splat(amount),
        }
    }

    /// Copy with the extent along `axis` replaced by `[lo, hi]`
    pub fn with_span(&self, axis: Axis, lo: f32, hi: f32) -> Aabb {
        let mut out = *self;
        out.min[axis.index()] = lo;
        out.max[axis.index()] = hi;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert_eq!(aabb.center(), Vec3::splat(0.5));
        assert_eq!(aabb.size(), Vec3::ONE);
    }

    #[test]
    fn test_from_center_size() {
        let aabb = Aabb::from_center_size(Vec3::new(8.0, 0.0, 0.0), Vec3::splat(10.0));
        assert_eq!(aabb.min, Vec3::new(3.0, -5.0, -5.0));
        assert_eq!(aabb.max, Vec3::new(13.0, 5.0, 5.0));
    }

    #[test]
    fn test_overlaps_is_strict() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::splat(0.5), Vec3::splat(1.5));
        let touching = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        let far = Aabb::new(Vec3::splat(2.0), Vec3::splat(3.0));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_contains_box() {
        let outer = Aabb::new(Vec3::ZERO, Vec3::splat(4.0));
        let inner = Aabb::new(Vec3::ONE, Vec3::splat(2.0));
        assert!(outer.contains(&inner));
        assert!(outer.contains(&outer));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn test_volume() {
        assert_eq!(Aabb::new(Vec3::ZERO, Vec3::new(2.0, 3.0, 4.0)).volume(), 24.0);
        assert_eq!(Aabb::new(Vec3::ONE, Vec3::ZERO).volume(), 0.0);
    }

    #[test]
    fn test_is_valid() {
        assert!(Aabb::new(Vec3::ZERO, Vec3::ONE).is_valid(0.01));
        assert!(!Aabb::new(Vec3::ZERO, Vec3::new(1.0, 0.005, 1.0)).is_valid(0.01));
        assert!(!Aabb::new(Vec3::ONE, Vec3::ZERO).is_valid(0.01));
    }

    #[test]
    fn test_with_span() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE).with_span(Axis::Y, -2.0, 3.0);
        assert_eq!(a.min, Vec3::new(0.0, -2.0, 0.0));
        assert_eq!(a.max, Vec3::new(1.0, 3.0, 1.0));
    }
}
