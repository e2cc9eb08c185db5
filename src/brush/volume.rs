//! The brush record: an axis-aligned box with an operation and textures

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result, Vec3};
use crate::math::Aabb;
use super::face::FaceTextures;

/// Smallest meaningful extent in world units (one fine grid step)
pub const EPSILON: f32 = 0.01;

/// Whether a brush adds solid or carves it away
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushOp {
    #[default]
    Add,
    Subtract,
}

/// Axis-aligned box brush as stored in level files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    /// World-space center
    #[serde(rename = "pos")]
    pub center: Vec3,
    /// Full extents (width, height, depth)
    pub size: Vec3,
    #[serde(default)]
    pub operation: BrushOp,
    #[serde(default)]
    pub textures: FaceTextures,
}

impl Brush {
    /// Create a brush, rejecting sizes at or below `EPSILON`
    pub fn new(center: Vec3, size: Vec3, operation: BrushOp) -> Result<Self> {
        let brush = Self {
            center,
            size,
            operation,
            textures: FaceTextures::default(),
        };
        if !brush.is_valid(EPSILON) {
            return Err(Error::DegenerateBrush { size, epsilon: EPSILON });
        }
        Ok(brush)
    }

    /// Solid brush from min/max corners (corners may be given in any order)
    pub fn add_between(a: Vec3, b: Vec3) -> Result<Self> {
        let bounds = Aabb::new(a.min(b), a.max(b));
        Self::new(bounds.center(), bounds.size(), BrushOp::Add)
    }

    /// Subtractive brush from min/max corners
    pub fn subtract_between(a: Vec3, b: Vec3) -> Result<Self> {
        let bounds = Aabb::new(a.min(b), a.max(b));
        Self::new(bounds.center(), bounds.size(), BrushOp::Subtract)
    }

    /// Build from a box without validation; used for carved fragments
    pub(crate) fn from_aabb(bounds: &Aabb, operation: BrushOp, textures: FaceTextures) -> Self {
        Self {
            center: bounds.center(),
            size: bounds.size(),
            operation,
            textures,
        }
    }

    pub fn with_textures(mut self, textures: FaceTextures) -> Self {
        self.textures = textures;
        self
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.center, self.size)
    }

    pub fn is_subtractive(&self) -> bool {
        self.operation == BrushOp::Subtract
    }

    pub fn is_valid(&self, epsilon: f32) -> bool {
        self.size.x > epsilon && self.size.y > epsilon && self.size.z > epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::face::Face;

    #[test]
    fn test_new_rejects_degenerate() {
        assert!(Brush::new(Vec3::ZERO, Vec3::ONE, BrushOp::Add).is_ok());
        let err = Brush::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0), BrushOp::Add).unwrap_err();
        assert!(matches!(err, Error::DegenerateBrush { .. }));
        assert!(Brush::new(Vec3::ZERO, Vec3::new(-1.0, 1.0, 1.0), BrushOp::Add).is_err());
    }

    #[test]
    fn test_between_normalizes_corners() {
        let brush = Brush::add_between(Vec3::new(4.0, 2.0, 0.0), Vec3::new(0.0, 0.0, 2.0)).unwrap();
        assert_eq!(brush.center, Vec3::new(2.0, 1.0, 1.0));
        assert_eq!(brush.size, Vec3::new(4.0, 2.0, 2.0));
        assert_eq!(brush.aabb().min, Vec3::ZERO);
    }

    #[test]
    fn test_json_schema() {
        let json = r#"{
            "pos": [1.0, 2.0, 3.0],
            "size": [4.0, 4.0, 4.0],
            "operation": "subtract",
            "textures": {"top": "ceiling.png", "bottom": "floor.png"}
        }"#;
        let brush: Brush = serde_json::from_str(json).unwrap();
        assert_eq!(brush.center, Vec3::new(1.0, 2.0, 3.0));
        assert!(brush.is_subtractive());
        assert_eq!(brush.textures.get(Face::Down), Some("floor.png"));

        let value = serde_json::to_value(&brush).unwrap();
        assert_eq!(value["pos"], serde_json::json!([1.0, 2.0, 3.0]));
        assert_eq!(value["operation"], "subtract");
        assert_eq!(value["textures"]["down"], "floor.png");
    }

    #[test]
    fn test_operation_defaults_to_add() {
        let brush: Brush = serde_json::from_str(r#"{"pos":[0,0,0],"size":[1,1,1]}"#).unwrap();
        assert_eq!(brush.operation, BrushOp::Add);
        assert_eq!(brush.textures, FaceTextures::default());
    }
}
