//! Dungeon generation configuration.

use crate::core::{Error, Result};

/// Configuration for room/corridor carving.
#[derive(Clone, Debug)]
pub struct DungeonConfig {
    /// Random seed for room placement.
    pub seed: u32,
    /// Solid block extent along X.
    pub width: f32,
    /// Solid block extent along Y.
    pub height: f32,
    /// Solid block extent along Z.
    pub depth: f32,
    /// Minimum solid left between rooms and around the block edge.
    pub wall_thickness: f32,
    /// Rooms to place (fewer if placement attempts run out).
    pub room_count: usize,
    /// Smallest room footprint side.
    pub room_min: f32,
    /// Largest room footprint side.
    pub room_max: f32,
    /// Interior height of rooms and corridors.
    pub room_height: f32,
    /// Corridor width.
    pub corridor_width: f32,
    /// Placement attempts before giving up on further rooms.
    pub max_attempts: usize,
    /// Leave the subtractive brushes in the level after carving.
    pub keep_tools: bool,
    pub wall_texture: String,
    pub floor_texture: String,
    pub ceiling_texture: String,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            width: 64.0,
            height: 8.0,
            depth: 64.0,
            wall_thickness: 1.0,
            room_count: 6,
            room_min: 6.0,
            room_max: 14.0,
            room_height: 4.0,
            corridor_width: 2.0,
            max_attempts: 200,
            keep_tools: false,
            wall_texture: "wall.png".to_string(),
            floor_texture: "floor.png".to_string(),
            ceiling_texture: "ceiling.png".to_string(),
        }
    }
}

impl DungeonConfig {
    /// Check that rooms and corridors fit inside the block.
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| -> Result<()> { Err(Error::Generation(msg)) };

        // NaN slips through every ordered comparison below
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
            ("wall_thickness", self.wall_thickness),
            ("room_min", self.room_min),
            ("room_max", self.room_max),
            ("room_height", self.room_height),
            ("corridor_width", self.corridor_width),
        ];
        if let Some((name, value)) = dimensions.iter().find(|(_, v)| !v.is_finite()) {
            return fail(format!("{} must be finite, got {}", name, value));
        }

        if self.wall_thickness <= 0.0 || self.corridor_width <= 0.0 || self.room_height <= 0.0 {
            return fail("wall thickness, corridor width and room height must be positive".into());
        }
        if self.room_min <= 0.0 || self.room_min > self.room_max {
            return fail(format!(
                "room size range {}..{} is invalid", self.room_min, self.room_max
            ));
        }
        if self.corridor_width > self.room_min {
            return fail(format!(
                "corridor width {} exceeds smallest room {}", self.corridor_width, self.room_min
            ));
        }
        let footprint = self.room_max + 2.0 * self.wall_thickness;
        if self.width < footprint || self.depth < footprint {
            return fail(format!(
                "block {}x{} too small for rooms up to {}", self.width, self.depth, self.room_max
            ));
        }
        if self.height < self.room_height + 2.0 * self.wall_thickness {
            return fail(format!(
                "block height {} too small for rooms of height {}", self.height, self.room_height
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DungeonConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_rooms_larger_than_block() {
        let cfg = DungeonConfig { width: 10.0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(Error::Generation(_))));
    }

    #[test]
    fn test_rejects_inverted_room_range() {
        let cfg = DungeonConfig { room_min: 12.0, room_max: 8.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_non_finite_sizes() {
        let nan_room = DungeonConfig { room_min: f32::NAN, ..Default::default() };
        assert!(matches!(nan_room.validate(), Err(Error::Generation(_))));

        let nan_width = DungeonConfig { width: f32::NAN, ..Default::default() };
        assert!(matches!(nan_width.validate(), Err(Error::Generation(_))));

        let infinite_wall = DungeonConfig { wall_thickness: f32::INFINITY, ..Default::default() };
        assert!(infinite_wall.validate().is_err());
    }

    #[test]
    fn test_rejects_low_ceiling() {
        let cfg = DungeonConfig { height: 5.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }
}
