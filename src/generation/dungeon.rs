//! Room and corridor carving.
//!
//! Starts from one solid block and subtracts axis-aligned rooms joined by
//! L-shaped corridors. Placement is deterministic for a given seed.

use crate::brush::{Brush, Face, FaceTextures, SubtractConfig};
use crate::core::{Result, Vec3};
use crate::level::Level;
use crate::math::Aabb;
use super::config::DungeonConfig;

/// A generated level plus the volumes that were carved out of it.
#[derive(Debug, Clone)]
pub struct Dungeon {
    pub level: Level,
    pub rooms: Vec<Aabb>,
    pub corridors: Vec<Aabb>,
}

/// Counter-based hash sequence producing values in [0, 1].
struct HashSequence {
    seed: u32,
    counter: u32,
}

impl HashSequence {
    fn new(seed: u32) -> Self {
        Self { seed, counter: 0 }
    }

    fn next_unit(&mut self) -> f32 {
        let mut h = self.counter.wrapping_mul(374761393)
            .wrapping_add(self.seed.wrapping_mul(1274126177));
        h = (h ^ (h >> 13)).wrapping_mul(1103515245);
        h = h ^ (h >> 16);
        self.counter = self.counter.wrapping_add(1);
        (h & 0x7FFFFFFF) as f32 / 0x7FFFFFFF_u32 as f32
    }

    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_unit()
    }
}

/// Generate a dungeon level.
pub fn generate(config: &DungeonConfig) -> Result<Dungeon> {
    config.validate()?;

    let mut level = Level::new();
    let block = Brush::add_between(
        Vec3::ZERO,
        Vec3::new(config.width, config.height, config.depth),
    )?
    .with_textures(block_textures(config));
    level.push(block);

    let rooms = place_rooms(config);
    let corridors: Vec<Aabb> = rooms
        .windows(2)
        .flat_map(|pair| corridor_legs(config, &pair[0], &pair[1]))
        .collect();

    let subtract_config = SubtractConfig::default();
    for volume in rooms.iter().chain(&corridors) {
        let tool = Brush::subtract_between(volume.min, volume.max)?;
        let index = level.push(tool);
        level.subtract_at(index, &subtract_config)?;
        if !config.keep_tools {
            // subtract_at leaves the tool last
            level.brushes.pop();
        }
    }

    let solid: f32 = level.brushes().iter().map(|b| b.aabb().volume()).sum();
    log::info!(
        "Generated dungeon (seed {}): {} rooms, {} corridor legs, {} brushes, {:.0} solid volume",
        config.seed, rooms.len(), corridors.len(), level.len(), solid
    );

    Ok(Dungeon { level, rooms, corridors })
}

fn block_textures(config: &DungeonConfig) -> FaceTextures {
    FaceTextures::uniform(config.wall_texture.as_str())
        .with(Face::Down, config.floor_texture.as_str())
        .with(Face::Top, config.ceiling_texture.as_str())
}

fn place_rooms(config: &DungeonConfig) -> Vec<Aabb> {
    let mut rng = HashSequence::new(config.seed);
    let mut rooms: Vec<Aabb> = Vec::with_capacity(config.room_count);
    let wall = config.wall_thickness;
    let floor = wall;

    for _ in 0..config.max_attempts {
        if rooms.len() >= config.room_count {
            break;
        }

        let w = rng.range(config.room_min, config.room_max).round().clamp(config.room_min, config.room_max);
        let d = rng.range(config.room_min, config.room_max).round().clamp(config.room_min, config.room_max);
        let x_max = config.width - wall - w;
        let z_max = config.depth - wall - d;
        let x = rng.range(wall, x_max).round().clamp(wall, x_max);
        let z = rng.range(wall, z_max).round().clamp(wall, z_max);

        let candidate = Aabb::new(
            Vec3::new(x, floor, z),
            Vec3::new(x + w, floor + config.room_height, z + d),
        );

        // Keep at least one wall between rooms
        let padded = candidate.inflated(wall);
        if rooms.iter().any(|room| room.overlaps(&padded)) {
            continue;
        }
        rooms.push(candidate);
    }

    if rooms.len() < config.room_count {
        log::warn!(
            "Placed {} of {} rooms after {} attempts",
            rooms.len(), config.room_count, config.max_attempts
        );
    }

    rooms
}

/// X leg at `from`'s depth, then Z leg at `to`'s x.
fn corridor_legs(config: &DungeonConfig, from: &Aabb, to: &Aabb) -> [Aabb; 2] {
    let half = config.corridor_width * 0.5;
    let a = from.center();
    let b = to.center();
    let y0 = from.min.y;
    let y1 = y0 + config.room_height;

    let x_leg = Aabb::new(
        Vec3::new(a.x.min(b.x) - half, y0, a.z - half),
        Vec3::new(a.x.max(b.x) + half, y1, a.z + half),
    );
    let z_leg = Aabb::new(
        Vec3::new(b.x - half, y0, a.z.min(b.z) - half),
        Vec3::new(b.x + half, y1, a.z.max(b.z) + half),
    );
    [x_leg, z_leg]
}
