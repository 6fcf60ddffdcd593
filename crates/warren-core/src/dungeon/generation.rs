//! Top-level dungeon generation
//!
//! Seeds one room at the map center, then repeatedly grows corridors
//! from the walls of random existing rooms, seeding a new room wherever
//! a corridor runs its full length without hitting anything. Collisions
//! and out-of-border placements are accepted as natural variability:
//! nothing is retried, so the final room count varies from run to run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::builder::Dungeon;
use super::occupancy::RoomId;
use super::point::Point;
use super::rect::Rect;
use crate::consts::*;
use crate::rng::GenRng;

/// Generation parameters
///
/// Size and length ranges are half-open: `[min, max)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenConfig {
    pub map_width: i32,
    pub map_height: i32,
    pub padding: i32,
    pub complexity: u32,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub min_corridor_length: i32,
    pub max_corridor_length: i32,
    pub seed_room_size: i32,
    pub max_spawns_per_room: u32,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
            padding: DEFAULT_PADDING,
            complexity: DEFAULT_COMPLEXITY,
            room_min_size: DEFAULT_ROOM_MIN_SIZE,
            room_max_size: DEFAULT_ROOM_MAX_SIZE,
            min_corridor_length: DEFAULT_MIN_CORRIDOR_LENGTH,
            max_corridor_length: DEFAULT_MAX_CORRIDOR_LENGTH,
            seed_room_size: DEFAULT_SEED_ROOM_SIZE,
            max_spawns_per_room: DEFAULT_MAX_SPAWNS_PER_ROOM,
        }
    }
}

/// Why a generation call could not start
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("rooms must be at least 2 cells per side, got {min}")]
    RoomTooNarrow { min: i32 },

    #[error("empty room size range [{min}, {max})")]
    EmptyRoomRange { min: i32, max: i32 },

    #[error("corridors must be at least 1 cell long, got {min}")]
    CorridorTooShort { min: i32 },

    #[error("empty corridor length range [{min}, {max})")]
    EmptyCorridorRange { min: i32, max: i32 },

    #[error("seed room size must be positive, got {size}")]
    SeedRoomTooSmall { size: i32 },

    #[error(
        "map {width}x{height} with padding {padding} cannot hold a {seed_room_size}-cell seed room"
    )]
    MapTooSmall {
        width: i32,
        height: i32,
        padding: i32,
        seed_room_size: i32,
    },
}

impl GenConfig {
    /// Reject parameter combinations the growth loop cannot work with
    pub fn validate(&self) -> Result<(), GenError> {
        if self.room_min_size < 2 {
            return Err(GenError::RoomTooNarrow {
                min: self.room_min_size,
            });
        }
        if self.room_min_size >= self.room_max_size {
            return Err(GenError::EmptyRoomRange {
                min: self.room_min_size,
                max: self.room_max_size,
            });
        }
        if self.min_corridor_length < 1 {
            return Err(GenError::CorridorTooShort {
                min: self.min_corridor_length,
            });
        }
        if self.min_corridor_length >= self.max_corridor_length {
            return Err(GenError::EmptyCorridorRange {
                min: self.min_corridor_length,
                max: self.max_corridor_length,
            });
        }
        if self.seed_room_size <= 0 {
            return Err(GenError::SeedRoomTooSmall {
                size: self.seed_room_size,
            });
        }
        Ok(())
    }
}

/// Finished generation output
///
/// Everything the surrounding game needs: room shapes in placement
/// order, corridor cells in carve order, the start/exit picks and the
/// scattered spawn positions. Room shapes are the placed originals,
/// never grown variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMap {
    pub width: i32,
    pub height: i32,
    pub rooms: Vec<Rect>,
    pub corridors: Vec<Point>,
    pub start_room: RoomId,
    pub exit_room: RoomId,
    pub player_start: Point,
    pub spawns: Vec<Point>,
}

/// Generate a dungeon
///
/// Deterministic for a given config and RNG seed. The room count is
/// not guaranteed: growth attempts that collide or leave the border
/// simply produce nothing.
pub fn generate(config: &GenConfig, rng: &mut GenRng) -> Result<GeneratedMap, GenError> {
    config.validate()?;

    let mut dungeon = Dungeon::new(config.map_width, config.map_height, config.padding);

    // Seed room, centered.
    let seed = config.seed_room_size;
    let seed_rect = Rect::new(
        (config.map_width - seed) / 2,
        (config.map_height - seed) / 2,
        seed,
        seed,
    );
    dungeon.add_room(seed_rect).ok_or(GenError::MapTooSmall {
        width: config.map_width,
        height: config.map_height,
        padding: config.padding,
        seed_room_size: seed,
    })?;

    for _ in 0..config.complexity.saturating_mul(8) {
        let room = dungeon.random_room(rng);
        let length = rng.range(config.min_corridor_length, config.max_corridor_length);

        if let Some(end) = dungeon.add_random_corridor(room, length, false, rng) {
            // Anchor the new room one cell back so it overlaps the
            // corridor's last cell, keeping the joint connected.
            let w = rng.range(config.room_min_size, config.room_max_size);
            let h = rng.range(config.room_min_size, config.room_max_size);
            dungeon.add_room(Rect::new(end.x - 1, end.y - 1, w, h));
        }
    }

    let start_room = dungeon.random_room(rng);
    let player_start = dungeon.room(start_room).rect.center();

    let mut taken = vec![player_start];
    let mut spawns = Vec::new();
    for room in dungeon.rooms() {
        scatter_spawns(
            &room.rect,
            config.max_spawns_per_room,
            &mut taken,
            &mut spawns,
            rng,
        );
    }

    let exit_room = if dungeon.rooms().len() > 1 {
        loop {
            let candidate = dungeon.random_room(rng);
            if candidate != start_room {
                break candidate;
            }
        }
    } else {
        // Only the seed room survived; nowhere distinct to pick.
        start_room
    };

    Ok(GeneratedMap {
        width: config.map_width,
        height: config.map_height,
        rooms: dungeon.rooms().iter().map(|r| r.rect).collect(),
        corridors: dungeon.corridors().to_vec(),
        start_room,
        exit_room,
        player_start,
        spawns,
    })
}

/// Scatter spawn positions over a room's interior
///
/// Draws a count in `[0, max_spawns]`, then a uniform interior cell per
/// spawn; candidates that collide with an already-taken position are
/// dropped, not retried.
fn scatter_spawns(
    rect: &Rect,
    max_spawns: u32,
    taken: &mut Vec<Point>,
    spawns: &mut Vec<Point>,
    rng: &mut GenRng,
) {
    if rect.width() < 2 || rect.height() < 2 {
        return;
    }

    let count = rng.range_inclusive(0, max_spawns as i32);
    for _ in 0..count {
        let x = rng.range_inclusive(rect.x1 + 1, rect.x2 - 1);
        let y = rng.range_inclusive(rect.y1 + 1, rect.y2 - 1);
        let candidate = Point::new(x, y);

        if !taken.contains(&candidate) {
            taken.push(candidate);
            spawns.push(candidate);
        }
    }
}
