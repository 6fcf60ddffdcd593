//! Dungeon generation system
//!
//! A dungeon grows outward from a seed room: corridors are grown from
//! the unused walls of existing rooms, and new rooms are placed where
//! corridors terminate without hitting anything. A sparse occupancy
//! index detects collisions during growth.

mod builder;
mod generation;
mod occupancy;
mod point;
mod rect;
mod room;
mod tilemap;

pub use builder::Dungeon;
pub use generation::{generate, GenConfig, GenError, GeneratedMap};
pub use occupancy::{Occupant, OccupancyIndex, RoomId};
pub use point::Point;
pub use rect::Rect;
pub use room::{Room, Wall, WallSet};
pub use tilemap::{Tile, TileMap};
