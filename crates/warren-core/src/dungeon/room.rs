//! Placed rooms and their ready walls
//!
//! Each placed room keeps a set of the compass walls that have not yet
//! been used as a corridor origin. A wall is consumed when it is
//! picked, whether or not the corridor that follows survives, so a
//! room can originate at most four corridors.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use super::point::Point;
use super::rect::Rect;
use crate::rng::GenRng;

/// One of a room's four compass walls
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Wall {
    North,
    South,
    East,
    West,
}

impl Wall {
    /// Unit direction a corridor grows in from this wall
    pub const fn direction(self) -> Point {
        match self {
            Wall::North => Point::UP,
            Wall::South => Point::DOWN,
            Wall::East => Point::RIGHT,
            Wall::West => Point::LEFT,
        }
    }

    /// The bit representing this wall in a [`WallSet`]
    pub const fn flag(self) -> WallSet {
        match self {
            Wall::North => WallSet::NORTH,
            Wall::South => WallSet::SOUTH,
            Wall::East => WallSet::EAST,
            Wall::West => WallSet::WEST,
        }
    }

    /// Cell a corridor starts stepping from: the midpoint of this wall,
    /// on the room's outermost floor row or column
    pub const fn corridor_origin(self, rect: &Rect) -> Point {
        let mid_x = rect.x1 + rect.width() / 2;
        let mid_y = rect.y1 + rect.height() / 2;
        match self {
            Wall::North => Point::new(mid_x, rect.y1),
            Wall::South => Point::new(mid_x, rect.y2 - 1),
            Wall::East => Point::new(rect.x2 - 1, mid_y),
            Wall::West => Point::new(rect.x1, mid_y),
        }
    }
}

bitflags! {
    /// Set of walls still available as corridor origins
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WallSet: u8 {
        const NORTH = 0x01;
        const SOUTH = 0x02;
        const EAST = 0x04;
        const WEST = 0x08;
    }
}

/// A placed room: its shape plus ready-wall bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub rect: Rect,
    pub ready_walls: WallSet,
}

impl Room {
    /// Wrap a placed shape; all four walls start ready
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ready_walls: WallSet::all(),
        }
    }

    /// Pick a wall uniformly from the remaining ready walls and consume it
    ///
    /// Returns `None` when every wall has already been used.
    pub fn take_random_wall(&mut self, rng: &mut GenRng) -> Option<Wall> {
        let ready: Vec<Wall> = Wall::iter()
            .filter(|w| self.ready_walls.contains(w.flag()))
            .collect();
        let wall = *rng.choose(&ready)?;
        self.ready_walls.remove(wall.flag());
        Some(wall)
    }
}
