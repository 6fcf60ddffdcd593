//! Sparse occupancy index
//!
//! Records which coordinates are already claimed by a room or a
//! corridor cell. The growth loop queries it to detect collisions;
//! nothing is ever removed during a generation run.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Index of a room in the builder's insertion-ordered room list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

/// What claims an occupied coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    Room(RoomId),
    Corridor,
}

/// Sparse map from coordinate to occupant
#[derive(Debug, Clone, Default)]
pub struct OccupancyIndex {
    cells: HashMap<(i32, i32), Occupant>,
}

impl OccupancyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupant at `(x, y)`, if any
    pub fn get(&self, x: i32, y: i32) -> Option<Occupant> {
        self.cells.get(&(x, y)).copied()
    }

    /// Claim `(x, y)` unconditionally
    ///
    /// Callers are responsible for any bounds policy; a later write for
    /// the same key overwrites.
    pub fn set(&mut self, x: i32, y: i32, occupant: Occupant) {
        self.cells.insert((x, y), occupant);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
