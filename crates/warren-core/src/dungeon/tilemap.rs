//! Tile materialization
//!
//! Turns a finished [`GeneratedMap`] into a dense tile grid: floor for
//! every corridor cell and every room floor extent, wall everywhere
//! else. Presentation layers consume this grid.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::generation::GeneratedMap;

/// Terrain at one map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum Tile {
    #[default]
    Wall,
    Floor,
}

impl Tile {
    pub const fn is_walkable(&self) -> bool {
        matches!(self, Tile::Floor)
    }

    /// Display character for debugging output
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Wall => ' ',
            Tile::Floor => '.',
        }
    }
}

/// Dense tile grid, indexed as `[x][y]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMap {
    width: i32,
    height: i32,
    tiles: Vec<Vec<Tile>>,
}

impl TileMap {
    /// Create a grid filled with wall tiles
    pub fn new(width: i32, height: i32) -> Self {
        let cols = width.max(0) as usize;
        let rows = height.max(0) as usize;
        Self {
            width,
            height,
            tiles: vec![vec![Tile::Wall; rows]; cols],
        }
    }

    /// Carve floors for every corridor cell and room extent
    pub fn from_layout(layout: &GeneratedMap) -> Self {
        let mut map = Self::new(layout.width, layout.height);

        for cell in &layout.corridors {
            map.set(cell.x, cell.y, Tile::Floor);
        }
        for room in &layout.rooms {
            for cell in room.floor_cells() {
                map.set(cell.x, cell.y, Tile::Floor);
            }
        }

        map
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Tile at `(x, y)`, `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.tiles[x as usize][y as usize])
    }

    /// Write a tile; out-of-grid writes are dropped
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return;
        }
        self.tiles[x as usize][y as usize] = tile;
    }

    /// Render the grid row by row for debugging
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.tiles[x as usize][y as usize].symbol());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Point, Rect, RoomId};

    fn layout() -> GeneratedMap {
        GeneratedMap {
            width: 12,
            height: 8,
            rooms: vec![Rect::new(1, 1, 3, 3)],
            corridors: vec![Point::new(4, 2), Point::new(5, 2)],
            start_room: RoomId(0),
            exit_room: RoomId(0),
            player_start: Point::new(2, 2),
            spawns: Vec::new(),
        }
    }

    #[test]
    fn test_new_is_all_wall() {
        let map = TileMap::new(4, 3);
        for x in 0..4 {
            for y in 0..3 {
                assert_eq!(map.get(x, y), Some(Tile::Wall));
            }
        }
        assert_eq!(map.get(4, 0), None);
        assert_eq!(map.get(0, -1), None);
    }

    #[test]
    fn test_from_layout_carves_rooms_and_corridors() {
        let map = TileMap::from_layout(&layout());

        // Room extent is half-open: 1..4 on both axes.
        for x in 1..4 {
            for y in 1..4 {
                assert_eq!(map.get(x, y), Some(Tile::Floor));
            }
        }
        assert_eq!(map.get(4, 1), Some(Tile::Wall));
        assert_eq!(map.get(4, 2), Some(Tile::Floor));
        assert_eq!(map.get(5, 2), Some(Tile::Floor));
        assert_eq!(map.get(6, 2), Some(Tile::Wall));
    }

    #[test]
    fn test_out_of_grid_writes_are_dropped() {
        let mut map = TileMap::new(4, 3);
        map.set(-1, 0, Tile::Floor);
        map.set(0, 3, Tile::Floor);
        assert_eq!(map, TileMap::new(4, 3));
    }

    #[test]
    fn test_to_ascii_shape() {
        let ascii = TileMap::from_layout(&layout()).to_ascii();
        let lines: Vec<&str> = ascii.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| l.chars().count() == 12));
        assert_eq!(&lines[2][1..6], ".....");
    }

    #[test]
    fn test_walkability() {
        assert!(Tile::Floor.is_walkable());
        assert!(!Tile::Wall.is_walkable());
    }
}
