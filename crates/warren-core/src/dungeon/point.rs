//! Integer 2D vector

use core::ops::{Add, AddAssign};
use serde::{Deserialize, Serialize};

/// A map coordinate or offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// One cell toward the top of the map
    pub const UP: Point = Point { x: 0, y: -1 };
    /// One cell toward the bottom of the map
    pub const DOWN: Point = Point { x: 0, y: 1 };
    /// One cell toward the left edge
    pub const LEFT: Point = Point { x: -1, y: 0 };
    /// One cell toward the right edge
    pub const RIGHT: Point = Point { x: 1, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}
