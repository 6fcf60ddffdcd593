//! Axis-aligned rectangle for room shapes
//!
//! Bounds are stored as corners: `(x1, y1)` top-left, `(x2, y2)`
//! bottom-right, with `x2 = x1 + width`. Floor tiles occupy the
//! half-open range `x1..x2 x y1..y2`; the overlap predicates treat all
//! four bounds as closed intervals, so rooms that merely share a
//! boundary line still count as intersecting.

use serde::{Deserialize, Serialize};

use super::point::Point;

/// A rectangular room shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    /// Top-left corner
    pub const fn position(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Bottom-right corner
    pub const fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub const fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub const fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// Integer midpoint of the corners, truncated toward zero
    pub const fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Check if this rectangle overlaps another, boundaries included
    pub const fn intersects(&self, other: &Rect) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    /// Check if this rectangle contains another, boundaries included
    pub const fn encloses(&self, other: &Rect) -> bool {
        self.x1 <= other.x1 && self.x2 >= other.x2 && self.y1 <= other.y1 && self.y2 >= other.y2
    }

    /// Check if the point lies inside the rectangle, boundaries included
    pub const fn contains(&self, point: Point) -> bool {
        self.x1 <= point.x && point.x <= self.x2 && self.y1 <= point.y && point.y <= self.y2
    }

    /// Return a copy expanded by `padding` on every side
    ///
    /// The center is unchanged.
    pub const fn grow(&self, padding: i32) -> Rect {
        Rect::new(
            self.x1 - padding,
            self.y1 - padding,
            self.width() + padding * 2,
            self.height() + padding * 2,
        )
    }

    /// Iterate the half-open cell range used for floor tiles
    pub fn floor_cells(&self) -> impl Iterator<Item = Point> {
        let Rect { x1, y1, x2, y2 } = *self;
        (x1..x2).flat_map(move |x| (y1..y2).map(move |y| Point::new(x, y)))
    }
}
