//! Incremental dungeon builder
//!
//! Owns the placed rooms, the committed corridor cells and the
//! occupancy index. Rooms and corridors only accumulate; a builder is
//! constructed per generation call and discarded once the output is
//! materialized.

use super::occupancy::{Occupant, OccupancyIndex, RoomId};
use super::point::Point;
use super::rect::Rect;
use super::room::{Room, Wall};
use crate::rng::GenRng;

/// Dungeon under construction
#[derive(Debug, Clone)]
pub struct Dungeon {
    rooms: Vec<Room>,
    corridors: Vec<Point>,
    index: OccupancyIndex,
    border: Rect,
    padding: i32,
}

impl Dungeon {
    /// Create an empty builder for a map of the given size
    ///
    /// The border rectangle is the map shrunk by `padding` on all
    /// sides; every placed room and corridor cell must stay enclosed
    /// by it.
    pub fn new(map_width: i32, map_height: i32, padding: i32) -> Self {
        Self {
            rooms: Vec::new(),
            corridors: Vec::new(),
            index: OccupancyIndex::new(),
            border: Rect::new(
                padding,
                padding,
                map_width - 2 * padding,
                map_height - 2 * padding,
            ),
            padding,
        }
    }

    /// Check that the border encloses `candidate`, boundaries included
    pub fn in_limits(&self, candidate: &Rect) -> bool {
        self.border.encloses(candidate)
    }

    /// Place a room if it fits inside the border
    ///
    /// Rejected candidates are a silent no-op. Accepted rooms start
    /// with all four walls ready and claim their floor extent in the
    /// occupancy index.
    pub fn add_room(&mut self, candidate: Rect) -> Option<RoomId> {
        if !self.in_limits(&candidate) {
            return None;
        }

        let id = RoomId(self.rooms.len());
        self.rooms.push(Room::new(candidate));
        for cell in candidate.floor_cells() {
            self.index.set(cell.x, cell.y, Occupant::Room(id));
        }
        Some(id)
    }

    /// Pick a room uniformly from the placed rooms
    ///
    /// Panics if no room has been placed yet; the generation procedure
    /// seeds one room before ever calling this.
    pub fn random_room(&self, rng: &mut GenRng) -> RoomId {
        assert!(!self.rooms.is_empty(), "random_room on a dungeon with no rooms");
        RoomId(rng.index(self.rooms.len()))
    }

    /// Grow a corridor from a random ready wall of `room`
    ///
    /// Consumes one ready wall whether or not the growth succeeds; a
    /// room whose walls are exhausted is a no-op. Returns the terminal
    /// position when the corridor ran its full length without touching
    /// anything (a candidate spot for a new room), `None` otherwise.
    pub fn add_random_corridor(
        &mut self,
        room: RoomId,
        length: i32,
        connecting: bool,
        rng: &mut GenRng,
    ) -> Option<Point> {
        let wall = self.rooms[room.0].take_random_wall(rng)?;
        self.grow_corridor(room, wall, length, connecting)
    }

    /// Step a corridor outward from the given wall
    ///
    /// Stepping stops at the first occupied cell; a step whose padded
    /// cell would leave the border aborts the whole corridor with
    /// nothing committed. Pending cells are committed unless this is a
    /// connecting probe that touched nothing.
    pub(crate) fn grow_corridor(
        &mut self,
        room: RoomId,
        wall: Wall,
        length: i32,
        connecting: bool,
    ) -> Option<Point> {
        let rect = self.rooms[room.0].rect;
        let direction = wall.direction();
        let mut position = wall.corridor_origin(&rect);

        let mut pending: Vec<Point> = Vec::new();
        let mut touched = false;

        for _ in 0..length {
            position += direction;

            if !self.in_limits(&Rect::new(position.x, position.y, 1, 1).grow(self.padding)) {
                return None;
            }

            if self.index.get(position.x, position.y).is_some() {
                touched = true;
                break;
            }

            pending.push(position);
        }

        if touched || !connecting {
            for cell in pending {
                self.index.set(cell.x, cell.y, Occupant::Corridor);
                self.corridors.push(cell);
            }

            if touched {
                // Joined an existing feature; nothing to seed here.
                return None;
            }
        }

        Some(position)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn corridors(&self) -> &[Point] {
        &self.corridors
    }

    pub fn border(&self) -> Rect {
        self.border
    }

    pub fn occupancy(&self) -> &OccupancyIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::room::WallSet;

    fn dungeon_80x45() -> Dungeon {
        Dungeon::new(80, 45, 4)
    }

    #[test]
    fn test_border_is_map_shrunk_by_padding() {
        let dungeon = dungeon_80x45();
        assert_eq!(dungeon.border(), Rect::new(4, 4, 72, 37));
    }

    #[test]
    fn test_add_room_marks_floor_extent() {
        let mut dungeon = dungeon_80x45();
        let id = dungeon.add_room(Rect::new(10, 10, 5, 5)).expect("in bounds");

        assert_eq!(dungeon.rooms().len(), 1);
        assert_eq!(dungeon.occupancy().len(), 25);
        assert_eq!(dungeon.occupancy().get(10, 10), Some(Occupant::Room(id)));
        assert_eq!(dungeon.occupancy().get(14, 14), Some(Occupant::Room(id)));
        // The end corner is not a floor cell.
        assert_eq!(dungeon.occupancy().get(15, 10), None);
        assert_eq!(dungeon.occupancy().get(10, 15), None);
    }

    #[test]
    fn test_add_room_outside_border_is_rejected() {
        let mut dungeon = dungeon_80x45();
        assert_eq!(dungeon.add_room(Rect::new(0, 0, 5, 5)), None);
        assert_eq!(dungeon.add_room(Rect::new(70, 38, 10, 10)), None);
        assert!(dungeon.rooms().is_empty());
        assert!(dungeon.occupancy().is_empty());
    }

    #[test]
    fn test_add_room_on_border_line_is_accepted() {
        let mut dungeon = dungeon_80x45();
        assert!(dungeon.add_room(Rect::new(4, 4, 5, 5)).is_some());
    }

    #[test]
    #[should_panic(expected = "no rooms")]
    fn test_random_room_with_no_rooms_panics() {
        let dungeon = dungeon_80x45();
        let mut rng = GenRng::new(1);
        dungeon.random_room(&mut rng);
    }

    #[test]
    fn test_full_run_commits_length_cells_and_returns_end() {
        let mut dungeon = dungeon_80x45();
        let room = dungeon.add_room(Rect::new(30, 20, 6, 6)).unwrap();

        let end = dungeon.grow_corridor(room, Wall::East, 5, false);

        assert_eq!(end, Some(Point::new(40, 23)));
        assert_eq!(dungeon.corridors().len(), 5);
        for x in 36..=40 {
            assert_eq!(dungeon.occupancy().get(x, 23), Some(Occupant::Corridor));
        }
    }

    #[test]
    fn test_collision_commits_prefix_and_returns_none() {
        let mut dungeon = dungeon_80x45();
        let room = dungeon.add_room(Rect::new(30, 20, 6, 6)).unwrap();
        dungeon.add_room(Rect::new(39, 20, 4, 6)).unwrap();

        // Fourth step east lands on the blocking room.
        let end = dungeon.grow_corridor(room, Wall::East, 5, false);

        assert_eq!(end, None);
        assert_eq!(
            dungeon.corridors(),
            &[Point::new(36, 23), Point::new(37, 23), Point::new(38, 23)]
        );
    }

    #[test]
    fn test_immediate_collision_commits_nothing() {
        let mut dungeon = dungeon_80x45();
        let room = dungeon.add_room(Rect::new(30, 20, 6, 6)).unwrap();
        dungeon.add_room(Rect::new(36, 20, 4, 6)).unwrap();
        let occupied_before = dungeon.occupancy().len();

        let end = dungeon.grow_corridor(room, Wall::East, 5, false);

        assert_eq!(end, None);
        assert!(dungeon.corridors().is_empty());
        assert_eq!(dungeon.occupancy().len(), occupied_before);
    }

    #[test]
    fn test_border_violation_discards_whole_corridor() {
        let mut dungeon = Dungeon::new(30, 30, 4);
        let room = dungeon.add_room(Rect::new(5, 13, 4, 4)).unwrap();
        let occupied_before = dungeon.occupancy().len();

        // One step west already pushes the padded cell past the border.
        let end = dungeon.grow_corridor(room, Wall::West, 3, false);

        assert_eq!(end, None);
        assert!(dungeon.corridors().is_empty());
        assert_eq!(dungeon.occupancy().len(), occupied_before);
    }

    #[test]
    fn test_connecting_probe_without_touch_commits_nothing() {
        let mut dungeon = dungeon_80x45();
        let room = dungeon.add_room(Rect::new(30, 20, 6, 6)).unwrap();
        let occupied_before = dungeon.occupancy().len();

        let end = dungeon.grow_corridor(room, Wall::East, 5, true);

        // The probe reports where it ended but carves no dead end.
        assert_eq!(end, Some(Point::new(40, 23)));
        assert!(dungeon.corridors().is_empty());
        assert_eq!(dungeon.occupancy().len(), occupied_before);
    }

    #[test]
    fn test_connecting_run_that_touches_is_committed() {
        let mut dungeon = dungeon_80x45();
        let room = dungeon.add_room(Rect::new(30, 20, 6, 6)).unwrap();
        dungeon.add_room(Rect::new(39, 20, 4, 6)).unwrap();

        let end = dungeon.grow_corridor(room, Wall::East, 5, true);

        assert_eq!(end, None);
        assert_eq!(dungeon.corridors().len(), 3);
    }

    #[test]
    fn test_wall_consumed_by_every_attempt() {
        let mut dungeon = dungeon_80x45();
        let room = dungeon.add_room(Rect::new(30, 20, 6, 6)).unwrap();
        let mut rng = GenRng::new(99);

        for used in 1..=4u32 {
            dungeon.add_random_corridor(room, 5, false, &mut rng);
            assert_eq!(
                dungeon.room(room).ready_walls.bits().count_ones(),
                4 - used
            );
        }
    }

    #[test]
    fn test_exhausted_walls_are_a_noop() {
        let mut dungeon = dungeon_80x45();
        let room = dungeon.add_room(Rect::new(30, 20, 6, 6)).unwrap();
        dungeon.rooms[room.0].ready_walls = WallSet::empty();
        let occupied_before = dungeon.occupancy().len();
        let mut rng = GenRng::new(5);

        let end = dungeon.add_random_corridor(room, 5, false, &mut rng);

        assert_eq!(end, None);
        assert!(dungeon.corridors().is_empty());
        assert_eq!(dungeon.occupancy().len(), occupied_before);
    }
}
