//! Default generation parameters.
//!
//! These match the tuning the surrounding game ships with; callers can
//! override any of them through [`crate::dungeon::GenConfig`].

/// Map dimensions
pub const DEFAULT_MAP_WIDTH: i32 = 80;
pub const DEFAULT_MAP_HEIGHT: i32 = 43;

/// Margin that keeps all placed geometry off the map edge
pub const DEFAULT_PADDING: i32 = 4;

/// Growth iterations are complexity x 8
pub const DEFAULT_COMPLEXITY: u32 = 10;

/// Room side bounds, uniform in [min, max)
pub const DEFAULT_ROOM_MIN_SIZE: i32 = 4;
pub const DEFAULT_ROOM_MAX_SIZE: i32 = 7;

/// Corridor length bounds, uniform in [min, max)
pub const DEFAULT_MIN_CORRIDOR_LENGTH: i32 = DEFAULT_ROOM_MIN_SIZE + 1;
pub const DEFAULT_MAX_CORRIDOR_LENGTH: i32 = DEFAULT_ROOM_MAX_SIZE * 3;

/// Side length of the square room seeded at the map center
pub const DEFAULT_SEED_ROOM_SIZE: i32 = 8;

/// Upper bound (inclusive) on spawn positions scattered per room
pub const DEFAULT_MAX_SPAWNS_PER_ROOM: u32 = 2;
