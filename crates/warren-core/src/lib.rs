//! warren-core: procedural room-and-corridor dungeon generation
//!
//! This crate contains all generation logic with no I/O dependencies.
//! It is designed to be pure and testable: given a seed and a
//! configuration, it deterministically produces an ordered list of
//! rooms, corridor cells, start/exit room picks and spawn positions,
//! which the surrounding game materializes into tiles and entities.

pub mod dungeon;

mod consts;
mod rng;

pub use consts::*;
pub use rng::GenRng;
