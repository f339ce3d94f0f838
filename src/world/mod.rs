//! The grid world: static map, board entities, inventories, stations.
//!
//! Everything here is data plus local rules; the turn-advance logic that
//! ties it together lives in `engine`.

pub mod board;
pub mod grid;
pub mod inventory;
pub mod station;

pub use board::{Board, BoardItem};
pub use grid::{
    CellKind, GridMap, Position, StationKind, BACKGROUND, MAP_HEIGHT, MAP_WIDTH, PLAYER_SPAWNS,
};
pub use inventory::{DropRing, Inventory, DROP_MARKERS, DROP_SLOT_COUNT};
pub use station::{make_from, StationBuffer};
