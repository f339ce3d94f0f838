//! # craftworld
//!
//! A two-player crafting grid-world engine for RL and dialogue-grounding
//! training.
//!
//! ## Design Principles
//!
//! 1. **Two coupled state machines**: the crafting simulation and the
//!    goal-grounding inference engine never call each other. They share
//!    only the goal/jewelry vocabulary in `catalog`.
//!
//! 2. **Deterministic**: a supplied seed is the sole source of
//!    non-determinism. Same seed, same episode.
//!
//! 3. **Fire-and-forget diagnostics**: engines emit `tracing` events;
//!    a failing or absent subscriber never affects simulation state.
//!
//! ## Architecture
//!
//! - **Fixed-capacity arenas**: the drop-slot ring and station buffers
//!   have hard-coded capacities, so they are arrays indexed by small
//!   integers rather than growable containers.
//!
//! - **Entities are data**: board objects are tagged structs with a
//!   position and a visibility flag; the two interaction rules live in
//!   the engine's use-slot handler, not in per-entity behavior.
//!
//! ## Modules
//!
//! - `core`: player IDs, the action vocabulary and codec, seeded RNG
//! - `catalog`: items, jewelry indexing, goal space, evidence distances
//! - `world`: grid map, board entities, inventories, stations
//! - `engine`: turn advance, rewards, rendering, observations, episodes
//! - `inference`: confidence vectors, evidence updates, back-channel acts
//! - `dialogue`: the symbolic command vocabulary
//! - `diagnostics`: best-effort file logging

pub mod catalog;
pub mod core;
pub mod diagnostics;
pub mod dialogue;
pub mod engine;
pub mod inference;
pub mod world;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    decode_action, encode_action, ActionRecord, Direction, EpisodeRng, EpisodeRngState, PerPlayer,
    PlayerAction, PlayerId, ACTION_SPACE, INVENTORY_SLOTS, PLAYER_COUNT,
};

pub use crate::catalog::{
    jewelry_index, jewelry_name, jewelry_parts, EvidenceTable, GoalVector, Item, ItemCategory,
    JewelryShape, GOAL_LEN, GOAL_REWARD, ITEM_COUNT, JEWELRY_COUNT,
};

pub use crate::world::{
    Board, CellKind, DropRing, GridMap, Inventory, Position, StationBuffer, StationKind,
    MAP_HEIGHT, MAP_WIDTH,
};

pub use crate::engine::{
    CraftingEngine, DisplayRemap, Episode, EpisodeConfig, Observation, PlayerState, StepOutcome,
    OBSERVATION_LEN, RENDER_HEIGHT,
};

pub use crate::inference::{
    BackChannelAct, BeliefState, ConfidenceState, ForwardAct, GoalInference, InferenceConfig,
    InferenceError, InferenceOutcome,
};

pub use crate::dialogue::{Command, ParseCommandError};
