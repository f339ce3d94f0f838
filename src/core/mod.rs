//! Core engine types: players, actions, RNG.
//!
//! These are the building blocks shared by the crafting engine and the
//! episode driver; everything domain-specific (items, stations, goals)
//! lives in `catalog` and `world`.

pub mod action;
pub mod player;
pub mod rng;

pub use action::{
    decode_action, encode_action, ActionRecord, Direction, PlayerAction, ACTION_SPACE,
    INVENTORY_SLOTS, PLAYER_ACTION_COUNT,
};
pub use player::{PerPlayer, PlayerId, PLAYER_COUNT};
pub use rng::{EpisodeRng, EpisodeRngState};
