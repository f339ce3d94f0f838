//! The observation surface consumed by the RL agent.
//!
//! One observation is a tuple of byte tensors: the visible map (drop
//! markers remapped to their true item characters), both inventories,
//! the two static masks, and the perspective player's goal progress.
//! The goal-progress vector is the player's one-hot goal while the goal
//! is outstanding and all zeros once it is complete.

use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

use crate::catalog::GOAL_LEN;
use crate::core::{PlayerId, INVENTORY_SLOTS, PLAYER_COUNT};
use crate::world::{MAP_HEIGHT, MAP_WIDTH};

use super::crafting::CraftingEngine;
use super::render::paint_map;

/// Flattened length of one observation.
pub const OBSERVATION_LEN: usize =
    3 * MAP_WIDTH * MAP_HEIGHT + PLAYER_COUNT * INVENTORY_SLOTS + GOAL_LEN;

/// A complete observation from one player's perspective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Visible map characters, row-major, `MAP_HEIGHT * MAP_WIDTH`.
    pub board: Vec<u8>,
    /// Inventory slot characters, player one then player two.
    pub inventories: [[u8; INVENTORY_SLOTS]; PLAYER_COUNT],
    /// Walkable mask, row-major, `MAP_HEIGHT * MAP_WIDTH`.
    pub walkable: Vec<u8>,
    /// Station mask, row-major, `MAP_HEIGHT * MAP_WIDTH`.
    pub stations: Vec<u8>,
    /// One-hot goal of the perspective player, zeroed once complete.
    #[serde(with = "BigArray")]
    pub goal_progress: [u8; GOAL_LEN],
}

impl Observation {
    /// Concatenate every component into one flat byte vector.
    #[must_use]
    pub fn flatten(&self) -> Vec<u8> {
        let mut flat = Vec::with_capacity(OBSERVATION_LEN);
        flat.extend_from_slice(&self.board);
        for inventory in &self.inventories {
            flat.extend_from_slice(inventory);
        }
        flat.extend_from_slice(&self.walkable);
        flat.extend_from_slice(&self.stations);
        flat.extend_from_slice(&self.goal_progress);
        flat
    }

    /// Compact binary encoding for transport.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode an observation produced by [`Observation::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl CraftingEngine {
    /// Build the observation from one player's perspective.
    #[must_use]
    pub fn observe(&self, perspective: PlayerId) -> Observation {
        let board = paint_map(self, self.remapping())
            .iter()
            .flat_map(|row| row.iter().copied())
            .collect();

        let inventories =
            std::array::from_fn(|index| self.player(PlayerId(index as u8)).inventory.symbols());

        let state = self.player(perspective);
        let mut goal_progress = [0u8; GOAL_LEN];
        if !state.goal_complete {
            for (entry, &weight) in goal_progress.iter_mut().zip(state.goal.iter()) {
                *entry = weight as u8;
            }
        }

        Observation {
            board,
            inventories,
            walkable: self.board().grid().walkable_mask(),
            stations: self.board().grid().station_mask(),
            goal_progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerAction;

    #[test]
    fn test_observation_shapes() {
        let engine = CraftingEngine::new(42);
        let obs = engine.observe(PlayerId::ONE);

        assert_eq!(obs.board.len(), MAP_WIDTH * MAP_HEIGHT);
        assert_eq!(obs.walkable.len(), MAP_WIDTH * MAP_HEIGHT);
        assert_eq!(obs.stations.len(), MAP_WIDTH * MAP_HEIGHT);
        assert_eq!(obs.flatten().len(), OBSERVATION_LEN);
    }

    #[test]
    fn test_goal_progress_is_one_hot_until_complete() {
        let mut engine = CraftingEngine::new(42);

        let obs = engine.observe(PlayerId::TWO);
        assert_eq!(obs.goal_progress.iter().map(|&v| v as usize).sum::<usize>(), 1);

        engine.players_mut()[PlayerId::TWO].goal_complete = true;
        let obs = engine.observe(PlayerId::TWO);
        assert!(obs.goal_progress.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_perspectives_share_the_board() {
        let engine = CraftingEngine::new(42);

        let one = engine.observe(PlayerId::ONE);
        let two = engine.observe(PlayerId::TWO);
        assert_eq!(one.board, two.board);
        assert_eq!(one.inventories, two.inventories);
    }

    #[test]
    fn test_observation_tracks_moves() {
        let mut engine = CraftingEngine::new(42);
        let before = engine.observe(PlayerId::ONE);

        engine.step(PlayerId::ONE, PlayerAction::Move(crate::core::Direction::Down));
        let after = engine.observe(PlayerId::ONE);

        assert_ne!(before.board, after.board);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let engine = CraftingEngine::new(42);
        let obs = engine.observe(PlayerId::ONE);

        let bytes = obs.to_bytes().unwrap();
        let decoded = Observation::from_bytes(&bytes).unwrap();
        assert_eq!(obs, decoded);
    }
}
