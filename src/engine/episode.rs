//! The episode driver: turn dispatch, horizon, reset.
//!
//! The driver owns a [`CraftingEngine`] and feeds it one action per
//! call. Eligibility alternates strictly round-robin; an action tagged
//! for the other player is logged and dropped (the call still consumes
//! the turn), as is a null or out-of-range code. The fixed horizon is
//! enforced here, not by the engine; QUIT is the only way the engine
//! ends an episode on its own.

use crate::core::{decode_action, PlayerId};

use super::crafting::CraftingEngine;
use super::observe::Observation;

/// Driver configuration.
#[derive(Clone, Copy, Debug)]
pub struct EpisodeConfig {
    /// Maximum number of `step` calls before the episode is done.
    pub horizon: u32,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self { horizon: 100 }
    }
}

/// The result of one driver step.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    /// Reward delta for this step (shared stream, both players).
    pub reward: f64,
    /// Observation from the next eligible player's perspective.
    pub observation: Observation,
    /// Whether the episode has ended (QUIT or horizon).
    pub done: bool,
}

/// One episode: an engine plus dispatch state.
pub struct Episode {
    engine: CraftingEngine,
    config: EpisodeConfig,
    next_player: PlayerId,
    steps: u32,
}

impl Episode {
    /// Start an episode with the given seed.
    #[must_use]
    pub fn new(config: EpisodeConfig, seed: u64) -> Self {
        Self {
            engine: CraftingEngine::new(seed),
            config,
            next_player: PlayerId::ONE,
            steps: 0,
        }
    }

    /// Discard the current episode and start a fresh one.
    pub fn reset(&mut self, seed: u64) -> Observation {
        self.engine = CraftingEngine::new(seed);
        self.next_player = PlayerId::ONE;
        self.steps = 0;
        self.engine.observe(self.next_player)
    }

    /// Apply one action code and advance the turn.
    pub fn step(&mut self, code: i64) -> StepOutcome {
        let mut reward = 0.0;

        if !self.is_done() {
            let eligible = self.next_player;
            match decode_action(code) {
                Some((player, action)) if player == eligible => {
                    reward = self.engine.step(player, action);
                }
                Some((player, action)) => {
                    tracing::debug!(%player, ?action, %eligible, "out-of-turn action dropped");
                }
                None => {
                    tracing::debug!(code, "unrecognized action code ignored");
                }
            }
            self.steps += 1;
            self.next_player = eligible.other();
        }

        StepOutcome {
            reward,
            observation: self.engine.observe(self.next_player),
            done: self.is_done(),
        }
    }

    /// Whether the episode has ended.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.engine.is_terminated() || self.steps >= self.config.horizon
    }

    /// The player whose action the next `step` call will accept.
    #[must_use]
    pub fn eligible_player(&self) -> PlayerId {
        self.next_player
    }

    /// Steps taken so far.
    #[must_use]
    pub fn steps_taken(&self) -> u32 {
        self.steps
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &CraftingEngine {
        &self.engine
    }
}
