//! The crafting simulation engine and its driver.
//!
//! [`CraftingEngine`] advances one player-turn at a time; [`Episode`]
//! wraps it with round-robin turn dispatch and the fixed horizon. The
//! rendering and observation surfaces live alongside because both are
//! read-only views over engine state.

pub mod crafting;
pub mod episode;
pub mod observe;
pub mod render;

pub use crafting::{CraftingEngine, PlayerState};
pub use episode::{Episode, EpisodeConfig, StepOutcome};
pub use observe::{Observation, OBSERVATION_LEN};
pub use render::{paint_map, render, DisplayRemap, RENDER_HEIGHT};
