//! Goal-grounding inference from conversational evidence.
//!
//! [`ConfidenceState`] is the pure belief data; [`GoalInference`] applies
//! evidence updates and emits back-channel acts. One engine instance
//! corresponds to one dialogue session; its lifetime is independent of
//! any crafting episode.

pub mod engine;
pub mod error;
pub mod state;

pub use engine::{BackChannelAct, ForwardAct, GoalInference, InferenceConfig, InferenceOutcome};
pub use error::InferenceError;
pub use state::{BeliefState, ConfidenceState};
