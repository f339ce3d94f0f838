//! Python bindings for the craftworld engines.
//!
//! This module provides PyO3 bindings for driving episodes from a
//! Python RL training loop and for running goal inference against
//! parsed dialogue.
//!
//! # Quick Start
//!
//! ```python
//! import craftworld
//!
//! env = craftworld.CraftingEnv(seed=42, horizon=100)
//! obs = env.reset(seed=42)
//! obs, reward, done = env.step(0)
//!
//! inference = craftworld.GoalInference()
//! act, goal = inference.forward_act("part_of_goal", "GRC", [1.0, 1.0, 1.0])
//! ```

use pyo3::prelude::*;

mod py_env;
mod py_inference;

pub use py_env::*;
pub use py_inference::*;

/// craftworld: a two-player crafting grid world with goal inference.
///
/// This module provides:
/// - `CraftingEnv`: seeded episodes, integer actions, numpy observations
/// - `GoalInference`: evidence updates and back-channel acts
#[pymodule]
fn craftworld(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCraftingEnv>()?;
    m.add_class::<PyGoalInference>()?;

    m.add("ACTION_SPACE", crate::core::ACTION_SPACE)?;
    m.add("GOAL_LEN", crate::catalog::GOAL_LEN)?;
    m.add("OBSERVATION_LEN", crate::engine::OBSERVATION_LEN)?;

    Ok(())
}
