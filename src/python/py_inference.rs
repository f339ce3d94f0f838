//! Goal-inference bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::inference::{
    BackChannelAct, BeliefState, ForwardAct, GoalInference, InferenceConfig,
};

fn parse_act(act: &str) -> PyResult<ForwardAct> {
    match act {
        "part_of_goal" => Ok(ForwardAct::PartOfGoal),
        "not_part_of_goal" => Ok(ForwardAct::NotPartOfGoal),
        "confirm" => Ok(ForwardAct::Confirm),
        "disconfirm" => Ok(ForwardAct::Disconfirm),
        _ => Err(PyValueError::new_err(format!(
            "unknown forward act: {act:?}"
        ))),
    }
}

fn act_name(act: BackChannelAct) -> &'static str {
    match act {
        BackChannelAct::NoProgress => "no_progress",
        BackChannelAct::Progress => "progress",
        BackChannelAct::Reset => "reset",
        BackChannelAct::RequestConfirmation => "request_confirmation",
        BackChannelAct::InconsistentAct => "inconsistent_act",
        BackChannelAct::Done => "done",
    }
}

fn belief_name(belief: BeliefState) -> &'static str {
    match belief {
        BeliefState::Uncertain => "uncertain",
        BeliefState::Confused => "confused",
        BeliefState::Unconfirmed => "unconfirmed",
        BeliefState::Confirmed => "confirmed",
    }
}

/// Python wrapper for the goal-grounding inference engine.
#[pyclass(name = "GoalInference")]
pub struct PyGoalInference {
    inner: GoalInference,
}

#[pymethods]
impl PyGoalInference {
    /// Create an engine with the given thresholds.
    #[new]
    #[pyo3(signature = (certainty_threshold = 0.75, update_threshold = 0.1))]
    fn new(certainty_threshold: f64, update_threshold: f64) -> Self {
        Self {
            inner: GoalInference::new(InferenceConfig {
                certainty_threshold,
                update_threshold,
            }),
        }
    }

    /// Apply one dialogue act.
    ///
    /// `abbrevs` is a string of abbreviation characters paired with
    /// `confidences` one-to-one. Returns (back-channel act, goal index
    /// or None). Contract violations raise `ValueError`.
    fn forward_act(
        &mut self,
        act: &str,
        abbrevs: &str,
        confidences: Vec<f64>,
    ) -> PyResult<(String, Option<usize>)> {
        let act = parse_act(act)?;
        let abbrevs: Vec<char> = abbrevs.chars().collect();
        let (back_act, goal) = self
            .inner
            .forward_act(act, &abbrevs, &confidences)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok((act_name(back_act).to_string(), goal))
    }

    /// The current belief as (state name, most likely goal index).
    fn belief(&self) -> (String, usize) {
        let (belief, goal) = self.inner.belief();
        (belief_name(belief).to_string(), goal)
    }

    /// Zero the belief state.
    fn reset(&mut self) {
        self.inner.full_reset();
    }

    /// Human-readable name for a goal index.
    #[staticmethod]
    fn goal_name(index: usize) -> String {
        GoalInference::goal_name(index)
    }

    fn __repr__(&self) -> String {
        let (belief, goal) = self.inner.belief();
        format!("GoalInference(state={}, goal={})", belief_name(belief), goal)
    }
}
