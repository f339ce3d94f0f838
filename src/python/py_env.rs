//! Episode driver bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::engine::{Episode, EpisodeConfig, Observation};

fn to_numpy<'py>(py: Python<'py>, observation: &Observation) -> Bound<'py, PyArray1<f32>> {
    let flat: Vec<f32> = observation.flatten().into_iter().map(f32::from).collect();
    PyArray1::from_slice_bound(py, &flat)
}

/// Python wrapper for the episode driver.
#[pyclass(name = "CraftingEnv")]
pub struct PyCraftingEnv {
    episode: Episode,
    horizon: u32,
}

#[pymethods]
impl PyCraftingEnv {
    /// Create an environment with a seed and a fixed horizon.
    #[new]
    #[pyo3(signature = (seed = 0, horizon = 100))]
    fn new(seed: u64, horizon: u32) -> Self {
        Self {
            episode: Episode::new(EpisodeConfig { horizon }, seed),
            horizon,
        }
    }

    /// Start a fresh episode and return the initial observation.
    #[pyo3(signature = (seed = 0))]
    fn reset<'py>(&mut self, py: Python<'py>, seed: u64) -> Bound<'py, PyArray1<f32>> {
        let observation = self.episode.reset(seed);
        to_numpy(py, &observation)
    }

    /// Apply one action code; returns (observation, reward, done).
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: i64,
    ) -> (Bound<'py, PyArray1<f32>>, f64, bool) {
        let outcome = self.episode.step(action);
        (to_numpy(py, &outcome.observation), outcome.reward, outcome.done)
    }

    /// The rendered character grid, drop markers remapped.
    fn render(&self) -> Vec<String> {
        self.episode.engine().render()
    }

    /// Whether the episode has ended.
    fn is_done(&self) -> bool {
        self.episode.is_done()
    }

    /// 0-based index of the player whose action the next step accepts.
    fn eligible_player(&self) -> usize {
        self.episode.eligible_player().index()
    }

    /// The configured horizon.
    #[getter]
    fn horizon(&self) -> u32 {
        self.horizon
    }

    fn __repr__(&self) -> String {
        format!(
            "CraftingEnv(steps={}, done={})",
            self.episode.steps_taken(),
            self.episode.is_done()
        )
    }
}
