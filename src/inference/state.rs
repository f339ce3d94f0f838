//! Belief state: the paired confidence vectors and their classification.
//!
//! `conf_per_goal[i]` accumulates evidence that goal index `i` is part
//! of the collaborator's goal; `conf_not_goal[i]` accumulates evidence
//! that it is not. Every entry stays clipped to [0, 1], but the two are
//! deliberately not complementary: both can be high at once, which is
//! what genuine ambiguity looks like. The belief acted on is the net
//! confidence, `clip(conf_per_goal - conf_not_goal, 0, 1)`.

use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

use crate::catalog::{EvidenceVector, GOAL_LEN};

/// Classification of the current belief.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeliefState {
    /// No goal index stands out yet.
    Uncertain,
    /// Everything has been ruled out; the evidence is contradictory.
    Confused,
    /// One index stands out but has not been confirmed.
    Unconfirmed,
    /// One index stands out and has been confirmed.
    Confirmed,
}

/// The inference engine's mutable state; pure data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConfidenceState {
    #[serde(with = "BigArray")]
    conf_per_goal: [f64; GOAL_LEN],
    #[serde(with = "BigArray")]
    conf_not_goal: [f64; GOAL_LEN],
    confirmed: bool,
}

impl ConfidenceState {
    /// Create a zeroed, unconfirmed state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            conf_per_goal: [0.0; GOAL_LEN],
            conf_not_goal: [0.0; GOAL_LEN],
            confirmed: false,
        }
    }

    /// Zero both vectors and clear the confirmed flag.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The per-goal confidence vector.
    #[must_use]
    pub fn conf_per_goal(&self) -> &[f64; GOAL_LEN] {
        &self.conf_per_goal
    }

    /// The not-goal confidence vector.
    #[must_use]
    pub fn conf_not_goal(&self) -> &[f64; GOAL_LEN] {
        &self.conf_not_goal
    }

    /// Whether the current best goal has been confirmed.
    #[must_use]
    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    pub(crate) fn set_confirmed(&mut self, confirmed: bool) {
        self.confirmed = confirmed;
    }

    /// `clip(conf_per_goal - conf_not_goal, 0, 1)`.
    #[must_use]
    pub fn net_confidence(&self) -> [f64; GOAL_LEN] {
        std::array::from_fn(|i| clip(self.conf_per_goal[i] - self.conf_not_goal[i]))
    }

    /// Classify the belief against a certainty threshold.
    ///
    /// Returns the classification and the most likely goal index. The
    /// second-most-likely entry is found by zeroing the argmax and
    /// re-taking argmax, so ties resolve to the lowest index.
    #[must_use]
    pub fn classify(&self, certainty_threshold: f64) -> (BeliefState, usize) {
        let net = self.net_confidence();
        let most_likely = argmax(&net);

        let mut rest = net;
        rest[most_likely] = 0.0;
        let next_most_likely = argmax(&rest);

        let relative = net[most_likely] - net[next_most_likely];
        if relative > certainty_threshold {
            if self.confirmed {
                (BeliefState::Confirmed, most_likely)
            } else {
                (BeliefState::Unconfirmed, most_likely)
            }
        } else if min(&self.conf_not_goal) > 1.0 - certainty_threshold {
            (BeliefState::Confused, most_likely)
        } else {
            (BeliefState::Uncertain, most_likely)
        }
    }

    /// Apply one PART_OF_GOAL evidence pair.
    ///
    /// Inclusion evidence first widens `conf_not_goal` everywhere the
    /// distance vector does not cover, then raises `conf_per_goal` by
    /// the weighted distance plus whatever exclusion headroom remains.
    pub(crate) fn apply_part_of_goal(&mut self, dist: &EvidenceVector, conf: f64) {
        for i in 0..GOAL_LEN {
            self.conf_not_goal[i] = clip(self.conf_not_goal[i] + conf - dist[i]);
        }
        for i in 0..GOAL_LEN {
            self.conf_per_goal[i] =
                clip(self.conf_per_goal[i] + conf * dist[i] + (1.0 - self.conf_not_goal[i]));
        }
    }

    /// Apply one NOT_PART_OF_GOAL evidence pair.
    pub(crate) fn apply_not_part_of_goal(&mut self, dist: &EvidenceVector, conf: f64) {
        for i in 0..GOAL_LEN {
            self.conf_not_goal[i] = clip(self.conf_not_goal[i] + conf * dist[i]);
        }
    }
}

impl Default for ConfidenceState {
    fn default() -> Self {
        Self::new()
    }
}

fn clip(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn argmax(values: &[f64; GOAL_LEN]) -> usize {
    let mut best = 0;
    for (index, &value) in values.iter().enumerate() {
        if value > values[best] {
            best = index;
        }
    }
    best
}

fn min(values: &[f64; GOAL_LEN]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}
