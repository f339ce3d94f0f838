//! The goal-grounding inference engine.
//!
//! `forward_act` applies one dialogue act plus its weighted evidence
//! tags to the belief state and emits the back-channel act driving the
//! next conversational turn. The engine is a synchronous state machine:
//! each call runs to completion, and a failed precondition leaves the
//! state untouched.

use serde::{Deserialize, Serialize};

use crate::catalog::{jewelry_name, EvidenceTable, EvidenceVector, Item, JEWELRY_COUNT};

use super::error::InferenceError;
use super::state::{BeliefState, ConfidenceState};

/// A dialogue act arriving on the forward channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForwardAct {
    /// The tagged concepts are part of the goal.
    PartOfGoal,
    /// The tagged concepts are not part of the goal.
    NotPartOfGoal,
    /// Confirm the goal the engine asked about.
    Confirm,
    /// Refuse the goal the engine asked about.
    Disconfirm,
}

/// The engine's back-channel signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackChannelAct {
    /// The evidence changed nothing of note.
    NoProgress,
    /// The belief moved but no goal stands out yet.
    Progress,
    /// The belief was wiped (disconfirmation or confusion).
    Reset,
    /// One goal stands out; ask the collaborator to confirm it.
    RequestConfirmation,
    /// The act made no sense in the current state.
    InconsistentAct,
    /// The goal is confirmed and known.
    Done,
}

/// A back-channel act with its optional goal index.
pub type InferenceOutcome = (BackChannelAct, Option<usize>);

/// Inference thresholds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Margin between the top two net confidences that counts as
    /// certainty, and (inverted) the floor for confusion detection.
    pub certainty_threshold: f64,
    /// Minimum per-entry increase that counts as progress.
    pub update_threshold: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            certainty_threshold: 0.75,
            update_threshold: 0.1,
        }
    }
}

/// The goal-grounding inference engine.
#[derive(Clone, Debug)]
pub struct GoalInference {
    config: InferenceConfig,
    state: ConfidenceState,
    table: EvidenceTable,
}

impl GoalInference {
    /// Create an engine with the given thresholds.
    #[must_use]
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            config,
            state: ConfidenceState::new(),
            table: EvidenceTable::new(),
        }
    }

    /// Zero the belief state and the confirmed flag.
    pub fn full_reset(&mut self) {
        tracing::debug!("inference state reset");
        self.state.reset();
    }

    /// The current belief state (read-only).
    #[must_use]
    pub fn state(&self) -> &ConfidenceState {
        &self.state
    }

    /// Classify the current belief.
    #[must_use]
    pub fn belief(&self) -> (BeliefState, usize) {
        self.state.classify(self.config.certainty_threshold)
    }

    /// Apply one dialogue act with its (abbreviation, confidence) pairs.
    ///
    /// The slices must be parallel, every abbreviation recognized, and
    /// every confidence strictly positive; anything else is a contract
    /// violation and returns an error without touching the state.
    pub fn forward_act(
        &mut self,
        act: ForwardAct,
        abbrevs: &[char],
        confidences: &[f64],
    ) -> Result<InferenceOutcome, InferenceError> {
        if abbrevs.len() != confidences.len() {
            return Err(InferenceError::LengthMismatch {
                abbrevs: abbrevs.len(),
                confidences: confidences.len(),
            });
        }
        let mut dists: Vec<EvidenceVector> = Vec::with_capacity(abbrevs.len());
        for &abbrev in abbrevs {
            dists.push(
                *self
                    .table
                    .get(abbrev)
                    .ok_or(InferenceError::UnknownAbbreviation(abbrev))?,
            );
        }
        for &conf in confidences {
            if !(conf > 0.0) {
                return Err(InferenceError::NonPositiveConfidence(conf));
            }
        }

        Ok(match act {
            ForwardAct::PartOfGoal => {
                let original = *self.state.conf_per_goal();
                for (dist, &conf) in dists.iter().zip(confidences) {
                    self.state.apply_part_of_goal(dist, conf);
                }
                if self.exceeded_threshold(self.state.conf_per_goal(), &original) {
                    self.progress_made()
                } else {
                    (BackChannelAct::NoProgress, None)
                }
            }
            ForwardAct::NotPartOfGoal => {
                let original = *self.state.conf_not_goal();
                for (dist, &conf) in dists.iter().zip(confidences) {
                    self.state.apply_not_part_of_goal(dist, conf);
                }
                if self.exceeded_threshold(self.state.conf_not_goal(), &original) {
                    self.progress_made()
                } else {
                    (BackChannelAct::NoProgress, None)
                }
            }
            ForwardAct::Confirm => {
                let (belief, goal) = self.belief();
                if belief == BeliefState::Unconfirmed {
                    self.state.set_confirmed(true);
                    tracing::info!(goal = %Self::goal_name(goal), "goal confirmed");
                    (BackChannelAct::Done, Some(goal))
                } else {
                    tracing::debug!(?belief, "confirm while not awaiting confirmation");
                    (BackChannelAct::InconsistentAct, None)
                }
            }
            ForwardAct::Disconfirm => {
                self.full_reset();
                (BackChannelAct::Reset, None)
            }
        })
    }

    /// React to an update that moved some entry by more than the
    /// update threshold.
    fn progress_made(&mut self) -> InferenceOutcome {
        let (belief, goal) = self.belief();
        match belief {
            BeliefState::Unconfirmed => (BackChannelAct::RequestConfirmation, Some(goal)),
            BeliefState::Confused => {
                tracing::info!("evidence contradictory, starting over");
                self.full_reset();
                (BackChannelAct::Reset, None)
            }
            BeliefState::Uncertain | BeliefState::Confirmed => (BackChannelAct::Progress, None),
        }
    }

    fn exceeded_threshold(&self, now: &EvidenceVector, before: &EvidenceVector) -> bool {
        now.iter()
            .zip(before.iter())
            .any(|(n, b)| n - b > self.config.update_threshold)
    }

    /// Human-readable name for a goal index.
    #[must_use]
    pub fn goal_name(index: usize) -> String {
        if index < JEWELRY_COUNT {
            jewelry_name(index)
        } else {
            Item::ALL[index - JEWELRY_COUNT].name().to_string()
        }
    }
}

impl Default for GoalInference {
    fn default() -> Self {
        Self::new(InferenceConfig::default())
    }
}
