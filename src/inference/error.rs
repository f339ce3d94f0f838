//! Contract violations surfaced by the inference engine.
//!
//! These are caller bugs, not runtime conditions: the engine fails fast
//! and leaves its state untouched. Expected no-ops (a CONFIRM outside
//! the UNCONFIRMED state, for instance) are ordinary outcomes, not
//! errors.

use thiserror::Error;

/// A violated precondition of [`forward_act`](super::GoalInference::forward_act).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    /// The abbreviation is not part of the evidence vocabulary.
    #[error("unrecognized evidence abbreviation {0:?}")]
    UnknownAbbreviation(char),

    /// Evidence confidences must be strictly positive.
    #[error("evidence confidence must be strictly positive, got {0}")]
    NonPositiveConfidence(f64),

    /// The abbreviation and confidence slices must be parallel.
    #[error("{abbrevs} abbreviations paired with {confidences} confidences")]
    LengthMismatch {
        abbrevs: usize,
        confidences: usize,
    },
}
