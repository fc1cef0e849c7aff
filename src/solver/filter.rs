//! Candidate filtering

use crate::core::{Code, Feedback};

/// Keep the candidates consistent with one observed feedback
///
/// A candidate survives when scoring the guess against it (candidate as
/// hypothetical answer) reproduces the observed feedback. The input slice
/// is never mutated; the caller replaces its working set with the result.
///
/// An empty result means the feedback history is inconsistent with the
/// rules; callers must treat that as a fatal session condition rather than
/// proceed with zero candidates.
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, feedback: Feedback) -> Vec<Code> {
    candidates
        .iter()
        .filter(|candidate| Feedback::score(candidate, guess) == feedback)
        .copied()
        .collect()
}
