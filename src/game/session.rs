//! Session state machine
//!
//! A session owns the candidate set and the guess history for one game.
//! Each round runs score -> filter -> record as a single `apply` step; the
//! filter is copy-on-write, so a rejected round leaves the candidate set
//! untouched.

use crate::codespace::all_codes;
use crate::core::{Code, Feedback};
use crate::solver::filter_candidates;
use std::fmt;

/// One completed round, kept for display and audit
#[derive(Debug, Clone, Copy)]
pub struct GuessRecord {
    pub guess: Code,
    pub feedback: Feedback,
    /// Information gained by this guess in bits
    pub bits_gained: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Observable session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Awaiting the next guess
    InProgress,
    /// A guess scored all hits
    Won,
    /// Explicit user exit
    Aborted,
}

/// Result of applying one round
#[derive(Debug, Clone, Copy)]
pub enum RoundOutcome {
    /// All pegs hit; the session is over
    Won(GuessRecord),
    /// More rounds needed
    Continue(GuessRecord),
}

impl RoundOutcome {
    /// The round record regardless of outcome
    #[must_use]
    pub const fn record(&self) -> &GuessRecord {
        match self {
            Self::Won(record) | Self::Continue(record) => record,
        }
    }
}

/// Error type for session round failures
#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Filtering produced an empty candidate set: the feedback contradicts
    /// every code still consistent with earlier rounds. Either an input
    /// error or a rule violation upstream; fatal for the session.
    InconsistentFeedback { guess: Code, feedback: Feedback },
    /// A round was applied to a finished session
    SessionOver(SessionState),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentFeedback { guess, feedback } => write!(
                f,
                "No candidate is consistent with {feedback} for guess {guess}; \
                 the feedback history contradicts the rules"
            ),
            Self::SessionOver(state) => write!(f, "Session already finished ({state:?})"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One game's candidate set, history, and configuration
pub struct Session {
    duplicatable: bool,
    candidates: Vec<Code>,
    history: Vec<GuessRecord>,
    state: SessionState,
}

impl Session {
    /// Start a session seeded with the full code space for the variant
    #[must_use]
    pub fn new(duplicatable: bool) -> Self {
        Self {
            duplicatable,
            candidates: all_codes(duplicatable),
            history: Vec::new(),
            state: SessionState::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn duplicatable(&self) -> bool {
        self.duplicatable
    }

    /// Codes still consistent with every feedback observed so far
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Residual uncertainty: `log2` of the candidate count
    #[must_use]
    pub fn remaining_bits(&self) -> f64 {
        (self.candidates.len() as f64).log2()
    }

    /// Total information gained across all rounds
    #[must_use]
    pub fn total_bits_gained(&self) -> f64 {
        self.history.iter().map(|record| record.bits_gained).sum()
    }

    /// Apply one round: filter the candidate set by the observed feedback
    /// and record the result
    ///
    /// # Errors
    /// `InconsistentFeedback` if no candidate survives; the candidate set
    /// and history are left exactly as they were. `SessionOver` if the
    /// session has already finished.
    pub fn apply(&mut self, guess: Code, feedback: Feedback) -> Result<RoundOutcome, SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::SessionOver(self.state));
        }

        let next = filter_candidates(&self.candidates, &guess, feedback);
        if next.is_empty() {
            return Err(SessionError::InconsistentFeedback { guess, feedback });
        }

        let before = self.candidates.len();
        let after = next.len();
        let record = GuessRecord {
            guess,
            feedback,
            bits_gained: (before as f64).log2() - (after as f64).log2(),
            candidates_before: before,
            candidates_after: after,
        };

        self.candidates = next;
        self.history.push(record);

        if feedback.is_win() {
            self.state = SessionState::Won;
            Ok(RoundOutcome::Won(record))
        } else {
            Ok(RoundOutcome::Continue(record))
        }
    }

    /// Mark the session aborted (explicit user exit)
    pub const fn abort(&mut self) {
        self.state = SessionState::Aborted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_seeds_full_space() {
        assert_eq!(Session::new(true).candidates().len(), 1296);
        assert_eq!(Session::new(false).candidates().len(), 360);
    }

    #[test]
    fn apply_records_round() {
        let mut session = Session::new(true);
        let answer = Code::parse("BBBB").unwrap();
        let guess = Code::parse("RRBB").unwrap();
        let feedback = Feedback::score(&answer, &guess);

        let outcome = session.apply(guess, feedback).unwrap();
        let record = outcome.record();

        assert_eq!(record.guess, guess);
        assert_eq!(record.candidates_before, 1296);
        assert_eq!(record.candidates_after, session.candidates().len());
        assert!(record.bits_gained > 0.0);
        assert!(session.candidates().contains(&answer));
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn apply_win_transitions_state() {
        let mut session = Session::new(false);
        let guess = Code::parse("BRGY").unwrap();

        let outcome = session.apply(guess, Feedback::PERFECT).unwrap();
        assert!(matches!(outcome, RoundOutcome::Won(_)));
        assert_eq!(session.state(), SessionState::Won);
        assert_eq!(session.candidates(), &[guess]);
    }

    #[test]
    fn apply_after_win_is_rejected() {
        let mut session = Session::new(false);
        let guess = Code::parse("BRGY").unwrap();
        session.apply(guess, Feedback::PERFECT).unwrap();

        let result = session.apply(guess, Feedback::new(0, 0).unwrap());
        assert!(matches!(
            result,
            Err(SessionError::SessionOver(SessionState::Won))
        ));
    }

    #[test]
    fn inconsistent_feedback_is_fatal_but_non_corrupting() {
        let mut session = Session::new(true);
        let guess = Code::parse("BBBB").unwrap();

        // First claim: no B anywhere
        session.apply(guess, Feedback::new(0, 0).unwrap()).unwrap();
        let candidates_before = session.candidates().to_vec();
        let history_len = session.history().len();

        // Contradiction: the same guess now scores a hit
        let result = session.apply(guess, Feedback::new(1, 0).unwrap());
        assert!(matches!(
            result,
            Err(SessionError::InconsistentFeedback { .. })
        ));

        // Copy-on-write: nothing moved
        assert_eq!(session.candidates(), candidates_before);
        assert_eq!(session.history().len(), history_len);
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn bits_accounting_is_consistent() {
        let mut session = Session::new(false);
        let initial_bits = session.remaining_bits();

        let answer = Code::parse("PYGW").unwrap();
        let guess = Code::parse("BRGY").unwrap();
        let feedback = Feedback::score(&answer, &guess);
        session.apply(guess, feedback).unwrap();

        let gained = session.total_bits_gained();
        let remaining = session.remaining_bits();
        assert!((initial_bits - gained - remaining).abs() < 1e-9);
    }

    #[test]
    fn abort_is_terminal() {
        let mut session = Session::new(true);
        session.abort();
        assert_eq!(session.state(), SessionState::Aborted);

        let guess = Code::parse("BBBB").unwrap();
        assert!(session.apply(guess, Feedback::new(0, 0).unwrap()).is_err());
    }
}
