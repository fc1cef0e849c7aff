//! Entropy-based guess selection
//!
//! One-step information-theoretic lookahead over the candidate set.

mod calculator;
mod selector;

pub use calculator::{AnswerOutcome, average_information, information_trace};
pub use selector::{
    DEFAULT_CEILING, EntropyAnalysis, EntropyUnavailable, ScoredCandidate, analyze, select_guess,
};
