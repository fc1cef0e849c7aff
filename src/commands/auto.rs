//! Autoplay
//!
//! Plays a full game against a hidden answer with no user interaction.
//! The first guess is a canonical high-information opener rather than a
//! computed one: entropy over the un-pruned space is symmetric and
//! expensive to recompute from scratch.

use crate::core::{BLUE, Code, Feedback, RED};
use crate::game::{GuessRecord, RoundOutcome, Session, SessionError};
use crate::output::display::print_round_transcript;
use crate::solver::Strategy;
use anyhow::Result;
use rand::RngCore;

/// Canonical opening guess: two pairs split the space well
pub const OPENING_GUESS: Code = Code::new([RED, RED, BLUE, BLUE]);

/// Safety bound on rounds; a consistent session converges far earlier
pub const MAX_ROUNDS: usize = 12;

/// Transcript of one autoplay game
#[derive(Debug, Clone)]
pub struct AutoResult {
    pub answer: Code,
    pub history: Vec<GuessRecord>,
    pub solved: bool,
}

/// Play one full game against `answer`
///
/// Round 1 plays [`OPENING_GUESS`]; later rounds guess the sole survivor
/// directly or defer to the strategy. Stops unsolved at [`MAX_ROUNDS`].
///
/// # Errors
/// `SessionError` only on an internal inconsistency, since feedback is
/// computed from the true answer.
pub fn play_auto<S: Strategy + ?Sized>(
    answer: Code,
    duplicatable: bool,
    strategy: &S,
    rng: &mut dyn RngCore,
) -> Result<AutoResult, SessionError> {
    let mut session = Session::new(duplicatable);
    let mut solved = false;

    for round in 1..=MAX_ROUNDS {
        let guess = if round == 1 {
            OPENING_GUESS
        } else if let [sole] = session.candidates() {
            *sole
        } else {
            let Some(guess) = strategy.select_guess(session.candidates(), rng) else {
                break;
            };
            guess
        };

        let feedback = Feedback::score(&answer, &guess);
        let outcome = session.apply(guess, feedback)?;

        if let RoundOutcome::Won(_) = outcome {
            solved = true;
            break;
        }
    }

    Ok(AutoResult {
        answer,
        history: session.history().to_vec(),
        solved,
    })
}

/// Run autoplay once and print the transcript
///
/// # Errors
/// Propagates session inconsistencies (indicating a scoring bug).
pub fn run_auto<S: Strategy + ?Sized>(
    duplicatable: bool,
    strategy: &S,
    rng: &mut dyn RngCore,
) -> Result<()> {
    let answer = crate::codespace::random_code(duplicatable, rng);
    let result = play_auto(answer, duplicatable, strategy, rng)?;

    print_round_transcript(&result.history);
    if !result.solved {
        println!("unsolved after {MAX_ROUNDS} rounds (answer {answer})");
    }
    Ok(())
}
