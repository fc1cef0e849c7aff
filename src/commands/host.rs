//! Host mode
//!
//! The controller holds a real answer (supplied or drawn at random) and
//! scores each guess internally; the user plays codebreaker with the full
//! set of read-only helper commands available.

use super::repl::{print_entropy_hint, print_entropy_trace, print_greedy_hint, read_line};
use crate::codespace::random_code;
use crate::core::{Code, Feedback};
use crate::game::{Command, GuessGrammar, RoundOutcome, Session};
use crate::output::display::{print_candidates, print_help, print_history, print_round};
use crate::output::formatters::{color_legend, format_code};
use anyhow::{Result, bail};
use colored::Colorize;
use rand::Rng;

/// Run the host-mode REPL
///
/// # Errors
/// Returns an error on I/O failure, when the supplied answer is invalid
/// for the variant, or on an internal scoring inconsistency.
pub fn run_host<R: Rng + ?Sized>(
    duplicatable: bool,
    answer: Option<Code>,
    rng: &mut R,
) -> Result<()> {
    if let Some(answer) = answer
        && !duplicatable
        && answer.has_duplicates()
    {
        bail!("answer {answer} repeats a color but duplicates are disallowed");
    }

    let answer = answer.unwrap_or_else(|| random_code(duplicatable, rng));
    let mut session = Session::new(duplicatable);

    println!("input like RGBY ({})", color_legend());

    loop {
        let line = read_line(&format!("{}> ", session.history().len() + 1))?;

        let command = match Command::parse(&line, GuessGrammar::Plain) {
            Ok(command) => command,
            Err(e) => {
                println!("{} {e}, see help", "invalid guess:".red());
                continue;
            }
        };

        match command {
            Command::Exit => {
                session.abort();
                return Ok(());
            }
            Command::Help => print_help(true, false),
            Command::RevealAnswer => println!("{}", format_code(&answer)),
            Command::ListCandidates => print_candidates(session.candidates()),
            Command::GreedyHint => print_greedy_hint(session.candidates()),
            Command::EntropyHint => print_entropy_hint(session.candidates(), rng),
            Command::EntropyTrace => print_entropy_trace(session.candidates()),
            Command::History => print_history(session.history()),
            Command::GuessWithFeedback { .. } => {
                unreachable!("host grammar never carries feedback")
            }
            Command::Guess(guess) => {
                let feedback = Feedback::score(&answer, &guess);
                let outcome = session.apply(guess, feedback)?;
                print_round(outcome.record(), session.remaining_bits());

                if let RoundOutcome::Won(_) = outcome {
                    return Ok(());
                }
            }
        }
    }
}
