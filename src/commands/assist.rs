//! Assist mode
//!
//! The user plays against an external codemaker and relays each guess
//! together with the observed (hits, blows); the solver never sees the
//! answer, it only prunes and recommends.

use super::repl::{print_entropy_hint, print_entropy_trace, print_greedy_hint, read_line};
use crate::game::{Command, GuessGrammar, RoundOutcome, Session};
use crate::output::display::{
    print_candidates, print_help, print_history, print_round, print_session_summary,
};
use crate::output::formatters::{color_legend, format_code};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;

/// Run the assist-mode REPL
///
/// # Errors
/// Returns an error on I/O failure or when the relayed feedback becomes
/// inconsistent with the rules (no candidate survives).
pub fn run_assist<R: Rng + ?Sized>(duplicatable: bool, rng: &mut R) -> Result<()> {
    println!("input like RGBY20 ({})", color_legend());

    let mut session = Session::new(duplicatable);

    loop {
        let line = read_line(&format!("{}> ", session.history().len() + 1))?;

        let command = match Command::parse(&line, GuessGrammar::WithFeedback) {
            Ok(command) => command,
            Err(e) => {
                println!("{} {e}, see help", "invalid input:".red());
                continue;
            }
        };

        match command {
            Command::Exit => {
                session.abort();
                return Ok(());
            }
            Command::Help => print_help(false, true),
            Command::RevealAnswer => println!("the external codemaker holds the answer"),
            Command::ListCandidates => print_candidates(session.candidates()),
            Command::GreedyHint => print_greedy_hint(session.candidates()),
            Command::EntropyHint => print_entropy_hint(session.candidates(), rng),
            Command::EntropyTrace => print_entropy_trace(session.candidates()),
            Command::History => print_history(session.history()),
            Command::Guess(_) => unreachable!("assist grammar always carries feedback"),
            Command::GuessWithFeedback { guess, feedback } => {
                let outcome = session.apply(guess, feedback)?;
                print_round(outcome.record(), session.remaining_bits());

                if let RoundOutcome::Won(_) = outcome {
                    print_session_summary(session.history().len(), session.total_bits_gained());
                    return Ok(());
                }

                print_candidates(session.candidates());
                print_greedy_hint(session.candidates());

                if let [sole] = session.candidates() {
                    println!(
                        "{} the answer must be {}",
                        "[!]".bright_green(),
                        format_code(sole)
                    );
                    print_session_summary(session.history().len(), session.total_bits_gained());
                    return Ok(());
                }
            }
        }
    }
}
