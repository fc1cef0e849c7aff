//! Shared pieces of the interactive mode drivers

use crate::core::Code;
use crate::output::formatters::{format_bits, format_code};
use crate::solver::entropy::{self, DEFAULT_CEILING};
use crate::solver::greedy_guess;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::{self, Write};

/// Prompt and read one trimmed line from stdin
pub(crate) fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("flushing prompt")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("reading round input")?;

    Ok(input.trim().to_string())
}

/// Print the greedy recommendation (`r?`)
pub(crate) fn print_greedy_hint(candidates: &[Code]) {
    match greedy_guess(candidates) {
        Some(guess) => println!("maybe? {}", format_code(&guess)),
        None => println!("no candidates left"),
    }
}

/// Print the entropy recommendation with per-candidate scores (`v?`)
pub(crate) fn print_entropy_hint<R: Rng + ?Sized>(candidates: &[Code], rng: &mut R) {
    if candidates.len() <= 1 {
        println!("advanced recommendation not available");
        return;
    }

    let Ok(analysis) = entropy::analyze(candidates, Some(DEFAULT_CEILING)) else {
        println!("advanced recommendation not available");
        return;
    };

    for (i, scored) in analysis.scored.iter().enumerate() {
        println!(
            "[{}] {} {}",
            i + 1,
            format_code(&scored.code),
            format_bits(scored.bits)
        );
    }

    if analysis.all_tied() {
        println!("{} all same entropy", "[NO RECOMMEND]".yellow());
    } else if let Some(choice) = analysis.best.choose(rng) {
        println!("{} {}", "[RECOMMEND]".bright_green(), format_code(choice));
    }
}

/// Print the per-answer entropy breakdown (`vg?`)
pub(crate) fn print_entropy_trace(candidates: &[Code]) {
    if candidates.len() <= 1 || candidates.len() > DEFAULT_CEILING {
        println!("advanced recommendation not available");
        return;
    }

    for (i, candidate) in candidates.iter().enumerate() {
        for outcome in entropy::information_trace(candidate, candidates) {
            println!(
                "IF GUESS {} AND ANSWER IS {} THEN REDUCE {}",
                format_code(candidate),
                format_code(&outcome.answer),
                candidates.len() - outcome.remaining
            );
        }
        let bits = entropy::average_information(candidate, candidates);
        println!(
            "[{}] {} {}",
            i + 1,
            format_code(candidate),
            format_bits(bits)
        );
    }
}
