//! Display functions for session and command results

use super::formatters::{color_legend, format_bits, format_code, format_feedback};
use crate::commands::BenchmarkResult;
use crate::core::Code;
use crate::game::GuessRecord;
use colored::Colorize;

/// Most candidates ever listed by `p?`; the tail is summarized
const LIST_LIMIT: usize = 100;

/// Print the remaining candidates, capped at `LIST_LIMIT`
pub fn print_candidates(candidates: &[Code]) {
    for (i, code) in candidates.iter().take(LIST_LIMIT).enumerate() {
        println!("[{}] {}", i + 1, format_code(code));
    }
    if candidates.len() > LIST_LIMIT {
        println!("[...] {} more", candidates.len() - LIST_LIMIT);
    }
}

/// Print the guess history with feedback and bits gained
pub fn print_history(history: &[GuessRecord]) {
    for record in history {
        println!(
            "[{}] {} {}",
            format_feedback(record.feedback),
            format_code(&record.guess),
            format_bits(record.bits_gained)
        );
    }
}

/// Print one round's result line
pub fn print_round(record: &GuessRecord, remaining_bits: f64) {
    if record.feedback.is_win() {
        println!(
            "{} {} {}",
            format_feedback(record.feedback),
            format_bits(record.bits_gained),
            "GAME OVER!".bright_green().bold()
        );
    } else {
        println!(
            "{} {} REMAINING {}",
            format_feedback(record.feedback),
            format_bits(record.bits_gained),
            format_bits(remaining_bits)
        );
    }
}

/// Print the per-round help text
///
/// `with_answer` controls whether the `a?` line appears (host mode only).
pub fn print_help(with_answer: bool, with_feedback: bool) {
    if with_answer {
        println!("> a? (answer SPOILER ALERT)");
    }
    println!("> p? (current possibilities)");
    println!("> r? (recommendation)");
    println!("> v? (advanced recommendation)");
    println!("> vg? (advanced recommendation, per-answer breakdown)");
    println!("> h? (guess history)");
    if with_feedback {
        println!("> input like RGBY20 ({})", color_legend());
    } else {
        println!("> input like RGBY ({})", color_legend());
    }
    println!("> exit");
}

/// Print an autoplay transcript, one numbered guess per round
pub fn print_round_transcript(history: &[GuessRecord]) {
    for (i, record) in history.iter().enumerate() {
        println!("{}> {}", i + 1, format_code(&record.guess));
        if record.feedback.is_win() {
            println!(
                "   {} {} {}",
                format_feedback(record.feedback),
                format_bits(record.bits_gained),
                "GAME OVER!".bright_green().bold()
            );
        } else {
            println!(
                "   {} {} -> {}",
                format_feedback(record.feedback),
                format_bits(record.bits_gained),
                format_bits((record.candidates_after as f64).log2())
            );
        }
    }
}

/// Print the end-of-session information summary
pub fn print_session_summary(rounds: usize, total_bits: f64) {
    println!(
        "{}",
        format!(
            "Solved in {rounds} {} for {} of information",
            if rounds == 1 { "guess" } else { "guesses" },
            format_bits(total_bits)
        )
        .bright_cyan()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved,
        if result.total_games == 0 {
            0.0
        } else {
            result.solved as f64 / result.total_games as f64 * 100.0
        }
    );
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for rounds in 1..=result.max_rounds {
        if let Some(&count) = result.distribution.get(&rounds) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {rounds}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
