//! Formatting utilities for terminal output
//!
//! The color table lives here, injected into display code; the core never
//! depends on presentation.

use crate::core::{COLOR_COUNT, Code, Feedback};
use colored::Colorize;

/// Terminal-colored name of a peg color
#[must_use]
pub fn color_name(color: u8) -> String {
    match color {
        1 => "BLUE".cyan().to_string(),
        2 => "RED".red().to_string(),
        3 => "GREEN".green().to_string(),
        4 => "YELLOW".yellow().to_string(),
        5 => "PINK".bright_magenta().to_string(),
        6 => "WHITE".white().to_string(),
        _ => "?".to_string(),
    }
}

/// Format a code as space-separated colored names
#[must_use]
pub fn format_code(code: &Code) -> String {
    code.pegs()
        .iter()
        .map(|&peg| color_name(peg))
        .collect::<Vec<_>>()
        .join(" ")
}

/// All color names in value order, for prompts
#[must_use]
pub fn color_legend() -> String {
    (1..=COLOR_COUNT)
        .map(color_name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a feedback pair, e.g. "2 HIT 1 BLOW"
#[must_use]
pub fn format_feedback(feedback: Feedback) -> String {
    format!("{} HIT {} BLOW", feedback.hits(), feedback.blows())
}

/// Format an information quantity, e.g. "3.42b"
#[must_use]
pub fn format_bits(bits: f64) -> String {
    format!("{bits:.2}b")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_name_covers_alphabet() {
        for color in 1..=COLOR_COUNT {
            assert_ne!(color_name(color), "?");
        }
        assert_eq!(color_name(0), "?");
        assert_eq!(color_name(COLOR_COUNT + 1), "?");
    }

    #[test]
    fn format_code_joins_names() {
        colored::control::set_override(false);
        let code = Code::parse("BRGY").unwrap();
        assert_eq!(format_code(&code), "BLUE RED GREEN YELLOW");
        colored::control::unset_override();
    }

    #[test]
    fn format_feedback_reads_naturally() {
        let feedback = Feedback::new(2, 1).unwrap();
        assert_eq!(format_feedback(feedback), "2 HIT 1 BLOW");
    }

    #[test]
    fn format_bits_rounds_to_two_places() {
        assert_eq!(format_bits(3.41504), "3.42b");
        assert_eq!(format_bits(0.0), "0.00b");
    }
}
