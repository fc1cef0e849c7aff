//! Per-round input grammar
//!
//! One line of user input per round, parsed into a tagged command so the
//! mode drivers dispatch on variants instead of raw strings. A guess is
//! exactly `CODE_LEN` letters of the color alphabet; in assist mode it is
//! followed by two digits (hits, blows) since the solver never sees the
//! answer there.

use crate::core::{CODE_LEN, Code, CodeError, Feedback, FeedbackError};
use std::fmt;

/// One round of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A guess to score against the held answer (host mode)
    Guess(Code),
    /// A guess plus the externally observed feedback (assist mode)
    GuessWithFeedback { guess: Code, feedback: Feedback },
    /// `a?` — reveal the held answer
    RevealAnswer,
    /// `p?` — list remaining candidates
    ListCandidates,
    /// `r?` — greedy recommendation
    GreedyHint,
    /// `v?` — entropy recommendation with per-candidate scores
    EntropyHint,
    /// `vg?` — entropy recommendation with per-answer breakdown
    EntropyTrace,
    /// `h?` — guess history
    History,
    /// `help` or an empty line
    Help,
    /// `exit`
    Exit,
}

/// Which guess form a mode accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessGrammar {
    /// Guess only; feedback is computed internally
    Plain,
    /// Guess followed by hit and blow digits
    WithFeedback,
}

/// Error type for malformed round input
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    BadCode(CodeError),
    /// Assist grammar: the two feedback digits are missing or not digits
    MissingFeedback,
    BadFeedback(FeedbackError),
    /// Trailing characters after a well-formed guess
    TrailingInput(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadCode(e) => write!(f, "{e}"),
            Self::MissingFeedback => write!(
                f,
                "Expected two digits (hits, blows) after the {CODE_LEN}-letter guess"
            ),
            Self::BadFeedback(e) => write!(f, "{e}"),
            Self::TrailingInput(rest) => write!(f, "Unexpected trailing input '{rest}'"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<CodeError> for ParseError {
    fn from(e: CodeError) -> Self {
        Self::BadCode(e)
    }
}

impl From<FeedbackError> for ParseError {
    fn from(e: FeedbackError) -> Self {
        Self::BadFeedback(e)
    }
}

impl Command {
    /// Parse one line of round input
    ///
    /// Control tokens are case-insensitive; anything else is read as a
    /// guess in the given grammar.
    ///
    /// # Errors
    /// Returns `ParseError` for malformed guesses or feedback digits. The
    /// caller reports the error and re-prompts; no state is advanced.
    pub fn parse(line: &str, grammar: GuessGrammar) -> Result<Self, ParseError> {
        let trimmed = line.trim();

        match trimmed.to_ascii_lowercase().as_str() {
            "" | "help" => return Ok(Self::Help),
            "exit" => return Ok(Self::Exit),
            "a?" => return Ok(Self::RevealAnswer),
            "p?" => return Ok(Self::ListCandidates),
            "r?" => return Ok(Self::GreedyHint),
            "v?" => return Ok(Self::EntropyHint),
            "vg?" => return Ok(Self::EntropyTrace),
            "h?" => return Ok(Self::History),
            _ => {}
        }

        let chars: Vec<char> = trimmed.chars().collect();
        match grammar {
            GuessGrammar::Plain => {
                let guess = Code::parse(trimmed)?;
                Ok(Self::Guess(guess))
            }
            GuessGrammar::WithFeedback => {
                if chars.len() < CODE_LEN {
                    return Err(CodeError::InvalidLength(chars.len()).into());
                }

                let (code_part, digits) = chars.split_at(CODE_LEN);
                let guess = Code::parse(&code_part.iter().collect::<String>())?;

                let [hits, blows] = digits else {
                    if digits.len() < 2 {
                        return Err(ParseError::MissingFeedback);
                    }
                    return Err(ParseError::TrailingInput(digits[2..].iter().collect()));
                };
                let hits = hits.to_digit(10).ok_or(ParseError::MissingFeedback)?;
                let blows = blows.to_digit(10).ok_or(ParseError::MissingFeedback)?;

                let feedback = Feedback::new(hits as u8, blows as u8)?;
                Ok(Self::GuessWithFeedback { guess, feedback })
            }
        }
    }
}
