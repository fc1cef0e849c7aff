//! Feedback scoring
//!
//! Feedback for a guess is a (hits, blows) pair:
//! - a hit is a guess peg matching the answer peg at the same position
//! - a blow is a guess peg matching some answer peg elsewhere, counted via
//!   one-to-one multiset matching after all hit positions are removed
//!
//! The matching consumes each answer peg at most once, so e.g. answer RBBR
//! against guess RRRB scores 1 hit and 2 blows, not 3.

use super::code::{CODE_LEN, Code};
use std::fmt;

/// Feedback for one guess: hits and blows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    hits: u8,
    blows: u8,
}

/// Error type for invalid feedback counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    CountOutOfRange { hits: u8, blows: u8 },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountOutOfRange { hits, blows } => write!(
                f,
                "Feedback {hits} HIT {blows} BLOW is impossible for {CODE_LEN} pegs"
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// All hits (exact match)
    pub const PERFECT: Self = Self {
        hits: CODE_LEN as u8,
        blows: 0,
    };

    /// Create feedback from raw counts
    ///
    /// # Errors
    /// Returns `FeedbackError` if `hits + blows > CODE_LEN`.
    pub const fn new(hits: u8, blows: u8) -> Result<Self, FeedbackError> {
        if hits + blows > CODE_LEN as u8 {
            return Err(FeedbackError::CountOutOfRange { hits, blows });
        }
        Ok(Self { hits, blows })
    }

    /// Number of pegs matched in place
    #[inline]
    #[must_use]
    pub const fn hits(self) -> u8 {
        self.hits
    }

    /// Number of pegs matched out of place
    #[inline]
    #[must_use]
    pub const fn blows(self) -> u8 {
        self.blows
    }

    /// Check if this feedback ends the game (all pegs hit)
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.hits == CODE_LEN as u8
    }

    /// Score `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. Walk all positions; equal pegs count as hits and are excluded
    ///    from further consideration.
    /// 2. For each remaining answer peg, consume at most one matching peg
    ///    from the remaining guess pegs and count it as a blow.
    ///
    /// Runs in O(N²) over `CODE_LEN`, no allocation beyond two small
    /// residual buffers.
    ///
    /// # Examples
    /// ```
    /// use mastermind_entropy::core::{Code, Feedback};
    ///
    /// let answer = Code::parse("RBBR").unwrap();
    /// let guess = Code::parse("RRRB").unwrap();
    /// let feedback = Feedback::score(&answer, &guess);
    ///
    /// assert_eq!(feedback.hits(), 1);
    /// assert_eq!(feedback.blows(), 2);
    /// ```
    #[must_use]
    pub fn score(answer: &Code, guess: &Code) -> Self {
        let mut hits = 0u8;
        let mut rest_answer: Vec<u8> = Vec::with_capacity(CODE_LEN);
        let mut rest_guess: Vec<u8> = Vec::with_capacity(CODE_LEN);

        for i in 0..CODE_LEN {
            if answer.peg(i) == guess.peg(i) {
                hits += 1;
            } else {
                rest_answer.push(answer.peg(i));
                rest_guess.push(guess.peg(i));
            }
        }

        let mut blows = 0u8;
        for &peg in &rest_answer {
            if let Some(pos) = rest_guess.iter().position(|&g| g == peg) {
                blows += 1;
                // Consume exactly one occurrence
                rest_guess.swap_remove(pos);
            }
        }

        Self { hits, blows }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} HIT {} BLOW", self.hits, self.blows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codespace::all_codes;

    fn score(answer: &str, guess: &str) -> Feedback {
        Feedback::score(&Code::parse(answer).unwrap(), &Code::parse(guess).unwrap())
    }

    #[test]
    fn feedback_perfect_constant() {
        assert_eq!(Feedback::PERFECT.hits(), 4);
        assert_eq!(Feedback::PERFECT.blows(), 0);
        assert!(Feedback::PERFECT.is_win());
    }

    #[test]
    fn feedback_new_validates_counts() {
        assert!(Feedback::new(2, 2).is_ok());
        assert!(Feedback::new(4, 0).is_ok());
        assert!(Feedback::new(0, 0).is_ok());
        assert!(matches!(
            Feedback::new(3, 2),
            Err(FeedbackError::CountOutOfRange { hits: 3, blows: 2 })
        ));
    }

    #[test]
    fn score_self_is_perfect() {
        for text in ["BRGY", "WWWW", "RBBR", "PYGW"] {
            let code = Code::parse(text).unwrap();
            assert_eq!(Feedback::score(&code, &code), Feedback::PERFECT);
        }
    }

    #[test]
    fn score_no_overlap() {
        let feedback = score("BBBB", "RRRR");
        assert_eq!((feedback.hits(), feedback.blows()), (0, 0));
    }

    #[test]
    fn score_multiset_rule() {
        // The duplicated R in the guess must not be double-counted against
        // the single remaining R in the answer
        let feedback = score("RBBR", "RRRB");
        assert_eq!((feedback.hits(), feedback.blows()), (1, 2));
    }

    #[test]
    fn score_all_blows() {
        let feedback = score("BRGY", "YGRB");
        assert_eq!((feedback.hits(), feedback.blows()), (0, 4));
    }

    #[test]
    fn score_duplicate_answer_pegs() {
        // Answer BBBB vs guess RRBB: positions 2,3 hit, residual guess pegs
        // {R,R} never appear among residual answer pegs {B,B}
        let feedback = score("BBBB", "RRBB");
        assert_eq!((feedback.hits(), feedback.blows()), (2, 0));
    }

    #[test]
    fn score_hits_equal_positional_matches() {
        // Exhaustive over the duplicatable space against a fixed guess
        let guess = Code::parse("RGBW").unwrap();
        for answer in all_codes(true) {
            let feedback = Feedback::score(&answer, &guess);
            let expected_hits = (0..CODE_LEN)
                .filter(|&i| answer.peg(i) == guess.peg(i))
                .count() as u8;
            assert_eq!(feedback.hits(), expected_hits);
        }
    }

    #[test]
    fn score_counts_bounded() {
        let guess = Code::parse("RBBR").unwrap();
        for answer in all_codes(true) {
            let feedback = Feedback::score(&answer, &guess);
            assert!(feedback.hits() + feedback.blows() <= CODE_LEN as u8);
        }
    }

    #[test]
    fn feedback_display() {
        let feedback = score("RBBR", "RRRB");
        assert_eq!(format!("{feedback}"), "1 HIT 2 BLOW");
    }
}
