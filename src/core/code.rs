//! Code representation
//!
//! A Code is an ordered sequence of `CODE_LEN` colored pegs, each peg an
//! integer in `1..=COLOR_COUNT`. Index 0 is reserved and never used as a
//! color value.

use std::fmt;

/// Number of peg positions in a code
pub const CODE_LEN: usize = 4;

/// Number of distinct peg colors
pub const COLOR_COUNT: u8 = 6;

/// Color values, matching the letter alphabet B R G Y P W
pub const BLUE: u8 = 1;
pub const RED: u8 = 2;
pub const GREEN: u8 = 3;
pub const YELLOW: u8 = 4;
pub const PINK: u8 = 5;
pub const WHITE: u8 = 6;

/// One-letter code alphabet, indexed by color value (index 0 unused)
const LETTERS: [char; COLOR_COUNT as usize + 1] = ['?', 'B', 'R', 'G', 'Y', 'P', 'W'];

/// A code of `CODE_LEN` colored pegs
///
/// Stored as raw color values. Construction from user text goes through
/// [`Code::parse`]; programmatic construction uses [`Code::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    pegs: [u8; CODE_LEN],
}

/// Error type for invalid code text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidLetter(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LEN} letters, got {len}")
            }
            Self::InvalidLetter(ch) => {
                write!(f, "Invalid color letter '{ch}' (expected one of BRGYPW)")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from raw peg values
    ///
    /// # Panics
    /// Panics in debug mode if a peg is outside `1..=COLOR_COUNT`
    #[inline]
    #[must_use]
    pub const fn new(pegs: [u8; CODE_LEN]) -> Self {
        let mut i = 0;
        while i < CODE_LEN {
            debug_assert!(pegs[i] >= 1 && pegs[i] <= COLOR_COUNT, "peg out of range");
            i += 1;
        }
        Self { pegs }
    }

    /// Get the raw peg values
    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[u8; CODE_LEN] {
        &self.pegs
    }

    /// Get the peg color at a specific position
    ///
    /// # Panics
    /// Panics if `position >= CODE_LEN`
    #[inline]
    #[must_use]
    pub const fn peg(&self, position: usize) -> u8 {
        self.pegs[position]
    }

    /// Check whether any color appears at more than one position
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        for i in 0..CODE_LEN {
            for j in (i + 1)..CODE_LEN {
                if self.pegs[i] == self.pegs[j] {
                    return true;
                }
            }
        }
        false
    }

    /// Parse a code from its letter form, e.g. "RGBY"
    ///
    /// Case-insensitive. Exactly `CODE_LEN` letters drawn from `BRGYPW`.
    ///
    /// # Errors
    /// Returns `CodeError` if the length is wrong or a letter is outside
    /// the color alphabet.
    ///
    /// # Examples
    /// ```
    /// use mastermind_entropy::core::{Code, BLUE, GREEN, RED, YELLOW};
    ///
    /// let code = Code::parse("rgby").unwrap();
    /// assert_eq!(code, Code::new([RED, GREEN, BLUE, YELLOW]));
    ///
    /// assert!(Code::parse("RGB").is_err());
    /// assert!(Code::parse("RGBX").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        let chars: Vec<char> = text.chars().collect();

        if chars.len() != CODE_LEN {
            return Err(CodeError::InvalidLength(chars.len()));
        }

        let mut pegs = [0u8; CODE_LEN];
        for (i, ch) in chars.into_iter().enumerate() {
            pegs[i] = color_from_letter(ch).ok_or(CodeError::InvalidLetter(ch))?;
        }

        Ok(Self { pegs })
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &peg in &self.pegs {
            write!(f, "{}", color_letter(peg))?;
        }
        Ok(())
    }
}

/// Map a letter of the code alphabet to its color value
#[must_use]
pub fn color_from_letter(letter: char) -> Option<u8> {
    let upper = letter.to_ascii_uppercase();
    LETTERS[1..]
        .iter()
        .position(|&l| l == upper)
        .map(|i| i as u8 + 1)
}

/// Map a color value to its one-letter form
///
/// Returns '?' for values outside `1..=COLOR_COUNT`.
#[must_use]
pub fn color_letter(color: u8) -> char {
    if (1..=COLOR_COUNT).contains(&color) {
        LETTERS[color as usize]
    } else {
        LETTERS[0]
    }
}
