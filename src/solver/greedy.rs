//! Greedy frequency-based guess selection
//!
//! Cheap and always available, but weaker than the entropy lookahead: it
//! fixes each peg position left to right by picking the color that appears
//! there most often among the candidates still matching the fixed prefix.

use crate::core::{CODE_LEN, COLOR_COUNT, Code};

/// Build a guess by positional color frequency
///
/// At each position the most common color among the surviving candidates
/// wins; ties break to the lowest color value. The survivors are then
/// narrowed to those matching the fixed prefix before the next position is
/// considered. The resulting guess need not itself be a remaining
/// candidate.
///
/// Returns `None` if `candidates` is empty.
#[must_use]
pub fn greedy_guess(candidates: &[Code]) -> Option<Code> {
    if candidates.is_empty() {
        return None;
    }

    let mut remaining: Vec<&Code> = candidates.iter().collect();
    let mut pegs = [0u8; CODE_LEN];

    for position in 0..CODE_LEN {
        let mut counts = [0usize; COLOR_COUNT as usize + 1];
        for code in &remaining {
            counts[code.peg(position) as usize] += 1;
        }

        // First maximal color wins ties
        let mut best = 1u8;
        for color in 2..=COLOR_COUNT {
            if counts[color as usize] > counts[best as usize] {
                best = color;
            }
        }

        pegs[position] = best;
        remaining.retain(|code| code.peg(position) == best);
    }

    Some(Code::new(pegs))
}
