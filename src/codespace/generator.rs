//! Code space enumeration and random answer drawing

use crate::core::{CODE_LEN, COLOR_COUNT, Code};
use rand::Rng;

/// Enumerate every valid code for the configured variant
///
/// With duplicates allowed this is the full product space
/// (`COLOR_COUNT^CODE_LEN` = 1296 codes); without, every code uses
/// `CODE_LEN` distinct colors (6×5×4×3 = 360 codes).
///
/// Deterministic and total; codes are produced in lexicographic peg order.
#[must_use]
pub fn all_codes(duplicatable: bool) -> Vec<Code> {
    let capacity = if duplicatable {
        (COLOR_COUNT as usize).pow(CODE_LEN as u32)
    } else {
        // Falling factorial
        (0..CODE_LEN).map(|i| COLOR_COUNT as usize - i).product()
    };

    let mut codes = Vec::with_capacity(capacity);
    let mut pegs = [0u8; CODE_LEN];
    extend(&mut codes, &mut pegs, 0, duplicatable);
    codes
}

fn extend(codes: &mut Vec<Code>, pegs: &mut [u8; CODE_LEN], depth: usize, duplicatable: bool) {
    if depth == CODE_LEN {
        codes.push(Code::new(*pegs));
        return;
    }

    for color in 1..=COLOR_COUNT {
        if !duplicatable && pegs[..depth].contains(&color) {
            continue;
        }
        pegs[depth] = color;
        extend(codes, pegs, depth + 1, duplicatable);
    }
}

/// Draw a uniformly random code for the configured variant
///
/// Uses rejection sampling per position when duplicates are disallowed,
/// so each valid code remains equally likely.
pub fn random_code<R: Rng + ?Sized>(duplicatable: bool, rng: &mut R) -> Code {
    let mut pegs = [0u8; CODE_LEN];

    for i in 0..CODE_LEN {
        let mut color = rng.random_range(1..=COLOR_COUNT);
        while !duplicatable && pegs[..i].contains(&color) {
            color = rng.random_range(1..=COLOR_COUNT);
        }
        pegs[i] = color;
    }

    Code::new(pegs)
}
