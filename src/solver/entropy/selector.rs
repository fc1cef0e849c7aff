//! Entropy-maximizing guess selection
//!
//! Scores every candidate as a hypothetical guess and picks the one with
//! the highest average information gain. The full one-step lookahead costs
//! O(|C|²·N²), so interactive callers gate it behind a candidate-count
//! ceiling and fall back to the greedy strategy when over capacity.

use super::calculator::average_information;
use crate::core::Code;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::fmt;

/// Default candidate-count ceiling for interactive recommendations
pub const DEFAULT_CEILING: usize = 32;

/// A candidate scored as a hypothetical guess
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate {
    pub code: Code,
    /// Average information gain in bits
    pub bits: f64,
}

/// Full scoring of a candidate set
#[derive(Debug, Clone)]
pub struct EntropyAnalysis {
    /// One entry per candidate, in candidate order
    pub scored: Vec<ScoredCandidate>,
    /// Highest average information gain observed
    pub best_bits: f64,
    /// All candidates achieving `best_bits`
    pub best: Vec<Code>,
}

impl EntropyAnalysis {
    /// Whether every candidate ties at the same information gain
    ///
    /// When true there is no information basis for a recommendation.
    #[must_use]
    pub fn all_tied(&self) -> bool {
        self.best.len() == self.scored.len()
    }
}

/// Recoverable over-capacity condition for the entropy lookahead
///
/// Not an error in the session sense: callers fall back to the greedy
/// strategy or keep narrowing with direct guesses first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntropyUnavailable {
    pub candidates: usize,
    pub ceiling: usize,
}

impl fmt::Display for EntropyUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entropy lookahead unavailable for {} candidates (ceiling {})",
            self.candidates, self.ceiling
        )
    }
}

impl std::error::Error for EntropyUnavailable {}

/// Score every candidate as a hypothetical guess
///
/// # Errors
/// Returns `EntropyUnavailable` when the candidate count exceeds the
/// ceiling; there is no cancellation mechanism, so the ceiling is enforced
/// as a precondition rather than interrupting a running computation.
pub fn analyze(
    candidates: &[Code],
    ceiling: Option<usize>,
) -> Result<EntropyAnalysis, EntropyUnavailable> {
    if let Some(ceiling) = ceiling
        && candidates.len() > ceiling
    {
        return Err(EntropyUnavailable {
            candidates: candidates.len(),
            ceiling,
        });
    }

    let scored: Vec<ScoredCandidate> = candidates
        .par_iter()
        .map(|&code| ScoredCandidate {
            code,
            bits: average_information(&code, candidates),
        })
        .collect();

    let best_bits = scored
        .iter()
        .map(|s| s.bits)
        .fold(f64::NEG_INFINITY, f64::max);

    let best: Vec<Code> = scored
        .iter()
        .filter(|s| s.bits.total_cmp(&best_bits).is_eq())
        .map(|s| s.code)
        .collect();

    Ok(EntropyAnalysis {
        scored,
        best_bits,
        best,
    })
}

/// Select the entropy-maximizing guess
///
/// Short-circuits to the sole candidate when only one remains (entropy is
/// undefined with nothing left to distinguish). Ties among maximal
/// candidates break uniformly at random with the injected rng, avoiding
/// deterministic guess sequences across sessions with identical candidate
/// sets.
///
/// Returns `Ok(None)` only for an empty candidate set.
///
/// # Errors
/// Propagates `EntropyUnavailable` from [`analyze`] when over the ceiling.
pub fn select_guess<R: Rng + ?Sized>(
    candidates: &[Code],
    ceiling: Option<usize>,
    rng: &mut R,
) -> Result<Option<Code>, EntropyUnavailable> {
    match candidates {
        [] => return Ok(None),
        [sole] => return Ok(Some(*sole)),
        _ => {}
    }

    let analysis = analyze(candidates, ceiling)?;
    Ok(analysis.best.choose(rng).copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codespace::all_codes;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn analyze_scores_every_candidate() {
        let candidates: Vec<Code> = all_codes(false).into_iter().take(12).collect();
        let analysis = analyze(&candidates, Some(DEFAULT_CEILING)).unwrap();

        assert_eq!(analysis.scored.len(), candidates.len());
        assert!(!analysis.best.is_empty());
        assert!(analysis.best_bits >= 0.0);
        assert!(analysis.best_bits <= (candidates.len() as f64).log2());
    }

    #[test]
    fn analyze_over_ceiling_is_recoverable() {
        let candidates: Vec<Code> = all_codes(false).into_iter().take(40).collect();
        let result = analyze(&candidates, Some(32));

        assert_eq!(
            result.unwrap_err(),
            EntropyUnavailable {
                candidates: 40,
                ceiling: 32
            }
        );
    }

    #[test]
    fn analyze_unbounded_ignores_size() {
        let candidates: Vec<Code> = all_codes(false).into_iter().take(40).collect();
        assert!(analyze(&candidates, None).is_ok());
    }

    #[test]
    fn best_set_holds_the_maximum() {
        let candidates: Vec<Code> = all_codes(true).into_iter().take(20).collect();
        let analysis = analyze(&candidates, None).unwrap();

        for scored in &analysis.scored {
            assert!(scored.bits <= analysis.best_bits + 1e-12);
        }
        for best in &analysis.best {
            let bits = analysis
                .scored
                .iter()
                .find(|s| s.code == *best)
                .unwrap()
                .bits;
            assert!(bits.total_cmp(&analysis.best_bits).is_eq());
        }
    }

    #[test]
    fn select_guess_short_circuits_sole_candidate() {
        let sole = Code::parse("PYGW").unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        // Ceiling of zero would reject any computation; the short circuit
        // must fire before the gate
        let guess = select_guess(&[sole], Some(0), &mut rng).unwrap();
        assert_eq!(guess, Some(sole));
    }

    #[test]
    fn select_guess_empty_candidates() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(select_guess(&[], Some(32), &mut rng).unwrap(), None);
    }

    #[test]
    fn select_guess_returns_a_maximal_candidate() {
        let candidates: Vec<Code> = all_codes(false).into_iter().take(16).collect();
        let analysis = analyze(&candidates, None).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let guess = select_guess(&candidates, None, &mut rng).unwrap().unwrap();
        assert!(analysis.best.contains(&guess));
    }

    #[test]
    fn select_guess_is_seed_deterministic() {
        let candidates: Vec<Code> = all_codes(true).into_iter().take(24).collect();

        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(
            select_guess(&candidates, None, &mut a).unwrap(),
            select_guess(&candidates, None, &mut b).unwrap()
        );
    }

    #[test]
    fn symmetric_candidates_all_tie() {
        // Two codes with no colors in common split each other identically
        let candidates = vec![Code::parse("BBBB").unwrap(), Code::parse("RRRR").unwrap()];
        let analysis = analyze(&candidates, None).unwrap();
        assert!(analysis.all_tied());
    }
}
