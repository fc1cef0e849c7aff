//! Guess selection strategies
//!
//! Defines the Strategy trait and the two interchangeable implementations:
//! greedy positional frequency (cheap, weak) and entropy maximization
//! (full one-step lookahead, strong).

use super::entropy;
use super::greedy::greedy_guess;
use crate::core::Code;
use rand::RngCore;

/// A strategy for selecting the next guess from the remaining candidates
pub trait Strategy {
    /// Select the next guess
    ///
    /// The rng covers any randomized tie-breaking; deterministic
    /// strategies ignore it. Returns `None` only for an empty candidate
    /// set.
    fn select_guess(&self, candidates: &[Code], rng: &mut dyn RngCore) -> Option<Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Entropy maximization (default, strongest)
    Entropy(EntropyStrategy),
    /// Greedy positional frequency
    Greedy(GreedyStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, candidates: &[Code], rng: &mut dyn RngCore) -> Option<Code> {
        match self {
            Self::Entropy(s) => s.select_guess(candidates, rng),
            Self::Greedy(s) => s.select_guess(candidates, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "entropy", "greedy". Defaults to entropy if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "greedy" => Self::Greedy(GreedyStrategy),
            _ => Self::Entropy(EntropyStrategy::default()),
        }
    }
}

/// Greedy frequency strategy
///
/// Deterministic and always available; the guess need not be a remaining
/// candidate.
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn select_guess(&self, candidates: &[Code], _rng: &mut dyn RngCore) -> Option<Code> {
        greedy_guess(candidates)
    }
}

/// Entropy maximization strategy
///
/// Runs the full one-step lookahead, optionally gated by a candidate-count
/// ceiling. Over the ceiling it falls back to the greedy guess instead of
/// paying the O(|C|²) cost.
pub struct EntropyStrategy {
    ceiling: Option<usize>,
}

impl EntropyStrategy {
    /// Ungated entropy strategy (headless autoplay)
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { ceiling: None }
    }

    /// Entropy strategy gated at `ceiling` candidates
    #[must_use]
    pub const fn with_ceiling(ceiling: usize) -> Self {
        Self {
            ceiling: Some(ceiling),
        }
    }
}

impl Default for EntropyStrategy {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Strategy for EntropyStrategy {
    fn select_guess(&self, candidates: &[Code], rng: &mut dyn RngCore) -> Option<Code> {
        match entropy::select_guess(candidates, self.ceiling, rng) {
            Ok(guess) => guess,
            // Over capacity: recoverable, fall back to the cheap strategy
            Err(_) => greedy_guess(candidates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codespace::all_codes;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn from_name_recognizes_strategies() {
        assert!(matches!(
            StrategyType::from_name("greedy"),
            StrategyType::Greedy(_)
        ));
        assert!(matches!(
            StrategyType::from_name("entropy"),
            StrategyType::Entropy(_)
        ));
        assert!(matches!(
            StrategyType::from_name("nonsense"),
            StrategyType::Entropy(_)
        ));
    }

    #[test]
    fn greedy_strategy_selects_guess() {
        let candidates = all_codes(false);
        let mut rng = StdRng::seed_from_u64(0);

        let guess = GreedyStrategy.select_guess(&candidates, &mut rng);
        assert!(guess.is_some());
    }

    #[test]
    fn entropy_strategy_selects_candidate() {
        let candidates: Vec<Code> = all_codes(false).into_iter().take(20).collect();
        let mut rng = StdRng::seed_from_u64(0);

        let guess = EntropyStrategy::unbounded()
            .select_guess(&candidates, &mut rng)
            .unwrap();
        assert!(candidates.contains(&guess));
    }

    #[test]
    fn entropy_strategy_falls_back_to_greedy_over_ceiling() {
        let candidates = all_codes(true);
        let mut rng = StdRng::seed_from_u64(0);

        let gated = EntropyStrategy::with_ceiling(32)
            .select_guess(&candidates, &mut rng)
            .unwrap();
        let greedy = GreedyStrategy
            .select_guess(&candidates, &mut rng)
            .unwrap();
        assert_eq!(gated, greedy);
    }

    #[test]
    fn strategies_handle_empty_candidates() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(GreedyStrategy.select_guess(&[], &mut rng).is_none());
        assert!(
            EntropyStrategy::unbounded()
                .select_guess(&[], &mut rng)
                .is_none()
        );
    }
}
