//! Information gain calculation for hypothetical guesses
//!
//! Given a guess drawn from the candidate set, computes the information
//! gained on average if every other candidate were the true answer: for
//! each hypothetical answer, the candidates collapse to the feedback class
//! the answer falls into, gaining `log2(|C|) - log2(|class|)` bits.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Outcome of one hypothetical answer for a fixed guess
#[derive(Debug, Clone, Copy)]
pub struct AnswerOutcome {
    /// The candidate treated as the true answer
    pub answer: Code,
    /// Feedback the guess would receive
    pub feedback: Feedback,
    /// Candidates surviving that feedback
    pub remaining: usize,
}

/// Group candidates by the feedback they would give the guess
fn partition_sizes(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut sizes = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::score(candidate, guess);
        *sizes.entry(feedback).or_insert(0) += 1;
    }

    sizes
}

/// Average information gain (bits) for guessing `guess`
///
/// Averages `log2(|C|) - log2(|class(answer)|)` over every candidate
/// except the guess itself; a candidate guessed correctly ends the game
/// and carries no residual uncertainty to measure.
///
/// Expects `guess` to be a member of `candidates`; with fewer than two
/// candidates there is nothing to gain and the result is 0.
///
/// # Properties
/// - Always in `[0, log2(|C|)]`
/// - 0 exactly when every other candidate falls into one feedback class
///
/// # Examples
/// ```
/// use mastermind_entropy::core::Code;
/// use mastermind_entropy::solver::entropy::average_information;
///
/// let candidates = vec![
///     Code::parse("BBBB").unwrap(),
///     Code::parse("RRRR").unwrap(),
/// ];
/// let bits = average_information(&candidates[0], &candidates);
/// assert!((bits - 1.0).abs() < 1e-9); // halves the space
/// ```
#[must_use]
pub fn average_information(guess: &Code, candidates: &[Code]) -> f64 {
    let total = candidates.len();
    if total < 2 {
        return 0.0;
    }

    let total_bits = (total as f64).log2();
    let sizes = partition_sizes(guess, candidates);

    let mut sum = 0.0;
    let mut answers = 0usize;
    for (&feedback, &size) in &sizes {
        // The guess sits alone in the all-hits class; it is not a
        // hypothetical answer
        let weight = if feedback == Feedback::PERFECT {
            size - 1
        } else {
            size
        };
        sum += weight as f64 * (total_bits - (size as f64).log2());
        answers += weight;
    }

    if answers == 0 {
        0.0
    } else {
        sum / answers as f64
    }
}

/// Per-answer breakdown of the information computation
///
/// Returns, for every candidate other than the guess, the feedback it
/// would produce and the size of the surviving candidate class. Used by
/// the verbose recommendation display.
#[must_use]
pub fn information_trace(guess: &Code, candidates: &[Code]) -> Vec<AnswerOutcome> {
    let sizes = partition_sizes(guess, candidates);

    candidates
        .iter()
        .filter(|&answer| answer != guess)
        .map(|&answer| {
            let feedback = Feedback::score(&answer, guess);
            AnswerOutcome {
                answer,
                feedback,
                remaining: sizes[&feedback],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codespace::all_codes;

    #[test]
    fn information_needs_two_candidates() {
        let sole = Code::parse("BBBB").unwrap();
        assert!((average_information(&sole, &[sole]) - 0.0).abs() < f64::EPSILON);
        assert!((average_information(&sole, &[]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn information_perfect_split_is_one_bit() {
        let candidates = vec![Code::parse("BBBB").unwrap(), Code::parse("RRRR").unwrap()];
        let bits = average_information(&candidates[0], &candidates);
        assert!((bits - 1.0).abs() < 1e-9);
    }

    #[test]
    fn information_is_bounded() {
        let candidates = all_codes(false);
        let limit = (candidates.len() as f64).log2();

        for guess in candidates.iter().take(20) {
            let bits = average_information(guess, &candidates);
            assert!(bits >= 0.0, "negative bits for {guess}");
            assert!(bits <= limit, "bits above log2(|C|) for {guess}");
        }
    }

    #[test]
    fn information_matches_per_answer_average() {
        // The grouped computation must agree with the direct definition
        let candidates: Vec<Code> = all_codes(false).into_iter().take(24).collect();
        let guess = candidates[5];
        let total_bits = (candidates.len() as f64).log2();

        let direct: f64 = candidates
            .iter()
            .filter(|&&answer| answer != guess)
            .map(|answer| {
                let feedback = Feedback::score(answer, &guess);
                let class = candidates
                    .iter()
                    .filter(|c| Feedback::score(c, &guess) == feedback)
                    .count();
                total_bits - (class as f64).log2()
            })
            .sum::<f64>()
            / (candidates.len() - 1) as f64;

        let grouped = average_information(&guess, &candidates);
        assert!((grouped - direct).abs() < 1e-9);
    }

    #[test]
    fn trace_covers_all_other_candidates() {
        let candidates: Vec<Code> = all_codes(false).into_iter().take(10).collect();
        let guess = candidates[0];

        let trace = information_trace(&guess, &candidates);
        assert_eq!(trace.len(), candidates.len() - 1);

        for outcome in &trace {
            assert_ne!(outcome.answer, guess);
            assert!(outcome.remaining >= 1);
            assert!(outcome.remaining <= candidates.len());
        }
    }

    #[test]
    fn trace_remaining_matches_filter() {
        use crate::solver::filter_candidates;

        let candidates: Vec<Code> = all_codes(true).into_iter().take(16).collect();
        let guess = candidates[3];

        for outcome in information_trace(&guess, &candidates) {
            let survivors = filter_candidates(&candidates, &guess, outcome.feedback);
            assert_eq!(survivors.len(), outcome.remaining);
        }
    }
}
