//! Benchmark command
//!
//! Plays many autoplay games against random answers and reports round
//! statistics.

use super::auto::play_auto;
use crate::codespace::random_code;
use crate::game::SessionError;
use crate::solver::Strategy;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play `count` autoplay games in parallel
///
/// Each game gets its own rng derived from `seed` and the game index, so a
/// run is reproducible regardless of scheduling order.
///
/// # Errors
/// Propagates the first session inconsistency encountered (indicating a
/// scoring bug).
pub fn run_benchmark<S: Strategy + Sync>(
    strategy: &S,
    duplicatable: bool,
    count: usize,
    seed: u64,
) -> Result<BenchmarkResult, SessionError> {
    let progress = ProgressBar::new(count as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let games: Vec<_> = (0..count as u64)
        .into_par_iter()
        .map(|game| {
            use rand::SeedableRng;
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed.wrapping_add(game));

            let answer = random_code(duplicatable, &mut rng);
            let result = play_auto(answer, duplicatable, strategy, &mut rng);
            progress.inc(1);
            result
        })
        .collect::<Result<_, _>>()?;

    progress.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut solved = 0;
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;

    for game in &games {
        let rounds = game.history.len();
        total_rounds += rounds;
        min_rounds = min_rounds.min(rounds);
        max_rounds = max_rounds.max(rounds);
        *distribution.entry(rounds).or_insert(0) += 1;
        if game.solved {
            solved += 1;
        }
    }

    Ok(BenchmarkResult {
        total_games: count,
        solved,
        average_rounds: if count == 0 {
            0.0
        } else {
            total_rounds as f64 / count as f64
        },
        min_rounds: if count == 0 { 0 } else { min_rounds },
        max_rounds,
        distribution,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64(),
    })
}
