//! Solving algorithms
//!
//! Candidate filtering and the two guess-selection strategies.

pub mod entropy;
mod filter;
mod greedy;
pub mod strategy;

pub use filter::filter_candidates;
pub use greedy::greedy_guess;
pub use strategy::{EntropyStrategy, GreedyStrategy, Strategy, StrategyType};
