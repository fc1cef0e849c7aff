//! Command implementations

pub mod assist;
pub mod auto;
pub mod benchmark;
pub mod host;
mod repl;

pub use assist::run_assist;
pub use auto::{AutoResult, MAX_ROUNDS, OPENING_GUESS, play_auto, run_auto};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use host::run_host;
