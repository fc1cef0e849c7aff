//! Mastermind Solver
//!
//! An interactive solver for the four-peg, six-color hit-and-blow game
//! (Mastermind family), using a one-step information-theoretic lookahead.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_entropy::core::{Code, Feedback};
//!
//! // Parse codes from their letter form
//! let answer = Code::parse("RBBR").unwrap();
//! let guess = Code::parse("RRRB").unwrap();
//!
//! // Score under the one-to-one multiset rule
//! let feedback = Feedback::score(&answer, &guess);
//! assert_eq!((feedback.hits(), feedback.blows()), (1, 2));
//! ```

// Core domain types
pub mod core;

// Code space enumeration
pub mod codespace;

// Solving algorithms
pub mod solver;

// Session state machine and round grammar
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
