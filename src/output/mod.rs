//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_candidates, print_help, print_history, print_round};
pub use formatters::{format_bits, format_code, format_feedback};
