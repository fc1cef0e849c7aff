//! Code space for hit-and-blow
//!
//! Enumerates the set of all valid codes for a session's variant and draws
//! random answers from it. The space is small enough (at most 1296 codes)
//! to generate at session start.

mod generator;

pub use generator::{all_codes, random_code};
