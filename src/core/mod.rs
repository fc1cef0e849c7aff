//! Core domain types for hit-and-blow
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod feedback;

pub use code::{
    BLUE, CODE_LEN, COLOR_COUNT, Code, CodeError, GREEN, PINK, RED, WHITE, YELLOW,
    color_from_letter, color_letter,
};
pub use feedback::{Feedback, FeedbackError};
