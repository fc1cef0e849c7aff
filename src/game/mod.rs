//! Game loop building blocks
//!
//! The session state machine and the per-round command grammar. Drivers in
//! `commands/` combine these with an input stream; everything here is pure
//! and synchronous, so the same rounds run interactively or headless.

mod command;
mod session;

pub use command::{Command, GuessGrammar, ParseError};
pub use session::{GuessRecord, RoundOutcome, Session, SessionError, SessionState};
