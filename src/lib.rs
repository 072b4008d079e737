//! Narrow down a word list using the feedback from a word-guessing game, and suggest what to
//! guess next.
//!
//! Feed each guess and its feedback to a [`Session`]; it keeps track of what's known about the
//! answer, which dictionary words are still possible, and what it last suggested.

pub mod clue;
pub mod dictionary;
pub mod error;
pub mod filter;
pub mod knowledge;
pub mod session;
pub mod suggest;

pub use clue::{feedback_code, parse_feedback, score_guess, Info};
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use filter::{Facet, Pattern};
pub use knowledge::Knowledge;
pub use session::{Session, Turn, DEFAULT_OPENER};
pub use suggest::Suggestion;
