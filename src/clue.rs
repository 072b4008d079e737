//! Turning a guess and its feedback code into per-letter clues.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Feedback for one letter tile of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Info {
    /// Green: the letter is in this position.
    Exact(char),

    /// Yellow: the letter is in the word, but not in this position.
    Somewhere(char),

    /// Gray: the letter is not in the word (or not any more times than the other tiles say).
    No(char),
}

impl Info {
    /// Build a clue from a feedback code character.
    ///
    /// Codes are case-insensitive:
    ///
    /// | outcome   | codes              |
    /// |-----------|--------------------|
    /// | gray      | `-` `_` `.` `g`    |
    /// | yellow    | `o` `?` `y`        |
    /// | green     | `x` `+`            |
    ///
    /// `g` means gray only.
    pub fn from_code(letter: char, code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            '-' | '_' | '.' | 'g' => Some(Info::No(letter)),
            'o' | '?' | 'y' => Some(Info::Somewhere(letter)),
            'x' | '+' => Some(Info::Exact(letter)),
            _ => None,
        }
    }

    /// The canonical feedback code for this clue.
    pub fn code(&self) -> char {
        match self {
            Info::Exact(_) => 'x',
            Info::Somewhere(_) => 'o',
            Info::No(_) => '-',
        }
    }
}

/// Parse a guess and a feedback code of the same length into one clue per position.
///
/// The guess letters are not validated beyond lowercasing; anything that isn't a letter will just
/// never match a dictionary word.
pub fn parse_feedback(guess: &str, feedback: &str) -> Result<Vec<Info>> {
    let guess_len = guess.chars().count();
    if guess_len != feedback.chars().count() {
        return Err(Error::LengthMismatch {
            guess: guess.to_owned(),
            feedback: feedback.to_owned(),
        });
    }

    guess.chars()
        .zip(feedback.chars())
        .enumerate()
        .map(|(position, (g, code))| {
            Info::from_code(g.to_ascii_lowercase(), code)
                .ok_or(Error::UnknownFeedbackCode { code, position })
        })
        .collect()
}

/// Render clues back into a feedback code string.
pub fn feedback_code(infos: &[Info]) -> String {
    infos.iter().map(Info::code).collect()
}

/// Compute the feedback the game would give for `guess` when the answer is `target`.
///
/// Greens are handed out first. Each remaining yellow uses up one of the target's letters that
/// wasn't already matched by a green, so a repeated guess letter beyond that count is gray.
pub fn score_guess(target: &str, guess: &str) -> Vec<Info> {
    let target = target.chars().collect::<Vec<_>>();
    let mut unmatched = HashMap::<char, usize>::new();
    for (&t, g) in target.iter().zip(guess.chars()) {
        if t != g {
            *unmatched.entry(t).or_insert(0) += 1;
        }
    }

    guess.chars()
        .zip(&target)
        .map(|(g, &t)| {
            if g == t {
                return Info::Exact(g);
            }
            match unmatched.get_mut(&g) {
                Some(left) if *left > 0 => {
                    *left -= 1;
                    Info::Somewhere(g)
                }
                _ => Info::No(g),
            }
        })
        .collect()
}
