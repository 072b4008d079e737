//! Picking the next word to guess.

use std::collections::BTreeSet;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Above this many candidates with no repeated letters, only those are suggested.
pub const DENSE_THRESHOLD: usize = 10;

/// A word with no repeated letters tests as many letters as a guess can.
pub fn is_information_dense(word: &str) -> bool {
    let mut seen = BTreeSet::new();
    word.chars().all(|c| seen.insert(c))
}

/// Choose a word to guess next from the remaining candidates.
///
/// While there are plenty of candidates with all-distinct letters, one of those is picked at
/// random. Otherwise any candidate is. Returns `None` if there are no candidates.
pub fn pick_candidate<'w, R: Rng + ?Sized>(candidates: &[&'w str], rng: &mut R) -> Option<&'w str> {
    let dense = candidates.iter()
        .copied()
        .filter(|word| is_information_dense(word))
        .collect::<Vec<_>>();
    debug!("{} of {} candidates have no repeated letters", dense.len(), candidates.len());

    let pool = if dense.len() > DENSE_THRESHOLD {
        &dense[..]
    } else {
        candidates
    };
    pool.choose(rng).copied()
}

/// The outcome of asking for a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// A different word than the last one suggested.
    New(String),

    /// The pick was the same word as last time.
    Unchanged(String),

    /// There's nothing left to suggest.
    Unavailable,
}
