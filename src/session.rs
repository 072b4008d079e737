//! One game's worth of state: what we know, what's left, and what we last suggested.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clue::{feedback_code, parse_feedback, score_guess, Info};
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::filter::{filter_words, Pattern};
use crate::knowledge::Knowledge;
use crate::suggest::{pick_candidate, Suggestion};

/// The word suggested before there's any feedback, unless told otherwise.
pub const DEFAULT_OPENER: &str = "crane";

pub struct Session<'d, R = StdRng> {
    dictionary: &'d Dictionary,
    knowledge: Knowledge,
    candidates: Vec<&'d str>,
    opener: String,
    last_recommended: String,
    rng: R,
}

/// One guess made while playing against a known answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: String,
    pub infos: Vec<Info>,

    /// Candidates left after this guess's feedback.
    pub remaining: usize,
}

impl Turn {
    pub fn is_win(&self) -> bool {
        self.infos.iter().all(|i| matches!(i, Info::Exact(_)))
    }
}

impl<'d> Session<'d, StdRng> {
    pub fn new(dictionary: &'d Dictionary, opener: &str) -> Result<Self> {
        Self::with_rng(dictionary, opener, StdRng::from_entropy())
    }

    /// A session whose suggestions are reproducible.
    pub fn seeded(dictionary: &'d Dictionary, opener: &str, seed: u64) -> Result<Self> {
        Self::with_rng(dictionary, opener, StdRng::seed_from_u64(seed))
    }
}

impl<'d, R: Rng> Session<'d, R> {
    pub fn with_rng(dictionary: &'d Dictionary, opener: &str, rng: R) -> Result<Self> {
        let opener = opener.trim().to_lowercase();
        let len = opener.chars().count();
        if len != dictionary.num_letters() {
            return Err(Error::WrongWordLength {
                expected: dictionary.num_letters(),
                actual: len,
            });
        }

        Ok(Self {
            dictionary,
            knowledge: Knowledge::new(dictionary.num_letters()),
            candidates: all_words(dictionary),
            last_recommended: opener.clone(),
            opener,
            rng,
        })
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    pub fn candidates(&self) -> &[&'d str] {
        &self.candidates
    }

    pub fn last_recommended(&self) -> &str {
        &self.last_recommended
    }

    pub fn opener(&self) -> &str {
        &self.opener
    }

    /// Take the feedback for a guess, narrow down the candidates, and suggest what to guess next.
    ///
    /// If `guess` is `None`, the last suggestion is assumed to be what was guessed. On error,
    /// nothing in the session changes.
    pub fn ipick(&mut self, guess: Option<&str>, feedback: &str) -> Result<Suggestion> {
        let guess = guess.unwrap_or(&self.last_recommended).to_lowercase();
        let infos = parse_feedback(&guess, feedback)?;
        self.apply_infos(&infos)?;
        Ok(self.suggest())
    }

    /// Fold in clues and re-filter the candidates.
    pub fn apply_infos(&mut self, infos: &[Info]) -> Result<()> {
        self.knowledge.add_infos(infos)?;
        self.refilter();
        Ok(())
    }

    /// Search the whole dictionary. The matches become the candidates.
    pub fn find(&mut self, pattern: &str) -> Result<&[&'d str]> {
        let pattern = Pattern::new(pattern)?;
        self.candidates = pattern.filter(&all_words(self.dictionary));
        debug!("find {:?}: {} words", pattern, self.candidates.len());
        Ok(&self.candidates)
    }

    /// Search within the current candidates.
    pub fn sub(&mut self, pattern: &str) -> Result<&[&'d str]> {
        let pattern = Pattern::new(pattern)?;
        self.candidates = pattern.filter(&self.candidates);
        debug!("sub {:?}: {} words", pattern, self.candidates.len());
        Ok(&self.candidates)
    }

    /// Require these letters in the word. With no letters, forget which letters are required,
    /// except ones pinned by a green tile.
    pub fn contains(&mut self, letters: &str) -> &[&'d str] {
        if letters.is_empty() {
            self.knowledge.clear_must_have();
        } else {
            self.knowledge.add_must_have(letters.chars());
            self.refilter();
        }
        &self.candidates
    }

    /// Rule these letters out of the word. With no letters, forget which letters are ruled out.
    pub fn not(&mut self, letters: &str) -> &[&'d str] {
        if letters.is_empty() {
            self.knowledge.clear_excluded();
        } else {
            self.knowledge.add_excluded(letters.chars());
            self.refilter();
        }
        &self.candidates
    }

    pub fn suggest(&mut self) -> Suggestion {
        let word = match pick_candidate(&self.candidates, &mut self.rng) {
            Some(word) => word,
            None => {
                info!("no candidates left to suggest");
                return Suggestion::Unavailable;
            }
        };

        if word == self.last_recommended {
            Suggestion::Unchanged(word.to_owned())
        } else {
            self.last_recommended = word.to_owned();
            Suggestion::New(word.to_owned())
        }
    }

    /// Start over with the whole dictionary.
    pub fn reset(&mut self) {
        self.knowledge.clear();
        self.candidates = all_words(self.dictionary);
        self.last_recommended = self.opener.clone();
    }

    /// Play against a known answer, always guessing the last suggestion, until it's found or there
    /// is nothing left to guess.
    pub fn play_against(&mut self, target: &str) -> Result<Vec<Turn>> {
        let target = target.to_lowercase();
        if target.chars().count() != self.dictionary.num_letters() {
            return Err(Error::WrongWordLength {
                expected: self.dictionary.num_letters(),
                actual: target.chars().count(),
            });
        }

        let mut turns = vec![];
        // Every wrong guess removes at least itself from the candidates.
        for _ in 0 ..= self.dictionary.len() {
            let guess = self.last_recommended.clone();
            let infos = score_guess(&target, &guess);
            debug!("guessing {}: {}", guess, feedback_code(&infos));
            let suggestion = self.ipick(Some(guess.as_str()), &feedback_code(&infos))?;
            let turn = Turn { guess, infos, remaining: self.candidates.len() };
            let won = turn.is_win();
            turns.push(turn);
            if won || suggestion == Suggestion::Unavailable {
                break;
            }
        }
        Ok(turns)
    }

    fn refilter(&mut self) {
        let before = self.candidates.len();
        self.candidates = filter_words(&self.candidates, &self.knowledge);
        debug!("{} candidates -> {}", before, self.candidates.len());
    }
}

fn all_words(dictionary: &Dictionary) -> Vec<&str> {
    dictionary.words().iter().map(String::as_str).collect()
}
