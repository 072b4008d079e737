//! Narrowing a list of words down to the ones consistent with what we know.

use std::collections::BTreeSet;

use log::debug;
use regex::Regex;

use crate::error::Result;
use crate::knowledge::Knowledge;

/// One kind of constraint held by [`Knowledge`]. Each can be applied on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    /// Pinned letters are in their positions.
    Exact,

    /// No letter sits in a position it's been ruled out of.
    NotAt,

    /// No excluded letters anywhere.
    Excluded,

    /// Every letter known to be in the word is there.
    MustHave,
}

impl Facet {
    pub const ALL: [Facet; 4] = [Facet::Exact, Facet::NotAt, Facet::Excluded, Facet::MustHave];

    pub fn check(self, knowledge: &Knowledge, word: &str) -> bool {
        match self {
            Facet::Exact => matches_exact(word, knowledge.exact()),
            Facet::NotAt => avoids_positions(word, knowledge.not_at()),
            Facet::Excluded => excludes_letters(word, knowledge.excluded()),
            Facet::MustHave => contains_letters(word, knowledge.must_have()),
        }
    }
}

/// The word is exactly as long as `exact`, and has every pinned letter in its place.
pub fn matches_exact(word: &str, exact: &[Option<char>]) -> bool {
    word.chars().count() == exact.len()
        && word.chars()
            .zip(exact)
            .all(|(c, pinned)| pinned.map_or(true, |p| p == c))
}

/// The word is exactly as long as `not_at`, and no letter is in a position it's barred from.
pub fn avoids_positions(word: &str, not_at: &[BTreeSet<char>]) -> bool {
    word.chars().count() == not_at.len()
        && word.chars()
            .zip(not_at)
            .all(|(c, barred)| !barred.contains(&c))
}

pub fn excludes_letters(word: &str, excluded: &BTreeSet<char>) -> bool {
    !word.chars().any(|c| excluded.contains(&c))
}

pub fn contains_letters(word: &str, letters: &BTreeSet<char>) -> bool {
    letters.iter().all(|&c| word.contains(c))
}

/// Keep the words that pass one facet. The input is left untouched.
pub fn filter_facet<'w>(words: &[&'w str], knowledge: &Knowledge, facet: Facet) -> Vec<&'w str> {
    words.iter()
        .copied()
        .filter(|word| facet.check(knowledge, word))
        .collect()
}

/// Keep the words that pass every facet, applying them one after another.
pub fn filter_words<'w>(words: &[&'w str], knowledge: &Knowledge) -> Vec<&'w str> {
    let mut remaining = words.to_vec();
    for facet in Facet::ALL {
        remaining = filter_facet(&remaining, knowledge, facet);
        debug!("{:?}: {} words left", facet, remaining.len());
    }
    remaining
}

/// A regular expression matched against the start of each word.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self(Regex::new(&format!("^(?:{})", pattern))?))
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.0.is_match(word)
    }

    pub fn filter<'w>(&self, words: &[&'w str]) -> Vec<&'w str> {
        words.iter()
            .copied()
            .filter(|word| self.is_match(word))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::clue::parse_feedback;
    use crate::error::Error;

    const WORDS: &[&str] = &["crane", "crate", "trace", "react", "caret", "cater", "carts", "ideas", "curse", "cider"];

    #[test]
    fn test_predicates() {
        assert!(matches_exact("crane", &[Some('c'), None, None, None, Some('e')]));
        assert!(!matches_exact("caret", &[Some('c'), None, None, None, Some('e')]));
        assert!(!matches_exact("cranes", &[Some('c'), None, None, None, Some('e')]));

        let not_at = vec![BTreeSet::new(), BTreeSet::from(['r']), BTreeSet::new(), BTreeSet::new(), BTreeSet::new()];
        assert!(avoids_positions("caret", &not_at));
        assert!(!avoids_positions("crane", &not_at));

        assert!(excludes_letters("crane", &BTreeSet::from(['s', 'z'])));
        assert!(!excludes_letters("carts", &BTreeSet::from(['s', 'z'])));

        assert!(contains_letters("react", &BTreeSet::from(['t', 'r'])));
        assert!(!contains_letters("crane", &BTreeSet::from(['t', 'r'])));
        assert!(contains_letters("crane", &BTreeSet::new()));
    }

    #[test]
    fn test_facets_compose() -> Result<()> {
        let mut k = Knowledge::new(5);
        k.add_infos(&parse_feedback("crane", "xo--o")?)?;

        assert_eq!(filter_facet(WORDS, &k, Facet::Exact), vec!["crane", "crate", "caret", "cater", "carts", "curse", "cider"]);
        assert_eq!(filter_facet(WORDS, &k, Facet::NotAt), vec!["react", "caret", "cater", "carts", "ideas", "cider"]);
        assert_eq!(filter_facet(WORDS, &k, Facet::Excluded), vec!["curse", "cider"]);

        let all = filter_words(WORDS, &k);
        assert_eq!(all, vec!["cider"]);
        let by_hand: Vec<&str> = WORDS.iter().copied().filter(|w| k.check_word(w)).collect();
        assert_eq!(all, by_hand);
        Ok(())
    }

    #[test]
    fn test_nothing_matches() -> Result<()> {
        let mut k = Knowledge::new(5);
        k.add_infos(&parse_feedback("qajaq", "xxxxx")?)?;
        assert!(filter_words(WORDS, &k).is_empty());
        Ok(())
    }

    #[test]
    fn test_pattern() -> Result<()> {
        let p = Pattern::new("c.r")?;
        assert_eq!(p.filter(WORDS), vec!["caret", "carts", "curse"]);
        // Anchored at the start only.
        assert_eq!(Pattern::new("a")?.filter(WORDS), Vec::<&str>::new());
        assert_eq!(Pattern::new("..a")?.filter(WORDS), vec!["crane", "crate", "trace", "react"]);
        assert!(matches!(Pattern::new("[a-"), Err(Error::InvalidPattern(_))));
        Ok(())
    }
}
