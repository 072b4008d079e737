use std::collections::BTreeSet;

use log::{debug, trace};

use crate::clue::Info;
use crate::error::{Error, Result};
use crate::filter::Facet;

/// Represents everything known about the target word.
///
/// All of it only ever grows, until [`Knowledge::clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knowledge {
    /// Letters that are not in the word at all.
    excluded: BTreeSet<char>,

    /// Letters pinned to a position by a green tile.
    exact: Vec<Option<char>>,

    /// Letters known not to be at a position.
    not_at: Vec<BTreeSet<char>>,

    /// Letters that must appear *somewhere* in the word.
    must_have: BTreeSet<char>,
}

impl Knowledge {
    pub fn new(num_letters: usize) -> Self {
        Self {
            excluded: BTreeSet::new(),
            exact: vec![None; num_letters],
            not_at: vec![BTreeSet::new(); num_letters],
            must_have: BTreeSet::new(),
        }
    }

    pub fn num_letters(&self) -> usize {
        self.exact.len()
    }

    pub fn excluded(&self) -> &BTreeSet<char> {
        &self.excluded
    }

    pub fn exact(&self) -> &[Option<char>] {
        &self.exact
    }

    pub fn not_at(&self) -> &[BTreeSet<char>] {
        &self.not_at
    }

    pub fn must_have(&self) -> &BTreeSet<char> {
        &self.must_have
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
            && self.must_have.is_empty()
            && self.exact.iter().all(Option::is_none)
            && self.not_at.iter().all(BTreeSet::is_empty)
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        *self = Self::new(self.num_letters());
    }

    /// Fold the clues from one guess into what we know.
    ///
    /// Greens and yellows are recorded before any grays, so a letter that shows up gray in one
    /// tile and green or yellow in another is only ruled out of the gray tile's position, and not
    /// excluded from the word. Nothing changes if this returns an error.
    pub fn add_infos(&mut self, infos: &[Info]) -> Result<()> {
        if infos.len() != self.num_letters() {
            return Err(Error::WrongWordLength {
                expected: self.num_letters(),
                actual: infos.len(),
            });
        }

        for (position, info) in infos.iter().enumerate() {
            if let (Info::Exact(letter), Some(pinned)) = (info, self.exact[position]) {
                if pinned != *letter {
                    return Err(Error::ConflictingExact { position, pinned, letter: *letter });
                }
            }
        }

        for (i, info) in infos.iter().enumerate() {
            match *info {
                Info::Exact(c) => {
                    self.exact[i] = Some(c);
                    self.must_have.insert(c);
                }
                Info::Somewhere(c) => {
                    self.not_at[i].insert(c);
                    self.must_have.insert(c);
                }
                Info::No(_) => (),
            }
        }

        for (i, info) in infos.iter().enumerate() {
            if let Info::No(c) = *info {
                if self.must_have.contains(&c) {
                    debug!("not excluding {}; it's in the word somewhere, just not at {}", c, i);
                    self.not_at[i].insert(c);
                } else {
                    self.excluded.insert(c);
                }
            }
        }

        debug!("knowledge now: {:?}", self);
        Ok(())
    }

    /// Require letters to appear somewhere in the word.
    pub fn add_must_have(&mut self, letters: impl IntoIterator<Item = char>) {
        self.must_have.extend(letters.into_iter().map(|c| c.to_ascii_lowercase()));
    }

    /// Rule letters out of the word entirely, except ones already known to be in it.
    pub fn add_excluded(&mut self, letters: impl IntoIterator<Item = char>) {
        for c in letters.into_iter().map(|c| c.to_ascii_lowercase()) {
            if self.must_have.contains(&c) {
                debug!("not excluding {}; it's in the word somewhere", c);
            } else {
                self.excluded.insert(c);
            }
        }
    }

    /// Forget which letters are required, except ones pinned by a green tile.
    pub fn clear_must_have(&mut self) {
        let exact = &self.exact;
        self.must_have.retain(|c| exact.contains(&Some(*c)));
    }

    pub fn clear_excluded(&mut self) {
        self.excluded.clear();
    }

    /// Check a word against everything we know.
    pub fn check_word(&self, word: &str) -> bool {
        for facet in Facet::ALL {
            if !facet.check(self, word) {
                trace!("{}: fails {:?}", word, facet);
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::clue::parse_feedback;

    #[test]
    fn test_robot_game() -> Result<()> {
        let mut k = Knowledge::new(5);
        k.add_infos(&parse_feedback("audio", "----o")?)?;
        assert!(k.check_word("thorn"));
        assert!(!k.check_word("radio"));
        k.add_infos(&parse_feedback("thorn", "o-oo-")?)?;
        assert!(k.check_word("motor"));
        k.add_infos(&parse_feedback("motor", "-xoxo")?)?;
        assert!(k.check_word("robot"));
        assert!(!k.check_word("motor"));
        assert!(!k.check_word("rotor"));
        assert_eq!(k.exact(), [None, Some('o'), None, Some('o'), None]);
        Ok(())
    }

    #[test]
    fn test_repeated_letter_not_excluded() -> Result<()> {
        let mut k = Knowledge::new(5);
        k.add_infos(&parse_feedback("sassy", "-oo--")?)?;
        assert!(k.must_have().contains(&'a'));
        assert!(k.must_have().contains(&'s'));
        assert!(!k.excluded().contains(&'s'));
        assert!(k.excluded().contains(&'y'));
        assert_eq!(k.not_at()[0], BTreeSet::from(['s']));
        assert_eq!(k.not_at()[3], BTreeSet::from(['s']));
        assert!(k.check_word("ideas"));
        assert!(!k.check_word("loser"));
        Ok(())
    }

    #[test]
    fn test_gray_after_earlier_yellow() -> Result<()> {
        let mut k = Knowledge::new(5);
        k.add_infos(&parse_feedback("crane", "o----")?)?;
        k.add_infos(&parse_feedback("yucca", "--x--")?)?;
        assert!(!k.excluded().contains(&'c'));
        assert!(k.not_at()[3].contains(&'c'));
        assert!(k.check_word("ticks"));
        assert!(!k.check_word("yucca"));
        Ok(())
    }

    #[test]
    fn test_exact_is_permanent() -> Result<()> {
        let mut k = Knowledge::new(5);
        k.add_infos(&parse_feedback("taxon", "--x--")?)?;
        k.add_infos(&parse_feedback("pudgy", "-----")?)?;
        assert_eq!(k.exact()[2], Some('x'));
        assert!(!k.check_word("sumac"));
        assert!(k.check_word("mixer"));

        let before = k.clone();
        let err = k.add_infos(&parse_feedback("tiara", "--x--")?);
        assert!(matches!(err, Err(Error::ConflictingExact { position: 2, pinned: 'x', letter: 'a' })));
        assert_eq!(k, before);
        Ok(())
    }

    #[test]
    fn test_wrong_length_leaves_knowledge_alone() -> Result<()> {
        let mut k = Knowledge::new(5);
        assert!(matches!(
            k.add_infos(&parse_feedback("four", "x---")?),
            Err(Error::WrongWordLength { expected: 5, actual: 4 })
        ));
        assert!(k.is_empty());
        Ok(())
    }

    #[test]
    fn test_manual_letters() {
        let mut k = Knowledge::new(5);
        k.add_must_have("Ab".chars());
        k.add_excluded("bz".chars());
        assert_eq!(k.must_have(), &BTreeSet::from(['a', 'b']));
        assert_eq!(k.excluded(), &BTreeSet::from(['z']));
        k.clear_must_have();
        k.clear_excluded();
        assert!(k.is_empty());
    }

    #[test]
    fn test_pinned_letters_stay_required() -> Result<()> {
        let mut k = Knowledge::new(5);
        k.add_infos(&parse_feedback("crane", "-ox--")?)?;
        k.clear_must_have();
        assert_eq!(k.must_have(), &BTreeSet::from(['a']));
        k.add_excluded("ar".chars());
        assert!(!k.excluded().contains(&'a'));
        assert!(k.excluded().contains(&'r'));
        assert!(k.check_word("toast"));
        Ok(())
    }

    #[test]
    fn test_11() -> Result<()> {
        let mut k = Knowledge::new(11);
        k.add_infos(&parse_feedback("ulcerations", "-oxooo--x--")?)?;
        assert!(k.check_word("archaeology"));
        Ok(())
    }
}
