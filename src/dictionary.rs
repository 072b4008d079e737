use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, Result};

/// The list of words the answer comes from, in file order.
///
/// Every word has the same number of letters as the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
    num_letters: usize,
}

impl Dictionary {
    pub fn new<I, S>(words: I) -> Result<Self>
        where I: IntoIterator<Item=S>,
              S: AsRef<str>,
    {
        let mut dict = Self { words: vec![], num_letters: 0 };
        for (i, word) in words.into_iter().enumerate() {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            let len = word.chars().count();
            if dict.words.is_empty() {
                dict.num_letters = len;
            } else if len != dict.num_letters {
                warn!("skipping {:?} on line {}: not {} letters", word, i + 1, dict.num_letters);
                continue;
            }
            dict.words.push(word);
        }

        if dict.words.is_empty() {
            return Err(Error::EmptyDictionary);
        }
        debug!("loaded {} words of {} letters", dict.words.len(), dict.num_letters);
        Ok(dict)
    }

    /// Read one word per line.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Self::new(lines)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn num_letters(&self) -> usize {
        self.num_letters
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_reader() -> Result<()> {
        let dict = Dictionary::from_reader("Crane\n\n  slate \nabc\ncrane\n".as_bytes())?;
        assert_eq!(dict.num_letters(), 5);
        assert_eq!(dict.words(), ["crane", "slate", "crane"]);
        Ok(())
    }

    #[test]
    fn test_length_from_first_word() -> Result<()> {
        let dict = Dictionary::new(["mass", "sassy", "pass", "loss"])?;
        assert_eq!(dict.num_letters(), 4);
        assert_eq!(dict.words(), ["mass", "pass", "loss"]);
        Ok(())
    }

    #[test]
    fn test_empty() {
        assert!(matches!(Dictionary::from_reader("\n\n".as_bytes()), Err(Error::EmptyDictionary)));
    }
}
