use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The guess and its feedback code are different lengths.
    #[error("guess {guess:?} and feedback {feedback:?} must be the same length")]
    LengthMismatch { guess: String, feedback: String },

    /// A word is not the same length as the words in the dictionary.
    #[error("expected a {expected}-letter word, got {actual} letters")]
    WrongWordLength { expected: usize, actual: usize },

    /// A green tile contradicts an earlier green tile.
    #[error("you already said that letter {position} is {pinned:?}, not {letter:?}")]
    ConflictingExact { position: usize, pinned: char, letter: char },

    #[error("unknown feedback code {code:?} at position {position}")]
    UnknownFeedbackCode { code: char, position: usize },

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("dictionary has no words")]
    EmptyDictionary,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
