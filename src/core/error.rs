//! Error types shared across the crate

use std::io;

/// Invalid session or distribution configuration
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("word length must be between {min} and {max}, got {got}")]
    WordLength { got: usize, min: usize, max: usize },
    #[error(
        "minimum vowels ({vowels}) plus minimum consonants ({consonants}) exceeds word length ({length})"
    )]
    QuotaExceedsLength {
        vowels: usize,
        consonants: usize,
        length: usize,
    },
    #[error("unknown predicate: {0}")]
    UnknownPredicate(String),
    #[error("predicate '{0}' requires a value")]
    MissingPredicateValue(String),
    #[error("invalid value '{value}' for predicate '{name}'")]
    InvalidPredicateValue { name: String, value: String },
    #[error("unknown distribution: {0}")]
    UnknownDistribution(String),
}

/// Failure to build an anagram index from a word list
#[derive(thiserror::Error, Debug)]
pub enum DictionaryError {
    #[error("invalid word {word:?} at line {line}: '{letter}' is not a letter")]
    MalformedWord {
        word: String,
        line: usize,
        letter: char,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A word cannot be formed from the current hand
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("word contains unavailable letter '{0}'")]
    UnavailableLetter(char),
    #[error("'{0}' is not a tile of this distribution")]
    UnknownLetter(char),
    #[error("no word given")]
    EmptyWord,
}
