//! Core domain types
//!
//! Letters, tiles and their vowel/consonant classification, plus the error
//! types returned by the rest of the crate. Nothing here draws or looks up.

mod error;
mod letter;

pub use error::{ConfigError, DictionaryError, PlayError};
pub use letter::{Kind, Letter, Tile, classify, fold, normalize, tiles_to_string};
