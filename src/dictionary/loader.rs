//! Word list loading utilities
//!
//! Reads one word per line from plain or gzip-compressed files.

use super::AnagramIndex;
use crate::core::DictionaryError;
use crate::distributions::Distribution;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Read every line of a word list
///
/// Gzip streams are detected from their magic bytes and decompressed.
/// Lines are trimmed but blank lines are kept, so that positions in the
/// returned vector match line numbers in the source.
///
/// # Errors
///
/// Returns an I/O error if the stream cannot be read or is not valid UTF-8.
pub fn read_words<R: Read>(reader: R) -> io::Result<Vec<String>> {
    let mut reader = BufReader::new(reader);
    let gzipped = reader.fill_buf()?.starts_with(&GZIP_MAGIC);

    let mut content = String::new();
    if gzipped {
        GzDecoder::new(reader).read_to_string(&mut content)?;
    } else {
        reader.read_to_string(&mut content)?;
    }

    Ok(content.lines().map(|l| l.trim().to_string()).collect())
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use scrabbler::dictionary::loader::load_from_file;
///
/// let words = load_from_file("dictionaries/french/ods8.txt.gz").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    read_words(File::open(path)?)
}

/// Load a word list file and index the words a hand of `hand_len` tiles spells
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read and
/// `DictionaryError::MalformedWord` if an entry is not a word.
pub fn load_index<P: AsRef<Path>>(
    path: P,
    hand_len: usize,
    distribution: &Distribution,
) -> Result<AnagramIndex, DictionaryError> {
    let words = load_from_file(path)?;
    AnagramIndex::build_with_length(&words, hand_len, distribution)
}
