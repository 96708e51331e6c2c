//! Letters, letter kinds and tiles
//!
//! A letter is a grapheme of a distribution (usually a single code point,
//! sometimes a digraph such as the Spanish `CH`). A tile is a letter taken
//! out of a distribution, plus a flag telling whether it was carried
//! forward from a previous round.

use std::fmt;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Vowel or consonant classification of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Vowel,
    Consonant,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vowel => write!(f, "vowel"),
            Self::Consonant => write!(f, "consonant"),
        }
    }
}

/// A letter of a distribution with its frequency and point value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Letter {
    text: String,
    frequency: u32,
    points: u32,
}

impl Letter {
    /// Create a new letter
    ///
    /// The text is normalized to its composed upper-case form.
    ///
    /// # Examples
    /// ```
    /// use scrabbler::core::Letter;
    ///
    /// let letter = Letter::new("e", 15, 1);
    /// assert_eq!(letter.text(), "E");
    /// assert_eq!(letter.frequency(), 15);
    /// ```
    pub fn new(text: &str, frequency: u32, points: u32) -> Self {
        Self {
            text: normalize(text),
            frequency,
            points,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of tiles of this letter in a full pool
    #[inline]
    #[must_use]
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }

    #[inline]
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }
}

/// A physical tile drawn from a pool
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    letter: String,
    points: u32,
    kind: Kind,
    wildcard: bool,
    carried: bool,
}

impl Tile {
    /// Create a fresh (not carried forward) tile
    ///
    /// Wildcard tiles are always consonants.
    #[must_use]
    pub fn new(letter: &str, points: u32, kind: Kind, wildcard: bool) -> Self {
        Self {
            letter: normalize(letter),
            points,
            kind: if wildcard { Kind::Consonant } else { kind },
            wildcard,
            carried: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn letter(&self) -> &str {
        &self.letter
    }

    #[inline]
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Whether the tile was drawn in a previous round and not played
    #[inline]
    #[must_use]
    pub const fn is_carried(&self) -> bool {
        self.carried
    }

    #[inline]
    pub fn set_carried(&mut self, carried: bool) {
        self.carried = carried;
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)
    }
}

/// Join the letters of the tiles with spaces, for logs and plain output
#[must_use]
pub fn tiles_to_string(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(Tile::letter)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compose combining marks with their base letters and upper-case the result
///
/// # Examples
/// ```
/// use scrabbler::core::normalize;
///
/// // "e" followed by a combining acute accent
/// assert_eq!(normalize("e\u{301}te\u{301}"), "ÉTÉ");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfc().flat_map(char::to_uppercase).collect()
}

/// Strip diacritics and upper-case a letter
///
/// Used to compare letters against a vowel set: `É`, `ë` and `E` all fold to `E`.
#[must_use]
pub fn fold(letter: &str) -> String {
    letter
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .flat_map(char::to_uppercase)
        .collect()
}

/// Classify a letter against a set of folded vowels
#[must_use]
pub fn classify<S: AsRef<str>>(letter: &str, vowels: &[S]) -> Kind {
    let folded = fold(letter);
    if vowels.iter().any(|v| v.as_ref() == folded) {
        Kind::Vowel
    } else {
        Kind::Consonant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOWELS: &[&str] = &["A", "E", "I", "O", "U", "Y"];

    #[test]
    fn letter_is_normalized() {
        let letter = Letter::new("ñ", 1, 8);
        assert_eq!(letter.text(), "Ñ");
        assert_eq!(letter.points(), 8);

        let decomposed = Letter::new("n\u{303}", 1, 8);
        assert_eq!(decomposed.text(), "Ñ");
    }

    #[test]
    fn fold_strips_diacritics() {
        assert_eq!(fold("é"), "E");
        assert_eq!(fold("Ä"), "A");
        assert_eq!(fold("ü"), "U");
        assert_eq!(fold("Ñ"), "N");
        assert_eq!(fold("CH"), "CH");
    }

    #[test]
    fn classify_plain_letters() {
        for v in ["A", "e", "I", "o", "U", "y"] {
            assert_eq!(classify(v, VOWELS), Kind::Vowel, "{v} should be a vowel");
        }
        for c in ["B", "k", "Z", "CH", "?"] {
            assert_eq!(classify(c, VOWELS), Kind::Consonant, "{c} should be a consonant");
        }
    }

    #[test]
    fn classify_accented_letters() {
        assert_eq!(classify("É", VOWELS), Kind::Vowel);
        assert_eq!(classify("ö", VOWELS), Kind::Vowel);
        assert_eq!(classify("Ç", VOWELS), Kind::Consonant);
    }

    #[test]
    fn classify_is_table_driven() {
        assert_eq!(classify("Y", &["A", "E", "I", "O", "U"]), Kind::Consonant);
    }

    #[test]
    fn wildcard_tile_is_consonant() {
        let tile = Tile::new("?", 0, Kind::Vowel, true);
        assert_eq!(tile.kind(), Kind::Consonant);
        assert!(tile.is_wildcard());
        assert!(!tile.is_carried());
    }

    #[test]
    fn tiles_join_letters() {
        let tiles = vec![
            Tile::new("a", 1, Kind::Vowel, false),
            Tile::new("ch", 5, Kind::Consonant, false),
        ];
        assert_eq!(tiles_to_string(&tiles), "A CH");
    }
}
