//! Tile distributions
//!
//! A distribution describes the tiles of one language edition: every letter
//! with its frequency and point value, the wildcard symbol, and the vowel set
//! used to split tiles by kind. Built-in distributions are embedded at build
//! time and exposed through an explicit [`Registry`].

mod embedded;

use crate::core::{ConfigError, Kind, Letter, PlayError, Tile, classify, normalize};

pub use embedded::{
    ENGLISH, ENGLISH_TILE_COUNT, FRENCH, FRENCH_TILE_COUNT, GERMAN, GERMAN_TILE_COUNT, SPANISH,
    SPANISH_TILE_COUNT,
};

/// Symbol of the wildcard (blank) tile in the built-in tables
pub const WILDCARD: &str = "?";

/// Vowels shared by most latin-script editions
pub const DEFAULT_VOWELS: &[&str] = &["A", "E", "I", "O", "U", "Y"];

/// The tiles of a language edition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    name: String,
    language: String,
    wildcard: String,
    vowels: Vec<String>,
    letters: Vec<Letter>,
    alphabet: Vec<String>,
}

impl Distribution {
    /// Create a distribution from its letters
    ///
    /// The alphabet (used to expand wildcards) is every non-wildcard letter,
    /// deduplicated and sorted.
    #[must_use]
    pub fn new(
        name: &str,
        language: &str,
        wildcard: &str,
        vowels: &[&str],
        letters: Vec<Letter>,
    ) -> Self {
        let wildcard = normalize(wildcard);

        let mut alphabet: Vec<String> = letters
            .iter()
            .filter(|l| l.text() != wildcard)
            .map(|l| l.text().to_string())
            .collect();
        alphabet.sort();
        alphabet.dedup();

        Self {
            name: name.to_string(),
            language: language.to_string(),
            wildcard,
            vowels: vowels.iter().map(|v| normalize(v)).collect(),
            letters,
            alphabet,
        }
    }

    /// Create a distribution from an embedded `(letter, frequency, points)` table
    #[must_use]
    pub fn from_table(
        name: &str,
        language: &str,
        vowels: &[&str],
        table: &[(&str, u32, u32)],
    ) -> Self {
        let letters = table
            .iter()
            .map(|&(text, frequency, points)| Letter::new(text, frequency, points))
            .collect();
        Self::new(name, language, WILDCARD, vowels, letters)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// BCP 47 language tag of the edition
    #[inline]
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[inline]
    #[must_use]
    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    /// Total number of tiles in a full pool
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.letters.iter().map(|l| l.frequency() as usize).sum()
    }

    #[inline]
    #[must_use]
    pub fn is_wildcard(&self, letter: &str) -> bool {
        letter == self.wildcard
    }

    /// Vowel or consonant; the wildcard is always a consonant
    #[must_use]
    pub fn kind_of(&self, letter: &str) -> Kind {
        if self.is_wildcard(letter) {
            Kind::Consonant
        } else {
            classify(letter, &self.vowels)
        }
    }

    #[must_use]
    pub fn letter(&self, text: &str) -> Option<&Letter> {
        let text = normalize(text);
        self.letters.iter().find(|l| l.text() == text)
    }

    /// Instantiate a fresh tile of the given letter
    #[must_use]
    pub fn tile(&self, letter: &Letter) -> Tile {
        let wildcard = self.is_wildcard(letter.text());
        let points = if wildcard { 0 } else { letter.points() };
        Tile::new(letter.text(), points, self.kind_of(letter.text()), wildcard)
    }

    /// Split a string into tiles of this distribution
    ///
    /// Multi-letter tiles (digraphs) are matched greedily, longest first.
    ///
    /// # Errors
    /// Returns `PlayError::UnknownLetter` if part of the text matches no letter.
    ///
    /// # Examples
    /// ```
    /// use scrabbler::distributions::Registry;
    ///
    /// let registry = Registry::builtin();
    /// let spanish = registry.get("spanish").unwrap();
    /// let tiles = spanish.tiles_from_word("chico?").unwrap();
    /// assert_eq!(tiles.len(), 5);
    /// assert_eq!(tiles[0].letter(), "CH");
    /// assert!(tiles[4].is_wildcard());
    /// ```
    pub fn tiles_from_word(&self, word: &str) -> Result<Vec<Tile>, PlayError> {
        let word = normalize(word);
        let mut rest = word.as_str();
        let mut tiles = Vec::new();

        while let Some(c) = rest.chars().next() {
            let letter = self
                .longest_letter(rest)
                .ok_or(PlayError::UnknownLetter(c))?;

            tiles.push(self.tile(letter));
            rest = &rest[letter.text().len()..];
        }

        Ok(tiles)
    }

    /// Fewest tiles that spell `word`, multi-letter tiles taken whole
    ///
    /// A character matching no letter counts as one tile, the wildcard that
    /// would stand for it.
    ///
    /// # Examples
    /// ```
    /// use scrabbler::distributions::Registry;
    ///
    /// let registry = Registry::builtin();
    /// let spanish = registry.get("spanish").unwrap();
    /// assert_eq!(spanish.fewest_tiles("cochinos"), 7);
    /// assert_eq!(spanish.fewest_tiles("perro"), 4);
    /// ```
    #[must_use]
    pub fn fewest_tiles(&self, word: &str) -> usize {
        let word = normalize(word);
        let mut rest = word.as_str();
        let mut count = 0;

        while let Some(c) = rest.chars().next() {
            let step = self
                .longest_letter(rest)
                .map_or(c.len_utf8(), |l| l.text().len());
            rest = &rest[step..];
            count += 1;
        }

        count
    }

    fn longest_letter(&self, text: &str) -> Option<&Letter> {
        self.letters
            .iter()
            .filter(|l| !l.text().is_empty() && text.starts_with(l.text()))
            .max_by_key(|l| l.text().len())
    }
}

/// The set of distributions known to the program
///
/// Built once at startup and passed by reference to whoever needs it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    distributions: Vec<Distribution>,
}

impl Registry {
    /// Registry holding every embedded distribution
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        registry.insert(Distribution::from_table(
            "english",
            "en",
            DEFAULT_VOWELS,
            ENGLISH,
        ));
        registry.insert(Distribution::from_table(
            "french",
            "fr",
            DEFAULT_VOWELS,
            FRENCH,
        ));
        registry.insert(Distribution::from_table(
            "german",
            "de",
            DEFAULT_VOWELS,
            GERMAN,
        ));
        registry.insert(Distribution::from_table(
            "spanish",
            "es",
            &["A", "E", "I", "O", "U"],
            SPANISH,
        ));
        registry
    }

    /// Add a distribution, replacing any distribution with the same name
    pub fn insert(&mut self, distribution: Distribution) {
        self.distributions.retain(|d| d.name() != distribution.name());
        self.distributions.push(distribution);
        self.distributions.sort_by(|a, b| a.name().cmp(b.name()));
    }

    /// Look up a distribution by name
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownDistribution` if no distribution has that name.
    pub fn get(&self, name: &str) -> Result<&Distribution, ConfigError> {
        self.distributions
            .iter()
            .find(|d| d.name() == name)
            .ok_or_else(|| ConfigError::UnknownDistribution(name.to_string()))
    }

    /// Distribution names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.distributions.iter().map(Distribution::name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Distribution> {
        self.distributions.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.distributions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distributions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tile_counts() {
        let registry = Registry::builtin();
        let expected = [
            ("english", 100, ENGLISH_TILE_COUNT),
            ("french", 102, FRENCH_TILE_COUNT),
            ("german", 102, GERMAN_TILE_COUNT),
            ("spanish", 100, SPANISH_TILE_COUNT),
        ];

        for (name, count, embedded) in expected {
            let d = registry.get(name).unwrap();
            assert_eq!(d.tile_count(), count, "{name}");
            assert_eq!(d.tile_count(), embedded, "{name}");
        }
    }

    #[test]
    fn registry_names_sorted() {
        let registry = Registry::builtin();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["english", "french", "german", "spanish"]);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn registry_unknown_name() {
        let registry = Registry::builtin();
        assert_eq!(
            registry.get("klingon"),
            Err(ConfigError::UnknownDistribution("klingon".to_string()))
        );
    }

    #[test]
    fn registry_insert_replaces() {
        let mut registry = Registry::default();
        registry.insert(Distribution::from_table("tiny", "en", DEFAULT_VOWELS, &[("A", 1, 1)]));
        registry.insert(Distribution::from_table("tiny", "en", DEFAULT_VOWELS, &[("B", 2, 3)]));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("tiny").unwrap().tile_count(), 2);
    }

    #[test]
    fn alphabet_excludes_wildcard() {
        let registry = Registry::builtin();
        let french = registry.get("french").unwrap();

        assert_eq!(french.alphabet().len(), 26);
        assert!(!french.alphabet().iter().any(|l| l == WILDCARD));
        assert!(french.alphabet().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn wildcard_carries_no_points() {
        let registry = Registry::builtin();
        for d in registry.iter() {
            let blank = d.letter(d.wildcard()).unwrap();
            let tile = d.tile(blank);
            assert!(tile.is_wildcard());
            assert_eq!(tile.points(), 0);
            assert_eq!(tile.kind(), Kind::Consonant);
        }
    }

    #[test]
    fn kinds_follow_vowel_table() {
        let registry = Registry::builtin();
        let german = registry.get("german").unwrap();
        assert_eq!(german.kind_of("Ä"), Kind::Vowel);
        assert_eq!(german.kind_of("Y"), Kind::Vowel);

        let spanish = registry.get("spanish").unwrap();
        assert_eq!(spanish.kind_of("Y"), Kind::Consonant);
        assert_eq!(spanish.kind_of("Ñ"), Kind::Consonant);
    }

    #[test]
    fn tiles_from_word_digraphs() {
        let registry = Registry::builtin();
        let spanish = registry.get("spanish").unwrap();

        let tiles = spanish.tiles_from_word("perro").unwrap();
        let letters: Vec<&str> = tiles.iter().map(Tile::letter).collect();
        assert_eq!(letters, ["P", "E", "RR", "O"]);
    }

    #[test]
    fn fewest_tiles_counts_digraphs_whole() {
        let registry = Registry::builtin();
        let spanish = registry.get("spanish").unwrap();
        assert_eq!(spanish.fewest_tiles("llorar"), 5);
        assert_eq!(spanish.fewest_tiles("Chorro"), 4);

        let english = registry.get("english").unwrap();
        assert_eq!(english.fewest_tiles("chorro"), 6);
        assert_eq!(english.fewest_tiles("caf\u{e9}"), 4);
    }

    #[test]
    fn tiles_from_word_unknown_letter() {
        let registry = Registry::builtin();
        let english = registry.get("english").unwrap();

        assert_eq!(
            english.tiles_from_word("caf\u{e9}"),
            Err(PlayError::UnknownLetter('É'))
        );
    }
}
