//! Anagram index
//!
//! Words are bucketed by signature: their letters, upper-cased and sorted.
//! Two words share a bucket iff they are anagrams of one another, so a hand
//! of tiles resolves to its words with a single hash lookup. Wildcards are
//! resolved by trying every multiset of alphabet letters they could stand for.

use crate::core::{DictionaryError, Tile, normalize};
use crate::distributions::Distribution;
use rustc_hash::FxHashMap;
use unicode_normalization::UnicodeNormalization;

/// Dictionary of words indexed by anagram signature
#[derive(Debug, Clone, Default)]
pub struct AnagramIndex {
    buckets: FxHashMap<String, Vec<String>>,
    word_count: usize,
}

impl AnagramIndex {
    /// Build an index from every word of the list
    ///
    /// # Errors
    /// Returns `DictionaryError::MalformedWord` on the first entry containing a
    /// character that is not a letter. No partial index is returned.
    ///
    /// # Examples
    /// ```
    /// use scrabbler::dictionary::AnagramIndex;
    ///
    /// let index = AnagramIndex::build(["chien", "niche", "chine"]).unwrap();
    /// assert_eq!(index.lookup(&["N", "I", "C", "H", "E"], 0, &[]), ["chien", "chine", "niche"]);
    ///
    /// assert!(AnagramIndex::build(["ok", "not-ok"]).is_err());
    /// ```
    pub fn build<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_filtered(words, |_| true)
    }

    /// Build an index keeping only words a hand of `hand_len` tiles can spell
    ///
    /// Multi-letter tiles make this a range: a word qualifies when its letter
    /// count is at least `hand_len` and its fewest tiles (digraphs taken whole)
    /// at most `hand_len`. A length of zero keeps every word.
    ///
    /// # Errors
    /// Returns `DictionaryError::MalformedWord` on the first entry containing a
    /// character that is not a letter, even if it would have been filtered out.
    ///
    /// # Examples
    /// ```
    /// use scrabbler::dictionary::AnagramIndex;
    /// use scrabbler::distributions::Registry;
    ///
    /// let registry = Registry::builtin();
    /// let spanish = registry.get("spanish").unwrap();
    ///
    /// // CH counts as one tile: seven tiles, eight letters
    /// let index = AnagramIndex::build_with_length(["cochinos", "coches"], 7, spanish).unwrap();
    /// assert_eq!(index.len(), 1);
    /// ```
    pub fn build_with_length<I, S>(
        words: I,
        hand_len: usize,
        distribution: &Distribution,
    ) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if hand_len == 0 {
            return Self::build(words);
        }
        Self::build_filtered(words, |word| {
            word.chars().count() >= hand_len && distribution.fewest_tiles(word) <= hand_len
        })
    }

    /// Entries are taken as they are: surrounding whitespace is malformed.
    /// Empty entries are skipped but still count toward the reported line
    /// numbers.
    fn build_filtered<I, S, F>(words: I, keep: F) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> bool,
    {
        let mut index = Self::default();

        for (i, entry) in words.into_iter().enumerate() {
            let word: String = entry.as_ref().nfc().collect();
            if word.is_empty() {
                continue;
            }
            if let Some(letter) = word.chars().find(|c| !c.is_alphabetic()) {
                return Err(DictionaryError::MalformedWord {
                    word,
                    line: i + 1,
                    letter,
                });
            }
            if !keep(&word) {
                continue;
            }

            let key = signature([word.as_str()]);
            index.buckets.entry(key).or_default().push(word);
            index.word_count += 1;
        }

        for bucket in index.buckets.values_mut() {
            sort_words(bucket);
        }

        Ok(index)
    }

    /// Number of indexed words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of distinct signatures
    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Words made of exactly `letters` plus `wildcards` letters of `alphabet`
    ///
    /// Results are sorted case-insensitively. With wildcards, every
    /// non-decreasing combination of alphabet letters is tried; each yields a
    /// distinct signature so no word can be returned twice.
    #[must_use]
    pub fn lookup<S: AsRef<str>>(
        &self,
        letters: &[S],
        wildcards: usize,
        alphabet: &[String],
    ) -> Vec<String> {
        if wildcards == 0 {
            return self
                .buckets
                .get(&signature(letters.iter().map(AsRef::as_ref)))
                .cloned()
                .unwrap_or_default();
        }

        let mut words = Vec::new();
        let mut merged: Vec<&str> = Vec::with_capacity(letters.len() + wildcards);

        for combination in CombinationsWithReplacement::new(alphabet, wildcards) {
            merged.clear();
            merged.extend(letters.iter().map(AsRef::as_ref));
            merged.extend(combination.into_iter().map(String::as_str));

            if let Some(bucket) = self.buckets.get(&signature(merged.iter().copied())) {
                words.extend(bucket.iter().cloned());
            }
        }

        sort_words(&mut words);
        words
    }

    /// Words spelled by a hand of tiles, wildcards standing for any letter
    #[must_use]
    pub fn find_words(&self, tiles: &[Tile], distribution: &Distribution) -> Vec<String> {
        let letters: Vec<&str> = tiles
            .iter()
            .filter(|t| !t.is_wildcard())
            .map(Tile::letter)
            .collect();
        let wildcards = tiles.len() - letters.len();

        self.lookup(&letters, wildcards, distribution.alphabet())
    }
}

/// Canonical anagram key: normalized code points, sorted
///
/// Multi-letter tiles contribute each of their code points.
///
/// # Examples
/// ```
/// use scrabbler::dictionary::signature;
///
/// assert_eq!(signature(["Chat"]), "ACHT");
/// assert_eq!(signature(["T", "CH", "A"]), "ACHT");
/// ```
pub fn signature<'a, I>(letters: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut chars: Vec<char> = letters
        .into_iter()
        .flat_map(|l| normalize(l).chars().collect::<Vec<_>>())
        .collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Sort case-insensitively, ties broken by the original spelling
fn sort_words(words: &mut [String]) {
    words.sort_by_cached_key(|w| (w.to_uppercase(), w.clone()));
}

/// Combinations of `r` items drawn with repetition, in lexicographic order
///
/// Yields every non-decreasing tuple of indices over `items`.
///
/// # Examples
/// ```
/// use scrabbler::dictionary::CombinationsWithReplacement;
///
/// let items = ["A", "B", "C"];
/// let combos: Vec<Vec<&str>> = CombinationsWithReplacement::new(&items, 2)
///     .map(|c| c.into_iter().copied().collect())
///     .collect();
/// assert_eq!(combos.len(), 6);
/// assert_eq!(combos[0], ["A", "A"]);
/// assert_eq!(combos[5], ["C", "C"]);
/// ```
pub struct CombinationsWithReplacement<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    done: bool,
}

impl<'a, T> CombinationsWithReplacement<'a, T> {
    #[must_use]
    pub fn new(items: &'a [T], r: usize) -> Self {
        Self {
            items,
            indices: vec![0; r],
            done: items.is_empty() || r == 0,
        }
    }
}

impl<'a, T> Iterator for CombinationsWithReplacement<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let items = self.items;
        let combination = self.indices.iter().map(|&i| &items[i]).collect();

        // Rightmost index that can still be incremented
        let last = self.items.len() - 1;
        match self.indices.iter().rposition(|&i| i != last) {
            Some(i) => {
                let next = self.indices[i] + 1;
                for idx in &mut self.indices[i..] {
                    *idx = next;
                }
            }
            None => self.done = true,
        }

        Some(combination)
    }
}
