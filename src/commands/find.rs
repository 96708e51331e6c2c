//! Find command
//!
//! One-shot anagram lookup for a given set of tiles.

use crate::core::{PlayError, Tile};
use crate::dictionary::AnagramIndex;
use crate::distributions::Distribution;
use std::time::{Duration, Instant};

/// Words spelled by a set of tiles
#[derive(Debug, Clone)]
pub struct FindResult {
    pub tiles: Vec<Tile>,
    pub words: Vec<String>,
    pub duration: Duration,
}

impl FindResult {
    #[must_use]
    pub fn wildcards(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_wildcard()).count()
    }
}

/// Look up every word spelled by exactly the given tiles
///
/// `tiles_text` is read with the distribution's letters, so digraphs and the
/// wildcard symbol are recognized. Whitespace is ignored.
///
/// # Errors
/// Returns `PlayError::UnknownLetter` if the text contains something that is
/// not a tile of the distribution, or `PlayError::EmptyWord` if it is blank.
pub fn find_words(
    tiles_text: &str,
    distribution: &Distribution,
    index: &AnagramIndex,
) -> Result<FindResult, PlayError> {
    let compact: String = tiles_text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(PlayError::EmptyWord);
    }

    let start = Instant::now();
    let tiles = distribution.tiles_from_word(&compact)?;
    let words = index.find_words(&tiles, distribution);
    let duration = start.elapsed();

    log::info!(
        "find {}: {} words in {:.1}ms",
        compact,
        words.len(),
        duration.as_secs_f64() * 1000.0
    );

    Ok(FindResult {
        tiles,
        words,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::Registry;

    fn index() -> AnagramIndex {
        AnagramIndex::build([
            "patates", "tapotes", "pattes", "tapette", "tapettes", "poseurs", "pousser", "soupers",
        ])
        .unwrap()
    }

    #[test]
    fn finds_exact_anagrams() {
        let registry = Registry::builtin();
        let french = registry.get("french").unwrap();

        let result = find_words("u o e r p s s", french, &index()).unwrap();
        assert_eq!(result.tiles.len(), 7);
        assert_eq!(result.words, ["poseurs", "pousser", "soupers"]);
        assert_eq!(result.wildcards(), 0);
    }

    #[test]
    fn finds_with_wildcards() {
        let registry = Registry::builtin();
        let french = registry.get("french").unwrap();

        let result = find_words("TAPET??", french, &index()).unwrap();
        assert_eq!(result.wildcards(), 2);
        assert!(result.words.contains(&"patates".to_string()));
        assert!(result.words.contains(&"tapotes".to_string()));
        assert!(!result.words.contains(&"pattes".to_string()));
    }

    #[test]
    fn rejects_bad_input() {
        let registry = Registry::builtin();
        let french = registry.get("french").unwrap();

        assert_eq!(
            find_words("AB1", french, &index()).unwrap_err(),
            PlayError::UnknownLetter('1')
        );
        assert_eq!(find_words("   ", french, &index()).unwrap_err(), PlayError::EmptyWord);
    }
}
