//! Draw predicates
//!
//! Stateful filters consulted while sampling tiles. A candidate tile is
//! accepted only if every predicate of the chain takes it.

use crate::core::{ConfigError, Kind, Tile};

/// Consecutive rejections tolerated for one draw slot before a candidate is
/// accepted regardless of the predicates
pub const MAX_PREDICATE_RETRIES: usize = 50;

/// A filter deciding which tiles may enter the hand
pub trait DrawPredicate {
    /// Reinitialize internal state from the tiles already in the hand
    fn reset(&mut self, draw: &[Tile]);

    /// Whether `tile` may be accepted as the `position`-th tile of the draw
    ///
    /// Accepting a tile may update internal state.
    fn take(&mut self, tile: &Tile, position: usize) -> bool;
}

/// Reset every predicate of the chain
pub fn reset_all<P: DrawPredicate>(predicates: &mut [P], draw: &[Tile]) {
    for p in predicates {
        p.reset(draw);
    }
}

/// Run the chain in order, stopping at the first rejection
pub fn take_all<P: DrawPredicate>(predicates: &mut [P], tile: &Tile, position: usize) -> bool {
    predicates.iter_mut().all(|p| p.take(tile, position))
}

/// Enum wrapper for all predicate kinds
///
/// Built from `name=value` specifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Limit the number of identical vowels in a hand
    DuplicateVowels(DuplicateVowels),
    /// Limit the number of wildcards in a hand
    MaxWildcards(MaxWildcards),
}

impl DrawPredicate for Predicate {
    fn reset(&mut self, draw: &[Tile]) {
        match self {
            Self::DuplicateVowels(p) => p.reset(draw),
            Self::MaxWildcards(p) => p.reset(draw),
        }
    }

    fn take(&mut self, tile: &Tile, position: usize) -> bool {
        match self {
            Self::DuplicateVowels(p) => p.take(tile, position),
            Self::MaxWildcards(p) => p.take(tile, position),
        }
    }
}

impl Predicate {
    /// Create a predicate from a `name=value` pair
    ///
    /// Supported names: "dup-vowels", "max-wildcards"
    ///
    /// # Errors
    /// Returns a `ConfigError` if the name is unknown or the value is missing
    /// or not a non-negative integer.
    ///
    /// # Examples
    /// ```
    /// use scrabbler::game::Predicate;
    ///
    /// let p = Predicate::parse("dup-vowels=2").unwrap();
    /// assert_eq!(p.name(), "dup-vowels");
    ///
    /// assert!(Predicate::parse("dup-vowels").is_err());
    /// assert!(Predicate::parse("no-such-thing=1").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let (name, value) = match text.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (text.trim(), None),
        };

        let number = |value: Option<&str>| -> Result<usize, ConfigError> {
            let value = value.ok_or_else(|| ConfigError::MissingPredicateValue(name.to_string()))?;
            value
                .parse()
                .map_err(|_| ConfigError::InvalidPredicateValue {
                    name: name.to_string(),
                    value: value.to_string(),
                })
        };

        match name {
            "dup-vowels" => Ok(Self::DuplicateVowels(DuplicateVowels::new(number(value)?))),
            "max-wildcards" => Ok(Self::MaxWildcards(MaxWildcards::new(number(value)?))),
            _ => Err(ConfigError::UnknownPredicate(name.to_string())),
        }
    }

    /// Parse a comma separated list of `name=value` pairs
    ///
    /// Empty items are ignored, so an empty string yields an empty chain.
    ///
    /// # Errors
    /// Returns the error of the first invalid pair.
    pub fn parse_list(list: &str) -> Result<Vec<Self>, ConfigError> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::parse)
            .collect()
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DuplicateVowels(_) => "dup-vowels",
            Self::MaxWildcards(_) => "max-wildcards",
        }
    }
}

/// Rejects a vowel once `threshold` equal vowels are in the hand
///
/// Carried-forward tiles count, since they are passed to `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateVowels {
    threshold: usize,
    seen: Vec<String>,
}

impl DuplicateVowels {
    #[must_use]
    pub const fn new(threshold: usize) -> Self {
        Self {
            threshold,
            seen: Vec::new(),
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }
}

impl DrawPredicate for DuplicateVowels {
    fn reset(&mut self, draw: &[Tile]) {
        self.seen.clear();
        self.seen.extend(
            draw.iter()
                .filter(|t| t.kind() == Kind::Vowel)
                .map(|t| t.letter().to_string()),
        );
    }

    fn take(&mut self, tile: &Tile, _position: usize) -> bool {
        if tile.kind() != Kind::Vowel {
            return true;
        }
        let n = self.seen.iter().filter(|l| *l == tile.letter()).count();
        if n >= self.threshold {
            return false;
        }
        self.seen.push(tile.letter().to_string());
        true
    }
}

/// Rejects a wildcard once `limit` wildcards are in the hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxWildcards {
    limit: usize,
    seen: usize,
}

impl MaxWildcards {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit, seen: 0 }
    }
}

impl DrawPredicate for MaxWildcards {
    fn reset(&mut self, draw: &[Tile]) {
        self.seen = draw.iter().filter(|t| t.is_wildcard()).count();
    }

    fn take(&mut self, tile: &Tile, _position: usize) -> bool {
        if !tile.is_wildcard() {
            return true;
        }
        if self.seen >= self.limit {
            return false;
        }
        self.seen += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vowel(letter: &str) -> Tile {
        Tile::new(letter, 1, Kind::Vowel, false)
    }

    fn consonant(letter: &str) -> Tile {
        Tile::new(letter, 1, Kind::Consonant, false)
    }

    fn wildcard() -> Tile {
        Tile::new("?", 0, Kind::Consonant, true)
    }

    #[test]
    fn duplicate_vowels_threshold() {
        let mut p = DuplicateVowels::new(2);
        p.reset(&[]);

        assert!(p.take(&vowel("E"), 0));
        assert!(p.take(&vowel("E"), 1));
        assert!(!p.take(&vowel("E"), 2));
        assert!(p.take(&vowel("A"), 2));
    }

    #[test]
    fn duplicate_vowels_ignores_consonants() {
        let mut p = DuplicateVowels::new(0);
        p.reset(&[]);

        assert!(p.take(&consonant("S"), 0));
        assert!(p.take(&wildcard(), 1));
        assert!(!p.take(&vowel("O"), 2));
    }

    #[test]
    fn duplicate_vowels_counts_carried_tiles() {
        let mut carried = vowel("I");
        carried.set_carried(true);

        let mut p = DuplicateVowels::new(1);
        p.reset(&[carried, consonant("T")]);

        assert!(!p.take(&vowel("I"), 0));
        assert!(p.take(&vowel("U"), 0));
    }

    #[test]
    fn duplicate_vowels_reset_clears_state() {
        let mut p = DuplicateVowels::new(1);
        p.reset(&[]);
        assert!(p.take(&vowel("A"), 0));
        assert!(!p.take(&vowel("A"), 1));

        p.reset(&[]);
        assert!(p.take(&vowel("A"), 0));
    }

    #[test]
    fn max_wildcards_limit() {
        let mut p = MaxWildcards::new(1);
        p.reset(&[]);

        assert!(p.take(&wildcard(), 0));
        assert!(!p.take(&wildcard(), 1));
        assert!(p.take(&consonant("K"), 1));

        p.reset(&[wildcard()]);
        assert!(!p.take(&wildcard(), 0));
    }

    #[test]
    fn chain_short_circuits() {
        let mut chain = vec![
            Predicate::parse("dup-vowels=0").unwrap(),
            Predicate::parse("max-wildcards=0").unwrap(),
        ];
        reset_all(&mut chain, &[]);

        assert!(!take_all(&mut chain, &vowel("A"), 0));
        assert!(!take_all(&mut chain, &wildcard(), 0));
        assert!(take_all(&mut chain, &consonant("B"), 0));
    }

    #[test]
    fn parse_list_specs() {
        let chain = Predicate::parse_list(" dup-vowels=2, ,max-wildcards = 1 ").unwrap();
        assert_eq!(
            chain,
            [
                Predicate::DuplicateVowels(DuplicateVowels::new(2)),
                Predicate::MaxWildcards(MaxWildcards::new(1)),
            ]
        );
        assert!(Predicate::parse_list("").unwrap().is_empty());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Predicate::parse("dup-vowels"),
            Err(ConfigError::MissingPredicateValue("dup-vowels".to_string()))
        );
        assert_eq!(
            Predicate::parse("dup-vowels=two"),
            Err(ConfigError::InvalidPredicateValue {
                name: "dup-vowels".to_string(),
                value: "two".to_string(),
            })
        );
        assert_eq!(
            Predicate::parse_list("dup-vowels=2,dup-consonants=2"),
            Err(ConfigError::UnknownPredicate("dup-consonants".to_string()))
        );
    }
}
