//! Tile collections split by kind
//!
//! Both the pool and the hand keep vowels and consonants apart so that
//! per-kind quotas can be sampled directly. Order within a side carries no
//! meaning.

use crate::core::{Kind, Tile, tiles_to_string};
use std::fmt;

/// Tiles partitioned into vowels and consonants
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitTiles {
    vowels: Vec<Tile>,
    consonants: Vec<Tile>,
}

impl SplitTiles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Split tiles by their kind
    pub fn from_tiles<I: IntoIterator<Item = Tile>>(tiles: I) -> Self {
        let mut split = Self::new();
        split.extend(tiles);
        split
    }

    #[inline]
    #[must_use]
    pub fn vowels(&self) -> &[Tile] {
        &self.vowels
    }

    #[inline]
    #[must_use]
    pub fn consonants(&self) -> &[Tile] {
        &self.consonants
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vowels.len() + self.consonants.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vowels.is_empty() && self.consonants.is_empty()
    }

    /// Number of tiles of the given kind
    #[inline]
    #[must_use]
    pub fn count(&self, kind: Kind) -> usize {
        self.side(kind).len()
    }

    /// All tiles, vowels first
    #[must_use]
    pub fn tiles(&self) -> Vec<Tile> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.vowels.iter().chain(self.consonants.iter())
    }

    pub fn push(&mut self, tile: Tile) {
        self.side_mut(tile.kind()).push(tile);
    }

    pub fn extend<I: IntoIterator<Item = Tile>>(&mut self, tiles: I) {
        for tile in tiles {
            self.push(tile);
        }
    }

    /// Remove every tile matching the predicate, in no particular order
    pub fn drain_where<F: FnMut(&Tile) -> bool>(&mut self, mut f: F) -> Vec<Tile> {
        let mut drained = Vec::new();
        for side in [&mut self.vowels, &mut self.consonants] {
            let (taken, kept): (Vec<Tile>, Vec<Tile>) = side.drain(..).partition(|t| f(t));
            *side = kept;
            drained.extend(taken);
        }
        drained
    }

    #[inline]
    pub(crate) fn side(&self, kind: Kind) -> &Vec<Tile> {
        match kind {
            Kind::Vowel => &self.vowels,
            Kind::Consonant => &self.consonants,
        }
    }

    #[inline]
    pub(crate) fn side_mut(&mut self, kind: Kind) -> &mut Vec<Tile> {
        match kind {
            Kind::Vowel => &mut self.vowels,
            Kind::Consonant => &mut self.consonants,
        }
    }
}

impl fmt::Display for SplitTiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", tiles_to_string(&self.tiles()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(word: &str) -> Vec<Tile> {
        word.chars()
            .map(|c| {
                let kind = if "AEIOUY".contains(c) {
                    Kind::Vowel
                } else {
                    Kind::Consonant
                };
                Tile::new(&c.to_string(), 1, kind, false)
            })
            .collect()
    }

    #[test]
    fn split_by_kind() {
        for word in [
            "AGGRANDIZES",
            "CARBURETORS",
            "CHROMOSOMES",
            "HEMOPHILIA",
            "TRACHEOTOMIES",
            "WEAPONIZING",
        ] {
            let split = SplitTiles::from_tiles(tiles(word));
            assert_eq!(split.len(), word.len());
            assert!(split.vowels().iter().all(|t| t.kind() == Kind::Vowel));
            assert!(split.consonants().iter().all(|t| t.kind() == Kind::Consonant));
        }
    }

    #[test]
    fn count_and_display() {
        let split = SplitTiles::from_tiles(tiles("TEENAGE"));
        assert_eq!(split.count(Kind::Vowel), 4);
        assert_eq!(split.count(Kind::Consonant), 3);
        assert_eq!(split.to_string(), "E E A E T N G");
    }

    #[test]
    fn drain_where_partitions() {
        let mut split = SplitTiles::from_tiles(tiles("PRETRAIN"));
        let drained = split.drain_where(|t| t.letter() == "R");

        assert_eq!(drained.len(), 2);
        assert_eq!(split.len(), 6);
        assert!(split.iter().all(|t| t.letter() != "R"));
    }

    #[test]
    fn empty_split() {
        let split = SplitTiles::new();
        assert!(split.is_empty());
        assert_eq!(split.len(), 0);
        assert!(split.tiles().is_empty());
    }
}
