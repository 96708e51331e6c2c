//! The tile pool ("bag")
//!
//! Holds the undealt tiles and samples them under predicate constraints.
//! The random source is owned by the pool so that tests can seed it.

use super::predicate::{DrawPredicate, MAX_PREDICATE_RETRIES, take_all};
use super::tiles::SplitTiles;
use crate::core::{Kind, Tile};
use crate::distributions::Distribution;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// The undealt tiles of a game
#[derive(Debug, Clone)]
pub struct TilePool {
    tiles: SplitTiles,
    rng: StdRng,
}

impl TilePool {
    /// Create a full, shuffled pool seeded from the operating system
    #[must_use]
    pub fn new(distribution: &Distribution) -> Self {
        Self::with_rng(distribution, StdRng::from_os_rng())
    }

    /// Create a full, shuffled pool with the given random source
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use scrabbler::distributions::Registry;
    /// use scrabbler::game::TilePool;
    ///
    /// let registry = Registry::builtin();
    /// let french = registry.get("french").unwrap();
    /// let pool = TilePool::with_rng(french, StdRng::seed_from_u64(7));
    /// assert_eq!(pool.len(), 102);
    /// ```
    #[must_use]
    pub fn with_rng(distribution: &Distribution, rng: StdRng) -> Self {
        let mut tiles = SplitTiles::new();
        for letter in distribution.letters() {
            let tile = distribution.tile(letter);
            tiles.extend(std::iter::repeat_n(tile, letter.frequency() as usize));
        }

        let mut pool = Self { tiles, rng };
        pool.shuffle();
        pool
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn count(&self, kind: Kind) -> usize {
        self.tiles.count(kind)
    }

    /// Remaining tiles, vowels first
    #[must_use]
    pub fn tiles(&self) -> &SplitTiles {
        &self.tiles
    }

    /// Shuffle both sides independently
    pub fn shuffle(&mut self) {
        self.tiles.side_mut(Kind::Vowel).shuffle(&mut self.rng);
        self.tiles.side_mut(Kind::Consonant).shuffle(&mut self.rng);
    }

    /// Return a tile to the pool
    ///
    /// Tiles in the pool are never carried forward.
    pub fn put_back(&mut self, mut tile: Tile) {
        tile.set_carried(false);
        self.tiles.push(tile);
    }

    /// Draw up to `count` tiles of one kind
    ///
    /// Stops early, without error, when that side of the pool runs out.
    pub fn draw_by_kind<P: DrawPredicate>(
        &mut self,
        kind: Kind,
        count: usize,
        predicates: &mut [P],
    ) -> Vec<Tile> {
        self.sample(Some(kind), count, predicates)
    }

    /// Draw up to `count` tiles of any kind
    pub fn draw_random<P: DrawPredicate>(&mut self, count: usize, predicates: &mut [P]) -> Vec<Tile> {
        self.sample(None, count, predicates)
    }

    fn sample<P: DrawPredicate>(
        &mut self,
        kind: Option<Kind>,
        count: usize,
        predicates: &mut [P],
    ) -> Vec<Tile> {
        let mut drawn = Vec::with_capacity(count);

        for position in 0..count {
            let available = match kind {
                Some(k) => self.tiles.count(k),
                None => self.tiles.len(),
            };
            if available == 0 {
                // Exhausted, return what has been drawn so far
                break;
            }
            self.shuffle();

            let idx = self.pick_index(kind, available, position, predicates);
            let (side, idx) = self.resolve(kind, idx);
            drawn.push(self.tiles.side_mut(side).swap_remove(idx));
        }

        drawn
    }

    /// Choose a candidate index, re-rolling on rejection
    ///
    /// After `MAX_PREDICATE_RETRIES` rejections in a row the next rejected
    /// candidate is accepted anyway, so every slot resolves within
    /// `MAX_PREDICATE_RETRIES + 1` evaluations.
    fn pick_index<P: DrawPredicate>(
        &mut self,
        kind: Option<Kind>,
        available: usize,
        position: usize,
        predicates: &mut [P],
    ) -> usize {
        let mut rejections = 0;
        loop {
            let idx = self.rng.random_range(0..available);
            let (side, side_idx) = self.resolve(kind, idx);
            let tile = &self.tiles.side(side)[side_idx];

            if take_all(predicates, tile, position) {
                return idx;
            }
            rejections += 1;
            if rejections > MAX_PREDICATE_RETRIES {
                log::debug!("predicates rejected {rejections} candidates, forcing {tile}");
                return idx;
            }
        }
    }

    /// Map an index to a side and a position within that side
    ///
    /// Without a kind, the index spans vowels then consonants.
    fn resolve(&self, kind: Option<Kind>, idx: usize) -> (Kind, usize) {
        match kind {
            Some(k) => (k, idx),
            None => {
                let vowels = self.tiles.count(Kind::Vowel);
                if idx < vowels {
                    (Kind::Vowel, idx)
                } else {
                    (Kind::Consonant, idx - vowels)
                }
            }
        }
    }
}
