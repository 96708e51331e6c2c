//! Game session
//!
//! Orchestrates the pool, the hand, the predicates and the anagram index
//! through the draw → evaluate → play cycle.

use super::pool::TilePool;
use super::predicate::{Predicate, reset_all};
use super::tiles::SplitTiles;
use crate::core::{ConfigError, Kind, PlayError, Tile, normalize, tiles_to_string};
use crate::dictionary::AnagramIndex;
use crate::distributions::Distribution;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    word_length: usize,
    min_vowels: usize,
    min_consonants: usize,
}

impl SessionConfig {
    pub const MIN_WORD_LENGTH: usize = 2;
    pub const MAX_WORD_LENGTH: usize = 15;

    /// Create validated session parameters
    ///
    /// # Errors
    /// Returns a `ConfigError` if the word length is out of range or the
    /// quotas do not fit in a word.
    pub const fn new(
        word_length: usize,
        min_vowels: usize,
        min_consonants: usize,
    ) -> Result<Self, ConfigError> {
        if word_length < Self::MIN_WORD_LENGTH || word_length > Self::MAX_WORD_LENGTH {
            return Err(ConfigError::WordLength {
                got: word_length,
                min: Self::MIN_WORD_LENGTH,
                max: Self::MAX_WORD_LENGTH,
            });
        }
        if min_vowels + min_consonants > word_length {
            return Err(ConfigError::QuotaExceedsLength {
                vowels: min_vowels,
                consonants: min_consonants,
                length: word_length,
            });
        }
        Ok(Self {
            word_length,
            min_vowels,
            min_consonants,
        })
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn min_vowels(&self) -> usize {
        self.min_vowels
    }

    #[must_use]
    pub const fn min_consonants(&self) -> usize {
        self.min_consonants
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_length: 7,
            min_vowels: 2,
            min_consonants: 2,
        }
    }
}

/// Where the session is in the draw/play cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A hand is offered for acceptance
    Drawing,
    /// The player is entering a word from the accepted hand
    Playing,
}

/// Read-only view of a session for presentation layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub hand: Vec<Tile>,
    pub matches: Vec<String>,
    pub phase: Phase,
    pub draw_count: usize,
    pub play_count: usize,
    pub pool_len: usize,
    pub hand_len: usize,
    pub played_tiles: usize,
    pub finished: bool,
}

/// A single-player game
///
/// Owns the pool and the hand; borrows the distribution and the index.
pub struct GameSession<'a> {
    distribution: &'a Distribution,
    index: &'a AnagramIndex,
    config: SessionConfig,
    predicates: Vec<Predicate>,
    pool: TilePool,
    hand: SplitTiles,
    matches: Vec<String>,
    phase: Phase,
    draw_count: usize,
    play_count: usize,
    played_tiles: usize,
}

impl<'a> GameSession<'a> {
    /// Create a session with a pool seeded from the operating system
    ///
    /// The hand starts empty; call [`GameSession::deal`] to draw the first one.
    #[must_use]
    pub fn new(
        distribution: &'a Distribution,
        index: &'a AnagramIndex,
        config: SessionConfig,
        predicates: Vec<Predicate>,
    ) -> Self {
        Self::with_rng(
            distribution,
            index,
            config,
            predicates,
            StdRng::from_os_rng(),
        )
    }

    /// Create a session with an explicit random source
    #[must_use]
    pub fn with_rng(
        distribution: &'a Distribution,
        index: &'a AnagramIndex,
        config: SessionConfig,
        predicates: Vec<Predicate>,
        rng: StdRng,
    ) -> Self {
        let pool = TilePool::with_rng(distribution, rng);
        log::info!(
            "new session: {} distribution, {} tiles, {} words indexed",
            distribution.name(),
            pool.len(),
            index.len()
        );

        Self {
            distribution,
            index,
            config,
            predicates,
            pool,
            hand: SplitTiles::new(),
            matches: Vec::new(),
            phase: Phase::Drawing,
            draw_count: 0,
            play_count: 0,
            played_tiles: 0,
        }
    }

    /// Draw a hand using the configured quotas
    pub fn deal(&mut self) {
        self.draw_tiles(self.config.min_vowels, self.config.min_consonants);
    }

    /// Complete the hand up to the word length
    ///
    /// Tiles drawn in this round but not carried forward go back to the pool
    /// first. Quotas are filled by kind, the rest is drawn from both kinds.
    /// The hand is short only when the pool runs out.
    pub fn draw_tiles(&mut self, min_vowels: usize, min_consonants: usize) {
        self.reset_draw(false);
        self.draw_count += 1;

        let carried = self.hand.tiles();
        reset_all(&mut self.predicates, &carried);

        for (kind, min) in [(Kind::Vowel, min_vowels), (Kind::Consonant, min_consonants)] {
            let want = min.saturating_sub(self.hand.count(kind));
            if want > 0 {
                let drawn = self.pool.draw_by_kind(kind, want, &mut self.predicates);
                self.hand.extend(drawn);
            }
        }

        let remaining = self.config.word_length.saturating_sub(self.hand.len());
        if remaining > 0 {
            let drawn = self.pool.draw_random(remaining, &mut self.predicates);
            self.hand.extend(drawn);
        }

        self.matches = self
            .index
            .find_words(&self.hand.tiles(), self.distribution);
        self.phase = Phase::Drawing;

        log::debug!(
            "draw {}.{}: {} ({} matches, {} tiles left in pool)",
            self.play_count,
            self.draw_count,
            self.hand,
            self.matches.len(),
            self.pool.len()
        );
    }

    /// Return hand tiles to the pool
    ///
    /// Carried-forward tiles stay in the hand unless `full` is set.
    pub fn reset_draw(&mut self, full: bool) {
        let returned = self.hand.drain_where(|t| full || !t.is_carried());
        for tile in returned {
            self.pool.put_back(tile);
        }
    }

    /// Validate a word against the hand and, unless `check_only`, play it
    ///
    /// Letters are matched on a copy of the hand, so a failed play leaves the
    /// session untouched. On success the unused tiles are carried forward and
    /// the used ones are discarded for good.
    ///
    /// # Errors
    /// Returns `PlayError::UnavailableLetter` naming the first letter that
    /// cannot be matched, or `PlayError::EmptyWord`.
    pub fn play_word(&mut self, word: &str, check_only: bool) -> Result<(), PlayError> {
        let mut remaining = self.consume(word)?;
        if check_only {
            return Ok(());
        }

        let used = self.hand.len() - remaining.len();
        for tile in &mut remaining {
            tile.set_carried(true);
        }
        self.hand = SplitTiles::from_tiles(remaining);
        self.played_tiles += used;
        self.play_count += 1;
        self.draw_count = 0;
        self.phase = Phase::Drawing;

        log::info!(
            "word played: {} ({used} tiles), {} tiles left in the pool, {} carried forward",
            normalize(word.trim()),
            self.pool.len(),
            self.hand.len()
        );
        Ok(())
    }

    /// Validate a word without playing it
    ///
    /// # Errors
    /// Same as [`GameSession::play_word`].
    pub fn check_word(&self, word: &str) -> Result<(), PlayError> {
        self.consume(word).map(|_| ())
    }

    /// Validate partial input as it is typed
    ///
    /// A prefix that ends inside a multi-letter tile of the hand (the `C` of a
    /// `CH` tile) is accepted as long as completing that tile gives a
    /// playable word.
    ///
    /// # Errors
    /// Same as [`GameSession::play_word`].
    pub fn check_prefix(&self, prefix: &str) -> Result<(), PlayError> {
        let Err(err) = self.check_word(prefix) else {
            return Ok(());
        };

        let typed = normalize(prefix.trim());
        let completes = self
            .hand
            .iter()
            .map(Tile::letter)
            .filter(|letter| letter.chars().count() > 1)
            .any(|letter| {
                letter.char_indices().skip(1).any(|(at, _)| {
                    typed.ends_with(&letter[..at])
                        && self.consume(&format!("{typed}{}", &letter[at..])).is_ok()
                })
            });

        if completes { Ok(()) } else { Err(err) }
    }

    /// Match a word against a copy of the hand, returning the unused tiles
    fn consume(&self, word: &str) -> Result<Vec<Tile>, PlayError> {
        let word = normalize(word.trim());
        if word.is_empty() {
            return Err(PlayError::EmptyWord);
        }

        let mut remaining = self.hand.tiles();
        let mut rest = word.as_str();

        while let Some(c) = rest.chars().next() {
            // Longest tile first, so digraph tiles win over single letters
            let idx = remaining
                .iter()
                .enumerate()
                .filter(|(_, t)| rest.starts_with(t.letter()))
                .max_by_key(|(_, t)| t.letter().len())
                .map(|(i, _)| i)
                .ok_or(PlayError::UnavailableLetter(c))?;

            let tile = remaining.swap_remove(idx);
            rest = &rest[tile.letter().len()..];
        }

        Ok(remaining)
    }

    /// Accept the offered hand and start entering a word
    pub fn accept_draw(&mut self) {
        if !self.hand.is_empty() {
            log::debug!("draw accepted: {}", self.hand);
            self.phase = Phase::Playing;
        }
    }

    /// Reject the offered hand: every tile goes back and a new hand is drawn
    pub fn reject_draw(&mut self) {
        log::debug!("draw rejected: {}", self.hand);
        self.reset_draw(true);
        self.deal();
    }

    /// Draw again, keeping carried-forward tiles
    pub fn redraw(&mut self) {
        self.deal();
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// No tiles left to draw or play
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.pool.is_empty() && self.hand.is_empty()
    }

    #[must_use]
    pub const fn hand(&self) -> &SplitTiles {
        &self.hand
    }

    #[must_use]
    pub const fn pool(&self) -> &TilePool {
        &self.pool
    }

    /// Words spelled by the whole hand
    #[must_use]
    pub fn matches(&self) -> &[String] {
        &self.matches
    }

    /// Draws since the last played word
    #[must_use]
    pub const fn draw_count(&self) -> usize {
        self.draw_count
    }

    /// Words played so far
    #[must_use]
    pub const fn play_count(&self) -> usize {
        self.play_count
    }

    /// Tiles consumed by played words
    #[must_use]
    pub const fn played_tiles(&self) -> usize {
        self.played_tiles
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn distribution(&self) -> &'a Distribution {
        self.distribution
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            hand: self.hand.tiles(),
            matches: self.matches.clone(),
            phase: self.phase,
            draw_count: self.draw_count,
            play_count: self.play_count,
            pool_len: self.pool.len(),
            hand_len: self.hand.len(),
            played_tiles: self.played_tiles,
            finished: self.is_finished(),
        }
    }

    /// Hand letters joined with spaces
    #[must_use]
    pub fn hand_string(&self) -> String {
        tiles_to_string(&self.hand.tiles())
    }
}
