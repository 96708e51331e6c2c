//! Scrabbler
//!
//! A practice aid for tile-based word games: draw a hand of letter tiles
//! under vowel/consonant constraints and find every dictionary word that
//! uses all of them.
//!
//! # Quick Start
//!
//! ```rust
//! use scrabbler::dictionary::AnagramIndex;
//! use scrabbler::distributions::Registry;
//!
//! let registry = Registry::builtin();
//! let french = registry.get("french").unwrap();
//! let index = AnagramIndex::build(["poseurs", "pousser", "soupers"]).unwrap();
//!
//! let tiles = french.tiles_from_word("SPOURES").unwrap();
//! assert_eq!(index.find_words(&tiles, french), ["poseurs", "pousser", "soupers"]);
//! ```

// Core domain types
pub mod core;

// Tile distributions
pub mod distributions;

// Anagram index and word lists
pub mod dictionary;

// Pool, predicates and sessions
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Debug log file
pub mod logging;
