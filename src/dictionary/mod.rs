//! Dictionaries
//!
//! An [`AnagramIndex`] built once from a word list, and the loader reading
//! those word lists from disk.

mod index;
pub mod loader;

pub use index::{AnagramIndex, CombinationsWithReplacement, signature};
