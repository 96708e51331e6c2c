//! Game logic
//!
//! The tile pool, draw predicates and the session tying them together.

mod pool;
pub mod predicate;
mod session;
mod tiles;

pub use pool::TilePool;
pub use predicate::{
    DrawPredicate, DuplicateVowels, MAX_PREDICATE_RETRIES, MaxWildcards, Predicate, reset_all,
    take_all,
};
pub use session::{GameSession, Phase, SessionConfig, SessionSnapshot};
pub use tiles::SplitTiles;
