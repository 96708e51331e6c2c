//! Benchmark command
//!
//! Plays many independent games in parallel to measure how often a dealt
//! hand spells a word.

use crate::core::Tile;
use crate::dictionary::AnagramIndex;
use crate::distributions::Distribution;
use crate::game::{GameSession, Predicate, SessionConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Benchmark parameters
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub games: usize,
    /// Base seed; game `i` is seeded with `seed + i`
    pub seed: Option<u64>,
    /// Hands dealt before a game is abandoned
    pub max_hands: usize,
    pub progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(games: usize) -> Self {
        Self {
            games,
            seed: None,
            max_hands: 500,
            progress: true,
        }
    }
}

/// Outcome of one simulated game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct GameStats {
    hands: usize,
    hands_with_match: usize,
    matches: usize,
    words_played: usize,
    tiles_played: usize,
    finished: bool,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub games: usize,
    pub finished_games: usize,
    pub hands: usize,
    pub hands_with_match: usize,
    pub total_matches: usize,
    pub words_played: usize,
    pub average_matches: f64,
    pub match_rate: f64,
    pub tiles_per_game: f64,
    pub duration: Duration,
    pub hands_per_second: f64,
}

/// Run `config.games` games, one session per worker
pub fn run_benchmark(
    distribution: &Distribution,
    index: &AnagramIndex,
    session_config: SessionConfig,
    predicates: &[Predicate],
    config: &BenchmarkConfig,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if config.progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{} games", distribution.name()));

    let stats: Vec<GameStats> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
                None => StdRng::from_os_rng(),
            };
            let session = GameSession::with_rng(
                distribution,
                index,
                session_config,
                predicates.to_vec(),
                rng,
            );
            let result = play_game(session, config.max_hands);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    summarize(&stats, duration)
}

/// Auto-play a game: play the first matching word, otherwise reject the hand
fn play_game(mut session: GameSession, max_hands: usize) -> GameStats {
    let mut stats = GameStats::default();

    while !session.is_finished() && stats.hands < max_hands {
        if session.hand().is_empty() || session.draw_count() == 0 {
            session.deal();
        } else {
            session.reject_draw();
        }
        stats.hands += 1;

        let Some(first) = session.matches().first().cloned() else {
            continue;
        };
        stats.hands_with_match += 1;
        stats.matches += session.matches().len();

        let hand = session.hand().tiles();
        let typed = spell(&first, &hand, session.distribution().wildcard());
        session.accept_draw();
        match typed.map(|word| session.play_word(&word, false)) {
            Some(Ok(())) => stats.words_played += 1,
            _ => log::warn!("could not play {first} with {}", session.hand()),
        }
    }

    stats.tiles_played = session.played_tiles();
    stats.finished = session.is_finished();
    log::debug!(
        "game over after {} hands: {} words, {} tiles played",
        stats.hands,
        stats.words_played,
        stats.tiles_played
    );
    stats
}

/// Spell `word` with the hand, typing the wildcard symbol for letters no
/// regular tile covers
fn spell(word: &str, hand: &[Tile], wildcard: &str) -> Option<String> {
    let word = crate::core::normalize(word);
    let mut remaining: Vec<&Tile> = hand.iter().collect();
    let mut rest = word.as_str();
    let mut typed = String::with_capacity(word.len());

    while let Some(c) = rest.chars().next() {
        let regular = remaining
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_wildcard() && rest.starts_with(t.letter()))
            .max_by_key(|(_, t)| t.letter().len())
            .map(|(i, _)| i);

        if let Some(i) = regular {
            let tile = remaining.swap_remove(i);
            typed.push_str(tile.letter());
            rest = &rest[tile.letter().len()..];
        } else {
            let i = remaining.iter().position(|t| t.is_wildcard())?;
            remaining.swap_remove(i);
            typed.push_str(wildcard);
            rest = &rest[c.len_utf8()..];
        }
    }

    Some(typed)
}

fn summarize(stats: &[GameStats], duration: Duration) -> BenchmarkResult {
    let games = stats.len();
    let hands: usize = stats.iter().map(|s| s.hands).sum();
    let hands_with_match: usize = stats.iter().map(|s| s.hands_with_match).sum();
    let total_matches: usize = stats.iter().map(|s| s.matches).sum();
    let tiles: usize = stats.iter().map(|s| s.tiles_played).sum();

    let ratio = |a: usize, b: usize| if b == 0 { 0.0 } else { a as f64 / b as f64 };

    BenchmarkResult {
        games,
        finished_games: stats.iter().filter(|s| s.finished).count(),
        hands,
        hands_with_match,
        total_matches,
        words_played: stats.iter().map(|s| s.words_played).sum(),
        average_matches: ratio(total_matches, hands),
        match_rate: ratio(hands_with_match, hands),
        tiles_per_game: ratio(tiles, games),
        duration,
        hands_per_second: if duration.is_zero() {
            0.0
        } else {
            hands as f64 / duration.as_secs_f64()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Kind;
    use crate::distributions::Registry;

    const WORDS: &[&str] = &[
        "patates", "tapotes", "poseurs", "pousser", "soupers", "ennuyer", "abaisse", "lettres",
        "retenir", "terrine", "entrera", "arreter", "saunier", "ruinees", "urinees", "tresse",
    ];

    fn config(games: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            seed: Some(7),
            max_hands: 50,
            progress: false,
            ..BenchmarkConfig::new(games)
        }
    }

    #[test]
    fn benchmark_runs() {
        let registry = Registry::builtin();
        let french = registry.get("french").unwrap();
        let index = AnagramIndex::build(WORDS).unwrap();

        let result = run_benchmark(french, &index, SessionConfig::default(), &[], &config(4));

        assert_eq!(result.games, 4);
        assert!(result.hands > 0);
        assert!(result.hands <= 4 * 50);
        assert!(result.hands_with_match <= result.hands);
        assert!(result.words_played <= result.hands_with_match);
        assert!(result.match_rate >= 0.0 && result.match_rate <= 1.0);
    }

    #[test]
    fn seeded_benchmarks_agree() {
        let registry = Registry::builtin();
        let french = registry.get("french").unwrap();
        let index = AnagramIndex::build(WORDS).unwrap();
        let predicates = Predicate::parse_list("dup-vowels=2").unwrap();

        let a = run_benchmark(french, &index, SessionConfig::default(), &predicates, &config(3));
        let b = run_benchmark(french, &index, SessionConfig::default(), &predicates, &config(3));

        assert_eq!(a.hands, b.hands);
        assert_eq!(a.total_matches, b.total_matches);
        assert_eq!(a.words_played, b.words_played);
    }

    #[test]
    fn empty_benchmark() {
        let registry = Registry::builtin();
        let english = registry.get("english").unwrap();
        let index = AnagramIndex::default();

        let result = run_benchmark(english, &index, SessionConfig::default(), &[], &config(0));
        assert_eq!(result.games, 0);
        assert_eq!(result.hands, 0);
        assert!(result.average_matches.abs() < f64::EPSILON);
    }

    #[test]
    fn spell_substitutes_wildcards() {
        let hand = [
            Tile::new("P", 3, Kind::Consonant, false),
            Tile::new("A", 1, Kind::Vowel, false),
            Tile::new("T", 1, Kind::Consonant, false),
            Tile::new("?", 0, Kind::Consonant, true),
            Tile::new("E", 1, Kind::Vowel, false),
            Tile::new("S", 1, Kind::Consonant, false),
            Tile::new("?", 0, Kind::Consonant, true),
        ];

        assert_eq!(spell("patates", &hand, "?").as_deref(), Some("PAT??ES"));
        assert_eq!(spell("pat", &hand, "?").as_deref(), Some("PAT"));
        assert_eq!(spell("pattttt", &hand, "?"), None);
    }
}
