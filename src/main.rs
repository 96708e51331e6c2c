//! Scrabbler - CLI
//!
//! Tile drawing practice with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use scrabbler::{
    commands::{BenchmarkConfig, find_words, run_benchmark, run_simple},
    dictionary::{AnagramIndex, loader::load_index},
    distributions::{Distribution, Registry},
    game::{GameSession, Predicate, SessionConfig},
    interactive::{App, Picker, run_app, run_picker, with_terminal},
    logging::{DEFAULT_LOG_FILE, init_file_logger},
    output::{print_benchmark_result, print_find_result},
};
use std::time::Duration;

/// Distribution used by the non-interactive modes when none is given
const DEFAULT_DISTRIBUTION: &str = "french";

#[derive(Parser)]
#[command(
    name = "scrabbler",
    about = "Draw tile hands under vowel/consonant constraints and find every word they spell",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Tile distribution: english, french, german, spanish
    ///
    /// The interactive mode shows a menu when omitted, other modes use french.
    #[arg(short, long, global = true)]
    distribution: Option<String>,

    /// Dictionary file, one word per line (plain or gzip)
    ///
    /// Defaults to dictionaries/<distribution>.txt
    #[arg(short = 'w', long, global = true)]
    dictionary: Option<String>,

    /// Tiles per hand
    #[arg(short, long, global = true, default_value_t = 7)]
    length: usize,

    /// Minimum vowels per hand
    #[arg(long, global = true, default_value_t = 2)]
    vowels: usize,

    /// Minimum consonants per hand
    #[arg(long, global = true, default_value_t = 2)]
    consonants: usize,

    /// Draw predicates, e.g. "dup-vowels=2,max-wildcards=1"
    #[arg(short, long, global = true, default_value = "")]
    predicates: String,

    /// Seed for reproducible draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write a debug log to debug.log
    #[arg(short = 'v', long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Show tile points
        #[arg(long)]
        points: bool,

        /// Seconds allowed to find a word once a hand is kept
        #[arg(long)]
        timer: Option<u64>,
    },

    /// Simple CLI mode (line-oriented game without TUI)
    Simple {
        /// Show tile points
        #[arg(long)]
        points: bool,
    },

    /// List the words spelled by a set of tiles
    Find {
        /// Tiles, e.g. "SPOURES" or "TAPET??"
        tiles: String,

        /// Show tile points
        #[arg(long)]
        points: bool,
    },

    /// Simulate full games and report how often hands spell a word
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Parameters shared by every game mode
struct GameSetup {
    config: SessionConfig,
    predicates: Vec<Predicate>,
}

impl GameSetup {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let config = SessionConfig::new(cli.length, cli.vowels, cli.consonants)?;
        let predicates = Predicate::parse_list(&cli.predicates)?;

        Ok(Self { config, predicates })
    }

    fn session<'a>(
        &self,
        distribution: &'a Distribution,
        index: &'a AnagramIndex,
        seed: Option<u64>,
    ) -> GameSession<'a> {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        GameSession::with_rng(
            distribution,
            index,
            self.config,
            self.predicates.clone(),
            rng,
        )
    }

    /// Load the dictionary for `distribution`, keeping words of one hand
    fn load(&self, cli: &Cli, distribution: &Distribution) -> Result<AnagramIndex> {
        load_dictionary(
            &dictionary_path(cli, distribution),
            self.config.word_length(),
            distribution,
        )
    }
}

fn dictionary_path(cli: &Cli, distribution: &Distribution) -> String {
    cli.dictionary
        .clone()
        .unwrap_or_else(|| format!("dictionaries/{}.txt", distribution.name()))
}

fn load_dictionary(
    path: &str,
    hand_len: usize,
    distribution: &Distribution,
) -> Result<AnagramIndex> {
    let index = load_index(path, hand_len, distribution)
        .with_context(|| format!("failed to load dictionary {path}"))?;
    log::info!(
        "dictionary {path}: {} words, {} signatures",
        index.len(),
        index.bucket_count()
    );
    Ok(index)
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    if cli.debug {
        init_file_logger(DEFAULT_LOG_FILE, log::LevelFilter::Debug)
            .context("failed to open debug log")?;
    }

    let registry = Registry::builtin();
    let setup = GameSetup::from_cli(&cli)?;
    let chosen = cli
        .distribution
        .as_deref()
        .map(|name| registry.get(name))
        .transpose()?;

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play {
        points: false,
        timer: None,
    });

    let fallback = || chosen.map_or_else(|| registry.get(DEFAULT_DISTRIBUTION), Ok);

    match command {
        Commands::Play { points, timer } => run_play_command(
            &cli,
            &registry,
            &setup,
            chosen,
            points,
            timer.map(Duration::from_secs),
        ),
        Commands::Simple { points } => run_simple_command(&cli, &setup, fallback()?, points),
        Commands::Find { tiles, points } => run_find_command(&cli, fallback()?, &tiles, points),
        Commands::Benchmark { count } => run_benchmark_command(&cli, &setup, fallback()?, count),
    }
}

fn run_play_command(
    cli: &Cli,
    registry: &Registry,
    setup: &GameSetup,
    chosen: Option<&Distribution>,
    points: bool,
    timer: Option<Duration>,
) -> Result<()> {
    with_terminal(|terminal| {
        let distribution = match chosen {
            Some(distribution) => distribution,
            None => match run_picker(terminal, Picker::new(registry))? {
                Some(name) => registry.get(&name)?,
                None => return Ok(()),
            },
        };

        let index = setup.load(cli, distribution)?;
        let app = App::new(setup.session(distribution, &index, cli.seed), points, timer);
        run_app(terminal, app)
    })
}

fn run_simple_command(
    cli: &Cli,
    setup: &GameSetup,
    distribution: &Distribution,
    points: bool,
) -> Result<()> {
    let index = setup.load(cli, distribution)?;
    run_simple(setup.session(distribution, &index, cli.seed), points)
}

fn run_find_command(
    cli: &Cli,
    distribution: &Distribution,
    tiles: &str,
    points: bool,
) -> Result<()> {
    // Every length is kept, the tiles decide which bucket is read
    let index = load_dictionary(&dictionary_path(cli, distribution), 0, distribution)?;
    let result = find_words(tiles, distribution, &index)?;
    print_find_result(&result, points);
    Ok(())
}

fn run_benchmark_command(
    cli: &Cli,
    setup: &GameSetup,
    distribution: &Distribution,
    count: usize,
) -> Result<()> {
    let index = setup.load(cli, distribution)?;

    println!(
        "Running benchmark on {count} games ({} distribution, {} tiles per hand)...",
        distribution.name(),
        setup.config.word_length()
    );

    let config = BenchmarkConfig {
        seed: cli.seed,
        ..BenchmarkConfig::new(count)
    };
    let result = run_benchmark(
        distribution,
        &index,
        setup.config,
        &setup.predicates,
        &config,
    );
    print_benchmark_result(&result);
    Ok(())
}
