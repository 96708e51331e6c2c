//! Display functions for command results

use super::formatters::{create_progress_bar, tile_label, wrap_words};
use crate::commands::{BenchmarkResult, FindResult};
use crate::core::Tile;
use crate::game::SessionSnapshot;
use colored::Colorize;

/// Print a hand; carried-forward tiles are highlighted
pub fn print_hand(tiles: &[Tile], show_points: bool) {
    let labels: Vec<String> = tiles
        .iter()
        .map(|t| {
            let label = tile_label(t, show_points);
            if t.is_carried() {
                label.bright_cyan().bold().to_string()
            } else if t.is_wildcard() {
                label.bright_magenta().bold().to_string()
            } else {
                label.bright_white().bold().to_string()
            }
        })
        .collect();
    println!("   {}", labels.join("  "));
}

/// Print the result of a one-shot lookup
pub fn print_find_result(result: &FindResult, show_points: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    print!("Tiles:");
    print_hand(&result.tiles, show_points);
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No word uses exactly these tiles.".red().bold());
    } else {
        println!(
            "\n{} {}",
            result.words.len().to_string().bright_yellow().bold(),
            if result.words.len() == 1 { "word:" } else { "words:" }
        );
        for line in wrap_words(&result.words, 56) {
            println!("   {}", line.to_uppercase().green());
        }
    }

    if result.wildcards() > 0 {
        println!(
            "\n   {} wildcard(s), {:.1}ms",
            result.wildcards(),
            result.duration.as_secs_f64() * 1000.0
        );
    }
}

/// Print the end-of-game summary
pub fn print_game_summary(snapshot: &SessionSnapshot) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if snapshot.finished {
        println!("{}", "    G A M E   F I N I S H E D    ".bright_green().bold());
    } else {
        println!("{}", "    G A M E   O V E R    ".bright_yellow().bold());
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n   Words played:   {}",
        snapshot.play_count.to_string().bright_cyan().bold()
    );
    println!("   Tiles played:   {}", snapshot.played_tiles);
    println!("   Tiles in pool:  {}", snapshot.pool_len);
    println!("   Tiles in hand:  {}\n", snapshot.hand_len);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Finished games:   {}",
        format!("{}", result.finished_games).green()
    );
    println!("   Words played:     {}", result.words_played);
    println!("   Tiles per game:   {:.1}", result.tiles_per_game);

    println!("\n📈 {}", "Hands:".bright_cyan().bold());
    println!("   Hands dealt:      {}", result.hands);
    println!(
        "   With a match:     {} {}",
        create_progress_bar(result.match_rate, 1.0, 30).green(),
        format!("{:.1}%", result.match_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Matches per hand: {}",
        format!("{:.2}", result.average_matches).bright_yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Hands/second:     {:.1}", result.hands_per_second);
}
