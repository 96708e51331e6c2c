//! Simple interactive CLI mode
//!
//! Line-oriented game loop without TUI

use crate::game::{GameSession, Phase};
use crate::output::formatters::wrap_words;
use crate::output::{print_game_summary, print_hand};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut session: GameSession, show_points: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Scrabbler - Interactive Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Tiles from the {} distribution, {} per hand.",
        session.distribution().name(),
        session.config().word_length()
    );
    println!("When a hand is dealt:\n");
    println!("  - Press Enter or 'y' to keep it and find a word");
    println!("  - 'n' to throw every tile back and draw again");
    println!("  - 'r' to draw again, keeping tiles carried from the last word");
    println!("  - 'q' to quit\n");
    println!(
        "Type the wildcard as '{}'. Carried tiles are shown in {}.\n",
        session.distribution().wildcard(),
        "cyan".bright_cyan()
    );

    session.deal();

    while !session.is_finished() {
        match session.phase() {
            Phase::Drawing => {
                show_hand(&session, show_points);

                match get_user_input("Keep this hand? (y/n/r/q)")?
                    .to_lowercase()
                    .as_str()
                {
                    "" | "y" | "yes" => {
                        if session.hand().is_empty() {
                            println!("Nothing left to play.\n");
                            break;
                        }
                        session.accept_draw();
                    }
                    "n" | "no" => session.reject_draw(),
                    "r" | "redraw" => session.redraw(),
                    "q" | "quit" | "exit" | ":quit" => break,
                    _ => println!("❌ Unknown command\n"),
                }
            }
            Phase::Playing => {
                let input = get_user_input("Your word (':hint', ':back', ':quit')")?;

                match input.to_lowercase().as_str() {
                    ":quit" | ":q" => break,
                    ":back" | ":b" => {
                        session.reject_draw();
                    }
                    ":hint" | ":h" => show_matches(session.matches()),
                    _ => match session.play_word(&input, false) {
                        Ok(()) => {
                            println!(
                                "{}\n",
                                format!("✅ {} played!", input.to_uppercase()).green().bold()
                            );
                            session.deal();
                        }
                        Err(e) => println!("❌ {e}\n"),
                    },
                }
            }
        }
    }

    print_game_summary(&session.snapshot());
    Ok(())
}

fn show_hand(session: &GameSession, show_points: bool) {
    println!("────────────────────────────────────────────────────────────");
    println!(
        "Word {}, draw {}: {} tiles left in the pool",
        session.play_count() + 1,
        session.draw_count(),
        session.pool().len()
    );
    println!("────────────────────────────────────────────────────────────");
    print_hand(&session.hand().tiles(), show_points);

    let matches = session.matches().len();
    if matches == 0 {
        println!("\n   {}\n", "No word uses every tile.".bright_black());
    } else {
        println!(
            "\n   {} {}\n",
            matches.to_string().bright_yellow().bold(),
            if matches == 1 { "word to find" } else { "words to find" }
        );
    }
}

fn show_matches(matches: &[String]) {
    if matches.is_empty() {
        println!("No word uses every tile of this hand.\n");
        return;
    }
    for line in wrap_words(matches, 56) {
        println!("  • {}", line.to_uppercase());
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF behaves like quitting
        return Ok(":quit".to_string());
    }

    Ok(input.trim().to_string())
}
