//! Formatting utilities for terminal output

use crate::core::Tile;
use std::time::Duration;

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Point value as subscript characters
///
/// Ten is written `ₓ` so that every common tile stays two columns wide.
#[must_use]
pub fn subscript_points(points: u32) -> String {
    if points == 10 {
        return "ₓ".to_string();
    }
    points
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| SUBSCRIPT_DIGITS[d as usize])
        .collect()
}

/// A tile as shown to the player, optionally with its points
#[must_use]
pub fn tile_label(tile: &Tile, show_points: bool) -> String {
    if show_points && !tile.is_wildcard() {
        format!("{}{}", tile.letter(), subscript_points(tile.points()))
    } else {
        tile.letter().to_string()
    }
}

/// Tiles joined with spaces
#[must_use]
pub fn hand_label(tiles: &[Tile], show_points: bool) -> String {
    tiles
        .iter()
        .map(|t| tile_label(t, show_points))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lay words out in lines of at most `width` columns
///
/// A word longer than `width` gets a line of its own.
#[must_use]
pub fn wrap_words(words: &[String], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in words {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

/// `m:ss` countdown format
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Kind;

    #[test]
    fn subscripts() {
        assert_eq!(subscript_points(0), "₀");
        assert_eq!(subscript_points(1), "₁");
        assert_eq!(subscript_points(8), "₈");
        assert_eq!(subscript_points(10), "ₓ");
        assert_eq!(subscript_points(12), "₁₂");
    }

    #[test]
    fn tile_labels() {
        let k = Tile::new("K", 10, Kind::Consonant, false);
        let blank = Tile::new("?", 0, Kind::Consonant, true);
        let ch = Tile::new("CH", 5, Kind::Consonant, false);

        assert_eq!(tile_label(&k, true), "Kₓ");
        assert_eq!(tile_label(&k, false), "K");
        assert_eq!(tile_label(&blank, true), "?");
        assert_eq!(hand_label(&[ch, k, blank], true), "CH₅ Kₓ ?");
    }

    #[test]
    fn wrapping() {
        let words: Vec<String> = ["patates", "tapotes", "pattes", "tapette"]
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(wrap_words(&words, 15), ["patates tapotes", "pattes tapette"]);
        assert_eq!(wrap_words(&words, 3).len(), 4);
        assert!(wrap_words(&[], 10).is_empty());
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_secs(0)), "0:00");
        assert_eq!(format_duration(Duration::from_secs(65)), "1:05");
        assert_eq!(format_duration(Duration::from_millis(179_900)), "2:59");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
