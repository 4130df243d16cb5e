//! Formatting utilities for terminal output

use crate::core::{Feedback, Letter, LetterFlag, QWERTY_ROWS, Word};
use crate::game::KeyStatusTracker;
use colored::{ColoredString, Colorize};

/// One board cell: the letter on a background matching its flag
#[must_use]
pub fn letter_tile(letter: Letter, flag: LetterFlag) -> ColoredString {
    let cell = format!(" {letter} ");
    match flag {
        LetterFlag::Correct => cell.black().on_green().bold(),
        LetterFlag::Present => cell.black().on_yellow().bold(),
        LetterFlag::Absent => cell.white().on_bright_black().bold(),
    }
}

/// A guess rendered as coloured tiles
#[must_use]
pub fn guess_tiles(word: &Word, feedback: Feedback) -> String {
    word.letters()
        .iter()
        .zip(feedback.flags())
        .map(|(&letter, &flag)| letter_tile(letter, flag).to_string())
        .collect()
}

/// QWERTY rows with every letter coloured by its tracked status
#[must_use]
pub fn keyboard_summary(keys: &KeyStatusTracker) -> Vec<String> {
    QWERTY_ROWS
        .iter()
        .map(|row| {
            row.chars()
                .filter_map(Letter::from_char)
                .map(|letter| {
                    let label = letter.to_string();
                    let styled = match keys.status_of(letter) {
                        Some(LetterFlag::Correct) => label.green().bold(),
                        Some(LetterFlag::Present) => label.yellow().bold(),
                        Some(LetterFlag::Absent) => label.bright_black(),
                        None => label.normal(),
                    };
                    styled.to_string()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return "░".repeat(width);
    }
    // Cast is safe: the ratio is clamped to [0, width]
    let filled = ((value as f64 / max as f64) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
