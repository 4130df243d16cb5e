//! Printing for the line-based commands

use super::formatters::{create_progress_bar, guess_tiles, keyboard_summary};
use crate::core::{Feedback, MAX_ROWS, Word};
use crate::game::{GuessRow, KeyStatusTracker, Statistics, Status};
use colored::Colorize;

/// Print a single evaluation for the `score` command
pub fn print_score(guess: &Word, target: &Word, feedback: Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().bright_white().bold(),
        target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", guess_tiles(guess, feedback));
    println!("  {}  {}\n", feedback.to_emoji(), feedback);
}

/// Print the board so far with a coloured keyboard underneath
pub fn print_board(rows: &[GuessRow], keys: &KeyStatusTracker) {
    println!();
    for (i, row) in rows.iter().enumerate() {
        println!(
            "  {} {}",
            format!("{}.", i + 1).bright_black(),
            guess_tiles(row.word(), row.feedback())
        );
    }
    for _ in rows.len()..MAX_ROWS {
        println!("  {}", "·".bright_black());
    }
    println!();
    for line in keyboard_summary(keys) {
        println!("    {line}");
    }
    println!();
}

/// Print the end-of-round banner
pub fn print_round_result(status: Status, rows: &[GuessRow], target: &Word) {
    println!("{}", "═".repeat(50).bright_cyan());
    match status {
        Status::Won => {
            let turn = rows.len();
            println!(
                "  {} Solved in {} {}",
                "✅".green(),
                turn.to_string().bright_cyan().bold(),
                if turn == 1 { "guess" } else { "guesses" }
            );
        }
        Status::Lost => {
            println!(
                "  {} The word was {}",
                "❌".red(),
                target.text().bright_yellow().bold()
            );
        }
        Status::InProgress => {}
    }
    println!("  Guess history:");
    for (i, row) in rows.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            row.word().text().bright_white().bold(),
            row.feedback().to_emoji()
        );
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print session statistics with the guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:          {}", stats.total_games);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count, most, 30);
        println!("   {guesses}: {} {count:3}", bar.green());
    }
    println!();
}
