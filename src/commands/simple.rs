//! Simple line-based game mode
//!
//! Plays through the same controller as the TUI: every guess is typed as
//! letter events followed by a submit, so rules and screens behave the same.

use crate::control::{Controller, Screen};
use crate::core::{MAX_ROWS, Word};
use crate::events::InputEvent;
use crate::game::WordSource;
use crate::output::{print_board, print_round_result, print_statistics};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// What the player asked for between guesses
enum LineCommand {
    Quit,
    NewGame,
    Guess(Word),
    Invalid(String),
}

fn parse_line(line: &str) -> LineCommand {
    match line.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => LineCommand::Quit,
        "new" | "n" => LineCommand::NewGame,
        _ => match Word::new(line) {
            Ok(word) => LineCommand::Guess(word),
            Err(err) => LineCommand::Invalid(err.to_string()),
        },
    }
}

/// Run the simple mode on stdin
///
/// # Errors
///
/// Returns an error on I/O failure or when no unused word can be drawn.
pub fn run_simple<S: WordSource>(controller: &mut Controller<S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in {MAX_ROWS} tries.");
    println!("Commands: 'new' for a new word, 'quit' to exit\n");

    play_lines(controller, io::stdin().lock())
}

/// Drive a game from `input`, one guess or command per line
///
/// End of input quits the game.
///
/// # Errors
///
/// Returns an error on I/O failure or when no unused word can be drawn.
pub fn play_lines<S: WordSource, R: BufRead>(
    controller: &mut Controller<S>,
    mut input: R,
) -> Result<()> {
    if controller.screen().is_none() {
        controller.boot()?;
    }
    controller.request(Screen::Play)?;
    controller.request(Screen::Start)?;

    while controller.is_running() {
        let turn = controller.world().session().rows().len() + 1;
        let Some(line) = read_line(&mut input, &format!("Guess {turn}/{MAX_ROWS}"))? else {
            controller.dispatch(InputEvent::ProcessQuit)?;
            break;
        };

        match parse_line(&line) {
            LineCommand::Quit => {
                controller.dispatch(InputEvent::QuitKey)?;
            }
            LineCommand::NewGame => {
                controller.request(Screen::New)?;
                controller.request(Screen::Start)?;
                println!("\n🔄 New word drawn!\n");
            }
            LineCommand::Invalid(reason) => {
                println!("❌ {reason}\n");
            }
            LineCommand::Guess(word) => {
                let events = InputEvent::letters(word.text()).chain([InputEvent::SubmitKey]);
                controller.tick(events)?;
                finish_guess(controller, &mut input)?;
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Show the board and, if the round ended, the result and a replay prompt
fn finish_guess<S: WordSource, R: BufRead>(
    controller: &mut Controller<S>,
    input: &mut R,
) -> Result<()> {
    let Some(snapshot) = controller.snapshot() else {
        return Ok(());
    };
    print_board(snapshot.rows, snapshot.keys);

    let Some(target) = snapshot.revealed_target else {
        return Ok(());
    };
    print_round_result(snapshot.status, snapshot.rows, target);
    print_statistics(controller.world().stats());

    let again = read_line(input, "Play again? (yes/no)")?;
    if matches!(again.as_deref().map(str::trim), Some("yes" | "y")) {
        controller.request(Screen::New)?;
        controller.request(Screen::Start)?;
        println!("\n🔄 New word drawn!\n");
    } else {
        controller.dispatch(InputEvent::QuitKey)?;
    }
    Ok(())
}

/// Prompt and read one line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameSession, KeyPolicy, WordHistory, WordList};
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn controller(words: &[&str]) -> Controller<WordList> {
        let session = GameSession::new(
            WordList::seeded(words_from_slice(words), 11),
            WordHistory::new(),
            KeyPolicy::default(),
        );
        Controller::new(session, true)
    }

    #[test]
    fn winning_line_game_records_statistics() {
        let mut c = controller(&["crane"]);
        play_lines(&mut c, Cursor::new("slate\ncrane\nno\n")).unwrap();

        assert!(!c.is_running());
        assert_eq!(c.world().stats().games_won, 1);
        assert_eq!(c.world().stats().guess_distribution[2], 1);
    }

    #[test]
    fn invalid_lines_are_not_submitted() {
        let mut c = controller(&["crane"]);
        play_lines(&mut c, Cursor::new("cran\nc4ane\n")).unwrap();

        assert!(c.world().session().rows().is_empty());
        assert_eq!(c.world().stats().total_games, 0);
    }

    #[test]
    fn replay_recycles_a_single_word_pool() {
        let mut c = controller(&["crane"]);
        play_lines(&mut c, Cursor::new("crane\nyes\ncrane\nno\n")).unwrap();

        assert_eq!(c.world().stats().games_won, 2);
        assert_eq!(c.world().stats().current_streak, 2);
        assert_eq!(c.world().session().history().len(), 1);
    }

    #[test]
    fn quit_command_ends_loop() {
        let mut c = controller(&["crane"]);
        play_lines(&mut c, Cursor::new("quit\ncrane\n")).unwrap();
        assert!(c.world().session().rows().is_empty());
        assert!(!c.is_running());
    }
}
