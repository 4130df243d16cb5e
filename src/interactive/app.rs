//! TUI event loop and terminal input translation

use crate::control::Controller;
use crate::core::Letter;
use crate::events::InputEvent;
use crate::game::WordSource;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Position, Rect},
};
use std::io;
use std::time::Duration;

/// Map a terminal event to game input; unmapped events yield `None`
#[must_use]
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        // Only key presses (fixes Windows double-input)
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::ProcessQuit)
            }
            KeyCode::Char(c) => Letter::from_char(c).map(InputEvent::LetterKey),
            KeyCode::Enter => Some(InputEvent::SubmitKey),
            KeyCode::Backspace => Some(InputEvent::BackspaceKey),
            KeyCode::Esc => Some(InputEvent::QuitKey),
            _ => None,
        },
        Event::Mouse(mouse) => {
            let pos = Position::new(mouse.column, mouse.row);
            match mouse.kind {
                MouseEventKind::Moved => Some(InputEvent::PointerMove(pos)),
                MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::PointerUp(pos)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, on an I/O error during
/// rendering or event handling, or when the game cannot draw a word.
pub fn run_tui<S: WordSource>(controller: Controller<S>, tick: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, controller, tick);

    // Restore terminal even when the game failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend, S: WordSource>(
    terminal: &mut Terminal<B>,
    mut controller: Controller<S>,
    tick: Duration,
) -> Result<()> {
    let size = terminal.size()?;
    controller.resize(Rect::new(0, 0, size.width, size.height));
    controller.boot()?;

    while controller.is_running() {
        terminal.draw(|f| super::rendering::ui(f, &controller))?;

        let mut batch = Vec::new();
        for raw in gather_events(tick)? {
            if let Event::Resize(width, height) = raw {
                controller.resize(Rect::new(0, 0, width, height));
            } else if let Some(input) = translate(&raw) {
                batch.push(input);
            }
        }
        controller.tick(batch)?;
    }

    Ok(())
}

/// Wait up to `tick` for input, then drain whatever else is queued
fn gather_events(tick: Duration) -> io::Result<Vec<Event>> {
    let mut events = Vec::new();
    if event::poll(tick)? {
        events.push(event::read()?);
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
    }
    Ok(events)
}
