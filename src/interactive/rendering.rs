//! TUI rendering with ratatui
//!
//! Reads controller state only; every rectangle comes from the shared
//! [`ScreenLayout`] so drawing and hit-testing agree.

use crate::control::{Controller, KeypadKey, MessageStyle, Screen, ScreenLayout};
use crate::core::{LetterFlag, MAX_ROWS, WORD_LENGTH};
use crate::game::{Snapshot, Status, WordSource};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, controller: &Controller<S>) {
    f.render_widget(Clear, f.area());
    let Some(screen) = controller.screen() else {
        return;
    };
    let layout = controller.world().layout();

    if screen == Screen::Initial {
        render_menu(f, layout);
    } else if screen.shows_board() {
        render_title(f, layout.title());
        render_board(f, controller.snapshot(), layout);
        render_keypad(f, controller, layout);
        render_notices(f, controller, layout.notices());
        render_status(f, controller, screen, layout.status());
    }
    render_buttons(f, controller, screen, layout);
}

/// Part of `rect` inside the frame, `None` when nothing is visible
fn visible(f: &Frame, rect: Rect) -> Option<Rect> {
    let clipped = rect.intersection(f.area());
    (!clipped.is_empty()).then_some(clipped)
}

fn render_menu(f: &mut Frame, layout: &ScreenLayout) {
    if let Some(area) = visible(f, layout.splash()) {
        let title = Paragraph::new("W O R D L E")
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, area);
    }

    let hint = Rect {
        y: layout.splash().y.saturating_add(1),
        ..layout.splash()
    };
    if let Some(area) = visible(f, hint) {
        let text = Paragraph::new("Guess the hidden five-letter word in six tries")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(text, area);
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    if let Some(area) = visible(f, area) {
        let header = Paragraph::new("WORDLE")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }
}

fn flag_style(flag: LetterFlag) -> Style {
    let (fg, bg) = match flag {
        LetterFlag::Correct => (Color::Black, Color::Green),
        LetterFlag::Present => (Color::Black, Color::Yellow),
        LetterFlag::Absent => (Color::White, Color::DarkGray),
    };
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, snapshot: Option<Snapshot<'_>>, layout: &ScreenLayout) {
    let typing_style = Style::new()
        .fg(Color::White)
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD);
    let empty_style = Style::new().fg(Color::DarkGray);

    for row in 0..MAX_ROWS {
        for col in 0..WORD_LENGTH {
            let Some(area) = layout.tile(row, col).and_then(|rect| visible(f, rect)) else {
                continue;
            };

            let (text, style) = match snapshot {
                Some(snap) if row < snap.rows.len() => {
                    let guess = &snap.rows[row];
                    (
                        guess.letters()[col].to_string(),
                        flag_style(guess.flags()[col]),
                    )
                }
                Some(snap) if row == snap.rows.len() && snap.status == Status::InProgress => {
                    match snap.in_progress.get(col) {
                        Some(letter) => (letter.to_string(), typing_style),
                        None => ("_".to_string(), empty_style),
                    }
                }
                _ => ("·".to_string(), empty_style),
            };

            let tile = Paragraph::new(text)
                .style(style)
                .alignment(Alignment::Center);
            f.render_widget(tile, area);
        }
    }
}

fn render_keypad<S: WordSource>(f: &mut Frame, controller: &Controller<S>, layout: &ScreenLayout) {
    let keys = controller.snapshot().map(|snap| snap.keys);
    let hovered = controller.world().hovered_key();

    for &(key, rect) in layout.keys() {
        let Some(area) = visible(f, rect) else {
            continue;
        };

        let mut style = match (key, keys) {
            (KeypadKey::Letter(letter), Some(keys)) => keys
                .status_of(letter)
                .map_or_else(|| Style::new().fg(Color::Black).bg(Color::Gray), flag_style),
            _ => Style::new().fg(Color::Black).bg(Color::Gray),
        };
        if hovered == Some(key) {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let label = Paragraph::new(key.label())
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(label, area);
    }
}

fn render_buttons<S: WordSource>(
    f: &mut Frame,
    controller: &Controller<S>,
    screen: Screen,
    layout: &ScreenLayout,
) {
    let hovered = controller.world().hovered_button();

    for &(target, rect) in layout.buttons(screen) {
        let Some(area) = visible(f, rect) else {
            continue;
        };

        let style = if hovered == Some(target) {
            Style::new().fg(Color::Black).bg(Color::Cyan)
        } else if screen.allows(target) {
            Style::new().fg(Color::White).bg(Color::Blue)
        } else {
            Style::new().fg(Color::DarkGray).bg(Color::Black)
        };

        let button = Paragraph::new(target.name())
            .style(style.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(button, area);
    }
}

fn render_notices<S: WordSource>(f: &mut Frame, controller: &Controller<S>, area: Rect) {
    let Some(area) = visible(f, area) else {
        return;
    };

    let messages: Vec<_> = controller.world().messages().collect();
    let shown = usize::from(area.height);
    let lines: Vec<Line> = messages
        .iter()
        .skip(messages.len().saturating_sub(shown))
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            Line::from(Span::styled(msg.text.clone(), style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_status<S: WordSource>(
    f: &mut Frame,
    controller: &Controller<S>,
    screen: Screen,
    area: Rect,
) {
    let Some(area) = visible(f, area) else {
        return;
    };

    let stats = controller.world().stats();
    let help = if screen == Screen::Start {
        "Type letters | Enter: Submit | Esc: Quit"
    } else {
        "Enter: Start | Esc: Quit"
    };
    let text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {} (max {}) | {help}",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameSession, KeyPolicy, WordHistory, WordList};
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn controller() -> Controller<WordList> {
        let session = GameSession::new(
            WordList::seeded(words_from_slice(&["crane"]), 1),
            WordHistory::new(),
            KeyPolicy::default(),
        );
        let mut controller = Controller::new(session, true);
        controller.resize(Rect::new(0, 0, 80, 32));
        controller.boot().unwrap();
        controller
    }

    fn draw(controller: &Controller<WordList>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, controller)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn menu_shows_title_and_play_button() {
        let screen = draw(&controller(), 80, 32);
        assert!(screen.contains("W O R D L E"));
        assert!(screen.contains("Play"));
    }

    #[test]
    fn play_screen_shows_keypad_and_buttons() {
        let mut c = controller();
        c.request(Screen::Play).unwrap();
        let screen = draw(&c, 80, 32);
        assert!(screen.contains("Enter"));
        assert!(screen.contains("Del"));
        assert!(screen.contains("Start"));
        assert!(screen.contains("Quit"));
    }

    #[test]
    fn typed_letters_appear_on_board() {
        let mut c = controller();
        c.request(Screen::Play).unwrap();
        c.request(Screen::Start).unwrap();
        c.tick(crate::events::InputEvent::letters("zq")).unwrap();

        let screen = draw(&c, 80, 32);
        let first_row = c.world().layout().tile(0, 0).unwrap();
        let row_text: String = screen
            .chars()
            .skip(usize::from(first_row.y) * 80)
            .take(80)
            .collect();
        assert!(row_text.contains('Z'));
        assert!(row_text.contains('Q'));
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let mut c = controller();
        c.request(Screen::Play).unwrap();
        c.request(Screen::Start).unwrap();
        draw(&c, 10, 4);
    }
}
