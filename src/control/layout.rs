//! Screen geometry in terminal cells
//!
//! One layout serves both drawing and pointer hit-testing, so a click always
//! lands on what the renderer drew under it.

use super::Screen;
use crate::core::{Letter, MAX_ROWS, QWERTY_ROWS, WORD_LENGTH};
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};

pub const TILE_WIDTH: u16 = 5;
pub const KEY_WIDTH: u16 = 5;
pub const WIDE_KEY_WIDTH: u16 = 7;
pub const BUTTON_WIDTH: u16 = 9;
const GAP: u16 = 1;
const BUTTON_GAP: u16 = 2;
const NOTICE_LINES: u16 = 3;

/// A clickable key on the on-screen keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    Letter(Letter),
    Enter,
    Delete,
}

impl KeypadKey {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(letter) => letter.as_char().to_string(),
            Self::Enter => "Enter".to_string(),
            Self::Delete => "Del".to_string(),
        }
    }

    const fn width(self) -> u16 {
        match self {
            Self::Letter(_) => KEY_WIDTH,
            Self::Enter | Self::Delete => WIDE_KEY_WIDTH,
        }
    }
}

/// Rectangles for every widget, computed for one viewport
#[derive(Debug, Clone, Default)]
pub struct ScreenLayout {
    area: Rect,
    title: Rect,
    splash: Rect,
    menu_buttons: Vec<(Screen, Rect)>,
    tiles: Vec<Rect>,
    keys: Vec<(KeypadKey, Rect)>,
    play_buttons: Vec<(Screen, Rect)>,
    notices: Rect,
    status: Rect,
}

/// `widths` packed left to right and centred in `area`
fn centered_row(area: Rect, widths: &[u16], gap: u16) -> Vec<Rect> {
    Layout::horizontal(widths.iter().map(|&width| Constraint::Length(width)))
        .spacing(gap)
        .flex(Flex::Center)
        .split(area)
        .to_vec()
}

/// One-line rows separated by a blank line
fn spaced_rows(area: Rect, count: usize) -> Vec<Rect> {
    Layout::vertical(vec![Constraint::Length(1); count])
        .spacing(1)
        .split(area)
        .to_vec()
}

const fn band_height(rows: usize) -> u16 {
    (2 * rows - 1) as u16
}

fn keypad_rows() -> Vec<Vec<KeypadKey>> {
    QWERTY_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut keys: Vec<KeypadKey> = row
                .chars()
                .filter_map(Letter::from_char)
                .map(KeypadKey::Letter)
                .collect();
            if i == QWERTY_ROWS.len() - 1 {
                keys.insert(0, KeypadKey::Enter);
                keys.push(KeypadKey::Delete);
            }
            keys
        })
        .collect()
}

fn buttons_row(screen: Screen, area: Rect) -> Vec<(Screen, Rect)> {
    let targets = screen.buttons();
    let widths = vec![BUTTON_WIDTH; targets.len()];
    targets
        .iter()
        .copied()
        .zip(centered_row(area, &widths, BUTTON_GAP))
        .collect()
}

impl ScreenLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let [title, _, board, _, keypad, _, buttons, _, notices, _, status] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(band_height(MAX_ROWS)),
                Constraint::Length(2),
                Constraint::Length(band_height(QWERTY_ROWS.len())),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(NOTICE_LINES),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .areas(area);

        // Menu: splash a third of the way down, Play button under it
        let [_, splash, _, _, menu, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(2),
        ])
        .areas(area);

        let tiles = spaced_rows(board, MAX_ROWS)
            .into_iter()
            .flat_map(|row| centered_row(row, &[TILE_WIDTH; WORD_LENGTH], GAP))
            .collect();

        let keys = keypad_rows()
            .into_iter()
            .zip(spaced_rows(keypad, QWERTY_ROWS.len()))
            .flat_map(|(row_keys, row)| {
                let widths: Vec<u16> = row_keys.iter().copied().map(KeypadKey::width).collect();
                row_keys.into_iter().zip(centered_row(row, &widths, GAP))
            })
            .collect();

        Self {
            area,
            title,
            splash,
            menu_buttons: buttons_row(Screen::Initial, menu),
            tiles,
            keys,
            play_buttons: buttons_row(Screen::Play, buttons),
            notices,
            status,
        }
    }

    #[must_use]
    pub const fn area(&self) -> Rect {
        self.area
    }

    #[must_use]
    pub const fn title(&self) -> Rect {
        self.title
    }

    #[must_use]
    pub const fn splash(&self) -> Rect {
        self.splash
    }

    #[must_use]
    pub const fn notices(&self) -> Rect {
        self.notices
    }

    #[must_use]
    pub const fn status(&self) -> Rect {
        self.status
    }

    /// Board cell at (`row`, `col`), both zero-based
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<Rect> {
        if col >= WORD_LENGTH {
            return None;
        }
        self.tiles.get(row * WORD_LENGTH + col).copied()
    }

    #[must_use]
    pub fn keys(&self) -> &[(KeypadKey, Rect)] {
        &self.keys
    }

    /// Buttons drawn on `screen`
    #[must_use]
    pub fn buttons(&self, screen: Screen) -> &[(Screen, Rect)] {
        match screen {
            Screen::Initial => &self.menu_buttons,
            Screen::Play | Screen::Start | Screen::New => &self.play_buttons,
            Screen::Quit => &[],
        }
    }

    /// Button under `pos` on `screen`, as the screen it requests
    #[must_use]
    pub fn button_at(&self, screen: Screen, pos: Position) -> Option<Screen> {
        self.buttons(screen)
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|&(target, _)| target)
    }

    #[must_use]
    pub fn key_at(&self, pos: Position) -> Option<KeypadKey> {
        self.keys
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|&(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 80, 32))
    }

    fn inside(rect: Rect) -> Position {
        Position::new(rect.x + 1, rect.y)
    }

    #[test]
    fn board_has_six_rows_of_five() {
        let layout = layout();
        assert!(layout.tile(MAX_ROWS - 1, WORD_LENGTH - 1).is_some());
        assert!(layout.tile(MAX_ROWS, 0).is_none());
        assert!(layout.tile(0, WORD_LENGTH).is_none());

        let first = layout.tile(0, 0).unwrap();
        let next_row = layout.tile(1, 0).unwrap();
        assert_eq!(first.x, next_row.x);
        assert!(next_row.y > first.y);
    }

    #[test]
    fn keypad_covers_alphabet_plus_enter_and_delete() {
        let layout = layout();
        assert_eq!(layout.keys().len(), 28);
        for letter in Letter::all() {
            assert!(
                layout
                    .keys()
                    .iter()
                    .any(|&(key, _)| key == KeypadKey::Letter(letter))
            );
        }
    }

    #[test]
    fn hit_testing_finds_keys_and_buttons() {
        let layout = layout();
        for &(key, rect) in layout.keys() {
            assert_eq!(layout.key_at(inside(rect)), Some(key));
        }
        for &(target, rect) in layout.buttons(Screen::Start) {
            assert_eq!(layout.button_at(Screen::Start, inside(rect)), Some(target));
        }
        let (play, rect) = layout.buttons(Screen::Initial)[0];
        assert_eq!(play, Screen::Play);
        assert_eq!(layout.button_at(Screen::Initial, inside(rect)), Some(Screen::Play));
    }

    #[test]
    fn empty_space_hits_nothing() {
        let layout = layout();
        let corner = Position::new(0, 0);
        assert_eq!(layout.key_at(corner), None);
        assert_eq!(layout.button_at(Screen::Start, corner), None);
        assert_eq!(layout.button_at(Screen::Quit, corner), None);
    }

    #[test]
    fn widgets_do_not_overlap_vertically() {
        let layout = layout();
        let board_bottom = layout.tile(MAX_ROWS - 1, 0).unwrap().bottom();
        let keypad_top = layout.keys().iter().map(|(_, r)| r.y).min().unwrap();
        let keypad_bottom = layout.keys().iter().map(|(_, r)| r.bottom()).max().unwrap();
        let buttons_top = layout.buttons(Screen::Play)[0].1.y;

        assert!(board_bottom <= keypad_top);
        assert!(keypad_bottom <= buttons_top);
        assert!(layout.notices().y > buttons_top);
    }

    #[test]
    fn rows_are_centred() {
        let layout = layout();
        let first = layout.tile(0, 0).unwrap();
        let last = layout.tile(0, WORD_LENGTH - 1).unwrap();
        let left = first.x;
        let right = 80 - last.right();
        assert!(left.abs_diff(right) <= 1);
        assert_eq!(layout.tile(0, 1).unwrap().x, first.right() + GAP);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 3, 2));
        assert!(layout.tile(0, 0).is_some());
        assert_eq!(layout.key_at(Position::new(200, 200)), None);
    }
}
