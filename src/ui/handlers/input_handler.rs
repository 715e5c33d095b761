//! Keyboard routing per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::GameKind;

use super::super::{app::App, types::Screen};
use super::{GameHandler, MenuHandler};

/// Helper struct for managing keyboard input and user interactions.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Handles one key press. Returns true when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.app.log("Exit requested");
            return true;
        }

        match self.app.screen {
            Screen::Menu => return self.handle_menu_key(key),
            Screen::Settings => self.handle_settings_key(key),
            Screen::Playing => self.handle_playing_key(key),
            Screen::Stats => self.handle_stats_key(key),
            Screen::Help => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    self.app.screen = Screen::Menu;
                }
            }
        }
        false
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => MenuHandler::new(self.app).move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => MenuHandler::new(self.app).move_selection(1),
            KeyCode::Enter => return MenuHandler::new(self.app).activate(),
            KeyCode::Esc => {
                self.app.log("Exit requested");
                return true;
            }
            _ => {}
        }
        false
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => MenuHandler::new(self.app).cancel_settings(),
            KeyCode::Enter => MenuHandler::new(self.app).confirm_settings(),
            KeyCode::Left => MenuHandler::new(self.app).cycle_level(false),
            KeyCode::Right | KeyCode::Tab => MenuHandler::new(self.app).cycle_level(true),
            KeyCode::Backspace => {
                self.app.best_of_input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => self.app.best_of_input.push(c),
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        let over = self.app.session.as_ref().is_some_and(|s| s.is_over());

        match key.code {
            KeyCode::Esc => GameHandler::new(self.app).abandon_match(),
            KeyCode::Enter if over => GameHandler::new(self.app).rematch(),
            KeyCode::Char(c) if !over => GameHandler::new(self.app).play_key(c),
            _ => {}
        }
    }

    fn handle_stats_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.app.screen = Screen::Menu,
            KeyCode::Tab | KeyCode::Right => self.app.stats_tab = next_kind(self.app.stats_tab, 1),
            KeyCode::BackTab | KeyCode::Left => {
                self.app.stats_tab = next_kind(self.app.stats_tab, GameKind::ALL.len() - 1)
            }
            _ => {}
        }
    }
}

fn next_kind(kind: GameKind, step: usize) -> GameKind {
    let idx = GameKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
    GameKind::ALL[(idx + step) % GameKind::ALL.len()]
}
