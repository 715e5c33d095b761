//! Main menu navigation and the pre-game settings step.

use crate::{predictor::Level, session::GameKind, tracker::BestOf};

use super::super::{
    app::App,
    types::{InputStatus, MenuItem, Screen},
};
use super::GameHandler;

/// Helper struct for menu and settings state.
pub struct MenuHandler<'a> {
    app: &'a mut App,
}

impl<'a> MenuHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = MenuItem::ALL.len() as isize;
        let next = (self.app.menu_index as isize + delta).rem_euclid(len);
        self.app.menu_index = next as usize;
    }

    /// Activates the highlighted entry. Returns true when the user chose to exit.
    pub fn activate(&mut self) -> bool {
        match MenuItem::ALL[self.app.menu_index] {
            MenuItem::Play(kind) => self.open_settings(kind),
            MenuItem::Stats => {
                self.app.stats_tab = GameKind::Classic;
                self.app.screen = Screen::Stats;
            }
            MenuItem::Help => self.app.screen = Screen::Help,
            MenuItem::Exit => {
                self.app.log("Exit requested");
                return true;
            }
        }
        false
    }

    pub fn open_settings(&mut self, kind: GameKind) {
        self.app.pending_game = Some(kind);
        self.app.best_of_input = self.app.best_of.get().to_string();
        self.app.screen = Screen::Settings;
    }

    pub fn cancel_settings(&mut self) {
        self.app.pending_game = None;
        self.app.screen = Screen::Menu;
    }

    pub fn cycle_level(&mut self, forward: bool) {
        let idx = self.app.level.number() as usize;
        let len = Level::ALL.len();
        let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
        self.app.level = Level::ALL[next];
    }

    pub fn confirm_settings(&mut self) {
        let Some(kind) = self.app.pending_game else {
            return;
        };

        match self.app.best_of_input.trim().parse::<u32>() {
            Ok(n) => match BestOf::new(n) {
                Ok(best_of) => {
                    self.app.best_of = best_of;
                    self.app.pending_game = None;
                    GameHandler::new(self.app).start_match(kind);
                }
                Err(e) => self.app.log(format!("Input rejected: {}", e)),
            },
            Err(_) => self.app.log(format!(
                "Input rejected: {:?} is not a number",
                self.app.best_of_input
            )),
        }
    }
}

impl App {
    pub(in crate::ui) fn best_of_status(&self) -> InputStatus {
        let input = self.best_of_input.trim();
        if input.is_empty() {
            return InputStatus::Incomplete;
        }

        match input.parse::<u32>() {
            Ok(n) if BestOf::new(n).is_ok() => InputStatus::Valid,
            Ok(_) => InputStatus::Invalid("must be odd and positive"),
            Err(_) => InputStatus::Invalid("not a number"),
        }
    }
}
