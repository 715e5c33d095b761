mod controls;
mod help;
mod logs;
mod menu;
mod rounds;
mod settings;
mod stats_view;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title / status
                Constraint::Min(10),   // Screen content
                Constraint::Length(6), // Small log panel
            ])
            .split(f.area());

        self.draw_header(f, layout[0]);

        match self.screen {
            Screen::Menu => self.draw_menu(f, layout[1]),
            Screen::Settings => self.draw_settings(f, layout[1]),
            Screen::Playing => {
                let body = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .split(layout[1]);
                let left = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(5), Constraint::Min(5)])
                    .split(body[0]);

                self.draw_scoreboard(f, left[0]);
                self.draw_rounds(f, left[1]);
                self.draw_controls(f, body[1]);
            }
            Screen::Stats => self.draw_stats_view(f, layout[1]),
            Screen::Help => self.draw_help(f, layout[1]),
        }

        self.draw_logs(f, layout[2]);
    }
}
