use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    tracker::Side,
    ui::{app::App, types::Screen},
};

impl App {
    pub(in crate::ui) fn draw_header(&self, f: &mut Frame, area: Rect) {
        let text = match (self.screen, self.session.as_ref()) {
            (Screen::Playing, Some(session)) => format!(
                "{} | {} | Esc: Menu | Ctrl+Q: Quit",
                session.kind().title(),
                session.state().best_of()
            ),
            (Screen::Settings, _) => "Game Settings | Enter: Start | Esc: Back".to_string(),
            (Screen::Stats, _) => "Statistics | Tab: Next Game | Esc: Back".to_string(),
            (Screen::Help, _) => "Help | Esc: Back".to_string(),
            _ => "Smart Game Collection | ↑/↓: Select | Enter: Open | Ctrl+Q: Quit".to_string(),
        };

        f.render_widget(
            Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Mode")),
            area,
        );
    }

    pub(in crate::ui) fn draw_scoreboard(&self, f: &mut Frame, area: Rect) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let state = session.state();

        let (status_text, color) = match state.winner() {
            Some(Side::Player) => (
                "🏆 You are the champion! Enter: rematch | Esc: menu".to_string(),
                Color::Green,
            ),
            Some(Side::Computer) => (
                "😞 Computer is the champion! Enter: rematch | Esc: menu".to_string(),
                Color::Red,
            ),
            None => (
                format!(
                    "Round {} | First to {} wins",
                    state.round() + 1,
                    state.best_of().rounds_to_win()
                ),
                Color::White,
            ),
        };

        let lines = vec![
            Line::from(vec![
                Span::raw("  You: "),
                Span::styled(
                    state.player_wins().to_string(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  |  Computer: "),
                Span::styled(
                    state.computer_wins().to_string(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  |  Ties: "),
                Span::styled(
                    state.draws().to_string(),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(status_text, Style::default().fg(color))),
        ];

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Score")),
            area,
        );
    }
}
