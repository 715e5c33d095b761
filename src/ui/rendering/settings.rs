//! Pre-game settings with validation status.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    predictor::Level,
    session::GameKind,
    ui::{app::App, types::InputStatus},
};

impl App {
    pub(in crate::ui) fn draw_settings(&self, f: &mut Frame, area: Rect) {
        let kind = self.pending_game.unwrap_or(GameKind::Classic);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(4)])
            .split(area);

        let (border_color, subtitle) = match self.best_of_status() {
            InputStatus::Incomplete => (Color::Gray, ""),
            InputStatus::Valid => (Color::Green, ""),
            InputStatus::Invalid(msg) => (Color::Red, msg),
        };

        f.render_widget(
            Paragraph::new(format!("{}▌", self.best_of_input)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color))
                    .title(format!("Number of rounds (odd) {}", subtitle)),
            ),
            chunks[0],
        );

        let mut lines = vec![Line::from("")];
        if kind == GameKind::Coin {
            lines.push(Line::from("  The coin cannot be predicted: no level to choose."));
        } else {
            let spans: Vec<Span> = Level::ALL
                .iter()
                .map(|level| {
                    let label = format!(" {} ({}) ", level, level.number());
                    if *level == self.level {
                        Span::styled(
                            label,
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Cyan)
                                .add_modifier(Modifier::BOLD),
                        )
                    } else {
                        Span::raw(label)
                    }
                })
                .collect();
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
            lines.push(Line::from("  ←/→: change level"));
        }

        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("{} | Computer level", kind.title())),
            ),
            chunks[1],
        );
    }
}
