//! Round history rendering with colored outcomes.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{rules::Outcome, ui::app::App};

impl App {
    pub(in crate::ui) fn draw_rounds(&self, f: &mut Frame, area: Rect) {
        let rounds = self.session.as_ref().map(|s| s.rounds()).unwrap_or(&[]);

        // Newest at the bottom, trimmed to what fits.
        let height = area.height.saturating_sub(2) as usize;
        let start = rounds.len().saturating_sub(height);

        let lines: Vec<Line> = rounds[start..]
            .iter()
            .map(|r| {
                let (label, style) = match r.outcome {
                    Outcome::Win => ("🎉 You win", Style::default().fg(Color::Green)),
                    Outcome::Loss => ("💻 Computer wins", Style::default().fg(Color::Red)),
                    Outcome::Draw => ("It's a tie", Style::default().fg(Color::Yellow)),
                };
                Line::from(vec![
                    Span::raw(format!(
                        "Round {:>2}: You {:<8} Computer {:<8} ",
                        r.round,
                        r.player.to_string(),
                        r.computer.to_string()
                    )),
                    Span::styled(label, style),
                ])
            })
            .collect();

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Rounds")),
            area,
        );
    }
}
