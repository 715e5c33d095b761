//! Move buttons and the last round's result.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    coin::CoinSide,
    rules::Outcome,
    session::Choice,
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn draw_controls(&self, f: &mut Frame, area: Rect) {
        let Some(session) = self.session.as_ref() else {
            return;
        };

        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from("")];
        match session.kind().variant() {
            Some(variant) => {
                for mv in variant.moves() {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  [{}] ", mv.code()), key_style),
                        Span::raw(mv.name()),
                    ]));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(format!("  Computer level: {}", session.level())));
                lines.push(Line::from(format!("  Moves seen: {}", session.history().len())));
            }
            None => {
                for side in [CoinSide::Heads, CoinSide::Tails] {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  [{}] ", side.code()), key_style),
                        Span::raw(side.to_string()),
                    ]));
                }
            }
        }

        if let Some(limit) = self.round_limit {
            lines.push(Line::from(format!("  Time limit: {}s per round", limit.as_secs())));
        }

        if let Some(report) = &self.last_report {
            let (text, color) = match report.outcome {
                Outcome::Win => ("You win this round!", Color::Green),
                Outcome::Loss => ("Computer wins this round!", Color::Red),
                Outcome::Draw => ("It's a tie!", Color::Yellow),
            };
            lines.push(Line::from(""));
            lines.push(Line::from(match report.player {
                Choice::TimedOut => format!("  Time ran out, Computer chose {}", report.computer),
                player => format!("  You chose {}, Computer chose {}", player, report.computer),
            }));
            lines.push(Line::from(Span::styled(
                format!("  {}", text),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        }

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Your Move")),
            area,
        );
    }
}
