use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    rules::{ALL_MOVES, Variant},
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn draw_help(&self, f: &mut Frame, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled("Classic Rock Paper Scissors", bold)),
        ];
        lines.extend(beats_lines(Variant::Classic));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Extended Rock Paper Scissors (5 moves)",
            bold,
        )));
        lines.extend(beats_lines(Variant::Extended));
        lines.extend([
            Line::from(""),
            Line::from(Span::styled("Coin Toss", bold)),
            Line::from("  Call Heads or Tails; if it matches the toss, you win the round."),
            Line::from(""),
            Line::from(Span::styled("Settings", bold)),
            Line::from("  Number of rounds must be odd. Ties do not count toward the match."),
            Line::from(
                "  Level: 0 = random, 1 = counters your most frequent move, \
                 2 = counters what usually follows your last move.",
            ),
            Line::from(format!(
                "  Statistics are saved to {}",
                self.stats.path().display()
            )),
        ]);

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title("Help")),
            area,
        );
    }
}

fn beats_lines(variant: Variant) -> Vec<Line<'static>> {
    variant
        .moves()
        .iter()
        .map(|winner| {
            let losers: Vec<&str> = ALL_MOVES
                .iter()
                .filter(|loser| variant.is_legal(**loser) && winner.beats(**loser))
                .map(|loser| loser.name())
                .collect();
            Line::from(format!("  {} beats {}", winner, losers.join(" and ")))
        })
        .collect()
}
