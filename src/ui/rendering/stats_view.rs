//! Statistics dashboard rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::{
    session::GameKind,
    stats::{StatsRecord, Tally},
    ui::App,
};

impl App {
    pub(in crate::ui) fn draw_stats_view(&self, f: &mut Frame, area: Rect) {
        let record = self.stats.record();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Selected game
                Constraint::Min(6),    // All games table
            ])
            .split(area);

        draw_selected(f, chunks[0], self.stats_tab, record);
        draw_table(f, chunks[1], self.stats_tab, record);
    }
}

fn draw_selected(f: &mut Frame, area: Rect, kind: GameKind, record: &StatsRecord) {
    let tally = record.tally(kind);
    let last_played = tally
        .last_played
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string());

    let mut lines = vec![Line::from("")];
    lines.extend(record.summary(kind).lines().map(|l| Line::from(format!("  {}", l))));
    lines.push(Line::from(vec![
        Span::raw("  Win Rate: "),
        Span::styled(
            format!("{:.1}%", tally.win_rate()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  |  Last played: {}", last_played)),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} | Tab: Next | Esc: Back", kind.title())),
    );

    f.render_widget(paragraph, area);
}

fn draw_table(f: &mut Frame, area: Rect, selected: GameKind, record: &StatsRecord) {
    let row = |name: &str, tally: &Tally| {
        Row::new(vec![
            name.to_string(),
            tally.games.to_string(),
            tally.player_wins.to_string(),
            tally.computer_wins.to_string(),
            tally.ties.to_string(),
            tally.rounds.to_string(),
        ])
    };

    let mut rows: Vec<Row> = GameKind::ALL
        .iter()
        .map(|kind| {
            let style = if *kind == selected {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            row(kind.key(), record.tally(*kind)).style(style)
        })
        .collect();
    rows.push(row("total", &record.totals()).style(Style::default().add_modifier(Modifier::BOLD)));

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(15),
            Constraint::Length(6),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Game", "Played", "Your wins", "Computer wins", "Ties", "Rounds"])
            .style(Style::default().add_modifier(Modifier::BOLD))
            .bottom_margin(1),
    )
    .block(Block::default().borders(Borders::ALL).title("All Games"));

    f.render_widget(table, area);
}
