use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

use crate::ui::{app::App, types::MenuItem};

impl App {
    pub(in crate::ui) fn draw_menu(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == self.menu_index {
                    ListItem::new(format!("▶ {}", item.label())).style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ListItem::new(format!("  {}", item.label()))
                }
            })
            .collect();

        f.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("🎮 Smart Game Collection"),
            ),
            area,
        );
    }
}
