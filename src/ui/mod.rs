mod app;
mod handlers;
mod rendering;
#[cfg(test)]
mod tests;
mod types;

pub use app::App;
pub use types::{InputStatus, LogBuffer, MenuItem, Screen};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;

use crate::{config::Settings, stats::StatsStore};

/// Entry point for running the UI.
pub fn run_ui(settings: &Settings, stats: StatsStore) -> Result<()> {
    let logs = LogBuffer::new();
    let mut app = App::new(
        stats,
        settings.best_of,
        settings.level,
        settings.seed,
        settings.round_limit,
        logs,
    );

    let mut stdout = stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
