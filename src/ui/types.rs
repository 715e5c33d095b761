use std::sync::{Arc, Mutex};

use crate::session::GameKind;

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        buf.push(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Input validation status.
pub enum InputStatus {
    Incomplete,
    Invalid(&'static str),
    Valid,
}

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Settings,
    Playing,
    Stats,
    Help,
}

/// Main menu entries, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play(GameKind),
    Stats,
    Help,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Play(GameKind::Classic),
        MenuItem::Play(GameKind::Extended),
        MenuItem::Play(GameKind::Coin),
        MenuItem::Stats,
        MenuItem::Help,
        MenuItem::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Play(GameKind::Classic) => "Classic Rock Paper Scissors (3 moves)",
            MenuItem::Play(GameKind::Extended) => "Extended Rock Paper Scissors (5 moves)",
            MenuItem::Play(GameKind::Coin) => "Coin Toss",
            MenuItem::Stats => "Statistics",
            MenuItem::Help => "Help",
            MenuItem::Exit => "Exit",
        }
    }
}
