//! UI module tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};
use tempfile::TempDir;

use super::{
    app::App,
    handlers::{GameHandler, InputHandler, MenuHandler},
    types::{InputStatus, LogBuffer, MenuItem, Screen},
};
use crate::{
    predictor::Level,
    session::GameKind,
    stats::{STATS_FILE, StatsStore},
    tracker::BestOf,
};

const ROUND_LIMIT: Duration = Duration::from_secs(10);

/// Past the deadline of a round that was armed just now.
fn after_deadline() -> Instant {
    Instant::now() + ROUND_LIMIT + Duration::from_secs(1)
}

/// Helper function to create a test app with its stats file in a temp dir.
fn create_test_app() -> (App, TempDir) {
    let dir = TempDir::new().unwrap();
    let stats = StatsStore::load(dir.path().join(STATS_FILE));
    let app = App::new(
        stats,
        BestOf::default(),
        Level::Frequency,
        Some(5),
        Some(ROUND_LIMIT),
        LogBuffer::new(),
    );
    (app, dir)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    InputHandler::new(app).handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn play_until_over(app: &mut App, key: char) {
    for _ in 0..200 {
        if app.session.as_ref().is_some_and(|s| s.is_over()) {
            return;
        }
        press(app, KeyCode::Char(key));
    }
    panic!("match did not finish");
}

#[cfg(test)]
mod app_tests {
    use super::*;

    #[test]
    fn test_app_initialization() {
        let (app, _dir) = create_test_app();

        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.menu_index, 0);
        assert_eq!(app.best_of_input, "3");
        assert!(app.session.is_none());
        assert!(app.last_report.is_none());
    }

    #[test]
    fn test_log_buffer() {
        let logs = LogBuffer::new();

        logs.push("Test message 1".to_string());
        logs.push("Test message 2".to_string());

        let lines = logs.lines();
        assert_eq!(lines, vec!["Test message 1", "Test message 2"]);
    }

    #[test]
    fn test_log_buffer_max_capacity() {
        let logs = LogBuffer::new();

        for i in 0..350 {
            logs.push(format!("Message {}", i));
        }

        let lines = logs.lines();
        assert_eq!(lines.len(), super::super::types::MAX_LOG_LINES);
        assert_eq!(lines.last().unwrap(), "Message 349");
    }
}

#[cfg(test)]
mod menu_tests {
    use super::*;

    #[test]
    fn test_menu_selection_wraps() {
        let (mut app, _dir) = create_test_app();

        press(&mut app, KeyCode::Up);
        assert_eq!(app.menu_index, MenuItem::ALL.len() - 1);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.menu_index, 0);
    }

    #[test]
    fn test_exit_entry_quits() {
        let (mut app, _dir) = create_test_app();
        app.menu_index = MenuItem::ALL.len() - 1;

        assert!(press(&mut app, KeyCode::Enter));
    }

    #[test]
    fn test_ctrl_q_quits_from_any_screen() {
        let (mut app, _dir) = create_test_app();
        app.screen = Screen::Stats;

        let quit = InputHandler::new(&mut app)
            .handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(quit);
    }

    #[test]
    fn test_play_entry_opens_settings() {
        let (mut app, _dir) = create_test_app();
        app.menu_index = 1;

        assert!(!press(&mut app, KeyCode::Enter));
        assert_eq!(app.screen, Screen::Settings);
        assert_eq!(app.pending_game, Some(GameKind::Extended));
    }

    #[test]
    fn test_best_of_validation() {
        let (mut app, _dir) = create_test_app();
        MenuHandler::new(&mut app).open_settings(GameKind::Classic);

        app.best_of_input = String::new();
        assert!(matches!(app.best_of_status(), InputStatus::Incomplete));

        app.best_of_input = "4".to_string();
        assert!(matches!(app.best_of_status(), InputStatus::Invalid(_)));

        app.best_of_input = "0".to_string();
        assert!(matches!(app.best_of_status(), InputStatus::Invalid(_)));

        app.best_of_input = "5".to_string();
        assert!(matches!(app.best_of_status(), InputStatus::Valid));
    }

    #[test]
    fn test_even_best_of_does_not_start() {
        let (mut app, _dir) = create_test_app();
        MenuHandler::new(&mut app).open_settings(GameKind::Classic);

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::Settings);
        assert!(app.session.is_none());
        assert!(app.logs.lines().iter().any(|l| l.starts_with("Input rejected")));
    }

    #[test]
    fn test_settings_start_match() {
        let (mut app, _dir) = create_test_app();
        MenuHandler::new(&mut app).open_settings(GameKind::Extended);

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.level, Level::Markov);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.kind(), GameKind::Extended);
        assert_eq!(session.state().best_of().get(), 5);
    }

    #[test]
    fn test_level_cycles_both_ways() {
        let (mut app, _dir) = create_test_app();

        MenuHandler::new(&mut app).cycle_level(false);
        assert_eq!(app.level, Level::Random);
        MenuHandler::new(&mut app).cycle_level(false);
        assert_eq!(app.level, Level::Markov);
        MenuHandler::new(&mut app).cycle_level(true);
        assert_eq!(app.level, Level::Random);
    }

    #[test]
    fn test_settings_escape_returns_to_menu() {
        let (mut app, _dir) = create_test_app();
        MenuHandler::new(&mut app).open_settings(GameKind::Coin);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Menu);
        assert!(app.pending_game.is_none());
    }
}

#[cfg(test)]
mod game_handler_tests {
    use super::*;
    use crate::rules::Move;

    #[test]
    fn test_round_played_from_key() {
        let (mut app, _dir) = create_test_app();
        GameHandler::new(&mut app).start_match(GameKind::Classic);

        press(&mut app, KeyCode::Char('r'));

        let report = app.last_report.as_ref().unwrap();
        assert_eq!(report.round, 1);
        assert_eq!(app.session.as_ref().unwrap().history().moves(), &[Move::Rock]);
    }

    #[test]
    fn test_illegal_key_is_rejected() {
        let (mut app, _dir) = create_test_app();
        GameHandler::new(&mut app).start_match(GameKind::Classic);

        // Spock is only legal in the extended game.
        press(&mut app, KeyCode::Char('k'));

        assert!(app.last_report.is_none());
        assert_eq!(app.session.as_ref().unwrap().state().round(), 0);
        assert!(app.logs.lines().iter().any(|l| l.starts_with("Input rejected")));
    }

    #[test]
    fn test_finished_match_is_recorded() {
        let (mut app, dir) = create_test_app();
        GameHandler::new(&mut app).start_match(GameKind::Coin);

        play_until_over(&mut app, 'h');

        let coin = app.stats.record().tally(GameKind::Coin);
        assert_eq!(coin.games, 1);
        assert_eq!(coin.player_wins + coin.computer_wins, 1);

        // Written to disk as well.
        let reloaded = StatsStore::load(dir.path().join(STATS_FILE));
        assert_eq!(reloaded.record(), app.stats.record());
    }

    #[test]
    fn test_keys_ignored_after_match_until_rematch() {
        let (mut app, _dir) = create_test_app();
        GameHandler::new(&mut app).start_match(GameKind::Classic);
        play_until_over(&mut app, 'p');

        let rounds = app.session.as_ref().unwrap().state().round();
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.session.as_ref().unwrap().state().round(), rounds);

        press(&mut app, KeyCode::Enter);
        let session = app.session.as_ref().unwrap();
        assert!(!session.is_over());
        assert_eq!(session.state().round(), 0);
        assert!(app.last_report.is_none());
        assert_eq!(app.stats.record().tally(GameKind::Classic).games, 1);
    }

    #[test]
    fn test_abandoned_match_is_not_recorded() {
        let (mut app, _dir) = create_test_app();
        GameHandler::new(&mut app).start_match(GameKind::Extended);

        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.screen, Screen::Menu);
        assert!(app.session.is_none());
        assert_eq!(app.stats.record().totals().games, 0);
        assert!(app.round_deadline.is_none());
    }
}

#[cfg(test)]
mod round_timer_tests {
    use super::*;
    use crate::{
        rules::Outcome,
        session::Choice,
        tracker::Side,
    };

    #[test]
    fn test_timer_armed_on_start() {
        let (mut app, _dir) = create_test_app();
        assert!(app.round_deadline.is_none());

        let before = Instant::now();
        GameHandler::new(&mut app).start_match(GameKind::Classic);
        let deadline = app.round_deadline.unwrap();
        assert!(deadline >= before + ROUND_LIMIT);
    }

    #[test]
    fn test_nothing_happens_before_deadline() {
        let (mut app, _dir) = create_test_app();
        GameHandler::new(&mut app).start_match(GameKind::Classic);

        GameHandler::new(&mut app).check_deadline(Instant::now());

        assert!(app.last_report.is_none());
        assert_eq!(app.session.as_ref().unwrap().state().round(), 0);
    }

    #[test]
    fn test_timeout_gives_round_to_computer() {
        let (mut app, _dir) = create_test_app();
        GameHandler::new(&mut app).start_match(GameKind::Classic);
        press(&mut app, KeyCode::Char('r'));

        GameHandler::new(&mut app).check_deadline(after_deadline());

        let report = app.last_report.as_ref().unwrap();
        assert_eq!(report.round, 2);
        assert_eq!(report.player, Choice::TimedOut);
        assert_eq!(report.outcome, Outcome::Loss);

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.history().len(), 1);
        assert!(app.logs.lines().iter().any(|l| l.starts_with("Time's up!")));
        // The next round gets a fresh deadline unless the forfeit ended the match.
        assert_eq!(app.round_deadline.is_some(), !session.is_over());
    }

    #[test]
    fn test_timeouts_decide_and_record_match() {
        let (mut app, _dir) = create_test_app();
        GameHandler::new(&mut app).start_match(GameKind::Coin);

        GameHandler::new(&mut app).check_deadline(after_deadline());
        GameHandler::new(&mut app).check_deadline(after_deadline());

        let session = app.session.as_ref().unwrap();
        assert!(session.is_over());
        assert_eq!(session.state().winner(), Some(Side::Computer));
        assert!(app.round_deadline.is_none());

        let coin = app.stats.record().tally(GameKind::Coin);
        assert_eq!(coin.games, 1);
        assert_eq!(coin.computer_wins, 1);

        // Rematch starts a new timed round.
        press(&mut app, KeyCode::Enter);
        assert!(app.round_deadline.is_some());
    }

    #[test]
    fn test_disabled_timer_never_fires() {
        let (mut app, _dir) = create_test_app();
        app.round_limit = None;
        GameHandler::new(&mut app).start_match(GameKind::Extended);
        assert!(app.round_deadline.is_none());

        GameHandler::new(&mut app).check_deadline(after_deadline());

        assert!(app.last_report.is_none());
        assert_eq!(app.session.as_ref().unwrap().state().round(), 0);
    }
}

#[cfg(test)]
mod stats_tests {
    use super::*;

    #[test]
    fn test_stats_tabs_cycle() {
        let (mut app, _dir) = create_test_app();
        app.menu_index = 3;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Stats);
        assert_eq!(app.stats_tab, GameKind::Classic);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.stats_tab, GameKind::Extended);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.stats_tab, GameKind::Classic);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.stats_tab, GameKind::Coin);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Menu);
    }
}

#[cfg(test)]
mod rendering_tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_every_screen_renders() {
        let (mut app, _dir) = create_test_app();

        for screen in [Screen::Menu, Screen::Settings, Screen::Stats, Screen::Help] {
            app.screen = screen;
            render(&app);
        }

        GameHandler::new(&mut app).start_match(GameKind::Classic);
        press(&mut app, KeyCode::Char('s'));
        let screen = render(&app);
        assert!(screen.contains("Rounds"));
        assert!(screen.contains("Scissors"));
        assert!(screen.contains("Time limit: 10s per round"));
        assert!(screen.contains("Moves seen: 1"));
    }

    #[test]
    fn test_menu_lists_games() {
        let (app, _dir) = create_test_app();
        let screen = render(&app);
        assert!(screen.contains("Coin Toss"));
        assert!(screen.contains("Statistics"));
    }
}
