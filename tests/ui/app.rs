use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tvnav::config::Config;
use tvnav::logger::Logger;
use tvnav::ui::App;

fn app() -> App {
    App::new(&Config::default(), Logger::new())
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    app.process_actions();
}

#[test]
fn test_arrows_move_menu() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.menu.selected(), 2);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.menu.selected(), 1);
}

#[test]
fn test_popup_locks_menu_and_back_closes_it() {
    let mut app = app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert!(app.is_popup_open());
    assert_eq!(app.popup_subject(), Some("Calendar"));
    assert_eq!(app.coordinator.current_owner().as_ref(), Some(app.popup_owner()));

    // Menu is locked while the popup is open
    press(&mut app, KeyCode::Down);
    assert_eq!(app.menu.selected(), 1);

    // Back closes the popup instead of navigating
    press(&mut app, KeyCode::Esc);
    assert!(!app.is_popup_open());
    assert!(!app.coordinator.is_locked());
    assert!(!app.guard.is_installed());
    assert_eq!(app.history.current(), Some("home".to_string()));

    // Menu reacts again
    press(&mut app, KeyCode::Down);
    assert_eq!(app.menu.selected(), 2);
}

#[test]
fn test_enter_confirms_popup() {
    let mut app = app();
    press(&mut app, KeyCode::Enter);
    assert!(app.is_popup_open());

    press(&mut app, KeyCode::Enter);
    assert!(!app.is_popup_open());
    assert!(!app.coordinator.is_locked());
}

#[test]
fn test_back_navigates_pages_when_no_popup() {
    let mut app = app();
    press(&mut app, KeyCode::Right);
    assert_eq!(app.history.current(), Some("tasks".to_string()));

    // Popup on the page: first back closes it, second leaves the page
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Backspace);
    assert!(!app.is_popup_open());
    assert_eq!(app.history.current(), Some("tasks".to_string()));

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.history.current(), Some("home".to_string()));
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());

    let mut app = self::app();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_status_line_mentions_state() {
    let mut app = app();
    assert!(app.status_line().contains("[home]"));
    assert!(app.status_line().contains("Tasks"));

    press(&mut app, KeyCode::Enter);
    assert!(app.status_line().contains("popup: Tasks"));
    assert!(!app.logger.get_logs().is_empty());
}

#[test]
fn test_popup_owner_is_unique_per_app() {
    let first = app();
    let second = app();
    assert_ne!(first.popup_owner(), second.popup_owner());
    assert!(first.popup_owner().as_str().starts_with("overlay-"));
}

#[test]
fn test_log_view_shows_newest_lines() {
    let mut app = app();
    assert!(!app.is_showing_logs());
    assert!(app.log_view_lines(5).is_empty());

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('g'));
    assert!(app.is_showing_logs());

    let lines = app.log_view_lines(5);
    assert!(!lines.is_empty());
    assert!(lines[0].contains("opened popup for 'Tasks'"));
    assert_eq!(app.log_view_lines(1).len(), 1);

    // The toggle key is not a remote key: the popup stays open
    assert!(app.is_popup_open());

    press(&mut app, KeyCode::Char('g'));
    assert!(!app.is_showing_logs());
    assert!(app.log_view_lines(5).is_empty());
}

#[test]
fn test_log_view_clear() {
    let mut app = app();

    // Clearing only works while the view is open
    press(&mut app, KeyCode::Char('x'));
    assert!(!app.logger.get_logs().is_empty());

    press(&mut app, KeyCode::Char('g'));
    press(&mut app, KeyCode::Char('x'));
    assert!(app.logger.get_logs().is_empty());
    assert!(app.log_view_lines(5).is_empty());
}
