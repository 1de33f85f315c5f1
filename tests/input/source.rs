use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::sync::{Arc, Mutex};
use tvnav::input::{raw_key_from_crossterm, InputSource, ManualInput, RawKeyEvent};

#[test]
fn test_manual_input_reaches_every_handler() {
    let input = ManualInput::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    for name in ["first", "second"] {
        let seen = seen.clone();
        input.on_key_event(Box::new(move |event: &RawKeyEvent| {
            seen.lock().unwrap().push(format!("{}:{}", name, event.code));
        }));
    }

    input.press_code("ArrowUp");
    assert_eq!(*seen.lock().unwrap(), vec!["first:ArrowUp", "second:ArrowUp"]);
}

#[test]
fn test_manual_input_survives_panicking_handler() {
    let input = ManualInput::new();
    input.on_key_event(Box::new(|event: &RawKeyEvent| {
        if event.code == "Enter" {
            panic!("handler failed");
        }
    }));

    let panicking = input.clone();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || panicking.press_code("Enter")));
    assert!(result.is_err());

    // Registration and delivery keep working afterwards
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_handler = seen.clone();
    input.on_key_event(Box::new(move |event: &RawKeyEvent| {
        seen_in_handler.lock().unwrap().push(event.code.clone());
    }));
    input.press_code("ArrowDown");
    assert_eq!(*seen.lock().unwrap(), vec!["ArrowDown".to_string()]);
}

#[test]
fn test_crossterm_translation() {
    let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

    assert_eq!(raw_key_from_crossterm(&press(KeyCode::Up)), Some(RawKeyEvent::from_code("ArrowUp")));
    assert_eq!(raw_key_from_crossterm(&press(KeyCode::Enter)), Some(RawKeyEvent::from_code("Enter")));
    assert_eq!(
        raw_key_from_crossterm(&press(KeyCode::Backspace)),
        Some(RawKeyEvent::from_code("Backspace"))
    );
    assert_eq!(
        raw_key_from_crossterm(&press(KeyCode::Esc)),
        Some(RawKeyEvent::with_key("Escape", "GoBack"))
    );
    assert_eq!(
        raw_key_from_crossterm(&press(KeyCode::Char('x'))),
        Some(RawKeyEvent::with_key("KeyX", "x"))
    );
    assert_eq!(raw_key_from_crossterm(&press(KeyCode::F(5))), None);
}

#[test]
fn test_crossterm_release_is_ignored() {
    let release = KeyEvent {
        code: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(raw_key_from_crossterm(&release), None);
}
