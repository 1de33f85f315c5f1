//! Raw key events and the sources that produce them.

use crate::constants::{
    KEY_ARROW_DOWN, KEY_ARROW_LEFT, KEY_ARROW_RIGHT, KEY_ARROW_UP, KEY_BACKSPACE, KEY_ENTER, KEY_VENDOR_GO_BACK,
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::sync::{Arc, Mutex};

/// A key event as delivered by the platform.
///
/// `code` names the physical key; `key` carries the logical value when the
/// platform reports one (vendor buttons such as `GoBack` only appear here).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub code: String,
    pub key: Option<String>,
}

impl RawKeyEvent {
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            key: None,
        }
    }

    pub fn with_key(code: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            key: Some(key.into()),
        }
    }
}

pub type KeyEventHandler = Box<dyn Fn(&RawKeyEvent) + Send + Sync>;

/// Something that delivers raw key events, e.g. a window or a terminal
pub trait InputSource {
    /// Register the handler invoked for every raw key event
    fn on_key_event(&self, handler: KeyEventHandler);
}

/// Input source driven programmatically.
///
/// Used by the terminal shell (which feeds translated crossterm events into
/// it) and by tests.
#[derive(Clone, Default)]
pub struct ManualInput {
    handlers: Arc<Mutex<Vec<Arc<KeyEventHandler>>>>,
}

impl ManualInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every registered handler
    pub fn press(&self, event: RawKeyEvent) {
        let handlers: Vec<Arc<KeyEventHandler>> = match self.handlers.lock() {
            Ok(handlers) => handlers.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        for handler in handlers {
            handler(&event);
        }
    }

    pub fn press_code(&self, code: &str) {
        self.press(RawKeyEvent::from_code(code));
    }
}

impl InputSource for ManualInput {
    fn on_key_event(&self, handler: KeyEventHandler) {
        let mut handlers = match self.handlers.lock() {
            Ok(handlers) => handlers,
            Err(poisoned) => poisoned.into_inner(),
        };
        handlers.push(Arc::new(handler));
    }
}

/// Translate a terminal key press into the platform identifiers a TV
/// runtime would report. Esc plays the role of the remote's back button.
pub fn raw_key_from_crossterm(key: &KeyEvent) -> Option<RawKeyEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let event = match key.code {
        KeyCode::Up => RawKeyEvent::from_code(KEY_ARROW_UP),
        KeyCode::Down => RawKeyEvent::from_code(KEY_ARROW_DOWN),
        KeyCode::Left => RawKeyEvent::from_code(KEY_ARROW_LEFT),
        KeyCode::Right => RawKeyEvent::from_code(KEY_ARROW_RIGHT),
        KeyCode::Enter => RawKeyEvent::from_code(KEY_ENTER),
        KeyCode::Backspace => RawKeyEvent::from_code(KEY_BACKSPACE),
        KeyCode::Esc => RawKeyEvent::with_key("Escape", KEY_VENDOR_GO_BACK),
        KeyCode::Char(c) => RawKeyEvent::with_key(format!("Key{}", c.to_ascii_uppercase()), c.to_string()),
        _ => return None,
    };
    Some(event)
}
