use super::actions::Action;
use crate::input::Command;
use std::sync::{Arc, Mutex};

struct MenuState {
    entries: Vec<String>,
    selected: usize,
}

/// Side menu of the home page, part of the default navigation scope
#[derive(Clone)]
pub struct Menu {
    state: Arc<Mutex<MenuState>>,
}

impl Menu {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: Arc::new(Mutex::new(MenuState {
                entries: entries.into_iter().map(Into::into).collect(),
                selected: 0,
            })),
        }
    }

    /// Move the selection or produce the action for the selected entry
    pub fn handle_command(&self, command: Command) -> Option<Action> {
        let mut state = self.state.lock().ok()?;
        let count = state.entries.len();
        if count == 0 {
            return None;
        }

        match command {
            Command::Up => {
                state.selected = state.selected.saturating_sub(1);
                None
            }
            Command::Down => {
                state.selected = (state.selected + 1).min(count - 1);
                None
            }
            Command::Select => Some(Action::OpenPopup(state.entries[state.selected].clone())),
            Command::Right => Some(Action::OpenPage(state.entries[state.selected].to_lowercase())),
            Command::Left | Command::Back => None,
        }
    }

    pub fn selected(&self) -> usize {
        self.state.lock().map(|s| s.selected).unwrap_or(0)
    }

    pub fn selected_entry(&self) -> Option<String> {
        let state = self.state.lock().ok()?;
        state.entries.get(state.selected).cloned()
    }
}
