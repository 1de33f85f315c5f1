//! Translation of raw platform key events into [`Command`]s.

use super::command::Command;
use super::source::RawKeyEvent;
use crate::config::InputConfig;
use crate::constants::{
    KEY_ARROW_DOWN, KEY_ARROW_LEFT, KEY_ARROW_RIGHT, KEY_ARROW_UP, KEY_BACKSPACE, KEY_ENTER, KEY_VENDOR_GO_BACK,
};
use std::collections::{HashMap, HashSet};

/// Pure mapping from platform key identifiers to commands.
///
/// Lookup order:
/// 1. the event's `key` field against the vendor back keys (some TV remotes
///    report their back button there instead of in `code`)
/// 2. the event's `code` field against the binding table
///
/// Anything else is unrecognized and yields `None`.
#[derive(Debug, Clone)]
pub struct KeyMapper {
    bindings: HashMap<String, Command>,
    vendor_back_keys: HashSet<String>,
}

impl KeyMapper {
    pub fn new() -> Self {
        let bindings = [
            (KEY_ARROW_UP, Command::Up),
            (KEY_ARROW_DOWN, Command::Down),
            (KEY_ARROW_LEFT, Command::Left),
            (KEY_ARROW_RIGHT, Command::Right),
            (KEY_ENTER, Command::Select),
            (KEY_BACKSPACE, Command::Back),
        ]
        .into_iter()
        .map(|(code, command)| (code.to_string(), command))
        .collect();

        Self {
            bindings,
            vendor_back_keys: HashSet::from([KEY_VENDOR_GO_BACK.to_string()]),
        }
    }

    /// Build a mapper with the default table extended by configured bindings
    pub fn from_config(config: &InputConfig) -> Self {
        let mut mapper = Self::new();
        for (code, command) in &config.bindings {
            mapper = mapper.with_binding(code.clone(), *command);
        }
        for key in &config.vendor_back_keys {
            mapper = mapper.with_vendor_back_key(key.clone());
        }
        mapper
    }

    /// Add a `code` binding. Codes that are already bound keep their
    /// command; extra bindings never replace an existing one.
    pub fn with_binding(mut self, code: impl Into<String>, command: Command) -> Self {
        let code = code.into();
        match self.bindings.get(&code) {
            Some(existing) => {
                log::warn!("Ignoring binding '{}' -> {}: already bound to {}", code, command, existing);
            }
            None => {
                self.bindings.insert(code, command);
            }
        }
        self
    }

    /// Treat an additional `key` value as the vendor back signal
    pub fn with_vendor_back_key(mut self, key: impl Into<String>) -> Self {
        self.vendor_back_keys.insert(key.into());
        self
    }

    pub fn map(&self, event: &RawKeyEvent) -> Option<Command> {
        if let Some(key) = event.key.as_deref() {
            if self.vendor_back_keys.contains(key) {
                return Some(Command::Back);
            }
        }

        let command = self.bindings.get(&event.code).copied();
        if command.is_none() {
            log::trace!("Ignoring unmapped key code '{}'", event.code);
        }
        command
    }

    /// Number of `code` bindings
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}

impl Default for KeyMapper {
    fn default() -> Self {
        Self::new()
    }
}
