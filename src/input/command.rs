use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Abstract remote-control command, independent of the physical remote or keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Select,
    Back,
}

impl Command {
    /// Every command, in declaration order
    pub const ALL: [Command; 6] = [
        Command::Up,
        Command::Down,
        Command::Left,
        Command::Right,
        Command::Select,
        Command::Back,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Up => "up",
            Command::Down => "down",
            Command::Left => "left",
            Command::Right => "right",
            Command::Select => "select",
            Command::Back => "back",
        }
    }

    /// Whether this command moves focus spatially
    pub fn is_directional(&self) -> bool {
        matches!(self, Command::Up | Command::Down | Command::Left | Command::Right)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command '{0}' (expected one of: up, down, left, right, select, back)")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Command::Up),
            "down" => Ok(Command::Down),
            "left" => Ok(Command::Left),
            "right" => Ok(Command::Right),
            // Remotes label the confirm key "Enter" or "OK"
            "select" | "enter" | "ok" => Ok(Command::Select),
            "back" => Ok(Command::Back),
            _ => Err(ParseCommandError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Command {
    type Error = ParseCommandError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Command> for String {
    fn from(command: Command) -> Self {
        command.as_str().to_string()
    }
}
