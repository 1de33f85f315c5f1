//! Constants used throughout the application
//!
//! This module centralizes platform key identifiers, file names and other
//! constant values shared by the input pipeline and the terminal shell.

// Platform key codes (the `code` field of a key event)
pub const KEY_ARROW_UP: &str = "ArrowUp";
pub const KEY_ARROW_DOWN: &str = "ArrowDown";
pub const KEY_ARROW_LEFT: &str = "ArrowLeft";
pub const KEY_ARROW_RIGHT: &str = "ArrowRight";
pub const KEY_ENTER: &str = "Enter";
pub const KEY_BACKSPACE: &str = "Backspace";

/// Codes bound by default; configured bindings may not rebind them
pub const BUILTIN_KEY_CODES: [&str; 6] = [
    KEY_ARROW_UP,
    KEY_ARROW_DOWN,
    KEY_ARROW_LEFT,
    KEY_ARROW_RIGHT,
    KEY_ENTER,
    KEY_BACKSPACE,
];

/// Back button of the LG webOS Magic Remote, delivered through the `key` field
pub const KEY_VENDOR_GO_BACK: &str = "GoBack";

// Configuration
pub const APP_NAME: &str = "tvnav";
pub const CONFIG_FILE_NAME: &str = "tvnav.toml";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const LOG_FILE_NAME: &str = "tvnav.log";

/// Default number of log lines kept in memory for the log view
pub const LOG_BUFFER_DEFAULT_CAPACITY: usize = 500;

/// Lines shown below the status line while the log view is open
pub const LOG_VIEW_LINES: usize = 8;

// Terminal shell
pub const ROUTE_HOME: &str = "home";
pub const MENU_ENTRIES: [&str; 4] = ["Tasks", "Calendar", "Messages", "Assistant"];
