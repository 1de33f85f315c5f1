//! Terminal shell for the remote-control pipeline
//!
//! A minimal home page (menu, popup overlay, page history) driven entirely by
//! commands from the [`CommandBus`](crate::command_bus::CommandBus). Terminal
//! key presses are translated into TV remote key identifiers first, so the
//! shell exercises the same path a TV runtime would.

pub mod actions;
pub mod app;
pub mod event_handler;
pub mod menu;
pub mod renderer;

pub use actions::Action;
pub use app::App;
pub use event_handler::{EventHandler, EventType};
pub use menu::Menu;
pub use renderer::run_app;
