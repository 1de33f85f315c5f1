//! Remote-control input pipeline.
//!
//! Raw platform key events flow from an [`InputSource`] through the
//! [`KeyMapper`] into the [`CommandBus`](crate::command_bus::CommandBus):
//!
//! ```text
//! InputSource ──RawKeyEvent──▶ KeyMapper ──Command──▶ CommandBus::dispatch
//! ```
//!
//! [`RemoteControl`] wires the three together.

pub mod command;
pub mod key_mapper;
pub mod remote_control;
pub mod source;

pub use command::{Command, ParseCommandError};
pub use key_mapper::KeyMapper;
pub use remote_control::RemoteControl;
pub use source::{raw_key_from_crossterm, InputSource, KeyEventHandler, ManualInput, RawKeyEvent};
