//! tvnav - Remote-control input pipeline for TV dashboards
//!
//! This library turns raw remote-control and keyboard events into an abstract
//! command vocabulary, fans those commands out to interested UI parts, and
//! arbitrates exclusive input ownership while a modal overlay is open,
//! including interception of the platform "back" gesture.
//!
//! # Modules
//!
//! * [`input`] - Commands, key mapping and input sources
//! * [`command_bus`] - Synchronous publish/subscribe dispatch of commands
//! * [`focus_lock`] - Single-owner focus lock for overlays
//! * [`navigation_guard`] - Back-navigation interception and page history
//! * [`overlay`] - Scoped lock acquisition tied to overlay visibility
//! * [`config`] - Application configuration management
//! * [`logger`] - Log buffer and `log` backend
//! * [`ui`] - Terminal shell driving the pipeline

/// Synchronous publish/subscribe dispatcher for commands
pub mod command_bus;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Exclusive input ownership while an overlay is open
pub mod focus_lock;

/// Remote-control input pipeline
pub mod input;

/// Logging setup and in-memory log buffer
pub mod logger;

/// Interception of back navigation while focus is locked
pub mod navigation_guard;

/// Overlay lifetime scopes
pub mod overlay;

/// Terminal shell
pub mod ui;

pub use command_bus::{CommandBus, SubscriptionToken};
pub use focus_lock::{FocusLockCoordinator, LockState, OwnerId};
pub use input::{Command, KeyMapper, RawKeyEvent, RemoteControl};
pub use navigation_guard::{BackOutcome, NavigationGuard, PageHistory};
pub use overlay::{OverlayScope, SpatialOverlay};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;
