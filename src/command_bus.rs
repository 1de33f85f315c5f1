//! Synchronous publish/subscribe dispatcher for [`Command`]s.
//!
//! The bus is a cheap, cloneable handle onto a shared registry. Listeners
//! may capture a clone of the bus and subscribe or unsubscribe while a
//! dispatch is in progress: every dispatch works on a snapshot of the
//! registry taken when it starts, so such changes only affect later
//! dispatches.

use crate::input::Command;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

/// Callback invoked for every dispatched command
pub type Listener = Arc<dyn Fn(Command) -> anyhow::Result<()> + Send + Sync>;

/// Handle returned by [`CommandBus::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionToken(u64);

impl SubscriptionToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Default)]
struct Registry {
    listeners: Vec<(SubscriptionToken, Listener)>,
    next_id: u64,
}

#[derive(Clone, Default)]
pub struct CommandBus {
    registry: Arc<Mutex<Registry>>,
}

impl CommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it is called after every listener subscribed before it
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionToken
    where
        F: Fn(Command) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let mut registry = match self.registry.lock() {
            Ok(registry) => registry,
            Err(poisoned) => poisoned.into_inner(),
        };
        registry.next_id += 1;
        let token = SubscriptionToken(registry.next_id);
        registry.listeners.push((token, Arc::new(listener)));
        log::debug!("Command listener {} added", token.0);
        token
    }

    /// Remove a listener. Unknown or already removed tokens are ignored.
    pub fn unsubscribe(&self, token: SubscriptionToken) {
        let mut registry = match self.registry.lock() {
            Ok(registry) => registry,
            Err(poisoned) => poisoned.into_inner(),
        };
        let before = registry.listeners.len();
        registry.listeners.retain(|(t, _)| *t != token);
        if registry.listeners.len() < before {
            log::debug!("Command listener {} removed", token.0);
        }
    }

    /// Deliver `command` to every listener registered when the call starts,
    /// in subscription order. A failing or panicking listener is logged and
    /// skipped; the remaining listeners still receive the command.
    ///
    /// Returns the number of listeners that handled the command without error.
    pub fn dispatch(&self, command: Command) -> usize {
        let snapshot: Vec<(SubscriptionToken, Listener)> = match self.registry.lock() {
            Ok(registry) => registry.listeners.clone(),
            Err(poisoned) => poisoned.into_inner().listeners.clone(),
        };

        log::trace!("Dispatching {} to {} listener(s)", command, snapshot.len());

        let mut delivered = 0;
        for (token, listener) in snapshot {
            match catch_unwind(AssertUnwindSafe(|| listener(command))) {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(e)) => {
                    log::error!("Command listener {} failed on {}: {:#}", token.0, command, e);
                }
                Err(payload) => {
                    log::error!(
                        "Command listener {} panicked on {}: {}",
                        token.0,
                        command,
                        panic_message(payload.as_ref())
                    );
                }
            }
        }
        delivered
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.registry.lock().map(|r| r.listeners.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
