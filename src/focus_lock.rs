//! Exclusive input ownership for modal overlays.
//!
//! The coordinator owns a single lock slot. While an overlay holds it, the
//! default navigation scope (the spatial navigation root) must not react to
//! commands; listeners belonging to that scope either check
//! [`FocusLockCoordinator::is_locked`] themselves or are wrapped with
//! [`FocusLockCoordinator::scoped`].

use crate::command_bus::panic_message;
use crate::input::Command;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard};

/// Identifier of the overlay holding the lock
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh identifier for overlays without a natural name
    pub fn generate() -> Self {
        Self(format!("overlay-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for OwnerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

pub type RestoreCallback = Box<dyn FnOnce() + Send>;

/// Observable part of the lock slot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LockState {
    pub is_locked: bool,
    pub owner: Option<OwnerId>,
}

struct HeldLock {
    owner: OwnerId,
    restore: RestoreCallback,
}

#[derive(Clone, Default)]
pub struct FocusLockCoordinator {
    // `Some` exactly while locked; owner and restore callback live and die together
    slot: Arc<Mutex<Option<HeldLock>>>,
}

impl FocusLockCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<HeldLock>> {
        match self.slot.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Take the lock for `owner`.
    ///
    /// Returns `false` and leaves the current holder untouched if the lock is
    /// already held (nested overlays are rejected, not stacked).
    pub fn acquire<F>(&self, owner: impl Into<OwnerId>, restore: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        let owner = owner.into();
        let mut slot = self.slot();
        if let Some(held) = slot.as_ref() {
            log::warn!("Focus lock conflict: '{}' requested it while held by '{}'", owner, held.owner);
            return false;
        }

        log::info!("Locked controls for overlay '{}'", owner);
        *slot = Some(HeldLock {
            owner,
            restore: Box::new(restore),
        });
        true
    }

    /// Release the lock held by `owner` and run its restore callback.
    /// A panicking callback is logged; the lock is released regardless.
    ///
    /// Releasing with a different owner, or when nothing is locked, is a
    /// no-op. Returns whether the lock was released.
    pub fn release(&self, owner: &OwnerId) -> bool {
        let held = {
            let mut slot = self.slot();
            let holder = slot.as_ref().map(|held| held.owner.clone());
            match holder {
                Some(holder) if holder == *owner => slot.take(),
                Some(holder) => {
                    log::debug!("Ignoring release by '{}': lock is held by '{}'", owner, holder);
                    None
                }
                None => {
                    log::debug!("Ignoring release by '{}': not locked", owner);
                    None
                }
            }
        };

        // Run outside the mutex so the callback may query or re-acquire
        match held {
            Some(held) => {
                log::info!("Unlocked controls for overlay '{}'", held.owner);
                let restore = held.restore;
                if let Err(payload) = catch_unwind(AssertUnwindSafe(restore)) {
                    log::error!(
                        "Restore callback of overlay '{}' panicked: {}",
                        held.owner,
                        panic_message(payload.as_ref())
                    );
                }
                true
            }
            None => false,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.slot().is_some()
    }

    pub fn current_owner(&self) -> Option<OwnerId> {
        self.slot().as_ref().map(|held| held.owner.clone())
    }

    pub fn state(&self) -> LockState {
        let owner = self.current_owner();
        LockState {
            is_locked: owner.is_some(),
            owner,
        }
    }

    /// Wrap a listener of the default navigation scope so it ignores
    /// commands while an overlay holds the lock.
    pub fn scoped<F>(&self, listener: F) -> impl Fn(Command) -> anyhow::Result<()> + Send + Sync + 'static
    where
        F: Fn(Command) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let coordinator = self.clone();
        move |command| {
            if coordinator.is_locked() {
                return Ok(());
            }
            listener(command)
        }
    }
}
