//! Scoped focus locking for modal overlays.
//!
//! An [`OverlayScope`] exists exactly while an overlay is visible: opening it
//! takes the focus lock and installs the back interceptor, dropping it undoes
//! both. Whatever closes the overlay (its own close button, a programmatic
//! dismissal, an intercepted back, the owner being torn down) ends up
//! dropping the scope, so no interceptor or lock outlives the overlay.

use crate::focus_lock::{FocusLockCoordinator, OwnerId};
use crate::navigation_guard::NavigationGuard;
use std::sync::Arc;

pub struct OverlayScope {
    owner: OwnerId,
    coordinator: FocusLockCoordinator,
    guard: NavigationGuard,
}

impl OverlayScope {
    /// Lock focus for `owner` and route back intents to `hide_modal`.
    ///
    /// Returns `None` when another overlay already holds the lock; nothing is
    /// installed in that case.
    pub fn open<H, R>(
        coordinator: &FocusLockCoordinator,
        guard: &NavigationGuard,
        owner: impl Into<OwnerId>,
        hide_modal: H,
        restore: R,
    ) -> Option<Self>
    where
        H: Fn() + Send + Sync + 'static,
        R: FnOnce() + Send + 'static,
    {
        let owner = owner.into();
        if !coordinator.acquire(owner.clone(), restore) {
            return None;
        }
        guard.install(hide_modal);

        Some(Self {
            owner,
            coordinator: coordinator.clone(),
            guard: guard.clone(),
        })
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    /// Close explicitly; equivalent to dropping the scope
    pub fn close(self) {}
}

impl Drop for OverlayScope {
    fn drop(&mut self) {
        self.guard.uninstall();
        self.coordinator.release(&self.owner);
    }
}

/// An overlay driven by a visibility flag.
///
/// Mirrors how a modal component behaves: the scope is opened when the flag
/// turns on and dropped when it turns off. Setting the same value twice does
/// nothing.
pub struct SpatialOverlay {
    owner: OwnerId,
    coordinator: FocusLockCoordinator,
    guard: NavigationGuard,
    hide_modal: Arc<dyn Fn() + Send + Sync>,
    on_restore: Option<Arc<dyn Fn() + Send + Sync>>,
    scope: Option<OverlayScope>,
}

impl SpatialOverlay {
    pub fn new<H>(
        owner: impl Into<OwnerId>,
        coordinator: FocusLockCoordinator,
        guard: NavigationGuard,
        hide_modal: H,
    ) -> Self
    where
        H: Fn() + Send + Sync + 'static,
    {
        Self {
            owner: owner.into(),
            coordinator,
            guard,
            hide_modal: Arc::new(hide_modal),
            on_restore: None,
            scope: None,
        }
    }

    /// Callback run every time this overlay gives focus back
    pub fn with_restore<F>(mut self, on_restore: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_restore = Some(Arc::new(on_restore));
        self
    }

    /// Apply a visibility change. Returns whether the overlay holds the
    /// focus lock afterwards.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        match (visible, self.scope.is_some()) {
            (true, false) => {
                let hide_modal = self.hide_modal.clone();
                let on_restore = self.on_restore.clone();
                self.scope = OverlayScope::open(
                    &self.coordinator,
                    &self.guard,
                    self.owner.clone(),
                    move || hide_modal(),
                    move || {
                        if let Some(on_restore) = on_restore {
                            on_restore();
                        }
                    },
                );
                if self.scope.is_none() {
                    log::warn!("Overlay '{}' could not take focus, another overlay is open", self.owner);
                }
            }
            (false, true) => {
                self.scope = None;
            }
            _ => {}
        }
        self.scope.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.scope.is_some()
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }
}
