//! Interception of the page-level "go back" intent while an overlay is open.
//!
//! The page router asks the guard before every back transition. While an
//! interceptor is installed and the focus lock is held, the transition is
//! cancelled and the overlay's close handler runs instead.

use crate::command_bus::panic_message;
use crate::focus_lock::FocusLockCoordinator;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard};

pub type BackInterceptor = Arc<dyn Fn() + Send + Sync>;

/// Result of asking the guard about a back transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// The overlay's close handler ran; the page must stay where it is
    Intercepted,
    /// No overlay claimed the intent; the router may navigate back
    Propagate,
}

#[derive(Clone)]
pub struct NavigationGuard {
    coordinator: FocusLockCoordinator,
    interceptor: Arc<Mutex<Option<BackInterceptor>>>,
}

impl NavigationGuard {
    pub fn new(coordinator: FocusLockCoordinator) -> Self {
        Self {
            coordinator,
            interceptor: Arc::new(Mutex::new(None)),
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<BackInterceptor>> {
        match self.interceptor.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Install the close handler of the overlay that just became visible
    pub fn install<F>(&self, on_intercepted_back: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut slot = self.slot();
        if slot.is_some() {
            log::warn!("Replacing an installed back interceptor");
        }
        *slot = Some(Arc::new(on_intercepted_back));
        log::debug!("Back interceptor installed");
    }

    /// Remove the interceptor. Safe to call when none is installed.
    pub fn uninstall(&self) {
        if self.slot().take().is_some() {
            log::debug!("Back interceptor removed");
        }
    }

    pub fn is_installed(&self) -> bool {
        self.slot().is_some()
    }

    /// Decide the fate of a back transition, running the close handler
    /// when the intent is intercepted.
    pub fn intercept_back(&self) -> BackOutcome {
        let interceptor = self.slot().clone();
        match interceptor {
            Some(on_back) if self.coordinator.is_locked() => {
                log::debug!("Back navigation intercepted by overlay");
                // Called without holding the slot: the handler usually closes
                // the overlay, which uninstalls this interceptor.
                if let Err(payload) = catch_unwind(AssertUnwindSafe(|| on_back())) {
                    log::error!("Overlay close handler panicked: {}", panic_message(payload.as_ref()));
                }
                BackOutcome::Intercepted
            }
            Some(_) => {
                log::debug!("Back interceptor installed but focus is not locked, propagating");
                BackOutcome::Propagate
            }
            None => BackOutcome::Propagate,
        }
    }
}

/// Page-level navigation history consulted by the back command.
///
/// The first route is the root and is never popped.
#[derive(Clone)]
pub struct PageHistory {
    routes: Arc<Mutex<Vec<String>>>,
    guard: NavigationGuard,
}

impl PageHistory {
    pub fn new(root: impl Into<String>, guard: NavigationGuard) -> Self {
        Self {
            routes: Arc::new(Mutex::new(vec![root.into()])),
            guard,
        }
    }

    fn routes(&self) -> MutexGuard<'_, Vec<String>> {
        match self.routes.lock() {
            Ok(routes) => routes,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn push(&self, route: impl Into<String>) {
        let route = route.into();
        log::info!("Navigating to '{}'", route);
        self.routes().push(route);
    }

    /// Go back one page unless the guard intercepts the transition.
    ///
    /// Returns the route that was left, or `None` when intercepted or
    /// already at the root.
    pub fn go_back(&self) -> Option<String> {
        if self.guard.intercept_back() == BackOutcome::Intercepted {
            return None;
        }

        let mut routes = self.routes();
        if routes.len() <= 1 {
            log::debug!("Already at root page, ignoring back");
            return None;
        }
        let left = routes.pop();
        if let (Some(left), Some(current)) = (left.as_ref(), routes.last()) {
            log::info!("Navigated back from '{}' to '{}'", left, current);
        }
        left
    }

    pub fn current(&self) -> Option<String> {
        self.routes().last().cloned()
    }

    pub fn depth(&self) -> usize {
        self.routes().len()
    }
}
