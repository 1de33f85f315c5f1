//! Application shell wiring the input pipeline to the home page.

use super::actions::Action;
use super::menu::Menu;
use crate::command_bus::{CommandBus, SubscriptionToken};
use crate::config::Config;
use crate::constants::{MENU_ENTRIES, ROUTE_HOME};
use crate::focus_lock::{FocusLockCoordinator, OwnerId};
use crate::input::{raw_key_from_crossterm, Command, KeyMapper, ManualInput, RemoteControl};
use crate::logger::Logger;
use crate::navigation_guard::{NavigationGuard, PageHistory};
use crate::overlay::SpatialOverlay;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

pub struct App {
    pub bus: CommandBus,
    pub coordinator: FocusLockCoordinator,
    pub guard: NavigationGuard,
    pub history: PageHistory,
    pub menu: Menu,
    pub logger: Logger,
    input: ManualInput,
    remote: RemoteControl,
    popup: SpatialOverlay,
    popup_subject: Option<String>,
    show_logs: bool,
    subscriptions: Vec<SubscriptionToken>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let bus = CommandBus::new();
        let coordinator = FocusLockCoordinator::new();
        let guard = NavigationGuard::new(coordinator.clone());
        let history = PageHistory::new(ROUTE_HOME, guard.clone());
        let menu = Menu::new(MENU_ENTRIES);
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let remote = RemoteControl::new(KeyMapper::from_config(&config.input), bus.clone());
        let input = ManualInput::new();
        remote.attach(&input);

        let hide_tx = action_tx.clone();
        let popup = SpatialOverlay::new(OwnerId::generate(), coordinator.clone(), guard.clone(), move || {
            if hide_tx.send(Action::ClosePopup).is_err() {
                log::warn!("Popup close requested after the app shut down");
            }
        })
        .with_restore(|| log::debug!("Home menu has focus again"));

        let mut subscriptions = Vec::new();

        // Default scope: the menu stops reacting while an overlay holds focus
        let menu_listener = menu.clone();
        let menu_tx = action_tx.clone();
        subscriptions.push(bus.subscribe(coordinator.scoped(move |command| {
            if let Some(action) = menu_listener.handle_command(command) {
                menu_tx.send(action)?;
            }
            Ok(())
        })));

        // Popup content: confirm closes it
        let popup_owner = popup.owner().clone();
        let popup_coordinator = coordinator.clone();
        let popup_tx = action_tx.clone();
        subscriptions.push(bus.subscribe(move |command| {
            if command == Command::Select && popup_coordinator.current_owner().as_ref() == Some(&popup_owner) {
                popup_tx.send(Action::ClosePopup)?;
            }
            Ok(())
        }));

        // App level: back goes through the router, which consults the guard
        let back_history = history.clone();
        subscriptions.push(bus.subscribe(move |command| {
            if command == Command::Back {
                back_history.go_back();
            }
            Ok(())
        }));

        logger.log("App: input pipeline ready".to_string());

        Self {
            bus,
            coordinator,
            guard,
            history,
            menu,
            logger,
            input,
            remote,
            popup,
            popup_subject: None,
            show_logs: false,
            subscriptions,
            action_rx,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Feed a terminal key press through the remote-control pipeline.
    ///
    /// `q` and Ctrl+C quit, `g` toggles the log view and `x` clears it while
    /// open; they are not remote-control keys.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.should_quit = true,
            KeyCode::Char('g') => self.toggle_logs(),
            KeyCode::Char('x') if self.show_logs => self.logger.clear(),
            _ => {
                if let Some(raw) = raw_key_from_crossterm(&key) {
                    self.input.press(raw);
                }
            }
        }
    }

    /// Inject a command as if it came from the remote
    pub fn emit(&self, command: Command) {
        self.remote.emit(command);
    }

    /// Apply actions queued by listeners. Returns whether anything changed.
    pub fn process_actions(&mut self) -> bool {
        let mut changed = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.apply(action);
            changed = true;
        }
        changed
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::OpenPopup(subject) => {
                if self.popup.set_visible(true) {
                    self.logger.log(format!("App: opened popup for '{}'", subject));
                    self.popup_subject = Some(subject);
                }
            }
            Action::ClosePopup => {
                self.popup.set_visible(false);
                if let Some(subject) = self.popup_subject.take() {
                    self.logger.log(format!("App: closed popup for '{}'", subject));
                }
            }
            Action::OpenPage(route) => self.history.push(route),
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn is_popup_open(&self) -> bool {
        self.popup.is_open()
    }

    pub fn popup_subject(&self) -> Option<&str> {
        self.popup_subject.as_deref()
    }

    /// Lock owner used by the home page popup
    pub fn popup_owner(&self) -> &OwnerId {
        self.popup.owner()
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn is_showing_logs(&self) -> bool {
        self.show_logs
    }

    /// Up to `max` buffered log lines, newest first; empty while the view is closed
    pub fn log_view_lines(&self, max: usize) -> Vec<String> {
        if !self.show_logs {
            return Vec::new();
        }
        let mut lines = self.logger.get_logs();
        lines.truncate(max);
        lines
    }

    /// One-line summary of the shell state
    pub fn status_line(&self) -> String {
        let page = self.history.current().unwrap_or_default();
        let entry = self.menu.selected_entry().unwrap_or_default();
        match &self.popup_subject {
            Some(subject) => format!("[{}] menu: {} | popup: {} (Enter/Esc to close)", page, entry, subject),
            None => format!("[{}] menu: {} | ↑↓ move, Enter popup, → open, Esc back, g logs, q quit", page, entry),
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        for token in self.subscriptions.drain(..) {
            self.bus.unsubscribe(token);
        }
    }
}
