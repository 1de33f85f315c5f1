use super::app::App;
use super::event_handler::{EventHandler, EventType};
use crate::command_bus::panic_message;
use crate::config::Config;
use crate::constants::LOG_VIEW_LINES;
use crate::logger::Logger;
use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    execute, queue,
    style::Print,
    terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use std::io::{self, Write};
use tokio::time::Duration;

/// Leaves raw mode when dropped, including while unwinding from a panic
struct TerminalGuard {
    logger: Logger,
}

impl TerminalGuard {
    fn enter(logger: Logger) -> anyhow::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { logger })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), Print("\r\n"));
        if std::thread::panicking() {
            if let Some(last) = self.logger.get_logs().first() {
                eprintln!("tvnav crashed: {}", last);
            }
        }
    }
}

/// Routes panic messages to `report` while alive; the previous hook is put
/// back on drop.
struct PanicHookGuard {
    restore: Option<Box<dyn FnOnce() + Send>>,
}

impl PanicHookGuard {
    /// Report panics through `log::error!` instead of stderr, which would
    /// garble the raw-mode screen. Listener panics are caught by the bus and
    /// the shell keeps running.
    fn install() -> Self {
        Self::install_with(|message| log::error!("{}", message))
    }

    fn install_with<F>(report: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|l| format!("{}:{}", l.file(), l.line()))
                .unwrap_or_else(|| "unknown location".to_string());
            report(format!("Panic at {}: {}", location, panic_message(info.payload())));
        }));
        Self {
            restore: Some(Box::new(move || std::panic::set_hook(previous))),
        }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // Hooks cannot be swapped from a panicking thread
        if std::thread::panicking() {
            return;
        }
        if let Some(restore) = self.restore.take() {
            let _ = std::panic::take_hook();
            restore();
        }
    }
}

/// Run the terminal shell until the user quits
pub async fn run_app(config: Config, logger: Logger) -> anyhow::Result<()> {
    let _panic_hook = PanicHookGuard::install();
    let _terminal = TerminalGuard::enter(logger.clone())?;

    let mut app = App::new(&config, logger);
    let mut event_handler = EventHandler::new(Duration::from_millis(config.ui.tick_rate_ms));
    run_app_loop(&mut app, &mut event_handler).await
}

async fn run_app_loop(app: &mut App, event_handler: &mut EventHandler) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    let mut needs_render = true;

    loop {
        if needs_render {
            let width = terminal::size().map(|(cols, _)| cols as usize).unwrap_or(80);
            draw(&mut stdout, width, &app.status_line(), &app.log_view_lines(LOG_VIEW_LINES))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Key(key) => {
                app.handle_key(key);
                app.process_actions();
                needs_render = true;
            }
            EventType::Resize(_, _) => needs_render = true,
            EventType::Tick => needs_render = app.process_actions() || app.is_showing_logs(),
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Status line, followed by the log view lines (newest first) when open.
/// The cursor is left at the end of the status line.
fn draw<W: Write>(out: &mut W, width: usize, status: &str, logs: &[String]) -> io::Result<()> {
    let width = width.max(1);

    queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown), Print(status))?;
    for line in logs {
        let line: String = line.chars().take(width - 1).collect();
        queue!(out, Print("\r\n"), Print(line))?;
    }
    if !logs.is_empty() {
        let status_width = status.chars().count().min(width - 1);
        queue!(out, MoveUp(logs.len() as u16), MoveToColumn(status_width as u16))?;
    }
    out.flush()
}
