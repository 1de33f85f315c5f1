use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_BUFFER_DEFAULT_CAPACITY, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application.
///
/// Keeps the most recent lines in memory for the in-app log view and, once
/// installed as the `log` backend, receives every `log::info!` & co. When
/// file logging is enabled the same lines also go to a log file.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
    level: log::LevelFilter,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            capacity: LOG_BUFFER_DEFAULT_CAPACITY,
            level: log::LevelFilter::Info,
            log_file: None,
        }
    }

    /// Build a logger from the `[logging]` section
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let mut logger = Self::new();
        logger.capacity = config.buffer_capacity.max(1);
        logger.level = config.level_filter()?;
        if config.enabled {
            logger.log_file = Some(Self::get_log_file_path()?);
        }
        Ok(logger)
    }

    /// Write to `path` instead of the default log file location
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        self.push_line(format!("[{}] {}", timestamp, message));
    }

    fn push_line(&self, line: String) {
        if let Ok(mut logs) = self.logs.lock() {
            while logs.len() >= self.capacity {
                logs.pop_front();
            }
            logs.push_back(line);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Whether lines are also written to a file
    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    pub fn level(&self) -> log::LevelFilter {
        self.level
    }

    /// Default log file location in the user cache directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
            .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
    }

    /// Build the fern dispatch feeding this logger (and the log file, if any)
    pub fn dispatch(&self) -> Result<fern::Dispatch> {
        let buffer = self.clone();
        let mut dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(self.level)
            .chain(fern::Output::call(move |record| {
                buffer.push_line(record.args().to_string());
            }));

        if let Some(path) = &self.log_file {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file =
                fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
            dispatch = dispatch.chain(file);
        }

        Ok(dispatch)
    }

    /// Install as the global `log` backend. Can only succeed once per process.
    pub fn install(&self) -> Result<()> {
        self.dispatch()?
            .apply()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
        log::debug!("Logger installed at level {}", self.level);
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
