//! Console Logger
//!
//! `log` backend for webview frontends: every record goes to the browser
//! console (stderr off-wasm) with a timestamp and the app name.

use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Set only once the logger is installed as the `log` backend
static LOGGER: OnceLock<&'static ConsoleLogger> = OnceLock::new();

/// Logger installed as the global `log` backend
pub struct ConsoleLogger {
    app_name: String,
}

impl ConsoleLogger {
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&timestamp, record.level(), &self.app_name, &record.args().to_string());
        write_console(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Initialize the global logger.
///
/// Calling again with the same `app_name` only updates the level.
/// A different `app_name` is rejected.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), String> {
    install(&LOGGER, app_name, |logger| {
        log::set_logger(logger).map_err(|e| format!("Failed to install logger: {}", e))
    })?;
    log::set_max_level(level);
    Ok(())
}

/// Name the installed logger was created with, if any
pub fn installed_app_name() -> Option<&'static str> {
    LOGGER.get().map(|logger| logger.app_name())
}

/// Record a logger in `slot` only after `set_logger` accepted it
fn install(
    slot: &OnceLock<&'static ConsoleLogger>,
    app_name: &str,
    set_logger: impl FnOnce(&'static ConsoleLogger) -> Result<(), String>,
) -> Result<(), String> {
    if let Some(existing) = slot.get() {
        if existing.app_name != app_name {
            return Err(format!(
                "logger already initialized for `{}`; refusing `{}`",
                existing.app_name, app_name
            ));
        }
        return Ok(());
    }

    // The `log` facade needs a 'static logger for the life of the process
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(app_name)));
    set_logger(logger)?;
    let _ = slot.set(logger);
    Ok(())
}

/// Format one line: `HH:MM:SS.mmm LEVEL [app] message`
pub fn format_line(timestamp: &str, level: Level, app_name: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", timestamp, level, app_name, message)
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}
