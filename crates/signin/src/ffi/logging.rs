//! FFI logging backend that routes logs to Swift/Kotlin via callback
//!
//! Installs a `log` backend that forwards records to a host-provided
//! callback, so core log output lands in the host platform's logging
//! (unified logging on Apple platforms, logcat on Android).

use std::sync::{Arc, OnceLock, RwLock};

use log::{Level, Log, Metadata, Record};

use super::types::{FfiLogLevel, LogCallback};

/// Global storage for the bridge logger
static BRIDGE_LOGGER: OnceLock<BridgeLogger> = OnceLock::new();

struct LoggerState {
    callback: Option<Arc<dyn LogCallback>>,
    max_level: Level,
}

/// Logger that forwards to the host callback when one is set
struct BridgeLogger {
    state: RwLock<LoggerState>,
}

impl BridgeLogger {
    fn new(max_level: Level) -> Self {
        Self {
            state: RwLock::new(LoggerState {
                callback: None,
                max_level,
            }),
        }
    }

    fn update<F: FnOnce(&mut LoggerState)>(&self, apply: F) {
        if let Ok(mut state) = self.state.write() {
            apply(&mut state);
        }
    }
}

impl Log for BridgeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.state
            .read()
            .map(|s| metadata.level() <= s.max_level && s.callback.is_some())
            .unwrap_or(false)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let callback = match self.state.read() {
            Ok(state) => state.callback.clone(),
            Err(_) => None,
        };
        if let Some(callback) = callback {
            // Errors from the host side are ignored to avoid recursion.
            callback.on_log(
                FfiLogLevel::from(record.level()),
                record.target().to_string(),
                format!("{}", record.args()),
            );
        }
    }

    fn flush(&self) {}
}

/// Install the bridge logger as the global logger and attach the callback
///
/// Call once at host startup, before constructing any flow handles.
/// Repeated calls only replace the callback and level; installation failure
/// (another logger already set, e.g. env_logger in tests) leaves the
/// existing logger in place.
#[uniffi::export]
pub fn initialize_logging(callback: Box<dyn LogCallback>, max_level: FfiLogLevel) {
    let level = Level::from(max_level);
    let logger = BRIDGE_LOGGER.get_or_init(|| BridgeLogger::new(level));
    let _ = log::set_logger(logger);
    log::set_max_level(level.to_level_filter());
    logger.update(|state| {
        state.callback = Some(Arc::from(callback));
        state.max_level = level;
    });
}

/// Detach the host log callback; log records are silently dropped until a
/// new callback is attached
#[uniffi::export]
pub fn clear_log_callback() {
    if let Some(logger) = BRIDGE_LOGGER.get() {
        logger.update(|state| state.callback = None);
    }
}

/// Update the maximum log level at runtime
#[uniffi::export]
pub fn set_log_level(max_level: FfiLogLevel) {
    let level = Level::from(max_level);
    if let Some(logger) = BRIDGE_LOGGER.get() {
        logger.update(|state| state.max_level = level);
        log::set_max_level(level.to_level_filter());
    }
}
