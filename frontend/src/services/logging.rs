use std::cell::RefCell;

use shared::{LogConfig, LogLevel};

thread_local! {
    static LOG_CONFIG: RefCell<LogConfig> = RefCell::new(LogConfig::default());
}

/// Component-tagged logging to the browser console
pub struct Logger;

impl Logger {
    /// Install the threshold used by every later call
    pub fn init(config: LogConfig) {
        LOG_CONFIG.with(|current| *current.borrow_mut() = config);
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, component, message);
    }

    pub fn enabled(level: LogLevel) -> bool {
        LOG_CONFIG.with(|config| config.borrow().allows(level))
    }

    fn log(level: LogLevel, component: &str, message: &str) {
        if !Self::enabled(level) {
            return;
        }

        let line = format!("[{}] {}", component, message);
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }
    }
}
