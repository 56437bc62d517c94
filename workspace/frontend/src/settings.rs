use log::Level;
use web_sys::window;

use crate::scroll::ScrollMode;

const LOG_LEVEL_KEY: &str = "portfolio_log_level";
const SMOOTH_SCROLL_KEY: &str = "portfolio_smooth_scroll";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode (set when served from localhost)
    pub debug_mode: bool,

    /// Animate in-page navigation instead of jumping
    pub smooth_scroll: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
            smooth_scroll: true,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(LOG_LEVEL_KEY) {
                settings.log_level = parse_log_level(&value).unwrap_or(settings.log_level);
            }
            if let Ok(Some(value)) = storage.get_item(SMOOTH_SCROLL_KEY) {
                settings.smooth_scroll = parse_flag(&value).unwrap_or(settings.smooth_scroll);
            }
        }

        settings
    }

    pub fn scroll_mode(&self) -> ScrollMode {
        if self.smooth_scroll {
            ScrollMode::Smooth
        } else {
            ScrollMode::Instant
        }
    }
}

fn parse_log_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings from the browser (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_scroll_smoothly() {
        let settings = AppSettings::default();
        assert_eq!(settings.log_level, Level::Info);
        assert!(!settings.debug_mode);
        assert_eq!(settings.scroll_mode(), ScrollMode::Smooth);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), Some(Level::Debug));
        assert_eq!(parse_log_level(" warn "), Some(Level::Warn));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("Off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_update_settings_disables_smooth_scroll() {
        update_settings(|s| s.smooth_scroll = false);
        assert_eq!(get_settings().scroll_mode(), ScrollMode::Instant);
        update_settings(|s| s.smooth_scroll = true);
        assert_eq!(get_settings().scroll_mode(), ScrollMode::Smooth);
    }
}
