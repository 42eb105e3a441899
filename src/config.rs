//! Application configuration
//!
//! Window and notification settings read from environment variables with
//! sensible defaults.

use std::env;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Notification configuration
    pub notifications: NotificationConfig,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Initial inner width in points
    pub width: f32,
    /// Initial inner height in points
    pub height: f32,
}

/// Notification configuration
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationConfig {
    /// Seconds a toast stays on screen
    pub toast_secs: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                width: 1000.0,
                height: 760.0,
            },
            notifications: NotificationConfig { toast_secs: 2.5 },
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            window: WindowConfig {
                width: positive(lookup("AGENT_DIRECTORY_WIDTH"))
                    .unwrap_or(defaults.window.width),
                height: positive(lookup("AGENT_DIRECTORY_HEIGHT"))
                    .unwrap_or(defaults.window.height),
            },
            notifications: NotificationConfig {
                toast_secs: positive(lookup("AGENT_DIRECTORY_TOAST_SECS"))
                    .unwrap_or(defaults.notifications.toast_secs),
            },
            log_filter: lookup("RUST_LOG")
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(defaults.log_filter),
        }
    }
}

/// Parse a strictly positive number, rejecting anything else
fn positive<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .filter(|v| *v > T::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("AGENT_DIRECTORY_WIDTH", "1280"),
            ("AGENT_DIRECTORY_HEIGHT", " 900.5 "),
            ("AGENT_DIRECTORY_TOAST_SECS", "4"),
            ("RUST_LOG", "debug"),
        ]);
        assert_eq!(config.window.width, 1280.0);
        assert_eq!(config.window.height, 900.5);
        assert_eq!(config.notifications.toast_secs, 4.0);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("AGENT_DIRECTORY_WIDTH", "wide"),
            ("AGENT_DIRECTORY_HEIGHT", "-10"),
            ("AGENT_DIRECTORY_TOAST_SECS", "0"),
            ("RUST_LOG", "  "),
        ]);
        assert_eq!(config, AppConfig::default());
    }
}
