#![forbid(unsafe_code)]

//! Dashboard configuration.
//!
//! [`DashboardConfig`] is assembled with builder methods or read from the
//! environment. Invalid environment values keep their defaults and are
//! reported as [`ConfigError`]s.
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `GRIDBOARD_STATE_PATH` | JSON state file (`state-persistence` feature) |
//! | `GRIDBOARD_STATUS_MS` | status message duration in milliseconds |
//! | `GRIDBOARD_BREAKPOINTS` | `one,two,three` width thresholds |
//! | `GRIDBOARD_LOG` | tracing filter directive |
//! | `GRIDBOARD_LOG_JSON` | emit JSON log lines (`1`/`0`) |

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use gridboard_layout::Breakpoints;

use crate::layout_store::PersistentLayoutStore;
use crate::status::DEFAULT_STATUS_DURATION;

const ENV_STATE_PATH: &str = "GRIDBOARD_STATE_PATH";
const ENV_STATUS_MS: &str = "GRIDBOARD_STATUS_MS";
const ENV_BREAKPOINTS: &str = "GRIDBOARD_BREAKPOINTS";
const ENV_LOG: &str = "GRIDBOARD_LOG";
const ENV_LOG_JSON: &str = "GRIDBOARD_LOG_JSON";

/// Default application name, used for the state directory.
pub const DEFAULT_APP_NAME: &str = "dashboard";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration for a dashboard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Width thresholds for bucket classification.
    pub breakpoints: Breakpoints,
    /// How long status messages stay visible.
    pub status_duration: Duration,
    /// Application name for the default state directory.
    pub app_name: String,
    /// Explicit state file. `None` with persistence enabled uses the
    /// per-app default location; without the feature, state is in memory.
    pub storage_path: Option<PathBuf>,
    /// Use the file backend at all.
    pub persist: bool,
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
    /// JSON log lines instead of the compact format.
    pub log_json: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::DEFAULT,
            status_duration: DEFAULT_STATUS_DURATION,
            app_name: DEFAULT_APP_NAME.to_owned(),
            storage_path: None,
            persist: false,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            log_json: false,
        }
    }
}

/// Result of parsing the environment: the config plus any rejected values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigParse {
    pub config: DashboardConfig,
    pub errors: Vec<ConfigError>,
}

/// A rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl DashboardConfig {
    /// Defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from the process environment.
    ///
    /// Rejected values are logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let parsed = Self::from_env_with_diagnostics();
        for error in &parsed.errors {
            tracing::warn!(%error, "ignoring invalid configuration value");
        }
        parsed.config
    }

    /// Read configuration from the process environment with diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> ConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Read configuration through a custom lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(mut get: F) -> ConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_STATE_PATH) {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                errors.push(ConfigError::new("storage_path", value, "expected a path"));
            } else {
                config.storage_path = Some(PathBuf::from(trimmed));
                config.persist = true;
            }
        }

        if let Some(value) = get(ENV_STATUS_MS) {
            match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.status_duration = Duration::from_millis(ms),
                _ => errors.push(ConfigError::new(
                    "status_duration",
                    value,
                    "expected positive milliseconds",
                )),
            }
        }

        if let Some(value) = get(ENV_BREAKPOINTS) {
            match parse_breakpoints(&value) {
                Some(parsed) => config.breakpoints = parsed,
                None => errors.push(ConfigError::new(
                    "breakpoints",
                    value,
                    "expected three ascending widths like 480,768,1024",
                )),
            }
        }

        if let Some(value) = get(ENV_LOG) {
            if value.trim().is_empty() {
                errors.push(ConfigError::new("log_filter", value, "expected a filter"));
            } else {
                config.log_filter = value.trim().to_owned();
            }
        }

        if let Some(value) = get(ENV_LOG_JSON) {
            match parse_bool(&value) {
                Some(parsed) => config.log_json = parsed,
                None => errors.push(ConfigError::new(
                    "log_json",
                    value,
                    "expected bool (1/0/true/false)",
                )),
            }
        }

        ConfigParse { config, errors }
    }

    /// Set the breakpoints.
    #[must_use]
    pub fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Set the status message duration.
    #[must_use]
    pub fn status_duration(mut self, duration: Duration) -> Self {
        self.status_duration = duration;
        self
    }

    /// Set the application name.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Persist to an explicit file.
    #[must_use]
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self.persist = true;
        self
    }

    /// Enable or disable the file backend.
    #[must_use]
    pub fn persist(mut self, enabled: bool) -> Self {
        self.persist = enabled;
        self
    }

    /// Set the log filter directive.
    #[must_use]
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Emit JSON log lines.
    #[must_use]
    pub fn log_json(mut self, enabled: bool) -> Self {
        self.log_json = enabled;
        self
    }

    /// Open the layout store this configuration describes.
    ///
    /// Falls back to memory storage when persistence is off or the
    /// `state-persistence` feature is disabled.
    #[must_use]
    pub fn open_store(&self) -> PersistentLayoutStore {
        #[cfg(feature = "state-persistence")]
        if self.persist {
            let path = self
                .storage_path
                .clone()
                .unwrap_or_else(|| crate::layout_store::default_path_for_app(&self.app_name));
            tracing::info!(path = %path.display(), "using file storage");
            return PersistentLayoutStore::with_file(path);
        }
        if self.persist {
            tracing::warn!("state-persistence feature disabled, using memory storage");
        }
        PersistentLayoutStore::in_memory()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_breakpoints(value: &str) -> Option<Breakpoints> {
    let mut parts = value.split(',').map(|p| p.trim().parse::<u32>().ok());
    let one = parts.next()??;
    let two = parts.next()??;
    let three = parts.next()??;
    if parts.next().is_some() || one > two || two > three {
        return None;
    }
    Some(Breakpoints::new(one, two, three))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(vars: &[(&str, &str)]) -> ConfigParse {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        DashboardConfig::from_env_with(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_env_is_default() {
        let parsed = parse(&[]);
        assert_eq!(parsed.config, DashboardConfig::default());
        assert!(parsed.errors.is_empty());
    }

    #[test]
    fn reads_all_variables() {
        let parsed = parse(&[
            ("GRIDBOARD_STATE_PATH", "/tmp/dash.json"),
            ("GRIDBOARD_STATUS_MS", "1500"),
            ("GRIDBOARD_BREAKPOINTS", "400, 800, 1200"),
            ("GRIDBOARD_LOG", "gridboard=debug"),
            ("GRIDBOARD_LOG_JSON", "yes"),
        ]);
        assert!(parsed.errors.is_empty());
        let config = parsed.config;
        assert_eq!(config.storage_path, Some(PathBuf::from("/tmp/dash.json")));
        assert!(config.persist);
        assert_eq!(config.status_duration, Duration::from_millis(1500));
        assert_eq!(config.breakpoints, Breakpoints::new(400, 800, 1200));
        assert_eq!(config.log_filter, "gridboard=debug");
        assert!(config.log_json);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let parsed = parse(&[
            ("GRIDBOARD_STATUS_MS", "0"),
            ("GRIDBOARD_BREAKPOINTS", "900,500,1000"),
            ("GRIDBOARD_LOG_JSON", "maybe"),
            ("GRIDBOARD_STATE_PATH", "  "),
        ]);
        assert_eq!(parsed.config, DashboardConfig::default());
        let fields: Vec<_> = parsed.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            ["storage_path", "status_duration", "breakpoints", "log_json"]
        );
        assert_eq!(
            parsed.errors[1].to_string(),
            "status_duration=0 (expected positive milliseconds)"
        );
    }

    #[test]
    fn breakpoints_need_exactly_three() {
        assert_eq!(parse_breakpoints("1,2"), None);
        assert_eq!(parse_breakpoints("1,2,3,4"), None);
        assert_eq!(parse_breakpoints("a,2,3"), None);
        assert_eq!(parse_breakpoints("1,2,3"), Some(Breakpoints::new(1, 2, 3)));
    }

    #[test]
    fn builder_chain() {
        let config = DashboardConfig::new()
            .app_name("ops")
            .status_duration(Duration::from_secs(5))
            .log_json(true)
            .log_filter("warn");
        assert_eq!(config.app_name, "ops");
        assert_eq!(config.status_duration, Duration::from_secs(5));
        assert!(config.log_json);
        assert!(!config.persist);
        assert_eq!(config.open_store().backend_name(), "MemoryStorage");
    }

    #[cfg(feature = "state-persistence")]
    #[test]
    fn open_store_uses_file_when_persisting() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::new().storage_path(dir.path().join("state.json"));
        assert_eq!(config.open_store().backend_name(), "FileStorage");
    }
}
