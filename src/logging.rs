//! Logger initialization from an optional JSON settings file.
//!
//! Without a settings file the subscriber writes to the console, honoring
//! `RUST_LOG` and defaulting to `info`. With one, the file selects the level
//! and optionally a plain-text log file:
//!
//! ```json
//! {
//!   "level": "debug",
//!   "file": "auto-hold-click.log",
//!   "append": true
//! }
//! ```
//!
//! A settings file that is missing, malformed, or names an invalid level is a
//! fatal domain error; only omitting the file entirely means console-only.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::error::{AhcError, Result};

const DEFAULT_LEVEL: &str = "info";

/// Log settings as read from the optional `--log-settings` file.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogSettings {
    /// Level name: trace, debug, info, warn, or error (case-insensitive).
    pub level: String,
    /// Log file path; `None` keeps output on the console.
    pub file: Option<PathBuf>,
    /// Append to an existing log file instead of truncating it.
    pub append: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file: None,
            append: true,
        }
    }
}

impl LogSettings {
    /// Loads log settings from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AhcError::log_settings(&display, "file not found")
            } else {
                AhcError::log_settings(&display, e.to_string())
            }
        })?;
        serde_json::from_str(&text)
            .map_err(|e| AhcError::log_settings(&display, format!("not valid JSON: {e}")))
    }
}

/// Initializes the global `tracing` subscriber.
///
/// Called once at startup, before any other work that might log.
pub fn init(settings_path: Option<&Path>) -> Result<()> {
    let Some(path) = settings_path else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
            )
            .init();
        return Ok(());
    };

    let settings = LogSettings::from_file(path)?;
    let level = parse_level(&settings.level)
        .map_err(|e| AhcError::log_settings(path.display().to_string(), e))?;
    let filter = EnvFilter::new(level.to_string());

    match settings.file {
        Some(file) => {
            let writer = open_log_file(&file, settings.append)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Arc::new(writer))
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
    Ok(())
}

/// Validates a configured level name. `EnvFilter` would accept any bare word
/// as a target directive, so a typo'd level has to be caught before it.
fn parse_level(value: &str) -> std::result::Result<Level, String> {
    value
        .parse::<Level>()
        .map_err(|_| format!("invalid level '{value}', expected trace, debug, info, warn, or error"))
}

fn open_log_file(path: &Path, append: bool) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .map_err(|e| {
            AhcError::log_settings(
                path.display().to_string(),
                format!("cannot open log file: {e}"),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings: LogSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, LogSettings::default());
        assert_eq!(settings.level, "info");
        assert!(settings.file.is_none());
        assert!(settings.append);
    }

    #[test]
    fn test_settings_full() {
        let settings: LogSettings = serde_json::from_str(
            r#"{"level": "debug", "file": "ahc.log", "append": false}"#,
        )
        .unwrap();
        assert_eq!(settings.level, "debug");
        assert_eq!(settings.file.as_deref(), Some(Path::new("ahc.log")));
        assert!(!settings.append);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_level("WARN").unwrap(), Level::WARN);
        assert!(parse_level("debgu").is_err());
        assert!(parse_level("").is_err());
    }

    #[test]
    fn test_settings_missing_file_is_domain_error() {
        let err = LogSettings::from_file("/nonexistent/log-settings.json").unwrap_err();
        assert!(matches!(err, AhcError::LogSettings { .. }));
        assert!(err.to_string().contains("file not found"));
    }
}
