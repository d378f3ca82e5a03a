//! Configuration loading and validation.
//!
//! The config file is a small JSON object with two required string fields:
//!
//! ```json
//! {
//!   "toggle_key": "f6",
//!   "mouse_button": "left"
//! }
//! ```
//!
//! Both values are matched case-insensitively against a fixed set of names.
//! Loading fails fast on a missing file, malformed JSON, a missing or empty
//! field, or a value outside the supported set; there is no fallback config.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use global_hotkey::hotkey::Code;
use serde::Deserialize;

use crate::error::{AhcError, Result};
use crate::hotkey::parse_toggle_key;

/// JSON field name for the toggle key.
pub const TOGGLE_KEY_FIELD: &str = "toggle_key";
/// JSON field name for the mouse button.
pub const MOUSE_BUTTON_FIELD: &str = "mouse_button";

/// The mouse button held down while the toggle is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Parses a button name case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "middle" => Some(Self::Middle),
            _ => None,
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Middle => "middle",
        };
        f.write_str(name)
    }
}

/// Raw shape of the config file before validation.
///
/// Fields stay optional so that absence and emptiness can be reported as
/// distinct errors instead of a generic deserialization failure.
#[derive(Debug, Deserialize)]
struct RawConfig {
    toggle_key: Option<String>,
    mouse_button: Option<String>,
}

/// Validated application configuration. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key whose press flips the holding state.
    pub toggle_key: Code,
    /// Button to hold while toggled on.
    pub mouse_button: MouseButton,
}

impl Config {
    /// Loads and validates the configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AhcError::config_not_found(path.display().to_string())
            } else {
                AhcError::Io(e)
            }
        })?;

        let raw: RawConfig = serde_json::from_str(&text)
            .map_err(|e| AhcError::config_parse(path.display().to_string(), e.to_string()))?;

        let key_name = require(raw.toggle_key, TOGGLE_KEY_FIELD)?;
        let button_name = require(raw.mouse_button, MOUSE_BUTTON_FIELD)?;

        let toggle_key = parse_toggle_key(&key_name)?;
        let mouse_button = MouseButton::parse(&button_name)
            .ok_or_else(|| AhcError::unrecognized_value(MOUSE_BUTTON_FIELD, &button_name))?;

        Ok(Self {
            toggle_key,
            mouse_button,
        })
    }
}

fn require(value: Option<String>, field: &str) -> Result<String> {
    match value {
        None => Err(AhcError::missing_field(field)),
        Some(v) if v.is_empty() => Err(AhcError::empty_field(field)),
        Some(v) => Ok(v),
    }
}
