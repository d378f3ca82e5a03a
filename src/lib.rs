//! # Auto Hold Click
//!
//! A background command-line tool that holds a mouse button down while a
//! global toggle hotkey is active.
//!
//! ## Features
//!
//! - Single configurable toggle key (letters, digits, F1-F12, special keys)
//! - Left, right, or middle mouse button holding
//! - JSON configuration file
//! - Optional JSON log settings (level, log file)
//! - Guaranteed button release on exit, including Ctrl+C
//!
//! ## Example
//!
//! ```no_run
//! use auto_hold_click::{Config, EnigoMouse, ToggleController};
//!
//! let config = Config::from_file("config.json").unwrap();
//! let mouse = EnigoMouse::new().unwrap();
//! let mut controller = ToggleController::new(mouse, config.mouse_button);
//!
//! // Each hotkey press flips the holding state.
//! controller.toggle().unwrap();
//! ```
//!
//! ## Configuration
//!
//! ```json
//! {
//!   "toggle_key": "f6",
//!   "mouse_button": "left"
//! }
//! ```

pub mod clicker;
pub mod config;
pub mod error;
pub mod hotkey;
pub mod logging;

pub use clicker::{EnigoMouse, MouseDriver, ToggleController};
pub use config::{Config, MouseButton};
pub use error::{AhcError, Result};
pub use hotkey::HotkeyListener;
pub use logging::LogSettings;
