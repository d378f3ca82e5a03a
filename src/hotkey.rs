//! Global toggle-key registration and press-event delivery.
//!
//! The OS hook delivers events on its own thread; this module turns that into
//! a message-passing boundary. A blocking task polls the `global-hotkey` event
//! receiver and forwards each press of the registered key into a tokio channel,
//! so the toggle state is only ever touched from the consumer side.

use std::time::Duration;

use global_hotkey::hotkey::{Code, HotKey};
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use tokio::sync::mpsc;
use tracing::debug;

use crate::config::TOGGLE_KEY_FIELD;
use crate::error::{AhcError, Result};

/// Registers the toggle key as a global hotkey and forwards its presses.
///
/// The underlying registration lives as long as this struct; dropping it
/// unregisters the hotkey.
pub struct HotkeyListener {
    _manager: GlobalHotKeyManager,
    hotkey_id: u32,
}

impl HotkeyListener {
    /// Registers `code` (with no modifiers) as a global hotkey.
    pub fn new(code: Code) -> Result<Self> {
        let manager = GlobalHotKeyManager::new()
            .map_err(|e| AhcError::hotkey(format!("failed to create hotkey manager: {e}")))?;

        let hotkey = HotKey::new(None, code);
        manager
            .register(hotkey)
            .map_err(|e| AhcError::hotkey(format!("failed to register toggle key '{code}': {e}")))?;
        debug!(toggle_key = %code, "global toggle key registered");

        Ok(Self {
            _manager: manager,
            hotkey_id: hotkey.id(),
        })
    }

    /// Starts forwarding press events of the registered key.
    ///
    /// The polling task runs on the blocking pool and exits once the returned
    /// receiver is dropped. Release events and other hotkeys are ignored.
    pub fn presses(&self) -> mpsc::UnboundedReceiver<()> {
        let (tx, rx) = mpsc::unbounded_channel();
        let hotkey_id = self.hotkey_id;
        let events = GlobalHotKeyEvent::receiver();

        tokio::task::spawn_blocking(move || {
            loop {
                if let Ok(event) = events.try_recv() {
                    if event.id == hotkey_id
                        && event.state == HotKeyState::Pressed
                        && tx.send(()).is_err()
                    {
                        break;
                    }
                }
                if tx.is_closed() {
                    break;
                }
                // Small sleep to prevent busy waiting
                std::thread::sleep(Duration::from_millis(10));
            }
        });

        rx
    }
}

/// Resolves a case-insensitive key name to its key code.
///
/// Accepts letters, digits, F1-F12, and the common special and arrow keys.
/// Anything else is an unrecognized-value config error.
pub fn parse_toggle_key(name: &str) -> Result<Code> {
    let code = match name.to_lowercase().as_str() {
        "a" => Code::KeyA,
        "b" => Code::KeyB,
        "c" => Code::KeyC,
        "d" => Code::KeyD,
        "e" => Code::KeyE,
        "f" => Code::KeyF,
        "g" => Code::KeyG,
        "h" => Code::KeyH,
        "i" => Code::KeyI,
        "j" => Code::KeyJ,
        "k" => Code::KeyK,
        "l" => Code::KeyL,
        "m" => Code::KeyM,
        "n" => Code::KeyN,
        "o" => Code::KeyO,
        "p" => Code::KeyP,
        "q" => Code::KeyQ,
        "r" => Code::KeyR,
        "s" => Code::KeyS,
        "t" => Code::KeyT,
        "u" => Code::KeyU,
        "v" => Code::KeyV,
        "w" => Code::KeyW,
        "x" => Code::KeyX,
        "y" => Code::KeyY,
        "z" => Code::KeyZ,

        "0" => Code::Digit0,
        "1" => Code::Digit1,
        "2" => Code::Digit2,
        "3" => Code::Digit3,
        "4" => Code::Digit4,
        "5" => Code::Digit5,
        "6" => Code::Digit6,
        "7" => Code::Digit7,
        "8" => Code::Digit8,
        "9" => Code::Digit9,

        "f1" => Code::F1,
        "f2" => Code::F2,
        "f3" => Code::F3,
        "f4" => Code::F4,
        "f5" => Code::F5,
        "f6" => Code::F6,
        "f7" => Code::F7,
        "f8" => Code::F8,
        "f9" => Code::F9,
        "f10" => Code::F10,
        "f11" => Code::F11,
        "f12" => Code::F12,

        "space" => Code::Space,
        "enter" | "return" => Code::Enter,
        "tab" => Code::Tab,
        "escape" | "esc" => Code::Escape,
        "backspace" => Code::Backspace,
        "delete" => Code::Delete,
        "insert" => Code::Insert,
        "home" => Code::Home,
        "end" => Code::End,
        "pageup" => Code::PageUp,
        "pagedown" => Code::PageDown,
        "capslock" | "caps_lock" => Code::CapsLock,
        "scrolllock" | "scroll_lock" => Code::ScrollLock,
        "pause" => Code::Pause,

        "up" | "arrowup" => Code::ArrowUp,
        "down" | "arrowdown" => Code::ArrowDown,
        "left" | "arrowleft" => Code::ArrowLeft,
        "right" | "arrowright" => Code::ArrowRight,

        _ => return Err(AhcError::unrecognized_value(TOGGLE_KEY_FIELD, name)),
    };

    Ok(code)
}
