//! The hold-toggle state machine and the mouse injection seam.
//!
//! `ToggleController` is the single mutation point for the holding flag: every
//! hotkey press flips it, pressing or releasing the configured button through a
//! [`MouseDriver`]. Dropping the controller releases a still-held button, so
//! the OS never keeps a phantom button press after the process exits.

use enigo::{Button, Direction, Enigo, Mouse, Settings};
use tracing::{debug, info};

use crate::config::MouseButton;
use crate::error::{AhcError, Result};

/// OS mouse-button injection.
///
/// The production implementation is [`EnigoMouse`]; tests substitute a
/// recording driver to assert press/release ordering.
pub trait MouseDriver {
    fn press(&mut self, button: MouseButton) -> Result<()>;
    fn release(&mut self, button: MouseButton) -> Result<()>;
}

/// Mouse driver backed by the `enigo` input-injection library.
pub struct EnigoMouse {
    enigo: Enigo,
}

impl EnigoMouse {
    pub fn new() -> Result<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| AhcError::mouse(format!("failed to create input backend: {e}")))?;
        Ok(Self { enigo })
    }
}

impl From<MouseButton> for Button {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Button::Left,
            MouseButton::Right => Button::Right,
            MouseButton::Middle => Button::Middle,
        }
    }
}

impl MouseDriver for EnigoMouse {
    fn press(&mut self, button: MouseButton) -> Result<()> {
        self.enigo
            .button(button.into(), Direction::Press)
            .map_err(|e| AhcError::mouse(format!("failed to press {button} button: {e}")))
    }

    fn release(&mut self, button: MouseButton) -> Result<()> {
        self.enigo
            .button(button.into(), Direction::Release)
            .map_err(|e| AhcError::mouse(format!("failed to release {button} button: {e}")))
    }
}

/// Two-state toggle: Idle (not holding, initial) and Holding.
///
/// The flag only flips after the injection call succeeds, so a failed press
/// leaves the controller Idle and a failed release leaves it Holding for the
/// shutdown path to retry.
pub struct ToggleController<M: MouseDriver> {
    mouse: M,
    button: MouseButton,
    holding: bool,
}

impl<M: MouseDriver> ToggleController<M> {
    pub fn new(mouse: M, button: MouseButton) -> Self {
        Self {
            mouse,
            button,
            holding: false,
        }
    }

    /// Whether the button is currently held.
    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// Flips the holding state, pressing or releasing the configured button.
    pub fn toggle(&mut self) -> Result<()> {
        if self.holding {
            self.mouse.release(self.button)?;
            self.holding = false;
            debug!(button = %self.button, "hold released");
        } else {
            self.mouse.press(self.button)?;
            self.holding = true;
            debug!(button = %self.button, "hold started");
        }
        Ok(())
    }

    /// Releases the button if it is still held. No-op when Idle, so calling
    /// this more than once emits at most one release.
    pub fn release_if_holding(&mut self) -> Result<()> {
        if self.holding {
            self.mouse.release(self.button)?;
            self.holding = false;
            info!(button = %self.button, "released held button on shutdown");
        }
        Ok(())
    }
}

impl<M: MouseDriver> Drop for ToggleController<M> {
    fn drop(&mut self) {
        // Last-resort cleanup; errors cannot propagate out of drop.
        let _ = self.release_if_holding();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum MouseEvent {
        Press(MouseButton),
        Release(MouseButton),
    }

    /// Records injected events instead of touching the OS.
    #[derive(Default)]
    struct RecordingMouse {
        events: Vec<MouseEvent>,
    }

    impl MouseDriver for RecordingMouse {
        fn press(&mut self, button: MouseButton) -> Result<()> {
            self.events.push(MouseEvent::Press(button));
            Ok(())
        }

        fn release(&mut self, button: MouseButton) -> Result<()> {
            self.events.push(MouseEvent::Release(button));
            Ok(())
        }
    }

    impl MouseDriver for &mut RecordingMouse {
        fn press(&mut self, button: MouseButton) -> Result<()> {
            (**self).press(button)
        }

        fn release(&mut self, button: MouseButton) -> Result<()> {
            (**self).release(button)
        }
    }

    #[test]
    fn test_starts_idle() {
        let controller = ToggleController::new(RecordingMouse::default(), MouseButton::Left);
        assert!(!controller.is_holding());
    }

    #[test]
    fn test_two_toggles_press_then_release() {
        let mut mouse = RecordingMouse::default();
        let mut controller = ToggleController::new(&mut mouse, MouseButton::Left);

        controller.toggle().unwrap();
        assert!(controller.is_holding());
        controller.toggle().unwrap();
        assert!(!controller.is_holding());
        drop(controller);

        assert_eq!(
            mouse.events,
            vec![
                MouseEvent::Press(MouseButton::Left),
                MouseEvent::Release(MouseButton::Left),
            ]
        );
    }

    #[test]
    fn test_odd_toggles_then_shutdown_releases_once() {
        let mut mouse = RecordingMouse::default();
        let mut controller = ToggleController::new(&mut mouse, MouseButton::Right);

        for _ in 0..3 {
            controller.toggle().unwrap();
        }
        assert!(controller.is_holding());

        controller.release_if_holding().unwrap();
        assert!(!controller.is_holding());
        drop(controller);

        let releases = mouse
            .events
            .iter()
            .filter(|e| matches!(e, MouseEvent::Release(_)))
            .count();
        assert_eq!(mouse.events.len(), 4);
        assert_eq!(releases, 2);
        assert_eq!(
            mouse.events.last(),
            Some(&MouseEvent::Release(MouseButton::Right))
        );
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let mut mouse = RecordingMouse::default();
        let mut controller = ToggleController::new(&mut mouse, MouseButton::Middle);

        controller.toggle().unwrap();
        controller.release_if_holding().unwrap();
        controller.release_if_holding().unwrap();
        drop(controller);

        assert_eq!(
            mouse.events,
            vec![
                MouseEvent::Press(MouseButton::Middle),
                MouseEvent::Release(MouseButton::Middle),
            ]
        );
    }

    #[test]
    fn test_shutdown_noop_when_idle() {
        let mut mouse = RecordingMouse::default();
        let mut controller = ToggleController::new(&mut mouse, MouseButton::Left);

        controller.release_if_holding().unwrap();
        drop(controller);

        assert!(mouse.events.is_empty());
    }

    #[test]
    fn test_drop_releases_held_button() {
        let mut mouse = RecordingMouse::default();
        {
            let mut controller = ToggleController::new(&mut mouse, MouseButton::Left);
            controller.toggle().unwrap();
        }

        assert_eq!(
            mouse.events,
            vec![
                MouseEvent::Press(MouseButton::Left),
                MouseEvent::Release(MouseButton::Left),
            ]
        );
    }
}
