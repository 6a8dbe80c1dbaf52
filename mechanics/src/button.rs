use std::fmt;

use crate::math::Vec3f;

/// Lifecycle of a pendant button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Pressed,
    Released,
}

/// Direction vector emitted on press (as configured) and on release (negated).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonSignal {
    pub kind: SignalKind,
    pub direction: Vec3f,
}

/// Which palette entry the cap should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTint {
    Normal,
    Hover,
    Pressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLook {
    pub tint: ButtonTint,
    pub depressed: bool,
}

pub type Listener = Box<dyn FnMut(&ButtonSignal) + Send + Sync>;

/// Hover/press state machine for one directional control.
///
/// Every `Pressed` signal is matched by exactly one `Released` signal carrying
/// the negated vector, including when the pointer leaves a held button.
pub struct RemoteButton {
    direction: Vec3f,
    hovering: bool,
    pressed: bool,
    listeners: Vec<Listener>,
}

impl fmt::Debug for RemoteButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteButton")
            .field("direction", &self.direction)
            .field("state", &self.state())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl RemoteButton {
    pub fn new(direction: Vec3f) -> Self {
        Self { direction, hovering: false, pressed: false, listeners: Vec::new() }
    }

    pub fn direction(&self) -> Vec3f {
        self.direction
    }

    /// Registers a callback invoked synchronously for every emitted signal.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ButtonSignal) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> ButtonState {
        match (self.pressed, self.hovering) {
            (true, _) => ButtonState::Pressed,
            (false, true) => ButtonState::Hovered,
            (false, false) => ButtonState::Idle,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn look(&self) -> ButtonLook {
        let tint = match self.state() {
            ButtonState::Pressed => ButtonTint::Pressed,
            ButtonState::Hovered => ButtonTint::Hover,
            ButtonState::Idle => ButtonTint::Normal,
        };
        ButtonLook { tint, depressed: self.pressed }
    }

    /// Appearance only; never emits.
    pub fn hover_enter(&mut self) {
        self.hovering = true;
    }

    /// Leaving a held button forces a release so no signal stays asserted.
    pub fn hover_exit(&mut self) -> Option<ButtonSignal> {
        self.hovering = false;
        self.release()
    }

    /// Emits the configured direction. Duplicate presses are ignored.
    pub fn press(&mut self) -> Option<ButtonSignal> {
        if self.pressed {
            return None;
        }
        self.pressed = true;
        Some(self.emit(SignalKind::Pressed, self.direction))
    }

    /// Emits the negated direction. Releasing an unpressed button is ignored.
    pub fn release(&mut self) -> Option<ButtonSignal> {
        if !self.pressed {
            return None;
        }
        self.pressed = false;
        Some(self.emit(SignalKind::Released, -self.direction))
    }

    fn emit(&mut self, kind: SignalKind, direction: Vec3f) -> ButtonSignal {
        let signal = ButtonSignal { kind, direction };
        for listener in &mut self.listeners {
            listener(&signal);
        }
        signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_cycle_never_emits() {
        let mut b = RemoteButton::new(Vec3f::Z);
        b.hover_enter();
        assert_eq!(b.state(), ButtonState::Hovered);
        assert_eq!(b.look().tint, ButtonTint::Hover);
        assert_eq!(b.hover_exit(), None);
        assert_eq!(b.state(), ButtonState::Idle);
    }

    #[test]
    fn release_returns_to_hover_when_pointer_stays() {
        let mut b = RemoteButton::new(Vec3f::X);
        b.hover_enter();
        let down = b.press().unwrap();
        assert_eq!(down.kind, SignalKind::Pressed);
        assert_eq!(down.direction, Vec3f::X);
        assert_eq!(b.look(), ButtonLook { tint: ButtonTint::Pressed, depressed: true });

        let up = b.release().unwrap();
        assert_eq!(up.kind, SignalKind::Released);
        assert_eq!(up.direction, Vec3f::NEG_X);
        assert_eq!(b.state(), ButtonState::Hovered);
    }

    #[test]
    fn exit_while_pressed_forces_release() {
        let mut b = RemoteButton::new(Vec3f::NEG_Y);
        b.hover_enter();
        b.press();
        let forced = b.hover_exit().unwrap();
        assert_eq!(forced.direction, Vec3f::Y);
        assert_eq!(b.state(), ButtonState::Idle);
        assert_eq!(b.release(), None);
    }

    #[test]
    fn press_and_release_are_idempotent() {
        let mut b = RemoteButton::new(Vec3f::Y);
        assert!(b.press().is_some());
        assert!(b.press().is_none());
        assert!(b.release().is_some());
        assert!(b.release().is_none());
    }
}
