//! Hover ownership for a single pointing device.
//!
//! A pointer (mouse, or one VR hand) hovers at most one control at a time.
//! The arbiter turns per-frame hit results into the enter/exit/press/release
//! calls the controls expect, and guarantees that letting go of the trigger
//! releases the last hovered control even after the pointer has left it.

/// What a pointer saw this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerFrame<T> {
    /// Control under the pointer, if any.
    pub hit: Option<T>,
    pub trigger_pressed: bool,
    pub trigger_released: bool,
}

impl<T> Default for PointerFrame<T> {
    fn default() -> Self {
        Self { hit: None, trigger_pressed: false, trigger_released: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction<T> {
    HoverEnter(T),
    HoverExit(T),
    Press(T),
    Release(T),
}

#[derive(Debug, Clone)]
pub struct HoverArbiter<T> {
    hovered: Option<T>,
}

impl<T> Default for HoverArbiter<T> {
    fn default() -> Self {
        Self { hovered: None }
    }
}

impl<T: Copy + Eq> HoverArbiter<T> {
    pub fn new() -> Self {
        Self { hovered: None }
    }

    pub fn hovered(&self) -> Option<T> {
        self.hovered
    }

    /// Actions to apply this frame, in order.
    pub fn update(&mut self, frame: PointerFrame<T>) -> Vec<PointerAction<T>> {
        let mut actions = Vec::new();

        if frame.trigger_released {
            if let Some(last) = self.hovered {
                actions.push(PointerAction::Release(last));
            }
        }

        match frame.hit {
            None => {
                if let Some(last) = self.hovered.take() {
                    actions.push(PointerAction::HoverExit(last));
                }
            }
            Some(target) => {
                if self.hovered != Some(target) {
                    if let Some(last) = self.hovered {
                        actions.push(PointerAction::HoverExit(last));
                    }
                    actions.push(PointerAction::HoverEnter(target));
                    self.hovered = Some(target);
                }
                if frame.trigger_pressed {
                    actions.push(PointerAction::Press(target));
                }
            }
        }

        actions
    }

    /// Drop hover without a replacement, e.g. when the device disconnects.
    pub fn reset(&mut self) -> Option<PointerAction<T>> {
        self.hovered.take().map(PointerAction::HoverExit)
    }
}
