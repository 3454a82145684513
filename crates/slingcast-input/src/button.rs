//! Button state tracking with press-edge detection.

/// State of a single button.
///
/// The launch trigger is edge-sensitive: it must fire on the frame a key
/// goes down and stay quiet while the key is held. `end_frame()` performs
/// the per-frame decay:
///
/// ```text
/// Released ─press()─> JustPressed ─end_frame()─> Held
///     ^                                            │
///     └──────────────────release()────────────────-┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Button went down this frame.
    JustPressed,
    /// Button has been down for more than one frame.
    Held,
    /// Button is up.
    #[default]
    Released,
}

impl ButtonState {
    /// Returns `true` if the button is currently down.
    #[inline]
    #[must_use]
    pub const fn is_pressed(self) -> bool {
        matches!(self, Self::JustPressed | Self::Held)
    }

    /// Returns `true` if the button went down this frame.
    #[inline]
    #[must_use]
    pub const fn is_just_pressed(self) -> bool {
        matches!(self, Self::JustPressed)
    }

    /// Transition to pressed. A press while already down is ignored, so key
    /// repeat never re-triggers the edge.
    #[inline]
    pub fn press(&mut self) {
        if !self.is_pressed() {
            *self = Self::JustPressed;
        }
    }

    /// Transition to released.
    #[inline]
    pub fn release(&mut self) {
        *self = Self::Released;
    }

    /// Called at end of frame to decay the press edge.
    #[inline]
    pub fn end_frame(&mut self) {
        if matches!(*self, Self::JustPressed) {
            *self = Self::Held;
        }
    }
}
