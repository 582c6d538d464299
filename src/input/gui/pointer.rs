use winit::event::MouseButton;

/// Tracks pointer position and button state to turn cursor motion into
/// pan deltas.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: (f64, f64),
    left_down: bool,
    right_down: bool,
}

impl PointerTracker {
    /// Records a new cursor position; returns the motion delta if a pan
    /// button is held.
    pub fn moved_to(&mut self, position: (f64, f64)) -> Option<(f64, f64)> {
        let delta = (position.0 - self.position.0, position.1 - self.position.1);
        self.position = position;

        if self.left_down || self.right_down {
            Some(delta)
        } else {
            None
        }
    }

    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left_down = pressed,
            MouseButton::Right => self.right_down = pressed,
            _ => {}
        }
    }

    /// Drops any held buttons, e.g. when egui takes over the pointer.
    pub fn release_all(&mut self) {
        self.left_down = false;
        self.right_down = false;
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        self.position
    }
}
