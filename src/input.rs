//! Player control signal
//!
//! Turns mouse movement or held arrow keys into the single normalized value
//! in [-1, 1] that drives the player paddle.

/// Step applied per key repeat while a direction is held
pub const KEY_STEP: f32 = 0.05;
/// Key repeat period in seconds
pub const KEY_REPEAT: f32 = 0.016;

/// Direction keys (arrows or A/D)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            _ => None,
        }
    }
}

/// Accumulated control state
#[derive(Debug, Clone, Default)]
pub struct ControlInput {
    value: f32,
    left_held: bool,
    right_held: bool,
    /// Time carried toward the next key repeat
    repeat_acc: f32,
    /// Mouse movement only steers while enabled
    pub mouse_enabled: bool,
}

impl ControlInput {
    pub fn new(mouse_enabled: bool) -> Self {
        Self {
            mouse_enabled,
            ..Default::default()
        }
    }

    /// Current control value in [-1, 1]
    #[inline]
    pub fn signal(&self) -> f32 {
        self.value
    }

    /// Mouse at `client_x` inside a viewport `width` pixels wide
    pub fn set_mouse(&mut self, client_x: f32, width: f32) {
        if !self.mouse_enabled || width <= 0.0 {
            return;
        }
        self.value = (client_x / width * 2.0 - 1.0).clamp(-1.0, 1.0);
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = true,
            Key::Right => self.right_held = true,
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Left => self.left_held = false,
            Key::Right => self.right_held = false,
        }
        if !self.left_held && !self.right_held {
            self.repeat_acc = 0.0;
        }
    }

    /// Apply key repeats for `dt` seconds of held keys
    pub fn advance(&mut self, dt: f32) {
        if !self.left_held && !self.right_held {
            return;
        }
        self.repeat_acc += dt.max(0.0);
        while self.repeat_acc >= KEY_REPEAT {
            self.repeat_acc -= KEY_REPEAT;
            if self.left_held {
                self.value = (self.value - KEY_STEP).max(-1.0);
            }
            if self.right_held {
                self.value = (self.value + KEY_STEP).min(1.0);
            }
        }
    }

    /// Back to center with nothing held
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.left_held = false;
        self.right_held = false;
        self.repeat_acc = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_maps_viewport_to_signal() {
        let mut input = ControlInput::new(true);
        input.set_mouse(0.0, 800.0);
        assert_eq!(input.signal(), -1.0);
        input.set_mouse(400.0, 800.0);
        assert_eq!(input.signal(), 0.0);
        input.set_mouse(600.0, 800.0);
        assert_eq!(input.signal(), 0.5);
    }

    #[test]
    fn test_mouse_ignored_when_disabled() {
        let mut input = ControlInput::new(false);
        input.set_mouse(800.0, 800.0);
        assert_eq!(input.signal(), 0.0);
    }

    #[test]
    fn test_key_hold_steps_per_repeat() {
        let mut input = ControlInput::default();
        input.press(Key::Right);
        input.advance(0.010);
        assert_eq!(input.signal(), 0.0);
        input.advance(0.010);
        assert!((input.signal() - 0.05).abs() < 1e-6);
        input.advance(0.032);
        assert!((input.signal() - 0.15).abs() < 1e-5);
    }

    #[test]
    fn test_key_hold_clamps() {
        let mut input = ControlInput::default();
        input.press(Key::Left);
        input.advance(5.0);
        assert_eq!(input.signal(), -1.0);
        input.release(Key::Left);
        input.advance(1.0);
        assert_eq!(input.signal(), -1.0);
    }

    #[test]
    fn test_dom_keys() {
        assert_eq!(Key::from_dom("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_dom("d"), Some(Key::Right));
        assert_eq!(Key::from_dom("Escape"), None);
    }
}
