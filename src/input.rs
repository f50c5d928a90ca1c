//! Per-frame input snapshot consumed by scenes
//!
//! The window layer fills an `InputState` once per frame; scenes only read
//! it. Key and button codes are small integers (GLFW numbering).

/// Key codes understood by the scenes
pub mod keys {
    pub const A: i32 = 65;
    pub const D: i32 = 68;
    pub const E: i32 = 69;
    pub const Q: i32 = 81;
    pub const S: i32 = 83;
    pub const W: i32 = 87;
    pub const LEFT_SHIFT: i32 = 340;
    pub const RIGHT_SHIFT: i32 = 344;
}

/// Mouse button codes
pub mod buttons {
    pub const LEFT: i32 = 0;
    pub const RIGHT: i32 = 1;
    pub const MIDDLE: i32 = 2;
}

const KEY_COUNT: usize = 512;
const BUTTON_COUNT: usize = 16;

/// Immutable view of keyboard and mouse for one frame
#[derive(Clone)]
pub struct InputState {
    keys: [bool; KEY_COUNT],
    mouse_buttons: [bool; BUTTON_COUNT],
    /// Cursor position in framebuffer pixels
    pub mouse_x: f32,
    pub mouse_y: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: [false; KEY_COUNT],
            mouse_buttons: [false; BUTTON_COUNT],
            mouse_x: 0.0,
            mouse_y: 0.0,
        }
    }

    /// Unknown codes read as "not down"
    pub fn is_key_down(&self, key: i32) -> bool {
        usize::try_from(key)
            .ok()
            .and_then(|k| self.keys.get(k))
            .copied()
            .unwrap_or(false)
    }

    pub fn is_mouse_down(&self, button: i32) -> bool {
        usize::try_from(button)
            .ok()
            .and_then(|b| self.mouse_buttons.get(b))
            .copied()
            .unwrap_or(false)
    }

    /// Codes outside the table are ignored
    pub fn set_key(&mut self, key: i32, down: bool) {
        if let Some(slot) = usize::try_from(key).ok().and_then(|k| self.keys.get_mut(k)) {
            *slot = down;
        }
    }

    pub fn set_mouse_button(&mut self, button: i32, down: bool) {
        if let Some(slot) = usize::try_from(button)
            .ok()
            .and_then(|b| self.mouse_buttons.get_mut(b))
        {
            *slot = down;
        }
    }

    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a scene's update step gets for one frame
#[derive(Clone, Copy)]
pub struct FrameContext<'a> {
    /// Seconds since the previous frame
    pub dt: f32,
    pub input: &'a InputState,
    /// Cursor is over the rendered viewport
    pub viewport_hovered: bool,
}

impl<'a> FrameContext<'a> {
    pub fn new(dt: f32, input: &'a InputState, viewport_hovered: bool) -> Self {
        Self {
            dt,
            input,
            viewport_hovered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        let mut input = InputState::new();
        assert!(!input.is_key_down(keys::W));
        input.set_key(keys::W, true);
        assert!(input.is_key_down(keys::W));
        input.set_key(keys::W, false);
        assert!(!input.is_key_down(keys::W));
    }

    #[test]
    fn test_out_of_range_codes_are_not_down() {
        let mut input = InputState::new();
        input.set_key(-1, true);
        input.set_key(10_000, true);
        input.set_mouse_button(99, true);
        assert!(!input.is_key_down(-1));
        assert!(!input.is_key_down(10_000));
        assert!(!input.is_mouse_down(99));
    }

    #[test]
    fn test_mouse_state() {
        let mut input = InputState::new();
        input.set_mouse_button(buttons::RIGHT, true);
        input.set_mouse_position(12.5, 40.0);
        assert!(input.is_mouse_down(buttons::RIGHT));
        assert!(!input.is_mouse_down(buttons::LEFT));
        assert_eq!((input.mouse_x, input.mouse_y), (12.5, 40.0));
    }
}
