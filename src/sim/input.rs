//! Keyboard state
//!
//! Written by key listeners between frames, read once per frame.

use std::collections::HashMap;

use super::state::Direction;

pub const KEY_UP: &str = "ArrowUp";
pub const KEY_DOWN: &str = "ArrowDown";

/// Last known pressed/released state per key identifier
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    pressed: HashMap<String, bool>,
}

impl KeyState {
    pub fn press(&mut self, key: &str) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: &str) {
        self.set(key, false);
    }

    fn set(&mut self, key: &str, down: bool) {
        match self.pressed.get_mut(key) {
            Some(flag) => *flag = down,
            None => {
                self.pressed.insert(key.to_owned(), down);
            }
        }
    }

    /// Unknown keys read as released
    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.get(key).copied().unwrap_or(false)
    }

    /// Net player intent from the arrow keys; both held cancel out.
    pub fn direction(&self) -> Option<Direction> {
        match (self.is_pressed(KEY_UP), self.is_pressed(KEY_DOWN)) {
            (true, false) => Some(Direction::Up),
            (false, true) => Some(Direction::Down),
            _ => None,
        }
    }

    /// Whether the game reacts to this key (used to suppress page scrolling)
    pub fn is_control_key(key: &str) -> bool {
        key == KEY_UP || key == KEY_DOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut keys = KeyState::default();
        keys.press(KEY_UP);
        keys.release(KEY_UP);
        keys.press(KEY_UP);
        assert!(keys.is_pressed(KEY_UP));
        keys.release(KEY_UP);
        assert!(!keys.is_pressed(KEY_UP));
    }

    #[test]
    fn test_records_unused_keys() {
        let mut keys = KeyState::default();
        keys.press("a");
        assert!(keys.is_pressed("a"));
        assert_eq!(keys.direction(), None);
    }

    #[test]
    fn test_direction() {
        let mut keys = KeyState::default();
        assert_eq!(keys.direction(), None);
        keys.press(KEY_DOWN);
        assert_eq!(keys.direction(), Some(Direction::Down));
        keys.press(KEY_UP);
        assert_eq!(keys.direction(), None);
        keys.release(KEY_DOWN);
        assert_eq!(keys.direction(), Some(Direction::Up));
    }

    #[test]
    fn test_control_keys() {
        assert!(KeyState::is_control_key("ArrowUp"));
        assert!(KeyState::is_control_key("ArrowDown"));
        assert!(!KeyState::is_control_key("ArrowLeft"));
    }
}
