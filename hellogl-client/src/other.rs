use std::collections::HashSet;

use sdl2::keyboard::Keycode;

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
    pub released: HashSet<Keycode>,
}

impl KeyboardState {
    /// Forgets the keys pressed and released during the previous frame.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    pub fn key_down(&mut self, keycode: Keycode) {
        self.down.insert(keycode);
        self.pressed.insert(keycode);
    }

    pub fn key_up(&mut self, keycode: Keycode) {
        self.down.remove(&keycode);
        self.released.insert(keycode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_lasts_one_frame() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Keycode::Space);
        assert!(keyboard.pressed.contains(&Keycode::Space));

        keyboard.begin_frame();
        assert!(!keyboard.pressed.contains(&Keycode::Space));
        assert!(keyboard.down.contains(&Keycode::Space));

        keyboard.key_up(Keycode::Space);
        assert!(!keyboard.down.contains(&Keycode::Space));
        assert!(keyboard.released.contains(&Keycode::Space));
    }
}
