//! Logical key bindings.
//!
//! Systems never look at physical key codes directly; they ask the bindings
//! which logical keys went down or up this frame.

use bevy::prelude::*;

use crate::player::Direction;

/// A logical key the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKey {
    Move(Direction),
    /// Interact with objects and portals, advance dialogue
    Action,
    /// Open or close the inventory panel
    Inventory,
    /// Close any overlay
    Cancel,
    /// Start the game from the title screen
    Confirm,
}

/// Mapping from physical keys to logical keys. Several physical keys may map to
/// the same logical key.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(KeyCode, GameKey)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(vec![
            (KeyCode::ArrowUp, GameKey::Move(Direction::Up)),
            (KeyCode::ArrowDown, GameKey::Move(Direction::Down)),
            (KeyCode::ArrowLeft, GameKey::Move(Direction::Left)),
            (KeyCode::ArrowRight, GameKey::Move(Direction::Right)),
            (KeyCode::KeyW, GameKey::Move(Direction::Up)),
            (KeyCode::KeyS, GameKey::Move(Direction::Down)),
            (KeyCode::KeyA, GameKey::Move(Direction::Left)),
            (KeyCode::KeyD, GameKey::Move(Direction::Right)),
            (KeyCode::KeyZ, GameKey::Action),
            (KeyCode::KeyE, GameKey::Action),
            (KeyCode::KeyC, GameKey::Inventory),
            (KeyCode::KeyI, GameKey::Inventory),
            (KeyCode::KeyX, GameKey::Cancel),
            (KeyCode::Escape, GameKey::Cancel),
            (KeyCode::Enter, GameKey::Confirm),
            (KeyCode::Space, GameKey::Confirm),
        ])
    }
}

impl KeyBindings {
    pub fn new(bindings: Vec<(KeyCode, GameKey)>) -> Self {
        Self { bindings }
    }

    /// Logical key bound to a physical key.
    pub fn lookup(&self, key: KeyCode) -> Option<GameKey> {
        self.bindings
            .iter()
            .find(|(code, _)| *code == key)
            .map(|(_, game_key)| *game_key)
    }

    /// Physical keys bound to any of `wanted`, in binding order.
    pub fn keys_for<'a>(&'a self, wanted: &'a [GameKey]) -> impl Iterator<Item = KeyCode> + 'a {
        self.bindings
            .iter()
            .filter(|(_, game_key)| wanted.contains(game_key))
            .map(|(code, _)| *code)
    }

    /// Logical keys that went down this frame.
    pub fn just_pressed<'a>(
        &'a self,
        keyboard: &'a ButtonInput<KeyCode>,
    ) -> impl Iterator<Item = GameKey> + 'a {
        keyboard.get_just_pressed().filter_map(|key| self.lookup(*key))
    }

    /// Logical keys that went up this frame.
    pub fn just_released<'a>(
        &'a self,
        keyboard: &'a ButtonInput<KeyCode>,
    ) -> impl Iterator<Item = GameKey> + 'a {
        keyboard.get_just_released().filter_map(|key| self.lookup(*key))
    }
}

/// Short on-screen name of a physical key, e.g. "Z" or "Left".
pub fn key_label(code: KeyCode) -> String {
    let name = format!("{:?}", code);
    let short = name
        .strip_prefix("Key")
        .or_else(|| name.strip_prefix("Arrow"))
        .or_else(|| name.strip_prefix("Digit"))
        .unwrap_or(name.as_str());
    short.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_share_directions() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.lookup(KeyCode::ArrowLeft), Some(GameKey::Move(Direction::Left)));
        assert_eq!(bindings.lookup(KeyCode::KeyA), Some(GameKey::Move(Direction::Left)));
        assert_eq!(bindings.lookup(KeyCode::KeyZ), Some(GameKey::Action));
        assert_eq!(bindings.lookup(KeyCode::F1), None);
    }

    #[test]
    fn keys_for_follows_binding_order() {
        let bindings = KeyBindings::default();
        let action: Vec<_> = bindings.keys_for(&[GameKey::Action]).collect();
        assert_eq!(action, vec![KeyCode::KeyZ, KeyCode::KeyE]);
        assert_eq!(bindings.keys_for(&[GameKey::Move(Direction::Up)]).count(), 2);
    }

    #[test]
    fn key_labels_drop_the_code_prefix() {
        assert_eq!(key_label(KeyCode::KeyZ), "Z");
        assert_eq!(key_label(KeyCode::ArrowLeft), "Left");
        assert_eq!(key_label(KeyCode::Escape), "Escape");
    }

    #[test]
    fn reports_pressed_and_released_keys() {
        let bindings = KeyBindings::default();
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyC);
        keyboard.press(KeyCode::F1);

        let pressed: Vec<_> = bindings.just_pressed(&keyboard).collect();
        assert_eq!(pressed, vec![GameKey::Inventory]);

        keyboard.release(KeyCode::KeyC);
        let released: Vec<_> = bindings.just_released(&keyboard).collect();
        assert_eq!(released, vec![GameKey::Inventory]);
    }
}
