//! Keyboard polling into a plain input snapshot.

use bevy::prelude::*;

/// Keys relevant to the player this frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub attack: bool,
    /// Inventory slot whose number key was pressed this frame
    pub use_slot: Option<usize>,
}

const SLOT_KEYS: [KeyCode; 9] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

/// Read arrows/WASD, Space for attack and 1-9 for item slots.
pub fn read_keyboard_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<InputState>) {
    input.left = keyboard.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]);
    input.right = keyboard.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]);
    input.up = keyboard.any_pressed([KeyCode::ArrowUp, KeyCode::KeyW]);
    input.down = keyboard.any_pressed([KeyCode::ArrowDown, KeyCode::KeyS]);
    input.attack = keyboard.pressed(KeyCode::Space);
    input.use_slot = SLOT_KEYS.iter().position(|key| keyboard.just_pressed(*key));
}
