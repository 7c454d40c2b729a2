//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::LocomotionInput;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<LocomotionInput>,
) {
    let mut x = keyboard_axis(&keyboard);
    let mut jump = keyboard.just_pressed(KeyCode::Space)
        || keyboard.just_pressed(KeyCode::KeyW)
        || keyboard.just_pressed(KeyCode::ArrowUp);

    // Whichever device is pushed further wins the axis
    for gamepad in &gamepads {
        let stick = gamepad.left_stick().x;
        if stick.abs() > x.abs() {
            x = stick;
        }
        jump |= gamepad.just_pressed(GamepadButton::South);
    }

    input.axis = x.clamp(-1.0, 1.0);
    input.jump_just_pressed = jump;
}

pub(crate) fn keyboard_axis(keyboard: &ButtonInput<KeyCode>) -> f32 {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    x
}
