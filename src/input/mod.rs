//! Input module - PlayerInput resource and capture_input system

use bevy::prelude::*;

/// Buffered input state for the ball controls
#[derive(Resource, Default)]
pub struct PlayerInput {
    pub move_left: bool,     // Arrow left held
    pub move_right: bool,    // Arrow right held
    pub move_forward: bool,  // Arrow up held - away from viewer
    pub move_back: bool,     // Arrow down held - toward viewer
    pub power_up_held: bool, // W - raise shot power
    pub power_down_held: bool, // S - lower shot power
    pub shoot_pressed: bool, // Space - fire a shot
    pub reset_pressed: bool, // R - reset ball to center
    pub orbit_toggle_pressed: bool, // O - toggle orbit camera
}

/// Runs in Update to capture input state before it's cleared.
/// Held flags are overwritten every frame; one-shot commands accumulate
/// until the consuming system clears them, so presses between fixed
/// ticks are never lost.
pub fn capture_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    // Movement flags (continuous - overwrite each frame)
    input.move_left = keyboard.pressed(KeyCode::ArrowLeft);
    input.move_right = keyboard.pressed(KeyCode::ArrowRight);
    input.move_forward = keyboard.pressed(KeyCode::ArrowUp);
    input.move_back = keyboard.pressed(KeyCode::ArrowDown);

    // Shot power adjustment (continuous)
    input.power_up_held = keyboard.pressed(KeyCode::KeyW);
    input.power_down_held = keyboard.pressed(KeyCode::KeyS);

    // Shoot (Space) - accumulate until consumed
    if keyboard.just_pressed(KeyCode::Space) {
        input.shoot_pressed = true;
    }

    // Reset (R) - accumulate until consumed
    if keyboard.just_pressed(KeyCode::KeyR) {
        input.reset_pressed = true;
    }

    // Orbit camera toggle (O) - accumulate until consumed
    if keyboard.just_pressed(KeyCode::KeyO) {
        input.orbit_toggle_pressed = true;
    }
}
