//! Utility functions for hoopcourt

use bevy::prelude::*;

/// Project a 3D vector onto the court plane (x, z).
pub fn flatten(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Reflect a horizontal velocity about an outward unit normal.
/// Callers apply their own retention scaling afterward.
pub fn reflect_about_normal(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Move a value toward a target by a maximum delta
pub fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}

/// Camera-relative steering basis on the court plane: (forward, right),
/// both unit length. Falls back to world axes when the camera looks
/// straight down and the projection degenerates.
pub fn camera_ground_basis(camera: &Transform) -> (Vec2, Vec2) {
    let forward = flatten(*camera.forward());
    let right = flatten(*camera.right());

    let forward = if forward.length_squared() > 1e-6 {
        forward.normalize()
    } else {
        Vec2::new(0.0, -1.0)
    };
    let right = if right.length_squared() > 1e-6 {
        right.normalize()
    } else {
        Vec2::new(1.0, 0.0)
    };

    (forward, right)
}
