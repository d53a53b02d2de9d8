//! Orbit camera around the court

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

use crate::constants::*;
use crate::input::PlayerInput;
use crate::settings::CurrentSettings;

/// Spherical orbit pose around a focus point
#[derive(Resource, Debug, Clone, Copy)]
pub struct OrbitState {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
    /// When false the pose freezes and mouse input is ignored
    pub enabled: bool,
}

impl Default for OrbitState {
    fn default() -> Self {
        // Opening shot: up and back from center court, looking at the floor
        let offset = CAMERA_START;
        let horizontal = Vec2::new(offset.x, offset.z).length();
        Self {
            yaw: offset.x.atan2(offset.z),
            pitch: offset.y.atan2(horizontal),
            distance: offset.length(),
            target: Vec3::ZERO,
            enabled: true,
        }
    }
}

impl OrbitState {
    /// World transform for the current pose
    pub fn transform(&self) -> Transform {
        let direction = Vec3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        );
        Transform::from_translation(self.target + direction * self.distance)
            .looking_at(self.target, Vec3::Y)
    }
}

/// Spawn the 3D camera at the opening pose
pub fn spawn_camera(mut commands: Commands, orbit: Res<OrbitState>) {
    commands.spawn((Camera3d::default(), orbit.transform()));
}

/// Toggle mouse orbit on the O key and remember the choice
pub fn toggle_orbit(
    mut input: ResMut<PlayerInput>,
    mut orbit: ResMut<OrbitState>,
    mut settings: ResMut<CurrentSettings>,
) {
    if !input.orbit_toggle_pressed {
        return;
    }
    input.orbit_toggle_pressed = false;

    orbit.enabled = !orbit.enabled;
    settings.settings.orbit_enabled = orbit.enabled;
    settings.mark_dirty();
    info!(
        "Camera orbit {}",
        if orbit.enabled { "enabled" } else { "disabled" }
    );
}

/// Drag with the left mouse button to orbit, scroll to zoom.
/// Rewrites the camera transform from the orbit pose every frame.
pub fn orbit_camera(
    mut orbit: ResMut<OrbitState>,
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    if orbit.enabled {
        if buttons.pressed(MouseButton::Left) && motion.delta != Vec2::ZERO {
            orbit.yaw += motion.delta.x * ORBIT_SENSITIVITY;
            orbit.pitch = (orbit.pitch - motion.delta.y * ORBIT_SENSITIVITY)
                .clamp(ORBIT_PITCH_MIN, ORBIT_PITCH_MAX);
        }
        if scroll.delta.y != 0.0 {
            orbit.distance = (orbit.distance - scroll.delta.y * ORBIT_ZOOM_STEP)
                .clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        }
    }

    if let Ok(mut transform) = camera_query.single_mut() {
        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose_matches_opening_camera() {
        let orbit = OrbitState::default();
        let transform = orbit.transform();
        assert!(transform.translation.distance(CAMERA_START) < 1e-4);

        // Looking at center court means forward points at the origin
        let forward = *transform.forward();
        let to_origin = (Vec3::ZERO - transform.translation).normalize();
        assert!(forward.distance(to_origin) < 1e-5);
    }

    #[test]
    fn pose_distance_is_preserved() {
        let orbit = OrbitState {
            yaw: 1.2,
            pitch: 0.7,
            distance: 12.0,
            target: Vec3::new(3.0, 0.0, -2.0),
            enabled: true,
        };
        let transform = orbit.transform();
        assert!((transform.translation.distance(orbit.target) - 12.0).abs() < 1e-4);
    }
}
