//! Hoopcourt - An interactive 3D basketball court built with Bevy
//!
//! This crate provides all game components, resources, and systems organized into modules.

use bevy::math::{Vec2, Vec3};

// Core modules
pub mod constants;
pub mod helpers;
pub mod settings;
pub mod simulation;
pub mod tuning;

// Game logic modules
pub mod ball;
pub mod camera_rig;
pub mod court;
pub mod generate;
pub mod input;
pub mod scoring;
pub mod shooting;
pub mod ui;

// Re-export commonly used types for convenience
pub use ball::{
    Ball, BallMode, BallSpin, FlightVelocity, GroundVelocity, apply_reset, ball_spin,
    flight_motion, floor_and_boundaries, grounded_motion, reset_ball_state,
};
pub use camera_rig::{OrbitState, orbit_camera, spawn_camera, toggle_orbit};
pub use constants::*;
pub use helpers::*;
pub use input::{PlayerInput, capture_input};
pub use scoring::{
    GoalMessage, RimOutcome, RimTargets, Score, Team, classify_rim_approach,
    resolve_rim_interactions,
};
pub use settings::{CurrentSettings, InitSettings, save_settings_system};
pub use shooting::{ShotPower, adjust_shot_power, launch_shot};
pub use tuning::{GameplayTuning, PhysicsTweaks, apply_global_tuning, load_global_tuning_system};
pub use ui::{
    InstructionsPanel, PowerGaugeFill, ScoreboardText, spawn_hud, update_power_gauge,
    update_scoreboard_text,
};

// =============================================================================
// TRAJECTORY CALCULATION (shared with the headless simulation tests)
// =============================================================================

/// Solved launch state for a shot arc
#[derive(Debug, Clone, Copy)]
pub struct ShotSolution {
    /// Launch velocity in world units per second
    pub velocity: Vec3,
    /// Seconds until the arc crosses the target
    pub flight_time: f32,
}

/// Calculate the launch velocity that carries the ball from `position` to `target`.
/// Horizontal speed comes straight from the power setting; the vertical component
/// is solved so the arc crosses the target height exactly at arrival time.
pub fn solve_shot(
    position: Vec3,
    target: Vec3,
    power: f32,
    base_speed: f32,
    gravity: f32,
) -> ShotSolution {
    let to_target = Vec2::new(target.x - position.x, target.z - position.z);
    let mut distance = to_target.length();

    // Shooting from directly under the rim: aim a minimum-length arc back
    // toward center court instead of dividing by zero
    let direction = if distance < constants::SHOT_MIN_DISTANCE {
        distance = constants::SHOT_MIN_DISTANCE;
        Vec2::new(-target.x.signum(), 0.0)
    } else {
        to_target / distance
    };

    // Power 0.0..1.0 maps to 50%..200% of base launch speed
    let speed = base_speed * (0.5 + power * 1.5);
    let flight_time = distance / speed;

    // dy = vy*t + 0.5*g*t² → vy = (dy - 0.5*g*t²) / t
    let dy = target.y - position.y;
    let vertical = (dy - 0.5 * gravity * flight_time * flight_time) / flight_time;

    ShotSolution {
        velocity: Vec3::new(direction.x * speed, vertical, direction.y * speed),
        flight_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_throw_range_arc_matches_closed_form() {
        // 14 units out at half power: horizontal speed 12 * (0.5 + 0.5*1.5) = 15
        let start = Vec3::new(RIM_X - 14.0, BALL_REST_HEIGHT, 0.0);
        let target = Vec3::new(RIM_X, RIM_HEIGHT, 0.0);
        let shot = solve_shot(start, target, 0.5, SHOT_BASE_SPEED, BALL_GRAVITY);

        let expected_time = 14.0 / 15.0;
        assert!((shot.flight_time - expected_time).abs() < 1e-6);

        let dy = RIM_HEIGHT - BALL_REST_HEIGHT;
        let expected_vertical =
            (dy - 0.5 * BALL_GRAVITY * expected_time * expected_time) / expected_time;
        assert!((shot.velocity.y - expected_vertical).abs() < 1e-6);
        assert!(shot.velocity.y > 0.0, "launch should start upward");

        // The arc peaks on the way: vertical speed has gone negative by arrival
        let arrival_vertical = shot.velocity.y + BALL_GRAVITY * expected_time;
        assert!(arrival_vertical < 0.0, "ball should be descending at the rim");

        let horizontal = Vec2::new(shot.velocity.x, shot.velocity.z).length();
        assert!((horizontal - 15.0).abs() < 1e-4);
    }

    #[test]
    fn power_scales_launch_speed() {
        let start = Vec3::new(0.0, BALL_REST_HEIGHT, 0.0);
        let target = Vec3::new(RIM_X, RIM_HEIGHT, 0.0);

        let soft = solve_shot(start, target, 0.0, SHOT_BASE_SPEED, BALL_GRAVITY);
        let hard = solve_shot(start, target, 1.0, SHOT_BASE_SPEED, BALL_GRAVITY);

        let soft_speed = Vec2::new(soft.velocity.x, soft.velocity.z).length();
        let hard_speed = Vec2::new(hard.velocity.x, hard.velocity.z).length();
        assert!((soft_speed - 6.0).abs() < 1e-4);
        assert!((hard_speed - 24.0).abs() < 1e-4);
        assert!(hard.flight_time < soft.flight_time);
    }

    #[test]
    fn under_rim_shot_aims_back_toward_center() {
        let start = Vec3::new(RIM_X, BALL_REST_HEIGHT, 0.0);
        let target = Vec3::new(RIM_X, RIM_HEIGHT, 0.0);
        let shot = solve_shot(start, target, 0.5, SHOT_BASE_SPEED, BALL_GRAVITY);

        assert!(
            shot.velocity.x < 0.0,
            "degenerate shot should point back toward center court"
        );
        assert_eq!(shot.velocity.z, 0.0);
        let expected_time = SHOT_MIN_DISTANCE / 15.0;
        assert!((shot.flight_time - expected_time).abs() < 1e-6);
    }
}
