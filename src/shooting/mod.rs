//! Shot power controller and launch system

use bevy::prelude::*;

use crate::ball::{Ball, BallMode, FlightVelocity, GroundVelocity};
use crate::constants::*;
use crate::helpers::move_toward;
use crate::input::PlayerInput;
use crate::scoring::RimTargets;
use crate::solve_shot;
use crate::tuning::PhysicsTweaks;

/// Normalized launch strength in [0, 1], shared between the HUD gauge
/// and the launch math. Copied by value at launch, so adjusting it
/// mid-flight never affects a live shot.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ShotPower(pub f32);

impl Default for ShotPower {
    fn default() -> Self {
        Self(SHOT_POWER_DEFAULT)
    }
}

/// Step shot power toward either end of its range while the adjust
/// keys are held
pub fn adjust_shot_power(
    input: Res<PlayerInput>,
    tweaks: Res<PhysicsTweaks>,
    mut power: ResMut<ShotPower>,
) {
    if input.power_up_held {
        power.0 = move_toward(power.0, 1.0, tweaks.shot_power_step);
    }
    if input.power_down_held {
        power.0 = move_toward(power.0, 0.0, tweaks.shot_power_step);
    }
}

/// Consume a pending shoot command: pick the nearest rim, solve the
/// launch velocity, and switch the ball to flight. Ignored while the
/// ball is already airborne.
pub fn launch_shot(
    mut input: ResMut<PlayerInput>,
    power: Res<ShotPower>,
    tweaks: Res<PhysicsTweaks>,
    rims: Res<RimTargets>,
    mut query: Query<
        (
            &Transform,
            &mut BallMode,
            &mut GroundVelocity,
            &mut FlightVelocity,
        ),
        With<Ball>,
    >,
) {
    if !input.shoot_pressed {
        return;
    }
    input.shoot_pressed = false;

    for (transform, mut mode, mut ground, mut flight) in &mut query {
        if *mode == BallMode::Airborne {
            continue;
        }

        let (team, rim) = rims.nearest(transform.translation);
        let solution = solve_shot(
            transform.translation,
            rim,
            power.0,
            tweaks.shot_base_speed,
            tweaks.ball_gravity,
        );

        flight.0 = solution.velocity;
        ground.0 = Vec2::ZERO;
        *mode = BallMode::Airborne;

        info!(
            "Shot at {} rim: power {:.2}, flight time {:.2}s",
            team.label(),
            power.0,
            solution.flight_time
        );
    }
}
