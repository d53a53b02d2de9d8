//! Ball motion systems
//!
//! The ball is a two-mode state machine. Grounded handles steering,
//! damping, and the hard clamp at the court edges. Airborne handles
//! projectile flight: gravity, floor bounces, boundary bounces, and the
//! roll-out that ends a missed shot. Rim interaction lives in the
//! scoring module and runs between flight integration and floor
//! handling.

use bevy::prelude::*;

use crate::ball::components::*;
use crate::constants::*;
use crate::helpers::camera_ground_basis;
use crate::input::PlayerInput;
use crate::shooting::ShotPower;
use crate::tuning::PhysicsTweaks;

/// Put the ball back at center court with everything zeroed.
///
/// Used by the reset key, by a made shot, and by the roll-out at the
/// end of a miss. Shot power returns to its default so the next play
/// starts from a known state.
pub fn reset_ball_state(
    transform: &mut Transform,
    mode: &mut BallMode,
    ground: &mut GroundVelocity,
    flight: &mut FlightVelocity,
    spin: &mut BallSpin,
    power: &mut ShotPower,
) {
    transform.translation = BALL_SPAWN;
    transform.rotation = Quat::IDENTITY;
    *mode = BallMode::Grounded;
    ground.0 = Vec2::ZERO;
    flight.0 = Vec3::ZERO;
    spin.0 = 0.0;
    power.0 = SHOT_POWER_DEFAULT;
}

/// Consume a pending reset command
pub fn apply_reset(
    mut input: ResMut<PlayerInput>,
    mut power: ResMut<ShotPower>,
    mut query: Query<
        (
            &mut Transform,
            &mut BallMode,
            &mut GroundVelocity,
            &mut FlightVelocity,
            &mut BallSpin,
        ),
        With<Ball>,
    >,
) {
    if !input.reset_pressed {
        return;
    }
    input.reset_pressed = false;

    for (mut transform, mut mode, mut ground, mut flight, mut spin) in &mut query {
        reset_ball_state(
            &mut transform,
            &mut mode,
            &mut ground,
            &mut flight,
            &mut spin,
            &mut power,
        );
        info!("Ball reset to center court");
    }
}

/// Grounded mode: steer relative to the camera, damp when unsteered,
/// integrate, and hard-clamp at the court edges.
pub fn grounded_motion(
    tweaks: Res<PhysicsTweaks>,
    input: Res<PlayerInput>,
    camera_query: Query<&Transform, (With<Camera3d>, Without<Ball>)>,
    mut ball_query: Query<(&mut Transform, &mut GroundVelocity, &BallMode), With<Ball>>,
    time: Res<Time>,
) {
    // Use minimum dt for headless mode compatibility
    let dt = time.delta_secs().max(1.0 / 60.0);

    // Headless apps have no camera; fall back to world axes
    let (forward, right) = camera_query
        .single()
        .map(|camera| camera_ground_basis(camera))
        .unwrap_or((Vec2::new(0.0, -1.0), Vec2::new(1.0, 0.0)));

    for (mut transform, mut velocity, mode) in &mut ball_query {
        if *mode != BallMode::Grounded {
            continue;
        }

        let mut direction = Vec2::ZERO;
        if input.move_forward {
            direction += forward;
        }
        if input.move_back {
            direction -= forward;
        }
        if input.move_right {
            direction += right;
        }
        if input.move_left {
            direction -= right;
        }

        if direction.length_squared() > 1e-6 {
            velocity.0 = direction.normalize() * tweaks.move_speed;
        } else {
            // Damp per tick, then snap to avoid infinite creep
            velocity.0 *= tweaks.ground_damping;
            if velocity.0.length() < GROUND_STOP_EPSILON {
                velocity.0 = Vec2::ZERO;
            }
        }

        transform.translation.x += velocity.0.x * dt;
        transform.translation.z += velocity.0.y * dt;

        // Hard stop at the edges, no bounce while grounded
        transform.translation.x = transform
            .translation
            .x
            .clamp(-COURT_HALF_LENGTH + BALL_RADIUS, COURT_HALF_LENGTH - BALL_RADIUS);
        transform.translation.z = transform
            .translation
            .z
            .clamp(-COURT_HALF_WIDTH + BALL_RADIUS, COURT_HALF_WIDTH - BALL_RADIUS);
    }
}

/// Airborne mode: gravity then position integration on all three axes
pub fn flight_motion(
    tweaks: Res<PhysicsTweaks>,
    mut query: Query<(&mut Transform, &mut FlightVelocity, &BallMode), With<Ball>>,
    time: Res<Time>,
) {
    // Use minimum dt for headless mode compatibility
    let dt = time.delta_secs().max(1.0 / 60.0);

    for (mut transform, mut velocity, mode) in &mut query {
        if *mode != BallMode::Airborne {
            continue;
        }

        velocity.0.y += tweaks.ball_gravity * dt;
        transform.translation += velocity.0 * dt;
    }
}

/// Airborne floor and boundary handling after rim resolution.
///
/// Floor contact bounces with restitution, kills weak bounces, and
/// settles dead landings in place. Boundaries bounce with loss instead
/// of the grounded hard clamp. Once the ball is rolling flat, friction
/// runs it down and a full reset re-centers it for the next play.
pub fn floor_and_boundaries(
    tweaks: Res<PhysicsTweaks>,
    mut power: ResMut<ShotPower>,
    mut query: Query<
        (
            &mut Transform,
            &mut BallMode,
            &mut GroundVelocity,
            &mut FlightVelocity,
            &mut BallSpin,
        ),
        With<Ball>,
    >,
) {
    for (mut transform, mut mode, mut ground, mut flight, mut spin) in &mut query {
        if *mode != BallMode::Airborne {
            continue;
        }

        // Floor contact
        if transform.translation.y <= BALL_REST_HEIGHT {
            transform.translation.y = BALL_REST_HEIGHT;

            if flight.0.y < 0.0 {
                // Impact tick: bounce with restitution and ground friction
                flight.0.y = flight.0.y.abs() * tweaks.floor_restitution;
                flight.0.x *= tweaks.bounce_ground_friction;
                flight.0.z *= tweaks.bounce_ground_friction;

                if flight.0.y < BOUNCE_MIN_VERTICAL {
                    flight.0.y = 0.0;
                }

                // A dead landing settles where it hit instead of rolling out
                if flight.0.x.abs() < LANDING_REST_SPEED
                    && flight.0.y.abs() < LANDING_REST_SPEED
                    && flight.0.z.abs() < LANDING_REST_SPEED
                {
                    *mode = BallMode::Grounded;
                    flight.0 = Vec3::ZERO;
                    ground.0 = Vec2::ZERO;
                    continue;
                }
            }
        }

        // Boundary bounce, independently per axis
        let min_x = -COURT_HALF_LENGTH + BALL_RADIUS;
        let max_x = COURT_HALF_LENGTH - BALL_RADIUS;
        if transform.translation.x < min_x {
            transform.translation.x = min_x;
            flight.0.x = -flight.0.x * tweaks.wall_retention;
        } else if transform.translation.x > max_x {
            transform.translation.x = max_x;
            flight.0.x = -flight.0.x * tweaks.wall_retention;
        }

        let min_z = -COURT_HALF_WIDTH + BALL_RADIUS;
        let max_z = COURT_HALF_WIDTH - BALL_RADIUS;
        if transform.translation.z < min_z {
            transform.translation.z = min_z;
            flight.0.z = -flight.0.z * tweaks.wall_retention;
        } else if transform.translation.z > max_z {
            transform.translation.z = max_z;
            flight.0.z = -flight.0.z * tweaks.wall_retention;
        }

        // Rolling flat: friction per tick, snap, then re-center once stopped
        if transform.translation.y <= BALL_REST_HEIGHT && flight.0.y == 0.0 {
            let mut rolling = Vec2::new(flight.0.x, flight.0.z) * tweaks.roll_friction;
            if rolling.length() < ROLL_STOP_EPSILON {
                rolling = Vec2::ZERO;
            }
            flight.0.x = rolling.x;
            flight.0.z = rolling.y;

            if rolling == Vec2::ZERO {
                // Missed shot rolled to a stop: ball returns to center
                reset_ball_state(
                    &mut transform,
                    &mut mode,
                    &mut ground,
                    &mut flight,
                    &mut spin,
                    &mut power,
                );
                info!("Miss rolled out, ball back to center");
            }
        }
    }
}

/// Visual spin from horizontal motion. Rolling spin matches ground
/// speed exactly (no slip, v = omega * r); airborne spin is scaled down
/// and decays.
pub fn ball_spin(
    mut query: Query<
        (
            &mut Transform,
            &mut BallSpin,
            &GroundVelocity,
            &FlightVelocity,
            &BallMode,
        ),
        With<Ball>,
    >,
    time: Res<Time>,
) {
    // Use minimum dt for headless mode compatibility
    let dt = time.delta_secs().max(1.0 / 60.0);

    for (mut transform, mut spin, ground, flight, mode) in &mut query {
        let horizontal = match mode {
            BallMode::Grounded => ground.0,
            BallMode::Airborne => Vec2::new(flight.0.x, flight.0.z),
        };
        let speed = horizontal.length();

        if speed < 1e-4 {
            spin.0 = 0.0;
            continue;
        }

        match mode {
            BallMode::Grounded => {
                spin.0 = speed / BALL_RADIUS;
            }
            BallMode::Airborne => {
                spin.0 = speed * BALL_SPIN_FACTOR;
                spin.0 *= BALL_SPIN_DECAY.powf(dt);
            }
        }

        // Roll axis lies in the court plane, perpendicular to travel
        let axis = Vec3::new(horizontal.y, 0.0, -horizontal.x).normalize();
        transform.rotate(Quat::from_axis_angle(axis, spin.0 * dt));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scattered_state() -> (Transform, BallMode, GroundVelocity, FlightVelocity, BallSpin, ShotPower) {
        (
            Transform::from_xyz(4.2, 2.7, -3.1).with_rotation(Quat::from_rotation_y(1.3)),
            BallMode::Airborne,
            GroundVelocity(Vec2::new(1.0, -2.0)),
            FlightVelocity(Vec3::new(3.0, -4.0, 5.0)),
            BallSpin(7.0),
            ShotPower(0.9),
        )
    }

    #[test]
    fn reset_restores_center_court_state() {
        let (mut transform, mut mode, mut ground, mut flight, mut spin, mut power) =
            scattered_state();

        reset_ball_state(
            &mut transform, &mut mode, &mut ground, &mut flight, &mut spin, &mut power,
        );

        assert_eq!(transform.translation, BALL_SPAWN, "ball should sit at center court");
        assert_eq!(mode, BallMode::Grounded, "reset always lands in Grounded");
        assert_eq!(ground.0, Vec2::ZERO);
        assert_eq!(flight.0, Vec3::ZERO);
        assert_eq!(spin.0, 0.0);
        assert_eq!(power.0, SHOT_POWER_DEFAULT, "shot power returns to default");
    }

    #[test]
    fn reset_is_idempotent() {
        let (mut transform, mut mode, mut ground, mut flight, mut spin, mut power) =
            scattered_state();

        reset_ball_state(
            &mut transform, &mut mode, &mut ground, &mut flight, &mut spin, &mut power,
        );
        let after_once = (transform.translation, mode, ground.0, flight.0, spin.0, power.0);

        reset_ball_state(
            &mut transform, &mut mode, &mut ground, &mut flight, &mut spin, &mut power,
        );
        let after_twice = (transform.translation, mode, ground.0, flight.0, spin.0, power.0);

        assert_eq!(after_once, after_twice, "double reset must equal a single reset");
    }
}
