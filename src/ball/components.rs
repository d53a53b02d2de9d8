//! Ball-related components

use bevy::prelude::*;

/// Marker for the ball entity
#[derive(Component)]
pub struct Ball;

/// Motion mode of the ball state machine.
///
/// Grounded covers both steered dribbling and damped coasting on the
/// floor. Airborne covers the whole post-shot lifecycle: projectile
/// flight, floor bounces, and the final roll-out. Transitions back to
/// Grounded happen on a score, a dead landing, or an explicit reset.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallMode {
    #[default]
    Grounded,
    Airborne,
}

/// Steering velocity on the court plane while grounded (x, z)
#[derive(Component, Default, Debug)]
pub struct GroundVelocity(pub Vec2);

/// Projectile velocity while airborne
#[derive(Component, Default, Debug)]
pub struct FlightVelocity(pub Vec3);

/// Angular speed around the current roll axis (radians per second)
#[derive(Component, Default, Debug)]
pub struct BallSpin(pub f32);
