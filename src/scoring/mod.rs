//! Scoring module - rim targets, score tracking, and rim resolution

use bevy::prelude::*;

use crate::ball::{Ball, BallMode, BallSpin, FlightVelocity, GroundVelocity, reset_ball_state};
use crate::constants::*;
use crate::helpers::reflect_about_normal;
use crate::shooting::ShotPower;
use crate::tuning::PhysicsTweaks;

/// Which end of the court a hoop belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Home,
    Guest,
}

impl Team {
    pub fn label(&self) -> &'static str {
        match self {
            Team::Home => "Home",
            Team::Guest => "Guest",
        }
    }
}

/// Score resource tracking home/guest points
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct Score {
    pub home: u32,
    pub guest: u32,
}

/// The two fixed scoring points, supplied by the court
#[derive(Resource, Debug, Clone, Copy)]
pub struct RimTargets {
    pub home: Vec3,
    pub guest: Vec3,
}

impl Default for RimTargets {
    fn default() -> Self {
        Self {
            home: Vec3::new(-RIM_X, RIM_HEIGHT, 0.0),
            guest: Vec3::new(RIM_X, RIM_HEIGHT, 0.0),
        }
    }
}

impl RimTargets {
    /// Nearest rim by straight-line distance, ties going to home
    pub fn nearest(&self, position: Vec3) -> (Team, Vec3) {
        if position.distance_squared(self.home) <= position.distance_squared(self.guest) {
            (Team::Home, self.home)
        } else {
            (Team::Guest, self.guest)
        }
    }
}

/// Sent when a shot drops through a rim
#[derive(Message, Debug, Clone, Copy)]
pub struct GoalMessage {
    pub team: Team,
}

/// Outcome of checking the ball against one rim
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RimOutcome {
    Score,
    Bounce { normal: Vec2 },
    None,
}

/// Classify the ball's position against a rim target.
///
/// Inside the capture radius, a narrow vertical band scores and a wider
/// band deflects off the rim edge. A ball dead on the rim axis cannot
/// produce an outward normal, so the bounce case is skipped there.
pub fn classify_rim_approach(ball: Vec3, rim: Vec3) -> RimOutcome {
    let offset = Vec2::new(ball.x - rim.x, ball.z - rim.z);
    let dist_xz = offset.length();

    if dist_xz >= RIM_CAPTURE_RADIUS {
        return RimOutcome::None;
    }

    let dy = ball.y - rim.y;
    if dy.abs() < SCORE_VERTICAL_TOLERANCE {
        return RimOutcome::Score;
    }
    if dy.abs() < RIM_BOUNCE_BAND && dist_xz > 1e-4 {
        return RimOutcome::Bounce {
            normal: offset / dist_xz,
        };
    }

    RimOutcome::None
}

/// Check the ball against the nearest rim each flight tick: award and
/// reset on a score, deflect on a rim-edge hit.
pub fn resolve_rim_interactions(
    tweaks: Res<PhysicsTweaks>,
    rims: Res<RimTargets>,
    mut score: ResMut<Score>,
    mut power: ResMut<ShotPower>,
    mut goals: MessageWriter<GoalMessage>,
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

        let (team, rim) = rims.nearest(transform.translation);
        match classify_rim_approach(transform.translation, rim) {
            RimOutcome::Score => {
                match team {
                    Team::Home => score.home += 2,
                    Team::Guest => score.guest += 2,
                }
                goals.write(GoalMessage { team });
                info!(
                    "SCORE 2pts for {}! Home: {} Guest: {}",
                    team.label(),
                    score.home,
                    score.guest
                );

                // Made shot: ball goes back to center, nothing else this tick
                reset_ball_state(
                    &mut transform,
                    &mut mode,
                    &mut ground,
                    &mut flight,
                    &mut spin,
                    &mut power,
                );
            }
            RimOutcome::Bounce { normal } => {
                let horizontal = Vec2::new(flight.0.x, flight.0.z);
                let reflected = reflect_about_normal(horizontal, normal)
                    * tweaks.rim_bounce_horizontal_retention;
                flight.0.x = reflected.x;
                flight.0.z = reflected.y;
                flight.0.y *= tweaks.rim_bounce_vertical_retention;
            }
            RimOutcome::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest_rim() -> Vec3 {
        Vec3::new(RIM_X, RIM_HEIGHT, 0.0)
    }

    #[test]
    fn ball_through_rim_center_scores() {
        let ball = guest_rim() + Vec3::new(0.05, 0.02, -0.03);
        assert_eq!(classify_rim_approach(ball, guest_rim()), RimOutcome::Score);
    }

    #[test]
    fn ball_on_rim_edge_bounces_outward() {
        let ball = guest_rim() + Vec3::new(0.3, 0.2, 0.0);
        match classify_rim_approach(ball, guest_rim()) {
            RimOutcome::Bounce { normal } => {
                assert!(
                    (normal - Vec2::new(1.0, 0.0)).length() < 1e-6,
                    "normal should point from rim center toward the ball, got {:?}",
                    normal
                );
            }
            other => panic!("expected a rim bounce, got {:?}", other),
        }
    }

    #[test]
    fn ball_dead_on_rim_axis_skips_bounce() {
        // No outward normal exists here; only the score band may fire
        let ball = guest_rim() + Vec3::new(0.0, 0.2, 0.0);
        assert_eq!(classify_rim_approach(ball, guest_rim()), RimOutcome::None);
    }

    #[test]
    fn ball_outside_capture_radius_is_ignored() {
        let ball = guest_rim() + Vec3::new(RIM_CAPTURE_RADIUS + 0.01, 0.0, 0.0);
        assert_eq!(classify_rim_approach(ball, guest_rim()), RimOutcome::None);
    }

    #[test]
    fn ball_outside_vertical_bands_is_ignored() {
        let ball = guest_rim() + Vec3::new(0.1, 0.5, 0.0);
        assert_eq!(classify_rim_approach(ball, guest_rim()), RimOutcome::None);
    }

    #[test]
    fn rim_bounce_velocity_matches_reflection_formula() {
        let incoming = Vec2::new(4.0, 1.0);
        let normal = Vec2::new(-0.8, 0.6);
        let outgoing =
            reflect_about_normal(incoming, normal) * RIM_BOUNCE_HORIZONTAL_RETENTION;
        let expected = 0.5 * (incoming - 2.0 * incoming.dot(normal) * normal);
        assert!(
            (outgoing - expected).length() < 1e-6,
            "rim deflection should be the damped reflection, got {:?} expected {:?}",
            outgoing,
            expected
        );
    }

    #[test]
    fn nearest_rim_follows_ball_side() {
        let rims = RimTargets::default();
        let (team, rim) = rims.nearest(Vec3::new(10.0, 0.22, 1.0));
        assert_eq!(team, Team::Guest);
        assert_eq!(rim, rims.guest);

        let (team, rim) = rims.nearest(Vec3::new(-3.0, 0.22, 0.0));
        assert_eq!(team, Team::Home);
        assert_eq!(rim, rims.home);
    }
}
