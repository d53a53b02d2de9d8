//! Deterministic tick stepping for headless apps
//!
//! The schedule runner is bypassed: startup runs once, then each tick
//! advances the clocks by exactly one fixed step and runs Update and
//! FixedUpdate by hand. The motion systems clamp their dt to the fixed
//! step, so stepped runs reproduce to the tick.

use bevy::prelude::*;
use std::time::Duration;

/// Run the startup schedules once and settle the app
pub fn run_startup(app: &mut App) {
    app.finish();
    app.cleanup();
    app.update();
}

/// Advance the app by the given number of fixed ticks
pub fn step_ticks(app: &mut App, ticks: u32) {
    let fixed_dt = Duration::from_secs_f32(1.0 / 60.0);

    for _ in 0..ticks {
        app.world_mut()
            .resource_mut::<Time<Virtual>>()
            .advance_by(fixed_dt);
        app.world_mut()
            .resource_mut::<Time<Real>>()
            .advance_by(fixed_dt);
        app.world_mut()
            .resource_mut::<Time<Fixed>>()
            .advance_by(fixed_dt);

        app.world_mut().run_schedule(Update);
        app.world_mut().run_schedule(FixedUpdate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::Ball;
    use crate::constants::BALL_SPAWN;
    use crate::simulation::HeadlessCourtBuilder;

    #[test]
    fn startup_spawns_the_ball_at_center_court() {
        let mut app = HeadlessCourtBuilder::new().build();
        run_startup(&mut app);

        let mut query = app.world_mut().query_filtered::<&Transform, With<Ball>>();
        let transform = query.single(app.world()).unwrap();
        assert_eq!(transform.translation, BALL_SPAWN);
    }
}
