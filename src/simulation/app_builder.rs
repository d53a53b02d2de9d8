//! Headless App Builder
//!
//! Reusable builder for headless Bevy apps that run the full ball
//! pipeline without rendering. The spawned ball carries its motion
//! components but no mesh; headless apps have no asset server.

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;
use std::time::Duration;

use crate::ball::{
    Ball, BallMode, BallSpin, FlightVelocity, GroundVelocity, apply_reset, ball_spin,
    flight_motion, floor_and_boundaries, grounded_motion,
};
use crate::constants::BALL_SPAWN;
use crate::input::PlayerInput;
use crate::scoring::{GoalMessage, RimTargets, Score, resolve_rim_interactions};
use crate::shooting::{ShotPower, adjust_shot_power, launch_shot};
use crate::tuning::{self, PhysicsTweaks};

/// Builder for creating headless court apps
pub struct HeadlessCourtBuilder {
    fps: f32,
    minimal_threads: bool,
}

impl HeadlessCourtBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            fps: 60.0,
            minimal_threads: false,
        }
    }

    /// Set the target FPS (default: 60)
    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    /// Enable minimal thread mode (task pools = 1)
    ///
    /// Use this when running many apps in parallel to avoid hitting OS
    /// thread limits. Each Bevy app normally spawns multiple threads;
    /// this reduces it to 1 per app.
    pub fn with_minimal_threads(mut self) -> Self {
        self.minimal_threads = true;
        self
    }

    /// Build the app with minimal plugins, the shared ball resources,
    /// and the fixed-tick system chain the windowed app runs.
    pub fn build(self) -> App {
        let mut app = App::new();

        // Note: MinimalPlugins includes TaskPoolPlugin by default
        if self.minimal_threads {
            app.add_plugins(
                MinimalPlugins
                    .set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f32(
                        1.0 / self.fps,
                    )))
                    .set(TaskPoolPlugin {
                        task_pool_options: TaskPoolOptions::with_num_threads(1),
                    }),
            );
        } else {
            app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
                Duration::from_secs_f32(1.0 / self.fps),
            )));
        }

        // Transform plugin for GlobalTransform propagation
        app.add_plugins(bevy::transform::TransformPlugin);

        // Same fixed tick as the windowed app
        app.insert_resource(Time::<Fixed>::from_duration(Duration::from_secs_f32(
            1.0 / 60.0,
        )));

        app.init_resource::<Score>();
        app.init_resource::<ShotPower>();
        app.init_resource::<RimTargets>();
        app.init_resource::<PlayerInput>();
        app.init_resource::<PhysicsTweaks>();
        let _ = tuning::apply_global_tuning(&mut app.world_mut().resource_mut::<PhysicsTweaks>());

        app.add_message::<GoalMessage>();

        app.add_systems(Startup, spawn_sim_ball);

        app.add_systems(
            FixedUpdate,
            (
                apply_reset,
                adjust_shot_power,
                launch_shot,
                grounded_motion,
                flight_motion,
                ball_spin,
                resolve_rim_interactions,
                floor_and_boundaries,
            )
                .chain(),
        );

        app
    }
}

fn spawn_sim_ball(mut commands: Commands) {
    commands.spawn((
        Ball,
        BallMode::default(),
        GroundVelocity::default(),
        FlightVelocity::default(),
        BallSpin::default(),
        Transform::from_translation(BALL_SPAWN),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_stocks_gameplay_resources() {
        let app = HeadlessCourtBuilder::new().build();
        assert!(app.world().contains_resource::<Score>());
        assert!(app.world().contains_resource::<ShotPower>());
        assert!(app.world().contains_resource::<RimTargets>());
        assert!(app.world().contains_resource::<PlayerInput>());
        assert!(app.world().contains_resource::<PhysicsTweaks>());
    }

    #[test]
    fn minimal_threads_builder_still_builds() {
        let app = HeadlessCourtBuilder::new().with_minimal_threads().build();
        assert!(app.world().contains_resource::<Score>());
    }
}
