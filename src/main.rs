//! Hoopcourt - An interactive 3D basketball court built with Bevy
//!
//! Main entry point: app setup and system registration.

use bevy::prelude::*;
use hoopcourt::court::setup_scene;
use hoopcourt::generate::ensure_generated_assets;
use hoopcourt::{
    CurrentSettings, GoalMessage, OrbitState, PhysicsTweaks, PlayerInput, RimTargets, Score,
    ShotPower, adjust_shot_power, apply_reset, ball_spin, capture_input, flight_motion,
    floor_and_boundaries, grounded_motion, launch_shot, load_global_tuning_system, orbit_camera,
    resolve_rim_interactions, save_settings_system, spawn_camera, spawn_hud, toggle_orbit,
    update_power_gauge, update_scoreboard_text,
};
use std::time::Duration;

fn main() {
    // Load persistent settings (uses defaults if file doesn't exist)
    let current_settings = CurrentSettings::default();

    // Save settings on first run to ensure file exists
    if let Err(e) = current_settings.settings.save() {
        warn!("Failed to save initial settings: {}", e);
    }

    let window_width = current_settings.settings.window_width;
    let window_height = current_settings.settings.window_height;
    let orbit_enabled = current_settings.settings.orbit_enabled;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                // Set scale_factor_override to 1.0 for consistent behavior on HiDPI displays
                resolution: bevy::window::WindowResolution::new(
                    window_width as u32,
                    window_height as u32,
                )
                .with_scale_factor_override(1.0),
                title: "Hoopcourt".into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(current_settings)
        .insert_resource(OrbitState {
            enabled: orbit_enabled,
            ..OrbitState::default()
        })
        .insert_resource(Time::<Fixed>::from_duration(Duration::from_secs_f32(
            1.0 / 60.0,
        )))
        .init_resource::<PlayerInput>()
        .init_resource::<Score>()
        .init_resource::<ShotPower>()
        .init_resource::<RimTargets>()
        .init_resource::<PhysicsTweaks>()
        .add_message::<GoalMessage>()
        .add_systems(
            Startup,
            (
                load_global_tuning_system,
                ensure_generated_assets,
                setup_scene,
                spawn_camera,
                spawn_hud,
            )
                .chain(),
        )
        .add_systems(Update, (capture_input, toggle_orbit, orbit_camera).chain())
        .add_systems(Update, (update_scoreboard_text, update_power_gauge))
        .add_systems(Update, save_settings_system)
        .add_systems(
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
        )
        .run();
}
