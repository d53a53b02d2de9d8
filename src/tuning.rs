//! Global gameplay tuning settings (decoupled from UI)

use bevy::log::warn;
use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::constants::*;

// Serde defaults for rim-feel fields added after the first config format
fn default_rim_bounce_horizontal_retention() -> f32 {
    RIM_BOUNCE_HORIZONTAL_RETENTION
}
fn default_rim_bounce_vertical_retention() -> f32 {
    RIM_BOUNCE_VERTICAL_RETENTION
}

/// Path to global gameplay tuning config
pub const GAMEPLAY_TUNING_FILE: &str = "config/gameplay_tuning.json";

/// Serializable tuning values stored in config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameplayTuning {
    pub move_speed: f32,
    pub ground_damping: f32,
    pub shot_base_speed: f32,
    pub shot_power_step: f32,
    pub ball_gravity: f32,
    pub floor_restitution: f32,
    pub bounce_ground_friction: f32,
    pub roll_friction: f32,
    pub wall_retention: f32,
    #[serde(default = "default_rim_bounce_horizontal_retention")]
    pub rim_bounce_horizontal_retention: f32,
    #[serde(default = "default_rim_bounce_vertical_retention")]
    pub rim_bounce_vertical_retention: f32,
}

impl Default for GameplayTuning {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            ground_damping: GROUND_DAMPING,
            shot_base_speed: SHOT_BASE_SPEED,
            shot_power_step: SHOT_POWER_STEP,
            ball_gravity: BALL_GRAVITY,
            floor_restitution: FLOOR_RESTITUTION,
            bounce_ground_friction: BOUNCE_GROUND_FRICTION,
            roll_friction: ROLL_FRICTION,
            wall_retention: WALL_RETENTION,
            rim_bounce_horizontal_retention: default_rim_bounce_horizontal_retention(),
            rim_bounce_vertical_retention: default_rim_bounce_vertical_retention(),
        }
    }
}

impl GameplayTuning {
    pub fn apply_to(&self, tweaks: &mut PhysicsTweaks) {
        tweaks.move_speed = self.move_speed;
        tweaks.ground_damping = self.ground_damping;
        tweaks.shot_base_speed = self.shot_base_speed;
        tweaks.shot_power_step = self.shot_power_step;
        tweaks.ball_gravity = self.ball_gravity;
        tweaks.floor_restitution = self.floor_restitution;
        tweaks.bounce_ground_friction = self.bounce_ground_friction;
        tweaks.roll_friction = self.roll_friction;
        tweaks.wall_retention = self.wall_retention;
        tweaks.rim_bounce_horizontal_retention = self.rim_bounce_horizontal_retention;
        tweaks.rim_bounce_vertical_retention = self.rim_bounce_vertical_retention;
    }
}

/// Runtime-adjustable physics values for tweaking gameplay feel
#[derive(Resource, Debug, Clone)]
pub struct PhysicsTweaks {
    pub move_speed: f32,
    pub ground_damping: f32,
    pub shot_base_speed: f32,
    pub shot_power_step: f32,
    pub ball_gravity: f32,
    pub floor_restitution: f32,
    pub bounce_ground_friction: f32,
    pub roll_friction: f32,
    pub wall_retention: f32,
    pub rim_bounce_horizontal_retention: f32,
    pub rim_bounce_vertical_retention: f32,
}

impl Default for PhysicsTweaks {
    fn default() -> Self {
        let defaults = GameplayTuning::default();
        Self {
            move_speed: defaults.move_speed,
            ground_damping: defaults.ground_damping,
            shot_base_speed: defaults.shot_base_speed,
            shot_power_step: defaults.shot_power_step,
            ball_gravity: defaults.ball_gravity,
            floor_restitution: defaults.floor_restitution,
            bounce_ground_friction: defaults.bounce_ground_friction,
            roll_friction: defaults.roll_friction,
            wall_retention: defaults.wall_retention,
            rim_bounce_horizontal_retention: defaults.rim_bounce_horizontal_retention,
            rim_bounce_vertical_retention: defaults.rim_bounce_vertical_retention,
        }
    }
}

pub fn load_gameplay_tuning_from_file(path: &str) -> Result<GameplayTuning, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path, e))
}

pub fn apply_global_tuning(tweaks: &mut PhysicsTweaks) -> Result<(), String> {
    match load_gameplay_tuning_from_file(GAMEPLAY_TUNING_FILE) {
        Ok(tuning) => {
            tuning.apply_to(tweaks);
            Ok(())
        }
        Err(err) => {
            GameplayTuning::default().apply_to(tweaks);
            Err(err)
        }
    }
}

pub fn load_global_tuning_system(mut tweaks: bevy::prelude::ResMut<PhysicsTweaks>) {
    if let Err(err) = apply_global_tuning(&mut tweaks) {
        warn!("{}", err);
    }
}
