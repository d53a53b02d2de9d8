//! Tunable constants for hoopcourt
//!
//! All gameplay values are defined here for easy tweaking.

use bevy::prelude::*;

// =============================================================================
// COURT DIMENSIONS
// =============================================================================

pub const COURT_LENGTH: f32 = 28.0; // Baseline to baseline
pub const COURT_WIDTH: f32 = 15.0; // Sideline to sideline
pub const COURT_HALF_LENGTH: f32 = COURT_LENGTH / 2.0;
pub const COURT_HALF_WIDTH: f32 = COURT_WIDTH / 2.0;
pub const FLOOR_THICKNESS: f32 = 0.2;
pub const FLOOR_TOP_Y: f32 = FLOOR_THICKNESS / 2.0; // Floor slab is centered at y=0
pub const LINE_Y: f32 = 0.11; // Court markings sit just above the floor surface

// =============================================================================
// BALL
// =============================================================================

pub const BALL_RADIUS: f32 = 0.12;
pub const BALL_REST_HEIGHT: f32 = FLOOR_TOP_Y + BALL_RADIUS; // Center height when on the floor
pub const BALL_SPAWN: Vec3 = Vec3::new(0.0, BALL_REST_HEIGHT, 0.0);

// =============================================================================
// RIMS
// =============================================================================

pub const RIM_HEIGHT: f32 = 3.05; // Regulation 10 feet
pub const RIM_RADIUS: f32 = 0.225;
pub const RIM_TUBE_RADIUS: f32 = 0.04;
// Rim center sits just inside the baseline, in front of the backboard
pub const RIM_X: f32 = COURT_HALF_LENGTH - (RIM_RADIUS + 0.05);

// =============================================================================
// GROUND MOVEMENT
// =============================================================================

pub const MOVE_SPEED: f32 = 6.0; // Steered speed on the floor (units/s)
pub const GROUND_DAMPING: f32 = 0.85; // Ground velocity retained per tick when unsteered
pub const GROUND_STOP_EPSILON: f32 = 0.001; // Snap ground velocity to zero below this

// =============================================================================
// SHOOTING
// =============================================================================

pub const SHOT_BASE_SPEED: f32 = 12.0; // Horizontal launch speed at the power midpoint
pub const SHOT_POWER_DEFAULT: f32 = 0.5;
pub const SHOT_POWER_STEP: f32 = 0.01; // Power change per tick while adjust key held
pub const SHOT_MIN_DISTANCE: f32 = 0.5; // Fallback distance when the ball sits on a rim axis

// =============================================================================
// FLIGHT PHYSICS
// =============================================================================

pub const BALL_GRAVITY: f32 = -9.8;
pub const FLOOR_RESTITUTION: f32 = 0.35; // Vertical velocity retained per floor bounce
pub const BOUNCE_GROUND_FRICTION: f32 = 0.7; // Horizontal velocity retained per floor bounce
pub const BOUNCE_MIN_VERTICAL: f32 = 0.5; // Bounces weaker than this stay down
pub const LANDING_REST_SPEED: f32 = 0.2; // Impact with all components below this settles in place
pub const ROLL_FRICTION: f32 = 0.92; // Horizontal velocity retained per tick while rolling out
pub const ROLL_STOP_EPSILON: f32 = 0.01; // Snap rolling velocity to zero below this
pub const WALL_RETENTION: f32 = 0.5; // Velocity retained (inverted) per boundary bounce

// =============================================================================
// RIM INTERACTION
// =============================================================================

pub const RIM_CAPTURE_RADIUS: f32 = RIM_RADIUS + BALL_RADIUS; // Horizontal interaction band
pub const SCORE_VERTICAL_TOLERANCE: f32 = 0.04; // |ball.y - rim.y| below this scores
pub const RIM_BOUNCE_BAND: f32 = 0.3; // Wider vertical band that deflects instead
pub const RIM_BOUNCE_HORIZONTAL_RETENTION: f32 = 0.5;
pub const RIM_BOUNCE_VERTICAL_RETENTION: f32 = 0.7;

// =============================================================================
// BALL SPIN/ROTATION
// =============================================================================

pub const BALL_SPIN_FACTOR: f32 = 0.8; // Airborne spin rate per unit horizontal speed
pub const BALL_SPIN_DECAY: f32 = 0.5; // Airborne spin retained per second

// =============================================================================
// CAMERA
// =============================================================================

pub const CAMERA_START: Vec3 = Vec3::new(0.0, 15.0, 30.0);
pub const ORBIT_SENSITIVITY: f32 = 0.005; // Radians per pixel of mouse drag
pub const ORBIT_ZOOM_STEP: f32 = 2.0; // Distance change per scroll line
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 80.0;
pub const ORBIT_PITCH_MIN: f32 = 0.05; // Keep the camera above the floor plane
pub const ORBIT_PITCH_MAX: f32 = 1.54; // Just under vertical to keep the basis well-defined

// =============================================================================
// TEXT/UI COLORS
// =============================================================================

pub const TEXT_PRIMARY: Color = Color::srgb(0.95, 0.9, 0.8); // Bone white/cream
pub const TEXT_SECONDARY: Color = Color::srgb(0.7, 0.65, 0.55); // Aged parchment
pub const TEXT_ACCENT: Color = Color::srgb(0.3, 1.0, 0.4); // Scoreboard green

// =============================================================================
// HUD LAYOUT
// =============================================================================

pub const POWER_GAUGE_WIDTH: f32 = 260.0; // Pixels
pub const POWER_GAUGE_HEIGHT: f32 = 18.0;
