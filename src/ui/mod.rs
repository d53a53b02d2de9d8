//! UI module - scoreboard text, power gauge, and controls overlay

mod hud;
mod power_gauge;

pub use hud::*;
pub use power_gauge::*;
