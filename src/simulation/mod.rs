//! Headless simulation - the court without a window
//!
//! Builds the same fixed-tick ball pipeline the windowed app runs, on
//! MinimalPlugins, and steps it one tick at a time under manually
//! advanced clocks. The scenario tests drive whole plays through it.

pub mod app_builder;
pub mod stepper;

#[cfg(test)]
mod scenarios;

pub use app_builder::HeadlessCourtBuilder;
pub use stepper::{run_startup, step_ticks};
