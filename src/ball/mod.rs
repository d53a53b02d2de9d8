//! Ball module - components and motion systems

mod components;
mod physics;

pub use components::*;
pub use physics::*;
