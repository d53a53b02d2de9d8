//! Power gauge UI components and systems

use bevy::prelude::*;

use crate::constants::*;
use crate::shooting::ShotPower;

/// Power gauge fill component
#[derive(Component)]
pub struct PowerGaugeFill;

/// Update power gauge fill width and color
pub fn update_power_gauge(
    power: Res<ShotPower>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<PowerGaugeFill>>,
) {
    let Ok((mut node, mut color)) = fill_query.single_mut() else {
        return;
    };

    let pct = power.0.clamp(0.0, 1.0);
    node.width = Val::Px((POWER_GAUGE_WIDTH - 4.0) * pct);

    // Color transition: green (0%) -> red (100%)
    let r = pct * 0.9;
    let g = (1.0 - pct) * 0.8;
    color.0 = Color::srgb(r, g, 0.0);
}
