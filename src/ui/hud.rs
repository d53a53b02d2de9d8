//! HUD components and systems (scoreboard line and controls overlay)

use bevy::prelude::*;

use super::power_gauge::PowerGaugeFill;
use crate::constants::*;
use crate::scoring::{GoalMessage, Score};
use crate::settings::CurrentSettings;

/// Scoreboard line component
#[derive(Component)]
pub struct ScoreboardText;

/// Controls overlay root component
#[derive(Component)]
pub struct InstructionsPanel;

/// Spawn the HUD: scoreboard line, power gauge, and controls overlay
pub fn spawn_hud(mut commands: Commands, settings: Res<CurrentSettings>) {
    // Scoreboard line, top center
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            width: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("HOME 0 - 0 GUEST"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(TEXT_ACCENT),
                ScoreboardText,
            ));
        });

    // Power gauge, bottom center
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(14.0),
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("POWER"),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(TEXT_SECONDARY),
            ));
            parent
                .spawn((
                    Node {
                        width: Val::Px(POWER_GAUGE_WIDTH),
                        height: Val::Px(POWER_GAUGE_HEIGHT),
                        padding: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.9)),
                ))
                .with_children(|bar| {
                    bar.spawn((
                        Node {
                            width: Val::Px((POWER_GAUGE_WIDTH - 4.0) * SHOT_POWER_DEFAULT),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.45, 0.4, 0.0)),
                        PowerGaugeFill,
                    ));
                });
        });

    // Controls overlay, top left
    let visibility = if settings.settings.show_instructions {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(10.0)),
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.9)),
            visibility,
            InstructionsPanel,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Controls"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(TEXT_PRIMARY),
            ));
            for line in [
                "Arrows: move ball",
                "W/S: shot power up/down",
                "Space: shoot",
                "R: reset ball",
                "O: toggle camera orbit",
            ] {
                parent.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 12.0,
                        ..default()
                    },
                    TextColor(TEXT_SECONDARY),
                ));
            }
        });
}

/// Refresh the scoreboard line whenever a goal lands
pub fn update_scoreboard_text(
    mut goals: MessageReader<GoalMessage>,
    score: Res<Score>,
    mut text_query: Query<&mut Text, With<ScoreboardText>>,
) {
    if goals.is_empty() {
        return;
    }
    goals.clear();

    let Ok(mut text) = text_query.single_mut() else {
        return;
    };
    text.0 = format!("HOME {} - {} GUEST", score.home, score.guest);
}
