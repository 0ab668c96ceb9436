//! UI domain: step goal progress bar and counter.

use bevy::prelude::*;

use crate::model::StepModel;

pub(crate) const PROGRESS_BAR_WIDTH: f32 = 320.0;
pub(crate) const PROGRESS_BAR_HEIGHT: f32 = 22.0;
pub(crate) const HUD_PADDING: f32 = 16.0;

/// Marker for the step progress bar container
#[derive(Component)]
pub struct StepProgressBarUI;

/// Marker for the progress bar fill element
#[derive(Component)]
pub struct StepProgressBarFill;

/// Marker for the "steps / goal" readout
#[derive(Component)]
pub struct StepCounterText;

pub(crate) fn spawn_step_hud(mut commands: Commands) {
    // Progress bar at top-left
    commands
        .spawn((
            StepProgressBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                width: Val::Px(PROGRESS_BAR_WIDTH),
                height: Val::Px(PROGRESS_BAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                StepProgressBarFill,
                Node {
                    width: Val::Percent(0.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.3, 0.7, 0.9)),
            ));
        });

    commands.spawn((
        StepCounterText,
        Text::new("0 / 0 steps"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING + PROGRESS_BAR_HEIGHT + 6.0),
            ..default()
        },
    ));
}

pub(crate) fn update_step_hud(
    model: Res<StepModel>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<StepProgressBarFill>>,
    mut text_query: Query<&mut Text, With<StepCounterText>>,
) {
    let percent = if model.goal > 0 {
        (model.steps as f32 / model.goal as f32).min(1.0)
    } else {
        0.0
    };

    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(percent * 100.0);
        bg_color.0 = if model.goal_reached() {
            Color::srgb(0.3, 0.9, 0.4)
        } else {
            Color::srgb(0.3, 0.7, 0.9)
        };
    }

    for mut text in &mut text_query {
        text.0 = format!("{} / {} steps", model.steps, model.goal);
    }
}
