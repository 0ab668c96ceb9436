//! UI domain: caught screen presentation and retry flow.

use bevy::prelude::*;

use crate::core::AppState;
use crate::model::StepModel;

/// Marker for the caught screen overlay
#[derive(Component)]
pub struct CaughtScreenUI;

/// Marker for the retry button on the caught screen
#[derive(Component)]
pub struct RetryButton;

pub(crate) fn spawn_caught_screen(mut commands: Commands, model: Res<StepModel>) {
    commands
        .spawn((
            CaughtScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("NESSIE GOT YOU"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.15, 0.15)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!(
                    "You made it {} of {} steps before she caught up.",
                    model.steps, model.goal
                )),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            parent
                .spawn((
                    RetryButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                ))
                .with_child((
                    Text::new("RETRY"),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));

            parent.spawn((
                Text::new("Press [Enter] or click to retry"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.4, 0.45)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn handle_caught_retry(
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<&Interaction, (With<RetryButton>, Changed<Interaction>)>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let should_retry = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || button_query
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if should_retry {
        next_state.set(AppState::NotStarted);
    }
}

pub(crate) fn cleanup_caught_screen(
    mut commands: Commands,
    query: Query<Entity, With<CaughtScreenUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
