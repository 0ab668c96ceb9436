//! UI domain: goal completion screen and restart flow.

use bevy::prelude::*;

use crate::core::AppState;
use crate::model::StepModel;
use crate::pursuit::Nessie;

/// Marker for the completion screen overlay
#[derive(Component)]
pub struct CompleteScreenUI;

/// Marker for the restart button on the completion screen
#[derive(Component)]
pub struct RestartButton;

pub(crate) fn spawn_complete_screen(
    mut commands: Commands,
    model: Res<StepModel>,
    nessie: Res<Nessie>,
) {
    commands
        .spawn((
            CompleteScreenUI,
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
            BackgroundColor(Color::srgba(0.02, 0.05, 0.1, 0.95)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("GOAL REACHED"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.3)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!(
                    "{} steps, with Nessie still {:.0} m behind.",
                    model.steps,
                    nessie.distance.max(0.0)
                )),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            parent
                .spawn((
                    RestartButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.25, 0.2)),
                    BorderColor::all(Color::srgb(0.5, 0.6, 0.5)),
                ))
                .with_child((
                    Text::new("GO AGAIN"),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));

            parent.spawn((
                Text::new("Press [Enter] or click to start a new session"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.45, 0.4)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn handle_complete_restart(
    keyboard: Res<ButtonInput<KeyCode>>,
    button_query: Query<&Interaction, (With<RestartButton>, Changed<Interaction>)>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let should_restart = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || button_query
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if should_restart {
        next_state.set(AppState::NotStarted);
    }
}

pub(crate) fn cleanup_complete_screen(
    mut commands: Commands,
    query: Query<Entity, With<CompleteScreenUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
