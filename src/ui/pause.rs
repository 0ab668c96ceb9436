//! UI domain: pause overlay.

use bevy::prelude::*;

/// Marker for the pause overlay
#[derive(Component)]
pub struct PauseOverlayUI;

pub(crate) fn spawn_pause_overlay(mut commands: Commands) {
    commands
        .spawn((
            PauseOverlayUI,
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
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));

            parent.spawn((
                Text::new("Press [Esc] to resume"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn cleanup_pause_overlay(
    mut commands: Commands,
    query: Query<Entity, With<PauseOverlayUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
