//! UI domain: title overlay and session start prompt.

use bevy::prelude::*;

/// Marker for the title screen overlay
#[derive(Component)]
pub struct StartScreenUI;

pub(crate) fn spawn_start_screen(mut commands: Commands) {
    commands
        .spawn((
            StartScreenUI,
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
                Text::new("NESSIE RUN"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.9, 0.6)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Hold [Space] to walk. Hit your step goal before Nessie catches up."),
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

            parent.spawn((
                Text::new("Press [Space] to start"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));
        });
}

pub(crate) fn cleanup_start_screen(
    mut commands: Commands,
    query: Query<Entity, With<StartScreenUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
