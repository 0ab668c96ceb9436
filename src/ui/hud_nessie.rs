//! UI domain: Nessie distance readout.

use bevy::prelude::*;

use crate::pursuit::{Nessie, PursuitTuning};
use crate::ui::hud_steps::{HUD_PADDING, PROGRESS_BAR_HEIGHT};

/// Marker for the Nessie distance text
#[derive(Component)]
pub struct NessieDistanceText;

pub(crate) fn spawn_nessie_hud(mut commands: Commands) {
    commands.spawn((
        NessieDistanceText,
        Text::new("Nessie: -- m behind"),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.4, 0.8, 0.4)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING + PROGRESS_BAR_HEIGHT + 32.0),
            ..default()
        },
    ));
}

pub(crate) fn update_nessie_hud(
    nessie: Res<Nessie>,
    tuning: Res<PursuitTuning>,
    mut text_query: Query<(&mut Text, &mut TextColor), With<NessieDistanceText>>,
) {
    let closeness = if tuning.start_distance > 0.0 {
        1.0 - (nessie.distance / tuning.start_distance).clamp(0.0, 1.0)
    } else {
        1.0
    };

    for (mut text, mut color) in &mut text_query {
        text.0 = format!("Nessie: {:.0} m behind", nessie.distance.max(0.0));
        // Green while she's far, red as she closes
        color.0 = Color::srgb(0.3 + closeness * 0.6, 0.8 - closeness * 0.6, 0.3);
    }
}
