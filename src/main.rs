mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod model;
mod pedometer;
mod pursuit;
mod ui;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Nessie Run".to_string(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        content::ContentPlugin,
        core::CorePlugin,
        model::ModelPlugin,
        pedometer::PedometerPlugin,
        pursuit::PursuitPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
