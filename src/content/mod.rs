//! Content domain: session defaults loading and registration.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::SessionDefaults;
pub use loader::{ContentLoadError, load_session_defaults};

use bevy::prelude::*;
use std::path::Path;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_defaults);
    }
}

/// Insert the SessionDefaults resource, falling back to built-in values if
/// the data file is missing or invalid.
fn load_defaults(mut commands: Commands) {
    let path = Path::new("assets/data/session_defaults.ron");
    let defaults = match load_session_defaults(path) {
        Ok(defaults) => defaults,
        Err(e) => {
            warn!("{}, using built-in defaults", e);
            SessionDefaults::default()
        }
    };
    info!(
        "Session defaults: goal {} steps, Nessie starts {:.0}m back",
        defaults.step_goal, defaults.nessie_start_distance
    );
    commands.insert_resource(defaults);
}
