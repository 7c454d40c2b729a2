//! Content domain: data-driven locomotion tuning loaded from assets/data.

use bevy::prelude::*;
use std::path::PathBuf;

mod loader;


use loader::load_tuning;

use crate::movement::LocomotionTuning;

/// Where the tuning file is read from.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub tuning: PathBuf,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            tuning: PathBuf::from("assets/data/locomotion.ron"),
        }
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPaths>()
            .add_systems(PreStartup, load_locomotion_tuning);
    }
}

/// Replace the default tuning with the file contents, keeping defaults on failure.
fn load_locomotion_tuning(mut commands: Commands, paths: Res<ContentPaths>) {
    match load_tuning(&paths.tuning) {
        Ok(tuning) => {
            info!(
                "Locomotion tuning loaded from {}: {:?}",
                paths.tuning.display(),
                tuning
            );
            commands.insert_resource(tuning);
        }
        Err(e) => {
            warn!("{}; using default locomotion tuning", e);
            commands.insert_resource(LocomotionTuning::default());
        }
    }
}
