//! Movement domain: the character locomotion controller.
//!
//! Each frame runs input sampling, then movement, jump gating, facing and
//! ground sensing in that order.

use bevy::prelude::*;

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod resources;
mod systems;


pub use components::*;
pub use resources::*;

/// Ordering label for the locomotion chain.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocomotionSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<LocomotionInput>()
            .add_systems(Startup, bootstrap::spawn_player);

        add_locomotion_systems(app);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room);
    }
}

/// Register the per-frame locomotion chain in its fixed order.
pub(crate) fn add_locomotion_systems(app: &mut App) {
    app.add_systems(
        Update,
        (
            systems::read_input,
            systems::apply_horizontal_movement,
            systems::apply_jump,
            systems::update_facing,
            systems::detect_ground,
        )
            .chain()
            .in_set(LocomotionSet),
    );
}
