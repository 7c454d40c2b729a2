//! Debug domain: ground probe overlay.
//!
//! F3 toggles drawing of each character's ground probe box. Drawing has no
//! effect on locomotion.

use avian2d::prelude::*;
use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::movement::{LocomotionSet, LocomotionState};


const PROBE_COLOR: Color = Color::srgb(0.2, 0.4, 1.0);

/// Resource tracking debug overlay state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether ground probe boxes are drawn
    pub show_ground_probe: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_ground_probe: true,
        }
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_probe_overlay, draw_ground_probe)
                .chain()
                .after(LocomotionSet),
        );
    }
}

fn toggle_probe_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_ground_probe = !debug_state.show_ground_probe;
        info!("Ground probe overlay: {}", debug_state.show_ground_probe);
    }
}

fn draw_ground_probe(
    debug_state: Res<DebugState>,
    mut gizmos: Gizmos,
    query: Query<(&Transform, &LocomotionState, Option<&RigidBody>)>,
) {
    if !debug_state.show_ground_probe {
        return;
    }

    for (transform, state, body) in &query {
        if let Some((center, size)) = probe_rect(transform, state, body) {
            gizmos.rect_2d(Isometry2d::from_translation(center), size, PROBE_COLOR);
        }
    }
}

/// Centre and size of the probe box to draw, or `None` when the character
/// has no physics body to visualise.
pub(crate) fn probe_rect(
    transform: &Transform,
    state: &LocomotionState,
    body: Option<&RigidBody>,
) -> Option<(Vec2, Vec2)> {
    body?;

    let probe = &state.tuning().ground_probe;
    let center = probe.cast_origin(transform.translation.truncate());
    Some((center, probe.box_size()))
}
