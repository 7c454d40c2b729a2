//! Movement domain: velocity, jump gating and facing updates.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{LocomotionInput, LocomotionState, Player};

pub(crate) fn apply_horizontal_movement(
    input: Res<LocomotionInput>,
    mut query: Query<(&LocomotionState, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut velocity) in &mut query {
        velocity.x = state.horizontal_velocity(input.axis);
    }
}

pub(crate) fn apply_jump(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    mut query: Query<(&mut LocomotionState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity) in &mut query {
        let gate = state.jump_gate();
        if let Some(impulse) = state.try_jump(input.jump_just_pressed) {
            velocity.y = impulse;
            debug!("Jump: gate={:?}, vy={}", gate, impulse);
        }

        // Coyote time runs down after the jump decision
        state.tick_coyote(dt);
    }
}

pub(crate) fn update_facing(
    input: Res<LocomotionInput>,
    mut query: Query<(&mut LocomotionState, &mut Transform, Option<&Children>), With<Player>>,
    mut child_query: Query<&mut Transform, Without<Player>>,
) {
    for (mut state, mut transform, children) in &mut query {
        if !state.wants_flip(input.axis) {
            continue;
        }

        let facing = state.flip();
        transform.scale.x = -transform.scale.x;

        // Attached visuals mirror with the body
        if let Some(children) = children {
            for child in children.iter() {
                if let Ok(mut child_transform) = child_query.get_mut(child) {
                    child_transform.scale.x = -child_transform.scale.x;
                }
            }
        }

        debug!("Facing flipped: now {:?}", facing);
    }
}
