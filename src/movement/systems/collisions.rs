//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{LocomotionState, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &mut LocomotionState), With<Player>>,
) {
    for (transform, mut state) in &mut query {
        let was_on_ground = state.is_grounded();
        let probe = state.tuning().ground_probe.clone();

        let shape = Collider::rectangle(probe.box_width, probe.box_height);
        let origin = probe.cast_origin(transform.translation.truncate());
        let config = ShapeCastConfig::from_max_distance(probe.cast_distance);
        let filter = SpatialQueryFilter::from_mask(probe.mask);

        let hit = spatial_query.cast_shape(&shape, origin, 0.0, Dir2::NEG_Y, &config, &filter);

        state.set_grounded(hit.is_some());

        if state.is_grounded() && !was_on_ground {
            debug!("Landed: coyote_timer reset to {}", state.coyote_timer());
        } else if !state.is_grounded() && was_on_ground {
            debug!("Left ground: coyote_timer={}", state.coyote_timer());
        }
    }
}
