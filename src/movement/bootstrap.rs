//! Movement domain: player spawn from the loaded locomotion tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, LocomotionState, LocomotionTuning, Player};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player with a copy of the current tuning.
/// Runs after content loading so file overrides are already applied.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    info!(
        "Spawning player: speed={}, jump={}, coyote={}s",
        tuning.horizontal_speed, tuning.jump_impulse, tuning.coyote_window
    );

    commands
        .spawn((
            // Identity & Movement
            Player,
            LocomotionState::new(tuning.clone()),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(0.0, 100.0, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .with_children(|parent| {
            // Visor, so the flip is visible
            parent.spawn((
                Sprite {
                    color: Color::srgb(0.3, 0.6, 0.9),
                    custom_size: Some(Vec2::new(10.0, 6.0)),
                    ..default()
                },
                Transform::from_xyz(6.0, 14.0, 0.1),
            ));
        });
}
