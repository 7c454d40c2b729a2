//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::LocomotionTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Jump availability derived from grounded state and the coyote timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpGate {
    Grounded,
    AirborneWithGrace,
    AirborneNoGrace,
}

/// Per-character locomotion record: the tuning fixed at spawn plus the
/// runtime fields the four locomotion procedures mutate each frame.
#[derive(Component, Debug, Clone)]
pub struct LocomotionState {
    tuning: LocomotionTuning,
    coyote_timer: f32,
    is_grounded: bool,
    facing: Facing,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self::new(LocomotionTuning::default())
    }
}

impl LocomotionState {
    pub fn new(tuning: LocomotionTuning) -> Self {
        Self {
            tuning,
            coyote_timer: 0.0,
            is_grounded: false,
            facing: Facing::Right,
        }
    }

    pub fn tuning(&self) -> &LocomotionTuning {
        &self.tuning
    }

    pub fn coyote_timer(&self) -> f32 {
        self.coyote_timer
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn facing_right(&self) -> bool {
        self.facing == Facing::Right
    }

    pub fn jump_gate(&self) -> JumpGate {
        if self.is_grounded {
            JumpGate::Grounded
        } else if self.coyote_timer > 0.0 {
            JumpGate::AirborneWithGrace
        } else {
            JumpGate::AirborneNoGrace
        }
    }

    /// Horizontal velocity for the given input axis.
    pub fn horizontal_velocity(&self, axis: f32) -> f32 {
        axis.clamp(-1.0, 1.0) * self.tuning.horizontal_speed
    }

    /// Consume a jump request. Returns the vertical velocity to apply when
    /// the jump is honored; the coyote window is spent either way.
    pub fn try_jump(&mut self, requested: bool) -> Option<f32> {
        if !requested || self.jump_gate() == JumpGate::AirborneNoGrace {
            return None;
        }

        self.coyote_timer = 0.0;
        Some(self.tuning.jump_impulse)
    }

    /// Count the coyote timer down while airborne. Clamped at zero.
    pub fn tick_coyote(&mut self, dt: f32) {
        if !self.is_grounded {
            self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        }
    }

    /// Record the latest ground probe result. Landing refills the coyote
    /// window; staying on the ground keeps whatever a jump left behind, and
    /// losing contact leaves the timer to run down.
    pub fn set_grounded(&mut self, grounded: bool) {
        if grounded && !self.is_grounded {
            self.coyote_timer = self.tuning.coyote_window;
        }
        self.is_grounded = grounded;
    }

    /// Whether the given axis value should flip the current facing.
    pub fn wants_flip(&self, axis: f32) -> bool {
        let deadzone = self.tuning.facing_deadzone;
        match self.facing {
            Facing::Left => axis > deadzone,
            Facing::Right => axis < -deadzone,
        }
    }

    /// Toggle facing. Returns the new facing.
    pub fn flip(&mut self) -> Facing {
        self.facing = self.facing.flipped();
        self.facing
    }
}
