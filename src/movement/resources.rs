//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::GameLayer;

/// Box cast used to sense the ground beneath a character.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GroundProbe {
    pub box_width: f32,
    pub box_height: f32,
    /// How far below the character origin the box is centred
    pub offset_y: f32,
    /// Distance the box travels downward
    pub cast_distance: f32,
    /// Layer counted as walkable
    pub mask: GameLayer,
}

impl Default for GroundProbe {
    fn default() -> Self {
        Self {
            box_width: 22.0,
            box_height: 8.0,
            offset_y: 24.0,
            cast_distance: 4.0,
            mask: GameLayer::Ground,
        }
    }
}

impl GroundProbe {
    pub fn box_size(&self) -> Vec2 {
        Vec2::new(self.box_width, self.box_height)
    }

    /// Centre of the box before it is cast, for a character at `origin`.
    pub fn cast_origin(&self, origin: Vec2) -> Vec2 {
        origin - Vec2::new(0.0, self.offset_y)
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub horizontal_speed: f32,
    pub jump_impulse: f32,
    /// Seconds a jump is still accepted after leaving the ground
    pub coyote_window: f32,
    /// Axis magnitude at or below which facing never changes
    pub facing_deadzone: f32,
    pub ground_probe: GroundProbe,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            horizontal_speed: 320.0,
            jump_impulse: 680.0,
            coyote_window: 0.2,
            facing_deadzone: 0.01,
            ground_probe: GroundProbe::default(),
        }
    }
}

/// A tuning value outside its allowed range.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningValidationError {
    pub field: &'static str,
    pub value: f32,
    pub requirement: &'static str,
}

impl std::fmt::Display for TuningValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' = {} but must be {}",
            self.field, self.value, self.requirement
        )
    }
}

/// Helper macro for checking one tuning field
macro_rules! check_field {
    ($errors:expr, $field:expr, $value:expr, $ok:expr, $requirement:expr) => {
        let value: f32 = $value;
        let in_range: fn(f32) -> bool = $ok;
        if !value.is_finite() || !in_range(value) {
            $errors.push(TuningValidationError {
                field: $field,
                value,
                requirement: $requirement,
            });
        }
    };
}

impl LocomotionTuning {
    /// Check every range constraint. Returns all violations, empty when valid.
    pub fn validate(&self) -> Vec<TuningValidationError> {
        let mut errors = Vec::new();
        let probe = &self.ground_probe;

        check_field!(errors, "horizontal_speed", self.horizontal_speed, |v| v > 0.0, "> 0");
        check_field!(errors, "jump_impulse", self.jump_impulse, |v| v > 0.0, "> 0");
        check_field!(errors, "coyote_window", self.coyote_window, |v| v >= 0.0, ">= 0");
        check_field!(
            errors,
            "facing_deadzone",
            self.facing_deadzone,
            |v| (0.0..1.0).contains(&v),
            "in [0, 1)"
        );
        check_field!(errors, "ground_probe.box_width", probe.box_width, |v| v > 0.0, "> 0");
        check_field!(errors, "ground_probe.box_height", probe.box_height, |v| v > 0.0, "> 0");
        check_field!(errors, "ground_probe.offset_y", probe.offset_y, |_| true, "finite");
        check_field!(
            errors,
            "ground_probe.cast_distance",
            probe.cast_distance,
            |v| v >= 0.0,
            ">= 0"
        );

        errors
    }
}

#[derive(Resource, Debug, Default)]
pub struct LocomotionInput {
    /// Horizontal axis in [-1, 1]
    pub axis: f32,
    /// True only on the frame the jump button goes down
    pub jump_just_pressed: bool,
}
