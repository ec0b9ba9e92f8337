//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

/// Radius of the overlap sphere used to detect ground under the feet anchor.
pub const GROUND_PROBE_RADIUS: f32 = 1.0;

/// How long the `dashing` flag stays raised after a dash, in seconds.
pub const DASH_FLAG_DURATION: f32 = 0.1;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Scales `dt * axis` into the grounded velocity.
    pub speed: f32,
    pub dash_force: f32,
    pub gravity_force: f32,
    /// Seconds gravity stays suspended after a dash.
    pub fly_delay: f32,
    pub multiplier_anim_high: f32,
    pub multiplier_anim_mid: f32,
    pub multiplier_anim_low: f32,
    /// Degrees of yaw per second per unit of look input.
    pub rotation_speed: f32,
    pub feet_offset: [f32; 3],
    pub body_mass: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 200.0,
            dash_force: 12.0,
            gravity_force: 9.81,
            fly_delay: 1.0,
            multiplier_anim_high: 0.1,
            multiplier_anim_mid: 0.04,
            multiplier_anim_low: 0.01,
            rotation_speed: 50.0,
            feet_offset: [0.0, -1.0, 0.0],
            body_mass: 1.0,
        }
    }
}

/// A tuning value that is out of its usable range.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningIssue {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for TuningIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tuning field '{}' = {} (expected {})",
            self.field, self.value, self.expected
        )
    }
}

impl MovementTuning {
    pub fn feet_offset(&self) -> Vec3 {
        Vec3::from_array(self.feet_offset)
    }

    /// Collect every field outside its usable range. Empty when the tuning is sane.
    pub fn validate(&self) -> Vec<TuningIssue> {
        let mut issues = Vec::new();

        let mut check = |field: &'static str, value: f32, ok: bool, expected: &'static str| {
            if !ok {
                issues.push(TuningIssue {
                    field,
                    value,
                    expected,
                });
            }
        };

        check("speed", self.speed, self.speed >= 0.0, ">= 0");
        check("dash_force", self.dash_force, self.dash_force >= 0.0, ">= 0");
        check(
            "gravity_force",
            self.gravity_force,
            self.gravity_force >= 0.0,
            ">= 0",
        );
        check("fly_delay", self.fly_delay, self.fly_delay >= 0.0, ">= 0");
        check("body_mass", self.body_mass, self.body_mass > 0.0, "> 0");
        for (field, value) in [
            ("multiplier_anim_high", self.multiplier_anim_high),
            ("multiplier_anim_mid", self.multiplier_anim_mid),
            ("multiplier_anim_low", self.multiplier_anim_low),
        ] {
            check(field, value, value >= 0.0, ">= 0");
        }

        issues
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// x = horizontal, y = vertical
    pub axis: Vec2,
    pub look_delta: f32,
    pub dash_just_pressed: bool,
}
