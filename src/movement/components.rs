//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Surfaces the ground sensor reports (platforms, walls, ceilings)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-frame movement flags for the player.
///
/// `gravity_suspended` and `dashing` are set together by a dash and cleared
/// independently by their own scheduled resets.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementState {
    pub grounded: bool,
    pub moving: bool,
    pub has_powers: bool,
    pub gravity_suspended: bool,
    pub dashing: bool,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            grounded: false,
            moving: false,
            has_powers: true,
            gravity_suspended: false,
            dashing: false,
        }
    }
}

/// Local offset of the feet anchor below the player's origin.
#[derive(Component, Debug, Clone, Copy)]
pub struct FeetAnchor {
    pub offset: Vec3,
}

impl FeetAnchor {
    /// World-space position of the anchor for the given player pose.
    pub fn world_position(&self, global: &GlobalTransform) -> Vec3 {
        global.transform_point(self.offset)
    }
}

/// Marker for surfaces the player attaches to on contact
#[derive(Component, Debug)]
pub struct Platform;

/// Marker for platforms that never expose an animation clock
#[derive(Component, Debug)]
pub struct Wall;
