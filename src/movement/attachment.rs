//! Movement domain: rigid re-basing of the player onto a contacted platform.
//!
//! All of this is plain pose math. The system in `systems::attachment` feeds it
//! a [`PlatformContact`] and writes the resulting [`AttachedPose`] back.

use std::f32::consts::PI;

use bevy::prelude::*;

/// Pose and local scale of a platform at the moment of contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformPose {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl PlatformPose {
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

/// First contact of a player/platform collision, seen from the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformContact {
    pub point: Vec3,
    /// Points from the platform surface towards the player.
    pub normal: Vec3,
    pub platform: PlatformPose,
}

/// Player pose after attaching to a platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachedPose {
    pub world_translation: Vec3,
    pub world_rotation: Quat,
    /// Translation relative to the platform frame.
    pub local_translation: Vec3,
    /// Rotation relative to the platform frame.
    pub local_rotation: Quat,
    /// Componentwise inverse of the platform's local scale.
    pub local_scale: Vec3,
    pub flipped: bool,
}

impl AttachedPose {
    pub fn local_transform(&self) -> Transform {
        Transform {
            translation: self.local_translation,
            rotation: self.local_rotation,
            scale: self.local_scale,
        }
    }

    /// World pose of the player; its scale is one because the local scale cancels the parent's.
    pub fn world_transform(&self) -> Transform {
        Transform::from_translation(self.world_translation).with_rotation(self.world_rotation)
    }
}

/// Whether the player rests against the underside of the platform.
///
/// The flip is chosen when the angle between the platform's up axis and
/// `offset` is 90 degrees or more. Exactly 90 degrees therefore flips. A zero
/// `offset` counts as an angle of zero and never flips.
pub fn underside_contact(platform_up: Vec3, offset: Vec3) -> bool {
    if offset.length_squared() <= f32::EPSILON * f32::EPSILON {
        return false;
    }
    platform_up.dot(offset) <= 0.0
}

/// Place the feet anchor on the contact point, inherit the platform rotation
/// (flipped about its forward axis for undersides) and cancel its scale.
pub fn attach_pose(contact: &PlatformContact, feet_offset_y: f32) -> AttachedPose {
    let platform = &contact.platform;

    let world_translation = contact.point - contact.normal * feet_offset_y;

    let flipped = underside_contact(platform.up(), world_translation - contact.point);
    let roll = if flipped { PI } else { 0.0 };
    let local_rotation = Quat::from_rotation_z(roll);
    let world_rotation = (platform.rotation * local_rotation).normalize();

    let local_translation =
        (platform.rotation.inverse() * (world_translation - platform.translation)) / platform.scale;

    AttachedPose {
        world_translation,
        world_rotation,
        local_translation,
        local_rotation,
        local_scale: platform.scale.recip(),
        flipped,
    }
}
