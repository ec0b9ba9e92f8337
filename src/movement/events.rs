//! Movement domain: messages that drive the controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Request a dash impulse along `direction`. Ignored while airborne.
#[derive(Debug, Clone, Copy)]
pub struct DashRequested {
    pub direction: Vec3,
}

impl Message for DashRequested {}

/// Permanently switch the player to world-space gravity.
#[derive(Debug, Clone, Copy)]
pub struct LosePowers;

impl Message for LosePowers {}

/// First contact between the player and a platform, in world space.
#[derive(Debug, Clone, Copy)]
pub struct PlatformContactEvent {
    pub player: Entity,
    pub platform: Entity,
    pub point: Vec3,
    /// Points from the platform surface towards the player.
    pub normal: Vec3,
}

impl Message for PlatformContactEvent {}
