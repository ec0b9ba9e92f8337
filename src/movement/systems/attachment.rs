//! Movement domain: contact response that re-bases the player onto platforms.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::attachment::{PlatformContact, PlatformPose, attach_pose};
use crate::movement::{FeetAnchor, Platform, PlatformContactEvent, Player};

/// First point of the first manifold, with the normal turned to face the player.
///
/// Manifolds are given as `(normal, first point)`. Their normals point from the
/// first collider of the pair to the second.
pub(crate) fn first_contact(
    player_is_first: bool,
    mut manifolds: impl Iterator<Item = (Vec3, Option<Vec3>)>,
) -> Option<(Vec3, Vec3)> {
    let (normal, point) = manifolds.next()?;
    let point = point?;
    let normal = if player_is_first { -normal } else { normal };
    Some((point, normal))
}

/// Turn player/platform `CollisionStart`s into contact events with manifold data.
pub(crate) fn collect_platform_contacts(
    mut collision_events: MessageReader<CollisionStart>,
    collisions: Collisions,
    players: Query<(), With<Player>>,
    platforms: Query<(), (With<Platform>, Without<Player>)>,
    mut contact_events: MessageWriter<PlatformContactEvent>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player, platform) in pairs {
            if !players.contains(player) || !platforms.contains(platform) {
                continue;
            }

            let Some((point, normal)) = collisions.get(player, platform).and_then(|pair| {
                first_contact(
                    pair.collider1 == player,
                    pair.manifolds
                        .iter()
                        .map(|m| (m.normal, m.points.first().map(|p| p.point))),
                )
            }) else {
                warn!(
                    "Platform contact {:?} reported no contact points, skipping attachment",
                    platform
                );
                continue;
            };

            contact_events.write(PlatformContactEvent {
                player,
                platform,
                point,
                normal,
            });
        }
    }
}

pub(crate) fn attach_to_platforms(
    mut commands: Commands,
    mut contact_events: MessageReader<PlatformContactEvent>,
    platforms: Query<(&GlobalTransform, &Transform), (With<Platform>, Without<Player>)>,
    mut players: Query<
        (
            &mut Transform,
            &mut GlobalTransform,
            &mut LinearVelocity,
            &FeetAnchor,
        ),
        (With<Player>, Without<Platform>),
    >,
) {
    for event in contact_events.read() {
        let Ok((mut transform, mut global, mut velocity, feet)) = players.get_mut(event.player)
        else {
            continue;
        };

        let Ok((platform_global, platform_transform)) = platforms.get(event.platform) else {
            continue;
        };

        // Clocks advance after this system, so both platform transforms are from the same frame
        let (_, rotation, translation) = platform_global.to_scale_rotation_translation();
        let contact = PlatformContact {
            point: event.point,
            normal: event.normal,
            platform: PlatformPose {
                translation,
                rotation,
                scale: platform_transform.scale,
            },
        };

        let pose = attach_pose(&contact, feet.offset.y);

        velocity.0 = Vec3::ZERO;
        *transform = pose.local_transform();
        *global = GlobalTransform::from(pose.world_transform());
        commands.entity(event.player).insert(ChildOf(event.platform));

        info!(
            "Attached to platform {:?}: flipped={}, local_scale={}",
            event.platform, pose.flipped, pose.local_scale
        );
    }
}
