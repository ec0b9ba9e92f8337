//! Movement domain: debug-only arena and key bindings.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::animation::{PlatformClock, PlatformMotion};
use crate::movement::{GameLayer, LosePowers, Platform, Wall};

const ARENA_HALF: f32 = 30.0;
const WALL_HEIGHT: f32 = 20.0;

pub(crate) fn spawn_test_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let wall_material = materials.add(Color::srgb(0.3, 0.3, 0.4));
    let platform_material = materials.add(Color::srgb(0.5, 0.4, 0.3));
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 30.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Walls: tagged as platforms but without a clock
    let walls = [
        (Vec3::new(0.0, 0.0, -ARENA_HALF), Vec3::new(ARENA_HALF * 2.0, WALL_HEIGHT, 1.0)),
        (Vec3::new(0.0, 0.0, ARENA_HALF), Vec3::new(ARENA_HALF * 2.0, WALL_HEIGHT, 1.0)),
        (Vec3::new(-ARENA_HALF, 0.0, 0.0), Vec3::new(1.0, WALL_HEIGHT, ARENA_HALF * 2.0)),
        (Vec3::new(ARENA_HALF, 0.0, 0.0), Vec3::new(1.0, WALL_HEIGHT, ARENA_HALF * 2.0)),
    ];
    for (position, size) in walls {
        commands.spawn((
            Platform,
            Wall,
            Mesh3d(meshes.add(Cuboid::from_size(Vec3::ONE))),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(position).with_scale(size),
            RigidBody::Static,
            Collider::cuboid(1.0, 1.0, 1.0),
            ground_layers,
        ));
    }

    // Moving platforms: (base pose, sway, spin, scale pulse)
    let platforms = [
        (
            Transform::from_xyz(0.0, -2.0, 0.0).with_scale(Vec3::new(12.0, 1.0, 12.0)),
            Vec3::ZERO,
            0.0,
            Vec3::ZERO,
        ),
        (
            Transform::from_xyz(-10.0, 2.0, -6.0).with_scale(Vec3::new(6.0, 1.0, 4.0)),
            Vec3::new(4.0, 0.0, 0.0),
            0.0,
            Vec3::new(0.5, 0.0, 0.5),
        ),
        (
            Transform::from_xyz(10.0, 4.0, 6.0).with_scale(Vec3::new(5.0, 0.5, 5.0)),
            Vec3::new(0.0, 2.0, 0.0),
            0.4,
            Vec3::ZERO,
        ),
        (
            Transform::from_xyz(0.0, 8.0, -12.0)
                .with_rotation(Quat::from_rotation_x(0.3))
                .with_scale(Vec3::new(8.0, 1.0, 3.0)),
            Vec3::new(0.0, 0.0, 3.0),
            0.2,
            Vec3::new(1.0, 0.5, 0.0),
        ),
    ];
    for (base, sway, spin, pulse) in platforms {
        commands.spawn((
            Platform,
            PlatformClock::new(1.0),
            PlatformMotion {
                base,
                sway,
                spin,
                pulse,
            },
            Mesh3d(meshes.add(Cuboid::from_size(Vec3::ONE))),
            MeshMaterial3d(platform_material.clone()),
            base,
            RigidBody::Kinematic,
            Collider::cuboid(1.0, 1.0, 1.0),
            ground_layers,
        ));
    }
}

pub(crate) fn debug_lose_powers(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut lose_powers: MessageWriter<LosePowers>,
) {
    if keyboard.just_pressed(KeyCode::KeyP) {
        lose_powers.write(LosePowers);
    }
}
