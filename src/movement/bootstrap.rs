//! Movement domain: player spawn from the loaded tuning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::dash::DashTimers;
use crate::movement::{FeetAnchor, GameLayer, MovementState, MovementTuning, Player};

const PLAYER_RADIUS: f32 = 0.5;
const PLAYER_SEGMENT: f32 = 1.0;

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let feet = FeetAnchor {
        offset: tuning.feet_offset(),
    };

    info!(
        "Spawning player: speed={}, dash_force={}, fly_delay={}, feet_offset={}",
        tuning.speed, tuning.dash_force, tuning.fly_delay, feet.offset
    );

    commands
        .spawn((
            // Identity & Movement
            (Player, MovementState::default(), DashTimers::default(), feet),
            // Rendering
            Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_SEGMENT))),
            MeshMaterial3d(materials.add(Color::srgb(0.9, 0.9, 0.9))),
            Transform::from_xyz(0.0, 3.0, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(PLAYER_RADIUS, PLAYER_SEGMENT),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Mass(tuning.body_mass),
                GravityScale(0.0), // Gravity is applied by the controller
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                Camera3d::default(),
                Transform::from_xyz(0.0, 2.5, 6.0).looking_at(Vec3::new(0.0, 0.5, 0.0), Vec3::Y),
            ));
        });
}
