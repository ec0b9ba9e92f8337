//! Movement domain: look, locomotion, gravity and dash systems.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::dash::{DashTimers, ResetFlag};
use crate::movement::{
    DASH_FLAG_DURATION, DashRequested, LosePowers, MovementInput, MovementState, MovementTuning,
    Player,
};

/// Which way gravity pulls during a physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityMode {
    Suspended,
    /// Along the player's own down axis.
    Local,
    /// Along world down.
    World,
}

impl GravityMode {
    pub fn for_state(state: &MovementState) -> Self {
        if state.gravity_suspended {
            GravityMode::Suspended
        } else if state.grounded && state.has_powers {
            GravityMode::Local
        } else {
            GravityMode::World
        }
    }
}

/// Grounded velocity in the player's current right/forward basis.
pub fn locomotion_velocity(right: Vec3, forward: Vec3, axis: Vec2, speed: f32, dt: f32) -> Vec3 {
    speed * dt * (right * axis.x + forward * axis.y)
}

/// Force for one physics step, or `None` while gravity is suspended.
pub fn gravity_force(mode: GravityMode, local_down: Vec3, magnitude: f32, dt: f32) -> Option<Vec3> {
    let direction = match mode {
        GravityMode::Suspended => return None,
        GravityMode::Local => local_down,
        GravityMode::World => Vec3::NEG_Y,
    };
    Some(direction * magnitude * dt)
}

fn inverse_mass(mass: f32) -> f32 {
    if mass > 0.0 { mass.recip() } else { 0.0 }
}

/// Apply the dash impulse and raise both dash flags. Returns false (and
/// touches nothing) while airborne.
pub fn start_dash(
    state: &mut MovementState,
    timers: &mut DashTimers,
    velocity: &mut Vec3,
    direction: Vec3,
    tuning: &MovementTuning,
    mass: f32,
) -> bool {
    if !state.grounded {
        return false;
    }

    *velocity += direction * tuning.dash_force * inverse_mass(mass);
    state.gravity_suspended = true;
    state.dashing = true;

    timers.begin_dash();
    timers.schedule(ResetFlag::GravitySuspended, tuning.fly_delay);
    timers.schedule(ResetFlag::Dashing, DASH_FLAG_DURATION);
    true
}

/// Recompute a world pose after its local transform changed, keeping the parent frame.
pub fn refresh_global(
    global: &GlobalTransform,
    old_local: &Transform,
    new_local: &Transform,
) -> GlobalTransform {
    let parent = global.affine() * old_local.compute_affine().inverse();
    GlobalTransform::from(parent * new_local.compute_affine())
}

pub(crate) fn rotate_with_look(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Transform, &mut GlobalTransform), With<Player>>,
) {
    if input.look_delta == 0.0 {
        return;
    }

    // Positive look turns right, which is a negative turn about +Y.
    let degrees = input.look_delta * tuning.rotation_speed * time.delta_secs();
    for (mut transform, mut global) in &mut query {
        let old_local = *transform;
        transform.rotate_local_y(-degrees.to_radians());
        // Dash and locomotion read the world basis later this frame
        *global = refresh_global(&global, &old_local, &transform);
    }
}

pub(crate) fn forward_dash_input(
    input: Res<MovementInput>,
    query: Query<&GlobalTransform, With<Player>>,
    mut dash_requests: MessageWriter<DashRequested>,
) {
    if !input.dash_just_pressed {
        return;
    }

    for global in &query {
        dash_requests.write(DashRequested {
            direction: global.forward().as_vec3(),
        });
    }
}

pub(crate) fn apply_locomotion(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&GlobalTransform, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (global, mut state, mut velocity) in &mut query {
        // No air control: airborne players keep whatever velocity they have
        if !state.grounded {
            continue;
        }

        let target = locomotion_velocity(
            global.right().as_vec3(),
            global.forward().as_vec3(),
            input.axis,
            tuning.speed,
            dt,
        );

        state.moving = target != Vec3::ZERO;
        if state.moving {
            velocity.0 = target;
        }
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &GlobalTransform, &Mass, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, global, mass, mut velocity) in &mut query {
        let mode = GravityMode::for_state(state);
        let local_down = -global.up().as_vec3();

        if let Some(force) = gravity_force(mode, local_down, tuning.gravity_force, dt) {
            velocity.0 += force * inverse_mass(mass.0) * dt;
        }
    }
}

pub(crate) fn apply_dash(
    mut dash_requests: MessageReader<DashRequested>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut MovementState,
            &mut DashTimers,
            &mut LinearVelocity,
            &Mass,
        ),
        With<Player>,
    >,
) {
    for request in dash_requests.read() {
        for (mut state, mut timers, mut velocity, mass) in &mut query {
            let started = start_dash(
                &mut state,
                &mut timers,
                &mut velocity.0,
                request.direction,
                &tuning,
                mass.0,
            );

            if started {
                debug!(
                    "Dash started: direction={}, generation={}",
                    request.direction,
                    timers.generation()
                );
            } else {
                debug!("Dash ignored while airborne");
            }
        }
    }
}

pub(crate) fn apply_lose_powers(
    mut lose_powers: MessageReader<LosePowers>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    if lose_powers.read().count() == 0 {
        return;
    }

    for mut state in &mut query {
        if state.has_powers {
            state.has_powers = false;
            info!("Player lost powers; gravity is world-space from now on");
        }
    }
}

pub(crate) fn tick_dash_timers(
    time: Res<Time>,
    mut query: Query<(&mut MovementState, &mut DashTimers), With<Player>>,
) {
    for (mut state, mut timers) in &mut query {
        if timers.pending() == 0 {
            continue;
        }

        for flag in timers.tick(time.delta(), &mut state) {
            debug!("Dash reset fired: {:?}", flag);
        }
    }
}
