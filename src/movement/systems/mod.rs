//! Movement domain: system modules for locomotion updates.

pub(crate) mod attachment;
pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use attachment::{attach_to_platforms, collect_platform_contacts};
pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_dash, apply_gravity, apply_locomotion, apply_lose_powers, forward_dash_input,
    rotate_with_look, tick_dash_timers,
};
