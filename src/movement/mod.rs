//! Movement domain: locomotion, gravity, dash and platform attachment.

pub mod attachment;
mod bootstrap;
mod components;
mod config;
pub mod dash;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
pub(crate) mod systems;


pub use components::{FeetAnchor, GameLayer, MovementState, Platform, Player, Wall};
pub use config::{ConfigLoadError, load_tuning_file, parse_tuning};
pub use events::{DashRequested, LosePowers, PlatformContactEvent};
pub use resources::{
    DASH_FLAG_DURATION, GROUND_PROBE_RADIUS, MovementInput, MovementTuning, TuningIssue,
};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::config::load_movement_tuning;
use crate::movement::systems::{
    apply_dash, apply_gravity, apply_locomotion, apply_lose_powers, attach_to_platforms,
    collect_platform_contacts, detect_ground, forward_dash_input, read_input, rotate_with_look,
    tick_dash_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<DashRequested>()
            .add_message::<LosePowers>()
            .add_message::<PlatformContactEvent>()
            .add_systems(Startup, (load_movement_tuning, spawn_player).chain())
            .add_systems(FixedUpdate, apply_gravity)
            .add_systems(
                Update,
                (
                    collect_platform_contacts,
                    attach_to_platforms,
                    read_input,
                    rotate_with_look,
                    forward_dash_input,
                    detect_ground,
                    apply_locomotion,
                    // Timers advance before a new dash so its resets start counting next frame
                    tick_dash_timers,
                    apply_dash,
                    apply_lose_powers,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        {
            app.add_systems(Startup, dev::spawn_test_arena)
                .add_systems(Update, dev::debug_lose_powers.before(apply_lose_powers));
        }
    }
}
