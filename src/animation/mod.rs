//! Animation domain: platform clocks, their registry and movement-driven throttling.

mod clock;
mod registry;
mod throttle;


pub use clock::{PlatformClock, PlatformMotion};
pub use registry::AnimatorRegistry;
pub use throttle::{AnimationThrottle, AnimationTier};

use bevy::prelude::*;

use crate::animation::clock::advance_platform_clocks;
use crate::animation::registry::discover_platform_clocks;
use crate::animation::throttle::throttle_platform_animation;
use crate::movement::systems::{apply_lose_powers, attach_to_platforms};

pub struct PlatformAnimationPlugin;

impl Plugin for PlatformAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimatorRegistry>()
            .init_resource::<AnimationThrottle>()
            .add_systems(PostStartup, discover_platform_clocks)
            .add_systems(Update, advance_platform_clocks.after(attach_to_platforms))
            .add_systems(Update, throttle_platform_animation.after(apply_lose_powers));
    }
}
