//! Animation throttling from the player's movement state.

use bevy::prelude::*;

use crate::animation::{AnimatorRegistry, PlatformClock};
use crate::movement::{MovementState, MovementTuning, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationTier {
    High,
    Mid,
    Low,
}

impl AnimationTier {
    /// Dashing dominates; a grounded, still player is Low; anything else is Mid.
    pub fn from_state(state: &MovementState) -> Self {
        if state.dashing {
            AnimationTier::High
        } else if !state.moving && state.grounded {
            AnimationTier::Low
        } else {
            AnimationTier::Mid
        }
    }

    pub fn multiplier(self, tuning: &MovementTuning) -> f32 {
        match self {
            AnimationTier::High => tuning.multiplier_anim_high,
            AnimationTier::Mid => tuning.multiplier_anim_mid,
            AnimationTier::Low => tuning.multiplier_anim_low,
        }
    }
}

/// Last tier pushed to the registry.
#[derive(Resource, Debug, Default)]
pub struct AnimationThrottle {
    current: Option<AnimationTier>,
}

impl AnimationThrottle {
    pub fn current(&self) -> Option<AnimationTier> {
        self.current
    }

    /// Record `tier`, returning it only if it differs from the last one.
    pub fn transition(&mut self, tier: AnimationTier) -> Option<AnimationTier> {
        if self.current == Some(tier) {
            return None;
        }
        self.current = Some(tier);
        Some(tier)
    }
}

pub(crate) fn throttle_platform_animation(
    tuning: Res<MovementTuning>,
    registry: Res<AnimatorRegistry>,
    mut throttle: ResMut<AnimationThrottle>,
    players: Query<&MovementState, With<Player>>,
    mut clocks: Query<&mut PlatformClock>,
) {
    let Ok(state) = players.single() else {
        return;
    };

    let Some(tier) = throttle.transition(AnimationTier::from_state(state)) else {
        return;
    };

    let speed = tier.multiplier(&tuning);
    let written = registry.broadcast_speed(&mut clocks, speed);
    debug!(
        "Animation tier -> {:?}: speed={} on {} clocks",
        tier, speed, written
    );
}
