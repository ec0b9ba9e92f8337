//! Movement domain: deferred flag resets scheduled by a dash.

use std::time::Duration;

use bevy::prelude::*;

use crate::movement::MovementState;

/// Which movement flag a scheduled reset clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetFlag {
    GravitySuspended,
    Dashing,
}

#[derive(Debug)]
struct ScheduledReset {
    generation: u64,
    flag: ResetFlag,
    timer: Timer,
}

/// Pending resets for the player's dash flags.
///
/// Every dash starts a new generation. Resets carry the generation that
/// scheduled them, and only resets from the current generation may fire.
#[derive(Component, Debug, Default)]
pub struct DashTimers {
    generation: u64,
    pending: Vec<ScheduledReset>,
}

impl DashTimers {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Start a new dash generation and cancel resets left over from older dashes.
    pub fn begin_dash(&mut self) -> u64 {
        self.generation += 1;
        let current = self.generation;
        self.pending.retain(|reset| reset.generation == current);
        current
    }

    pub fn schedule(&mut self, flag: ResetFlag, delay_secs: f32) {
        self.pending.push(ScheduledReset {
            generation: self.generation,
            flag,
            timer: Timer::from_seconds(delay_secs.max(0.0), TimerMode::Once),
        });
    }

    /// Advance every pending reset and clear the flags whose timers finished.
    /// Returns the flags that were cleared this tick.
    pub fn tick(&mut self, delta: Duration, state: &mut MovementState) -> Vec<ResetFlag> {
        let current = self.generation;
        let mut fired = Vec::new();

        self.pending.retain_mut(|reset| {
            if reset.generation != current {
                return false;
            }
            reset.timer.tick(delta);
            if reset.timer.remaining_secs() > 0.0 {
                return true;
            }
            match reset.flag {
                ResetFlag::GravitySuspended => state.gravity_suspended = false,
                ResetFlag::Dashing => state.dashing = false,
            }
            fired.push(reset.flag);
            false
        });

        fired
    }
}
