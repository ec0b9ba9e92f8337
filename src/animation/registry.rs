//! Fixed registry of platform animation clocks, built once at startup.

use bevy::prelude::*;

use crate::animation::PlatformClock;
use crate::movement::{Platform, Wall};

/// Handles to every platform clock discovered at startup.
///
/// Never grows or shrinks after discovery.
#[derive(Resource, Debug, Default, Clone)]
pub struct AnimatorRegistry {
    handles: Vec<Entity>,
}

impl AnimatorRegistry {
    pub fn new(handles: Vec<Entity>) -> Self {
        Self { handles }
    }

    pub fn handles(&self) -> &[Entity] {
        &self.handles
    }

    /// Write `speed` to every registered clock. Returns how many were written.
    pub fn broadcast_speed(&self, clocks: &mut Query<&mut PlatformClock>, speed: f32) -> usize {
        let mut written = 0;
        for &handle in &self.handles {
            if let Ok(mut clock) = clocks.get_mut(handle) {
                clock.speed = speed;
                written += 1;
            }
        }
        written
    }
}

pub(crate) fn discover_platform_clocks(
    mut commands: Commands,
    platforms: Query<(Entity, Option<&PlatformClock>), (With<Platform>, Without<Wall>)>,
) {
    let mut handles = Vec::new();
    let mut skipped = 0;

    for (entity, clock) in &platforms {
        if clock.is_some() {
            handles.push(entity);
        } else {
            skipped += 1;
        }
    }

    info!(
        "Animator registry built: {} clocks ({} platforms without one)",
        handles.len(),
        skipped
    );
    commands.insert_resource(AnimatorRegistry::new(handles));
}
