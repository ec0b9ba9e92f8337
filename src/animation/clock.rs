//! Platform animation clocks and the motion they drive.

use bevy::prelude::*;

/// External animation clock on a platform. `speed` scales how fast it runs.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlatformClock {
    pub speed: f32,
    pub elapsed: f32,
}

impl PlatformClock {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt * self.speed;
    }
}

/// Radians of motion phase per second of clock time.
const MOTION_FREQUENCY: f32 = 20.0;

/// Looping pose animation for a demo platform.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlatformMotion {
    pub base: Transform,
    /// Peak translation offset.
    pub sway: Vec3,
    /// Yaw in radians per unit of phase.
    pub spin: f32,
    /// Peak extra scale on top of the base scale.
    pub pulse: Vec3,
}

impl PlatformMotion {
    pub fn pose_at(&self, elapsed: f32) -> Transform {
        let phase = elapsed * MOTION_FREQUENCY;
        let wave = phase.sin();

        Transform {
            translation: self.base.translation + self.sway * wave,
            rotation: self.base.rotation * Quat::from_rotation_y(self.spin * phase),
            scale: self.base.scale + self.pulse * (0.5 + 0.5 * wave),
        }
    }
}

pub(crate) fn advance_platform_clocks(
    time: Res<Time>,
    mut query: Query<(&mut PlatformClock, Option<&PlatformMotion>, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (mut clock, motion, mut transform) in &mut query {
        clock.advance(dt);
        if let Some(motion) = motion {
            *transform = motion.pose_at(clock.elapsed);
        }
    }
}
