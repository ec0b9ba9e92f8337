//! Movement domain: ground sensing under the feet anchor.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{FeetAnchor, GROUND_PROBE_RADIUS, GameLayer, MovementState, Player};

/// Why an overlap query produced no usable answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorError {
    /// The probe center contains NaN or infinite components.
    NonFiniteProbe(Vec3),
}

impl std::fmt::Display for SensorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SensorError::NonFiniteProbe(center) => {
                write!(f, "ground probe center {} is not finite", center)
            }
        }
    }
}

/// Sphere overlap against the physics world.
pub trait OverlapQuery {
    /// Number of colliders overlapping the sphere and passing `filter`.
    fn overlap_sphere(
        &self,
        center: Vec3,
        radius: f32,
        filter: &SpatialQueryFilter,
    ) -> Result<usize, SensorError>;
}

impl OverlapQuery for SpatialQuery<'_, '_> {
    fn overlap_sphere(
        &self,
        center: Vec3,
        radius: f32,
        filter: &SpatialQueryFilter,
    ) -> Result<usize, SensorError> {
        if !center.is_finite() {
            return Err(SensorError::NonFiniteProbe(center));
        }
        let hits = self.shape_intersections(&Collider::sphere(radius), center, Quat::IDENTITY, filter);
        Ok(hits.len())
    }
}

/// True iff anything on the filtered layers overlaps the probe sphere.
/// A failed query reads as airborne.
pub fn is_grounded(
    query: &impl OverlapQuery,
    feet: Vec3,
    radius: f32,
    filter: &SpatialQueryFilter,
) -> bool {
    match query.overlap_sphere(feet, radius, filter) {
        Ok(hits) => hits > 0,
        Err(e) => {
            warn!("Ground sensor failed: {}; treating player as airborne", e);
            false
        }
    }
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&GlobalTransform, &FeetAnchor, &mut MovementState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (global, feet, mut state) in &mut query {
        let was_grounded = state.grounded;
        let grounded = is_grounded(
            &spatial_query,
            feet.world_position(global),
            GROUND_PROBE_RADIUS,
            &ground_filter,
        );

        if grounded != was_grounded {
            state.grounded = grounded;
            debug!("Grounded changed: {} -> {}", was_grounded, grounded);
        }
    }
}
