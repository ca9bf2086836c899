use bevy_ecs::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f32::consts::PI;
use tracing::trace;

use common::{ObstacleRegistry, PlayerPose};

use crate::config::WalkConfig;

// ============================================================================
// Components & Resources
// ============================================================================

#[derive(Component, Debug, Default)]
pub struct PlayerMarker;

// Scripted input standing in for a keyboard: each tick turns a little and steps forward.
#[derive(Resource)]
pub struct WalkScript {
    pub steps_remaining: u32,
    pub step_size: f32,
    rng: StdRng,
}

impl WalkScript {
    #[must_use]
    pub fn new(config: &WalkConfig) -> Self {
        Self {
            steps_remaining: config.steps,
            step_size: config.step_size,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    pub accepted: u32,
    pub blocked: u32,
}

// ============================================================================
// Movement System
// ============================================================================

pub fn players_walk_system(
    registry: Res<ObstacleRegistry>,
    mut script: ResMut<WalkScript>,
    mut stats: ResMut<WalkStats>,
    mut query: Query<&mut PlayerPose, With<PlayerMarker>>,
) {
    if script.steps_remaining == 0 {
        return;
    }
    script.steps_remaining -= 1;

    for mut pose in &mut query {
        let turn = script.rng.random_range(-PI / 4.0..=PI / 4.0);
        pose.rotate(turn);

        let step = script.step_size;
        if pose.try_move(&registry, step, 0.0) {
            stats.accepted += 1;
        } else {
            // Blocked: turn around so the next tick has a chance
            stats.blocked += 1;
            pose.rotate(PI);
            trace!(position = ?pose.position, "walk blocked, turning around");
        }
    }
}
