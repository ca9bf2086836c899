use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use std::f32::consts::TAU;
use tracing::trace;

use crate::{
    collision::{HexShape, ObstacleRegistry},
    constants::PLAYER_PROBE_RADIUS,
};

// ============================================================================
// Player Pose
// ============================================================================

// Position on the floor plane and facing direction of a walking player
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerPose {
    pub position: Vec2,
    pub yaw: f32, // radians in [0, 2pi)
}

impl PlayerPose {
    #[must_use]
    pub const fn new(position: Vec2) -> Self {
        Self { position, yaw: 0.0 }
    }

    // Probe representing the player standing at `position`
    #[must_use]
    pub const fn probe_at(position: Vec2) -> HexShape {
        HexShape::new(PLAYER_PROBE_RADIUS, position)
    }

    // Position after moving `forward` along the facing direction and `strafe` to its left
    #[must_use]
    pub fn candidate(&self, forward: f32, strafe: f32) -> Vec2 {
        let (sin, cos) = self.yaw.sin_cos();
        self.position
            + Vec2::new(
                cos.mul_add(forward, -(sin * strafe)),
                sin.mul_add(forward, cos * strafe),
            )
    }

    // Move unless the candidate position overlaps an obstacle; a blocked move leaves the pose as it
    // was. Returns whether the move happened.
    pub fn try_move(&mut self, registry: &ObstacleRegistry, forward: f32, strafe: f32) -> bool {
        let target = self.candidate(forward, strafe);
        if registry.collides_with(&Self::probe_at(target)) {
            trace!(from = ?self.position, to = ?target, "move blocked");
            return false;
        }
        self.position = target;
        true
    }

    pub fn rotate(&mut self, delta: f32) {
        self.yaw = (self.yaw + delta).rem_euclid(TAU);
    }
}
