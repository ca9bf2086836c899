use bevy_ecs::prelude::Resource;
use tracing::debug;

use super::{
    overlap::collides,
    shapes::{ConvexShape, HexShape, RectShape},
};
use crate::protocol::MazeLayout;

// ============================================================================
// Obstacle Registry
// ============================================================================

// Static obstacles of one level, filled once at load time and read-only afterwards. A new level gets
// a new registry.
#[derive(Resource, Debug, Clone, Default)]
pub struct ObstacleRegistry {
    obstacles: Vec<ConvexShape>,
}

impl ObstacleRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self { obstacles: Vec::new() }
    }

    // One rectangle per wall, then one hex per pillar.
    #[must_use]
    pub fn from_layout(layout: &MazeLayout) -> Self {
        let mut registry = Self::new();
        let half_length = layout.params.length / 2.0;
        let half_width = layout.params.width / 2.0;

        for wall in &layout.walls {
            registry.add_object(RectShape::new(half_length, half_width, *wall).into());
        }
        for pillar in &layout.pillars {
            registry.add_object(HexShape::new(layout.params.width, pillar.translation).into());
        }

        debug!(obstacles = registry.len(), "built obstacle registry");
        registry
    }

    pub fn add_object(&mut self, shape: ConvexShape) {
        self.obstacles.push(shape);
    }

    // Linear scan in insertion order, stopping at the first hit.
    #[must_use]
    pub fn collides_with(&self, probe: &HexShape) -> bool {
        self.obstacles.iter().any(|obstacle| collides(obstacle, probe))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConvexShape> {
        self.obstacles.iter()
    }
}
