#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use bevy_math::Vec2;

// ============================================================================
// Grid Types
// ============================================================================

// Integer position on the axial hex lattice. One pillar stands on every valid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

// Unordered pair of adjacent cells. The constructor stores the smaller coordinate first so that
// (a, b) and (b, a) compare and hash equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Edge {
    pub a: CellCoord,
    pub b: CellCoord,
}

impl Edge {
    #[must_use]
    pub fn new(a: CellCoord, b: CellCoord) -> Self {
        if a <= b { Self { a, b } } else { Self { a: b, b: a } }
    }

    // Lattice step from `a` to `b`
    #[must_use]
    pub const fn step(&self) -> (i32, i32) {
        (self.b.x - self.a.x, self.b.y - self.a.y)
    }
}

// ============================================================================
// Placements
// ============================================================================

// Pose of one wall segment: centered on an edge midpoint, long axis along the edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct CuboidPlacement {
    pub translation: Vec2,
    pub rotation: f32, // radians, counter-clockwise
}

// Pose of a pillar or floor tile
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct PointPlacement {
    pub translation: Vec2,
}

// ============================================================================
// Level Layout
// ============================================================================

// Input parameters for one level
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct MazeParams {
    pub length: f32, // wall length
    pub width: f32,  // wall thickness, also the pillar circumradius
    pub height: f32, // wall and pillar height, used by the renderer only
    pub side: i32,   // grid radius
    pub seed: u64,
}

impl Default for MazeParams {
    fn default() -> Self {
        Self {
            length: 1.0,
            width: 0.1,
            height: 0.2,
            side: 1,
            seed: crate::constants::DEFAULT_SEED,
        }
    }
}

// Everything the renderer and the obstacle registry need to build a level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct MazeLayout {
    pub params: MazeParams,
    pub walls: Vec<CuboidPlacement>,
    pub pillars: Vec<PointPlacement>,
    pub floor: Vec<PointPlacement>,
    pub spawn: Vec2,
    // Open corridor edges, boundary ring first, then interior edges in selection order
    pub corridors: Vec<Edge>,
}

#[cfg(feature = "json")]
impl MazeLayout {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
