use std::f32::consts::PI;

// ============================================================================
// Generation
// ============================================================================

pub const DEFAULT_SEED: u64 = 14369;

// Largest accepted grid radius; keeps the level at a few thousand cells.
pub const MAX_SIDE: i32 = 32;

// Forward lattice steps: +x, +y and the (-1, +1) diagonal. Their inverses complete the six neighbors.
pub const FORWARD_STEPS: [(i32, i32); 3] = [(1, 0), (0, 1), (-1, 1)];

// ============================================================================
// Lattice Geometry
// ============================================================================

pub const SQRT_3: f32 = 1.732_050_8;

// Wall yaw per lattice axis. A wall lies along the edge it closes, so the +y axis (60 degrees) shares
// its line with -120 degrees.
pub const WALL_ROTATION_X_AXIS: f32 = 0.0;
pub const WALL_ROTATION_Y_AXIS: f32 = -2.0 * PI / 3.0;
pub const WALL_ROTATION_DIAGONAL: f32 = 2.0 * PI / 3.0;

// Floor tiles added around the pillar bounding box on every side.
pub const FLOOR_PADDING_TILES: i32 = 2;

// ============================================================================
// Player
// ============================================================================

// Circumradius of the hex probe standing in for the player (meters)
pub const PLAYER_PROBE_RADIUS: f32 = 0.1;
