pub mod grid;
pub mod layout;
pub mod spanning_tree;
pub mod union_find;

use anyhow::{Result, ensure};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::{
    constants::{FLOOR_PADDING_TILES, MAX_SIDE},
    protocol::{MazeLayout, MazeParams},
};

pub use grid::{all_cells_connected, cell_to_world, is_boundary_edge, is_valid_cell, pillar_spacing};
pub use layout::emit_layout;
pub use spanning_tree::{Corridors, build_corridors};
pub use union_find::UnionFind;

// ============================================================================
// Maze Generation
// ============================================================================

// Generate a complete level. The same arguments always produce the same layout.
pub fn generate_maze(length: f32, width: f32, height: f32, side: i32, seed: u64) -> Result<MazeLayout> {
    let params = MazeParams {
        length,
        width,
        height,
        side,
        seed,
    };
    validate(&params)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let corridors = build_corridors(side, &mut rng);
    debug_assert!(all_cells_connected(corridors.open(), side));

    let layout = emit_layout(&params, &corridors);
    info!(
        side,
        seed,
        pillars = layout.pillars.len(),
        walls = layout.walls.len(),
        floor_tiles = layout.floor.len(),
        "generated maze"
    );
    debug!(spawn = ?layout.spawn, corridors = layout.corridors.len(), "maze details");

    Ok(layout)
}

impl MazeParams {
    pub fn generate(&self) -> Result<MazeLayout> {
        generate_maze(self.length, self.width, self.height, self.side, self.seed)
    }
}

fn validate(params: &MazeParams) -> Result<()> {
    ensure!(params.side >= 0, "side must be >= 0, got {}", params.side);
    ensure!(
        params.side <= MAX_SIDE,
        "side must be <= {MAX_SIDE}, got {}",
        params.side
    );
    for (name, value) in [
        ("length", params.length),
        ("width", params.width),
        ("height", params.height),
    ] {
        ensure!(
            value.is_finite() && value > 0.0,
            "{name} must be finite and positive, got {value}"
        );
    }

    // Pillars reach 2.5 * side spacings from the origin and the floor pads past them; every
    // coordinate must stay representable.
    let span = (3 * params.side + 2 * FLOOR_PADDING_TILES + 2) as f32;
    let extent = pillar_spacing(params.length, params.width) * span;
    ensure!(
        extent.is_finite(),
        "level extent overflows: length {} and width {} are too large for side {}",
        params.length,
        params.width,
        params.side
    );
    Ok(())
}
