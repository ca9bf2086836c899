use bevy_math::Vec2;

use super::{
    grid::{cell_to_world, center_cell, pillar_spacing, valid_cells},
    spanning_tree::Corridors,
};
use crate::{
    constants::{FLOOR_PADDING_TILES, WALL_ROTATION_DIAGONAL, WALL_ROTATION_X_AXIS, WALL_ROTATION_Y_AXIS},
    protocol::{CuboidPlacement, Edge, MazeLayout, MazeParams, PointPlacement},
};

// ============================================================================
// Layout Emission
// ============================================================================

// Turn the corridor selection into placed walls, pillars and floor tiles plus the spawn point.
#[must_use]
pub fn emit_layout(params: &MazeParams, corridors: &Corridors) -> MazeLayout {
    let MazeParams { length, width, .. } = *params;

    let pillars: Vec<PointPlacement> = valid_cells(params.side)
        .into_iter()
        .map(|cell| PointPlacement {
            translation: cell_to_world(cell.x, cell.y, length, width),
        })
        .collect();

    let walls = corridors
        .walls()
        .map(|edge| wall_placement(edge, length, width))
        .collect();

    let floor = floor_tiles(&pillars, pillar_spacing(length, width));

    MazeLayout {
        params: *params,
        walls,
        pillars,
        floor,
        spawn: spawn_point(params.side, length, width),
        corridors: corridors.open().to_vec(),
    }
}

// Wall between the two cells of `edge`, centered on their midpoint and turned along the edge.
#[must_use]
pub(crate) fn wall_placement(edge: &Edge, length: f32, width: f32) -> CuboidPlacement {
    let a = cell_to_world(edge.a.x, edge.a.y, length, width);
    let b = cell_to_world(edge.b.x, edge.b.y, length, width);
    CuboidPlacement {
        translation: a.midpoint(b),
        rotation: wall_rotation(edge),
    }
}

#[must_use]
pub(crate) fn wall_rotation(edge: &Edge) -> f32 {
    match edge.step() {
        (1, 0) | (-1, 0) => WALL_ROTATION_X_AXIS,
        (0, 1) | (0, -1) => WALL_ROTATION_Y_AXIS,
        (1, -1) | (-1, 1) => WALL_ROTATION_DIAGONAL,
        step => unreachable!("cells of {edge:?} are not adjacent (step {step:?})"),
    }
}

// Floor covers the pillar bounding box padded on every side, independent of the maze itself.
fn floor_tiles(pillars: &[PointPlacement], tile: f32) -> Vec<PointPlacement> {
    let Some(first) = pillars.first() else {
        return Vec::new();
    };

    let (min, max) = pillars.iter().fold((first.translation, first.translation), |(min, max), p| {
        (min.min(p.translation), max.max(p.translation))
    });

    let padding = Vec2::splat(FLOOR_PADDING_TILES as f32 * tile);
    let origin = min - padding;
    let extent = max - min + 2.0 * padding;
    let cols = (extent.x / tile).ceil() as i32;
    let rows = (extent.y / tile).ceil() as i32;

    let mut tiles = Vec::with_capacity((cols.max(0) * rows.max(0)) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let offset = Vec2::new(col as f32 + 0.5, row as f32 + 0.5) * tile;
            tiles.push(PointPlacement {
                translation: origin + offset,
            });
        }
    }
    tiles
}

// Centroid of the lattice triangle next to the center cell. Walls only run along lattice edges, so
// the centroid of a triangle is always open floor.
#[must_use]
pub fn spawn_point(side: i32, length: f32, width: f32) -> Vec2 {
    let center = center_cell(side);
    let corners = [center, center.offset(1, 0), center.offset(0, 1)];
    let sum = corners
        .iter()
        .map(|cell| cell_to_world(cell.x, cell.y, length, width))
        .fold(Vec2::ZERO, |acc, p| acc + p);
    sum / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{map::spanning_tree::build_corridors, protocol::CellCoord};
    use approx::assert_abs_diff_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn wall_rotation_follows_lattice_axis() {
        let c = CellCoord::new(2, 2);
        assert_eq!(wall_rotation(&Edge::new(c, c.offset(1, 0))), WALL_ROTATION_X_AXIS);
        assert_eq!(wall_rotation(&Edge::new(c, c.offset(0, 1))), WALL_ROTATION_Y_AXIS);
        assert_eq!(wall_rotation(&Edge::new(c, c.offset(-1, 1))), WALL_ROTATION_DIAGONAL);
    }

    #[test]
    fn every_adjacent_edge_has_a_wall_pose() {
        let rotations = [WALL_ROTATION_X_AXIS, WALL_ROTATION_Y_AXIS, WALL_ROTATION_DIAGONAL];
        for edge in crate::map::grid::adjacent_edges(3) {
            let wall = wall_placement(&edge, 1.0, 0.1);
            assert!(rotations.contains(&wall.rotation), "{edge:?}");
            assert!(wall.translation.is_finite());
        }
    }

    #[test]
    fn wall_sits_on_edge_midpoint_along_the_edge() {
        let edge = Edge::new(CellCoord::new(1, 1), CellCoord::new(1, 2));
        let wall = wall_placement(&edge, 1.0, 0.1);
        let a = cell_to_world(1, 1, 1.0, 0.1);
        let b = cell_to_world(1, 2, 1.0, 0.1);
        assert_abs_diff_eq!(wall.translation.x, (a.x + b.x) / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(wall.translation.y, (a.y + b.y) / 2.0, epsilon = 1e-6);

        // The wall's long axis is parallel to the edge
        let along = Vec2::from_angle(wall.rotation);
        let dir = (b - a).normalize();
        assert_abs_diff_eq!(along.perp_dot(dir), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn floor_covers_the_maze_with_padding() {
        let params = MazeParams {
            side: 3,
            ..MazeParams::default()
        };
        let corridors = build_corridors(params.side, &mut StdRng::seed_from_u64(params.seed));
        let layout = emit_layout(&params, &corridors);

        let tile = pillar_spacing(params.length, params.width);
        let floor_min = layout
            .floor
            .iter()
            .fold(Vec2::splat(f32::MAX), |acc, t| acc.min(t.translation));
        let floor_max = layout
            .floor
            .iter()
            .fold(Vec2::splat(f32::MIN), |acc, t| acc.max(t.translation));

        for pillar in &layout.pillars {
            let p = pillar.translation;
            assert!(p.x > floor_min.x + tile && p.x < floor_max.x - tile);
            assert!(p.y > floor_min.y + tile && p.y < floor_max.y - tile);
        }
    }

    #[test]
    fn single_cell_layout() {
        let params = MazeParams {
            side: 0,
            ..MazeParams::default()
        };
        let corridors = build_corridors(0, &mut StdRng::seed_from_u64(params.seed));
        let layout = emit_layout(&params, &corridors);
        assert_eq!(layout.pillars.len(), 1);
        assert!(layout.walls.is_empty());
        assert!(!layout.floor.is_empty());
    }

    #[test]
    fn spawn_is_triangle_centroid() {
        let spawn = spawn_point(2, 1.0, 0.1);
        let spacing = pillar_spacing(1.0, 0.1);
        let center = cell_to_world(2, 2, 1.0, 0.1);
        // Distance from a triangle centroid to each corner is spacing / sqrt(3)
        assert_abs_diff_eq!(spawn.distance(center), spacing / crate::constants::SQRT_3, epsilon = 1e-5);
    }
}
