use bevy_math::Vec2;
use std::collections::{HashSet, VecDeque};

use crate::{
    constants::{FORWARD_STEPS, SQRT_3},
    protocol::{CellCoord, Edge},
};

// ============================================================================
// Cell Validity
// ============================================================================

// The playable area is a triangle of edge length 3 * side with the three corner triangles of edge
// length side - 1 cut off. What remains is a hexagon of radius `side` around cell (side, side).
#[must_use]
pub const fn is_valid_cell(x: i32, y: i32, side: i32) -> bool {
    if side < 0 {
        return false;
    }
    let sum = x + y;
    x >= 0 && y >= 0 && x <= 2 * side && y <= 2 * side && sum >= side && sum <= 3 * side
}

// Hex distance from the center cell (side, side)
#[must_use]
pub const fn ring_of(cell: CellCoord, side: i32) -> i32 {
    let dx = cell.x - side;
    let dy = cell.y - side;
    let mut ring = dx.abs();
    if dy.abs() > ring {
        ring = dy.abs();
    }
    if (dx + dy).abs() > ring {
        ring = (dx + dy).abs();
    }
    ring
}

#[must_use]
pub const fn center_cell(side: i32) -> CellCoord {
    CellCoord::new(side, side)
}

// All valid cells, row by row. The order is part of the determinism contract.
#[must_use]
pub fn valid_cells(side: i32) -> Vec<CellCoord> {
    let mut cells = Vec::new();
    for y in 0..=(2 * side).max(0) {
        for x in 0..=(2 * side).max(0) {
            if is_valid_cell(x, y, side) {
                cells.push(CellCoord::new(x, y));
            }
        }
    }
    cells
}

// Number of valid cells for a given side: 3s(s+1) + 1
#[must_use]
pub const fn cell_count(side: i32) -> usize {
    if side < 0 { 0 } else { (3 * side * (side + 1) + 1) as usize }
}

// ============================================================================
// Adjacency
// ============================================================================

// Every edge between two valid cells, visiting cells row by row and the forward steps in order.
#[must_use]
pub fn adjacent_edges(side: i32) -> Vec<Edge> {
    let mut edges = Vec::new();
    for cell in valid_cells(side) {
        for (dx, dy) in FORWARD_STEPS {
            let next = cell.offset(dx, dy);
            if is_valid_cell(next.x, next.y, side) {
                edges.push(Edge::new(cell, next));
            }
        }
    }
    edges
}

// An edge is on the perimeter when both endpoints sit on the outermost ring. Two adjacent cells of
// that ring are always consecutive along it, so these edges close into a single loop.
#[must_use]
pub const fn is_boundary_edge(edge: &Edge, side: i32) -> bool {
    side > 0 && ring_of(edge.a, side) == side && ring_of(edge.b, side) == side
}

// ============================================================================
// World Mapping
// ============================================================================

// Distance between neighboring pillars: one wall plus the pillar footprint it sits between.
#[must_use]
pub fn pillar_spacing(length: f32, width: f32) -> f32 {
    width.mul_add(SQRT_3, length)
}

// Lattice basis (1, 0) and (1/2, sqrt(3)/2) scaled by the pillar spacing.
#[must_use]
pub fn cell_to_world(x: i32, y: i32, length: f32, width: f32) -> Vec2 {
    let spacing = pillar_spacing(length, width);
    let x_f = x as f32;
    let y_f = y as f32;
    Vec2::new(spacing * y_f.mul_add(0.5, x_f), spacing * SQRT_3 / 2.0 * y_f)
}

// Inverse of `cell_to_world` without rounding, in fractional lattice units.
#[must_use]
pub fn world_to_lattice(pos: Vec2, length: f32, width: f32) -> Vec2 {
    let spacing = pillar_spacing(length, width);
    let y = pos.y / (spacing * SQRT_3 / 2.0);
    let x = pos.x / spacing - y / 2.0;
    Vec2::new(x, y)
}

// ============================================================================
// Reachability
// ============================================================================

// Check that every valid cell can be reached from the center using only the given edges.
#[must_use]
pub fn all_cells_connected(edges: &[Edge], side: i32) -> bool {
    if side < 0 {
        return true;
    }

    let open: HashSet<Edge> = edges.iter().copied().collect();
    let target_count = cell_count(side);

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    let start = center_cell(side);
    visited.insert(start);
    queue.push_back(start);

    while let Some(cell) = queue.pop_front() {
        for (dx, dy) in FORWARD_STEPS {
            for next in [cell.offset(dx, dy), cell.offset(-dx, -dy)] {
                if !is_valid_cell(next.x, next.y, side) || visited.contains(&next) {
                    continue;
                }
                if open.contains(&Edge::new(cell, next)) {
                    visited.insert(next);
                    queue.push_back(next);
                }
            }
        }

        if visited.len() == target_count {
            return true;
        }
    }

    visited.len() == target_count
}
