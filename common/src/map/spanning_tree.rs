use rand::Rng;
use std::collections::HashSet;
use tracing::trace;

use super::{
    grid::{adjacent_edges, is_boundary_edge, valid_cells},
    union_find::UnionFind,
};
use crate::protocol::Edge;

// ============================================================================
// Corridor Selection
// ============================================================================

// Result of the spanning-tree pass. `open` holds the corridor edges, boundary ring first and then
// interior edges in the order they were accepted. Every adjacent pair not in `open` gets a wall.
#[derive(Debug, Clone, Default)]
pub struct Corridors {
    open: Vec<Edge>,
    adjacent: Vec<Edge>,
    open_set: HashSet<Edge>,
}

impl Corridors {
    #[must_use]
    pub fn open(&self) -> &[Edge] {
        &self.open
    }

    // Every pair of adjacent valid cells, in grid enumeration order
    #[must_use]
    pub fn adjacent(&self) -> &[Edge] {
        &self.adjacent
    }

    #[must_use]
    pub fn is_open(&self, edge: &Edge) -> bool {
        self.open_set.contains(edge)
    }

    // Adjacent pairs that stay closed, in grid enumeration order
    pub fn walls(&self) -> impl Iterator<Item = &Edge> {
        self.adjacent.iter().filter(|edge| !self.open_set.contains(*edge))
    }

    fn open_edge(&mut self, edge: Edge) {
        self.open.push(edge);
        self.open_set.insert(edge);
    }
}

// Randomized Kruskal with a forced perimeter. The outer ring is always open, which leaves exactly one
// loop; interior edges only join cells that are not yet connected.
pub fn build_corridors<R: Rng>(side: i32, rng: &mut R) -> Corridors {
    let adjacent = adjacent_edges(side);

    let (boundary, mut candidates): (Vec<Edge>, Vec<Edge>) =
        adjacent.iter().partition(|edge| is_boundary_edge(edge, side));

    let mut sets = UnionFind::new(side);
    let mut corridors = Corridors {
        adjacent,
        ..Default::default()
    };

    // Perimeter edges go in unconditionally, including the one that closes the ring
    for edge in boundary {
        sets.union(edge.a, edge.b);
        corridors.open_edge(edge);
    }

    // Shuffle randomly
    for i in (1..candidates.len()).rev() {
        let j = rng.random_range(0..=i);
        candidates.swap(i, j);
    }

    for edge in candidates {
        if sets.union(edge.a, edge.b) {
            trace!(?edge, "opened corridor");
            corridors.open_edge(edge);
        }
    }

    debug_assert!(
        valid_cells(side)
            .windows(2)
            .all(|pair| sets.connected(pair[0], pair[1])),
        "spanning tree left disconnected cells"
    );

    corridors
}
