use crate::protocol::CellCoord;

// ============================================================================
// Disjoint Sets Over Grid Cells
// ============================================================================

// Dense union-find over the (2 * side + 1)^2 bounding box of the grid. Cells outside the playable
// hexagon keep their singleton slot and are never touched.
#[derive(Debug, Clone)]
pub struct UnionFind {
    leader: Vec<usize>,
    stride: i32,
}

impl UnionFind {
    #[must_use]
    pub fn new(side: i32) -> Self {
        let stride = 2 * side.max(0) + 1;
        let slots = (stride * stride) as usize;
        Self {
            leader: (0..slots).collect(),
            stride,
        }
    }

    fn index(&self, cell: CellCoord) -> usize {
        debug_assert!(
            (0..self.stride).contains(&cell.x) && (0..self.stride).contains(&cell.y),
            "cell {cell:?} outside union-find bounds"
        );
        (cell.y * self.stride + cell.x) as usize
    }

    const fn cell(&self, index: usize) -> CellCoord {
        let index = index as i32;
        CellCoord::new(index % self.stride, index / self.stride)
    }

    fn find_index(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.leader[root] != root {
            root = self.leader[root];
        }

        // Path compression: point every node on the chain straight at the root
        let mut current = index;
        while self.leader[current] != root {
            let next = self.leader[current];
            self.leader[current] = root;
            current = next;
        }

        root
    }

    // Representative of the set containing `cell`
    pub fn find(&mut self, cell: CellCoord) -> CellCoord {
        let index = self.index(cell);
        let root = self.find_index(index);
        self.cell(root)
    }

    // Merge the sets of `a` and `b`. Returns false when they were already one set.
    pub fn union(&mut self, a: CellCoord, b: CellCoord) -> bool {
        let index_a = self.index(a);
        let index_b = self.index(b);
        let root_a = self.find_index(index_a);
        let root_b = self.find_index(index_b);
        if root_a == root_b {
            return false;
        }
        self.leader[root_b] = root_a;
        true
    }

    pub fn connected(&mut self, a: CellCoord, b: CellCoord) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cells_are_their_own_leader() {
        let mut sets = UnionFind::new(2);
        let cell = CellCoord::new(3, 1);
        assert_eq!(sets.find(cell), cell);
        assert!(!sets.connected(cell, CellCoord::new(1, 3)));
    }

    #[test]
    fn union_merges_once() {
        let mut sets = UnionFind::new(1);
        let a = CellCoord::new(1, 0);
        let b = CellCoord::new(1, 1);
        assert!(sets.union(a, b));
        assert!(!sets.union(b, a));
        assert!(sets.connected(a, b));
    }

    #[test]
    fn union_is_transitive() {
        let mut sets = UnionFind::new(2);
        let chain = [
            CellCoord::new(0, 2),
            CellCoord::new(1, 2),
            CellCoord::new(2, 2),
            CellCoord::new(3, 2),
        ];
        for pair in chain.windows(2) {
            sets.union(pair[0], pair[1]);
        }
        let root = sets.find(chain[0]);
        for cell in chain {
            assert_eq!(sets.find(cell), root);
        }
        assert!(!sets.connected(chain[0], CellCoord::new(2, 0)));
    }

    #[test]
    fn find_compresses_paths() {
        let mut sets = UnionFind::new(2);
        let cells: Vec<CellCoord> = (0..5).map(|x| CellCoord::new(x, 1)).collect();
        // Build a chain where each new root sits above the previous one
        for pair in cells.windows(2).rev() {
            sets.union(pair[0], pair[1]);
        }
        let root = sets.find(cells[4]);
        let root_index = sets.index(root);
        for cell in &cells {
            let index = sets.index(*cell);
            assert_eq!(sets.leader[index], root_index);
        }
    }
}
