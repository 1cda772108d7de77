use rand::{Rng, seq::SliceRandom};

use crate::{
    error::Result,
    maze::{Cell, Coord, Grid, between},
    visualize::Stepper,
};

/// Disjoint-set forest over grid cell indices with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Merges the sets containing `x` and `y`. Returns false if they were already joined.
    pub fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Wall edge between two cell centers two steps apart
#[derive(Clone, Copy)]
struct Edge {
    cell1: Coord,
    cell2: Coord,
}

pub fn randomized_kruskal<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    stepper: &mut Stepper,
) -> Result<()> {
    grid.fill(Cell::Wall);

    let cells = grid.maze_cells().collect::<Vec<_>>();
    if cells.is_empty() {
        return Ok(());
    }
    cells.iter().for_each(|&c| grid[c] = Cell::Empty);
    stepper.render(grid);

    let (width, height) = (grid.width(), grid.height());
    let mut uf = UnionFind::new(width * height);

    // East and south only, so every edge is listed once
    let mut edges: Vec<Edge> = cells
        .iter()
        .flat_map(|&(x, y)| {
            [
                (x + 2 < width - 1).then(|| Edge {
                    cell1: (x, y),
                    cell2: (x + 2, y),
                }),
                (y + 2 < height - 1).then(|| Edge {
                    cell1: (x, y),
                    cell2: (x, y + 2),
                }),
            ]
        })
        .flatten()
        .collect();

    edges.shuffle(rng);

    let mut carved = 0;
    for edge in edges {
        stepper.check()?;

        let idx1 = grid.ravel_index(edge.cell1);
        let idx2 = grid.ravel_index(edge.cell2);

        if uf.find(idx1) != uf.find(idx2) {
            uf.unite(idx1, idx2);
            grid[between(edge.cell1, edge.cell2)] = Cell::Empty;
            carved += 1;
            stepper.render(grid);
        }
    }
    tracing::debug!("[kruskal] carved {} passages between {} cells", carved, cells.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        generators::{rng_from_seed, test_utils::assert_perfect_maze},
        visualize::NoopVisualizer,
    };

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(6);
        assert!(uf.unite(0, 1));
        assert!(uf.unite(2, 3));
        assert!(!uf.unite(1, 0));
        assert_ne!(uf.find(0), uf.find(2));
        assert!(uf.unite(1, 3));
        assert_eq!(uf.find(0), uf.find(2));
        assert_eq!(uf.find(4), 4);
        assert_ne!(uf.find(5), uf.find(0));
    }

    #[test]
    fn test_union_by_rank() {
        let mut uf = UnionFind::new(4);
        uf.unite(0, 1);
        // Equal ranks: the second root goes under the first
        assert_eq!(uf.find(1), 0);
        uf.unite(2, 0);
        // Lower-rank root 2 is attached under 0
        assert_eq!(uf.find(2), 0);
        assert_eq!(uf.rank[0], 1);
    }

    #[test]
    fn test_randomized_kruskal() {
        let mut grid = Grid::new(11, 9, Cell::Empty);
        let mut visualizer = NoopVisualizer;
        let mut stepper = Stepper::new(&mut visualizer, Duration::ZERO);
        randomized_kruskal(&mut grid, &mut rng_from_seed(Some(0)), &mut stepper).unwrap();
        assert_perfect_maze(&grid);
        let cells = grid.maze_cells().count();
        // Initial snapshot plus one per carved passage
        assert_eq!(stepper.steps(), cells);
    }
}
