use std::{cmp::Reverse, collections::BinaryHeap};

mod astar;
mod bfs;
mod dfs;
mod dijkstra;

use astar::solve_astar;
use bfs::solve_bfs;
use dfs::solve_dfs;
use dijkstra::solve_dijkstra;

use crate::{
    error::{MazeError, Result},
    maze::{Cell, Coord, Grid},
    visualize::Stepper,
};

/// Manhattan distance between two cells, the default A* heuristic.
pub fn manhattan(a: Coord, b: Coord) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dfs,
    #[default]
    Bfs,
    Dijkstra,
    AStar,
}

impl Solver {
    /// Menu order used by the interactive prompt.
    pub const ALL: [Solver; 4] = [Solver::Dfs, Solver::Bfs, Solver::Dijkstra, Solver::AStar];

    /// Maps a 1-based menu selection to a solver.
    pub fn from_selector(selector: &str) -> Option<Solver> {
        selector
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Solver::ALL.get(idx).copied())
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

/// Index of a node in a [`SearchTree`].
type NodeId = usize;

struct SearchNode {
    /// Coordinates of the cell in the grid
    coord: Coord,
    /// The node from which this cell was reached, fixed at creation
    parent: Option<NodeId>,
    /// Cost to reach this cell from the start
    cost: usize,
}

/// Arena holding every node created during one search.
/// Parent links point to earlier entries, so the links always form a tree.
#[derive(Default)]
struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    fn push(&mut self, coord: Coord, parent: Option<NodeId>, cost: usize) -> NodeId {
        self.nodes.push(SearchNode {
            coord,
            parent,
            cost,
        });
        self.nodes.len() - 1
    }

    /// Coordinates from `id` back to the root, inclusive.
    fn backtrack(&self, id: NodeId) -> impl Iterator<Item = Coord> + '_ {
        std::iter::successors(Some(id), |&id| self[id].parent).map(|id| self[id].coord)
    }
}

impl std::ops::Index<NodeId> for SearchTree {
    type Output = SearchNode;

    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index]
    }
}

/// Cells finalized by a search, kept apart from the grid markers.
struct VisitedSet {
    seen: Vec<bool>,
    width: usize,
}

impl VisitedSet {
    fn new(grid: &Grid) -> Self {
        Self {
            seen: vec![false; grid.width() * grid.height()],
            width: grid.width(),
        }
    }

    fn contains(&self, coord: Coord) -> bool {
        self.seen[coord.1 * self.width + coord.0]
    }

    /// Returns true if the cell was not visited before.
    fn insert(&mut self, coord: Coord) -> bool {
        let idx = coord.1 * self.width + coord.0;
        !std::mem::replace(&mut self.seen[idx], true)
    }
}

/// Best known cost per cell for the priority-ordered searches.
struct CostMap {
    costs: Vec<usize>,
    width: usize,
}

impl CostMap {
    fn new(grid: &Grid) -> Self {
        Self {
            costs: vec![usize::MAX; grid.width() * grid.height()],
            width: grid.width(),
        }
    }

    /// Records `cost` if it beats the current best for `coord`.
    fn improve(&mut self, coord: Coord, cost: usize) -> bool {
        let best = &mut self.costs[coord.1 * self.width + coord.0];
        if cost < *best {
            *best = cost;
            true
        } else {
            false
        }
    }
}

/// Ordering key of a priority queue entry. Fields compare in declaration order, so ties on
/// `priority` fall to `tie_break` and then to insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    priority: usize,
    tie_break: usize,
    seq: usize,
    node: NodeId,
}

/// Min-priority queue of search nodes.
#[derive(Default)]
struct PriorityFrontier {
    // Reverse turns the max-heap into a min-heap
    heap: BinaryHeap<Reverse<QueueEntry>>,
    seq: usize,
}

impl PriorityFrontier {
    fn push(&mut self, priority: usize, tie_break: usize, node: NodeId) {
        self.heap.push(Reverse(QueueEntry {
            priority,
            tie_break,
            seq: self.seq,
            node,
        }));
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse(entry)| entry.node)
    }
}

/// Marks an expanded cell, leaving the start and goal markers in place.
fn mark_visited(grid: &mut Grid, coord: Coord) {
    if !matches!(grid[coord], Cell::Start | Cell::Goal) {
        grid[coord] = Cell::Visited;
    }
}

/// Walks the predecessor chain from `goal_node` and overwrites the cells on it with path
/// markers, skipping the start and goal cells.
fn mark_path(grid: &mut Grid, tree: &SearchTree, goal_node: NodeId, stepper: &mut Stepper) {
    let mut length = 0;
    for coord in tree.backtrack(goal_node) {
        if !matches!(grid[coord], Cell::Start | Cell::Goal) {
            grid[coord] = Cell::Path;
            length += 1;
            stepper.render(grid);
        }
    }
    stepper.render(grid);
    tracing::debug!(
        "[solve] path of {} cells, cost {}",
        length,
        tree[goal_node].cost
    );
}

fn check_bounds(grid: &Grid, coord: Coord) -> Result<()> {
    if grid.is_in_bounds(coord) {
        Ok(())
    } else {
        Err(MazeError::OutOfBounds {
            coord,
            width: grid.width(),
            height: grid.height(),
        })
    }
}

/// Writes the start and goal markers, replacing any previous ones so exactly one of each
/// exists afterwards.
pub fn place_endpoints(grid: &mut Grid, start: Coord, goal: Coord) -> Result<()> {
    check_bounds(grid, start)?;
    check_bounds(grid, goal)?;
    while let Some(old) = grid.find(Cell::Start) {
        grid[old] = Cell::Empty;
    }
    while let Some(old) = grid.find(Cell::Goal) {
        grid[old] = Cell::Empty;
    }
    grid[start] = Cell::Start;
    grid[goal] = Cell::Goal;
    Ok(())
}

/// Searches for a path from `start` to `goal`, using Manhattan distance for A*.
///
/// Path and Visited markers from a previous solve are cleared first, so solving the same
/// grid twice marks the same path. Returns `Ok(false)` when no path exists.
pub fn solve_maze(
    grid: &mut Grid,
    start: Coord,
    goal: Coord,
    solver: Solver,
    stepper: &mut Stepper,
) -> Result<bool> {
    solve_maze_with_heuristic(grid, start, goal, solver, manhattan, stepper)
}

/// Same as [`solve_maze`] with a custom A* heuristic. Other solvers ignore it.
///
/// A start placed on a wall yields `Ok(false)` without touching the grid beyond clearing
/// old markers.
///
/// The heuristic is called as `heuristic(candidate, goal)`. With a heuristic that
/// overestimates the remaining distance A* may return a longer path than BFS.
pub fn solve_maze_with_heuristic<H>(
    grid: &mut Grid,
    start: Coord,
    goal: Coord,
    solver: Solver,
    heuristic: H,
    stepper: &mut Stepper,
) -> Result<bool>
where
    H: Fn(Coord, Coord) -> usize,
{
    check_bounds(grid, start)?;
    check_bounds(grid, goal)?;
    grid.clear_search_marks();

    // Walls are never entered, not even as the first cell
    if grid[start].is_wall() {
        tracing::info!("[solve] start {:?} is a wall, nothing to search", start);
        return Ok(false);
    }

    tracing::debug!("[solve] {} from {:?} to {:?}", solver, start, goal);
    let result = match solver {
        Solver::Dfs => solve_dfs(grid, start, goal, stepper),
        Solver::Bfs => solve_bfs(grid, start, goal, stepper),
        Solver::Dijkstra => solve_dijkstra(grid, start, goal, stepper),
        Solver::AStar => solve_astar(grid, start, goal, heuristic, stepper),
    };
    match &result {
        Ok(found) => tracing::info!(
            "[solve] {} finished, goal reached: {}, visited {} cells",
            solver,
            found,
            grid.count(Cell::Visited)
        ),
        Err(err) => tracing::info!("[solve] {} stopped: {}", solver, err),
    }
    result
}
