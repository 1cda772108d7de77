use super::{SearchTree, VisitedSet, mark_path, mark_visited};
use crate::{
    error::Result,
    maze::{Coord, Grid},
    visualize::Stepper,
};

/// Depth-first search with an explicit stack.
///
/// Cells are marked visited when expanded, not when pushed, so one cell may sit on the stack
/// several times through different predecessors. Duplicates are dropped when popped.
pub fn solve_dfs(
    grid: &mut Grid,
    start: Coord,
    goal: Coord,
    stepper: &mut Stepper,
) -> Result<bool> {
    let mut tree = SearchTree::default();
    let mut visited = VisitedSet::new(grid);
    let mut stack = vec![tree.push(start, None, 0)];

    while let Some(current) = stack.pop() {
        stepper.check()?;
        let coord = tree[current].coord;

        if !visited.insert(coord) {
            continue;
        }

        if coord == goal {
            mark_path(grid, &tree, current, stepper);
            return Ok(true);
        }

        mark_visited(grid, coord);
        stepper.render(grid);

        let cost = tree[current].cost + 1;
        for next in grid.neighbors(coord) {
            if grid[next].is_wall() || visited.contains(next) {
                continue;
            }
            stack.push(tree.push(next, Some(current), cost));
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{maze::Cell, visualize::NoopVisualizer};

    #[test]
    fn test_dfs_follows_last_pushed_neighbor() {
        // From the start both east and north are open; north is pushed last and explored first
        let mut grid = Grid::new(5, 5, Cell::Wall);
        grid.fill_interior(Cell::Empty);
        grid[(1, 1)] = Cell::Start;
        grid[(3, 1)] = Cell::Goal;
        let mut visualizer = NoopVisualizer;
        let mut stepper = Stepper::new(&mut visualizer, Duration::ZERO);
        assert!(solve_dfs(&mut grid, (1, 1), (3, 1), &mut stepper).unwrap());
        assert_eq!(grid[(1, 2)], Cell::Path);
        assert!(grid.count(Cell::Path) > 1);
    }

    #[test]
    fn test_dfs_expands_south_first_in_open_room() {
        // South (y - 1) is the last neighbor pushed, so it is the first one expanded
        let mut grid = Grid::new(7, 7, Cell::Wall);
        grid.fill_interior(Cell::Empty);
        grid[(3, 3)] = Cell::Start;
        grid[(3, 5)] = Cell::Goal;
        let mut visualizer = NoopVisualizer;
        let mut stepper = Stepper::new(&mut visualizer, Duration::ZERO);
        assert!(solve_dfs(&mut grid, (3, 3), (3, 5), &mut stepper).unwrap());
        assert!(grid[(3, 2)].is_search_mark());
        assert!(grid.count(Cell::Path) > 1);
    }

    #[test]
    fn test_dfs_no_path() {
        let mut grid = Grid::new(5, 3, Cell::Wall);
        grid[(1, 1)] = Cell::Start;
        grid[(3, 1)] = Cell::Goal;
        let mut visualizer = NoopVisualizer;
        let mut stepper = Stepper::new(&mut visualizer, Duration::ZERO);
        assert!(!solve_dfs(&mut grid, (1, 1), (3, 1), &mut stepper).unwrap());
        assert_eq!(grid.count(Cell::Path), 0);
    }
}
