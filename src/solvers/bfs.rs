use std::collections::VecDeque;

use super::{SearchTree, VisitedSet, mark_path, mark_visited};
use crate::{
    error::Result,
    maze::{Coord, Grid},
    visualize::Stepper,
};

pub fn solve_bfs(
    grid: &mut Grid,
    start: Coord,
    goal: Coord,
    stepper: &mut Stepper,
) -> Result<bool> {
    let mut tree = SearchTree::default();
    let mut visited = VisitedSet::new(grid);
    let mut queue = VecDeque::new();

    // Cells are marked when enqueued so each one enters the queue once
    visited.insert(start);
    queue.push_back(tree.push(start, None, 0));

    while let Some(current) = queue.pop_front() {
        stepper.check()?;
        let coord = tree[current].coord;

        if coord == goal {
            mark_path(grid, &tree, current, stepper);
            return Ok(true);
        }

        mark_visited(grid, coord);
        stepper.render(grid);

        let cost = tree[current].cost + 1;
        for next in grid.neighbors(coord) {
            if grid[next].is_wall() || !visited.insert(next) {
                continue;
            }
            queue.push_back(tree.push(next, Some(current), cost));
        }
    }

    Ok(false)
}
