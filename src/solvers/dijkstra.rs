use super::{CostMap, PriorityFrontier, SearchTree, VisitedSet, mark_path, mark_visited};
use crate::{
    error::Result,
    maze::{Coord, Grid},
    visualize::Stepper,
};

pub fn solve_dijkstra(
    grid: &mut Grid,
    start: Coord,
    goal: Coord,
    stepper: &mut Stepper,
) -> Result<bool> {
    let mut tree = SearchTree::default();
    let mut visited = VisitedSet::new(grid);
    let mut costs = CostMap::new(grid);
    let mut frontier = PriorityFrontier::default();

    costs.improve(start, 0);
    frontier.push(0, 0, tree.push(start, None, 0));

    while let Some(current) = frontier.pop() {
        stepper.check()?;
        let coord = tree[current].coord;

        // Stale entry for a cell that was already finalized through a cheaper route
        if !visited.insert(coord) {
            continue;
        }

        if coord == goal {
            mark_path(grid, &tree, current, stepper);
            return Ok(true);
        }

        mark_visited(grid, coord);
        stepper.render(grid);

        // Uniform cost for each step
        let new_cost = tree[current].cost + 1;
        for next in grid.neighbors(coord) {
            if grid[next].is_wall() || visited.contains(next) {
                continue;
            }
            // Only enqueue neighbors we reach with a strictly lower cost
            if costs.improve(next, new_cost) {
                frontier.push(new_cost, 0, tree.push(next, Some(current), new_cost));
            }
        }
    }

    Ok(false)
}
