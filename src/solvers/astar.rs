use super::{CostMap, PriorityFrontier, SearchTree, VisitedSet, mark_path, mark_visited};
use crate::{
    error::Result,
    maze::{Coord, Grid},
    visualize::Stepper,
};

/// A* search ordered by `cost + heuristic(candidate, goal)`.
///
/// The heuristic is always evaluated on the cell being enqueued, never on the cell it was
/// reached from. Equal f-scores prefer the entry closer to the goal, then insertion order.
pub fn solve_astar<H>(
    grid: &mut Grid,
    start: Coord,
    goal: Coord,
    heuristic: H,
    stepper: &mut Stepper,
) -> Result<bool>
where
    H: Fn(Coord, Coord) -> usize,
{
    let mut tree = SearchTree::default();
    let mut visited = VisitedSet::new(grid);
    let mut costs = CostMap::new(grid);
    let mut frontier = PriorityFrontier::default();

    costs.improve(start, 0);
    let h = heuristic(start, goal);
    frontier.push(h, h, tree.push(start, None, 0));

    while let Some(current) = frontier.pop() {
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

        let new_cost = tree[current].cost + 1;
        for next in grid.neighbors(coord) {
            if grid[next].is_wall() || visited.contains(next) {
                continue;
            }
            if costs.improve(next, new_cost) {
                let h = heuristic(next, goal);
                frontier.push(
                    new_cost.saturating_add(h),
                    h,
                    tree.push(next, Some(current), new_cost),
                );
            }
        }
    }

    Ok(false)
}
