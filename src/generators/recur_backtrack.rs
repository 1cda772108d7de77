use rand::Rng;

use crate::{
    error::Result,
    generators::{random_cell, unvisited_neighbors},
    maze::{Cell, Grid, between},
    visualize::Stepper,
};

/// Randomized depth-first carving with an explicit stack.
pub fn recursive_backtrack<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    stepper: &mut Stepper,
) -> Result<()> {
    grid.fill(Cell::Wall);

    let Some(start) = random_cell(grid, rng) else {
        return Ok(());
    };
    grid[start] = Cell::Empty;
    stepper.render(grid);

    // The stack only ever holds carved cells
    let mut stack = vec![start];
    let mut longest = 1;

    while let Some(&cell) = stack.last() {
        stepper.check()?;

        let neighbors = unvisited_neighbors(grid, cell);
        if neighbors.is_empty() {
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        grid[neighbor] = Cell::Empty;
        grid[between(cell, neighbor)] = Cell::Empty;
        stepper.render(grid);

        // The current cell stays below so the walk can come back to it
        stack.push(neighbor);
        longest = longest.max(stack.len());
    }
    tracing::debug!("[recur_backtrack] deepest walk was {} cells", longest);
    Ok(())
}
