use rand::Rng;

use crate::{
    error::Result,
    generators::{random_cell, unvisited_neighbors},
    maze::{Cell, Grid, between},
    visualize::Stepper,
};

/// Requires the grid to be at least 3x3 to carve anything.
pub fn randomized_prim<R: Rng + ?Sized>(
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

    // Cells already in the maze that may still have unvisited neighbors
    let mut frontiers = vec![start];
    while !frontiers.is_empty() {
        stepper.check()?;

        // Randomly select a cell from the frontiers
        let idx = rng.random_range(0..frontiers.len());
        let current = frontiers[idx];

        let neighbors = unvisited_neighbors(grid, current);
        if neighbors.is_empty() {
            // Nothing left to carve from here, order of the list does not matter
            frontiers.swap_remove(idx);
            continue;
        }

        // Randomly select a neighbor and carve a passage to it
        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        grid[neighbor] = Cell::Empty;
        grid[between(current, neighbor)] = Cell::Empty;
        stepper.render(grid);

        frontiers.push(neighbor);
    }
    Ok(())
}
