use rand::{Rng, SeedableRng, rngs::StdRng};

mod kruskal;
mod prim;
mod recur_backtrack;
mod recur_div;

pub use kruskal::UnionFind;
use kruskal::randomized_kruskal;
use prim::randomized_prim;
use recur_backtrack::recursive_backtrack;
use recur_div::recursive_division;

use crate::{
    error::Result,
    maze::{Cell, Coord, Grid},
    visualize::Stepper,
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    #[default]
    RecurBacktrack,
    Prim,
    RecurDiv,
    Kruskal,
}

impl Generator {
    /// Menu order used by the interactive prompt.
    pub const ALL: [Generator; 4] = [
        Generator::RecurBacktrack,
        Generator::Prim,
        Generator::RecurDiv,
        Generator::Kruskal,
    ];

    /// Maps a 1-based menu selection to a generator.
    pub fn from_selector(selector: &str) -> Option<Generator> {
        selector
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| Generator::ALL.get(idx).copied())
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Randomized Depth-First Search"),
            Generator::Prim => write!(f, "Randomized Prim's Algorithm"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
            Generator::Kruskal => write!(f, "Randomized Kruskal's Algorithm"),
        }
    }
}

/// Creates a wall-filled grid with both dimensions rounded up to odd values and carves a
/// maze into it.
pub fn generate_maze<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    generator: Generator,
    rng: &mut R,
    stepper: &mut Stepper,
) -> Result<Grid> {
    let mut grid = Grid::with_odd_dimensions(width, height, Cell::Wall);
    carve_maze(&mut grid, generator, rng, stepper)?;
    Ok(grid)
}

/// Carves a maze into an existing grid, overwriting its contents.
///
/// On cancellation the grid keeps whatever was carved so far; every cell still holds a
/// valid state.
pub fn carve_maze<R: Rng + ?Sized>(
    grid: &mut Grid,
    generator: Generator,
    rng: &mut R,
    stepper: &mut Stepper,
) -> Result<()> {
    tracing::debug!(
        "[generate] {} on {}x{} grid",
        generator,
        grid.width(),
        grid.height()
    );
    let result = match generator {
        Generator::RecurBacktrack => recursive_backtrack(grid, rng, stepper),
        Generator::Prim => randomized_prim(grid, rng, stepper),
        Generator::RecurDiv => recursive_division(grid, rng, stepper),
        Generator::Kruskal => randomized_kruskal(grid, rng, stepper),
    };
    match &result {
        Ok(()) => tracing::debug!(
            "[generate] {} finished after {} steps",
            generator,
            stepper.steps()
        ),
        Err(err) => tracing::info!("[generate] {} stopped: {}", generator, err),
    }
    result
}

/// Picks a uniformly random odd-coordinate cell center, or `None` if the grid has no interior.
fn random_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Option<Coord> {
    if grid.width() < 3 || grid.height() < 3 {
        return None;
    }
    Some((
        // (len - 1) / 2 keeps the pick off the far border when a dimension is even
        1 + 2 * rng.random_range(0..(grid.width() - 1) / 2),
        1 + 2 * rng.random_range(0..(grid.height() - 1) / 2),
    ))
}

/// Get unvisited neighbors of a cell.
/// A neighbor is a cell center two steps away in a cardinal direction that is still a wall.
fn unvisited_neighbors(grid: &Grid, coord: Coord) -> Vec<Coord> {
    grid.carve_neighbors(coord)
        .filter(|&c| grid[c].is_wall())
        .collect()
}


#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, atomic::AtomicBool},
        time::Duration,
    };

    use super::test_utils::*;
    use super::*;
    use crate::{
        error::MazeError,
        visualize::{NoopVisualizer, test_utils::CancelAfter},
    };

    #[test]
    fn test_every_generator_is_perfect() {
        for generator in Generator::ALL {
            for seed in 0..5 {
                let mut visualizer = NoopVisualizer;
                let mut stepper = Stepper::new(&mut visualizer, Duration::ZERO);
                let mut rng = rng_from_seed(Some(seed));
                let grid = generate_maze(14, 11, generator, &mut rng, &mut stepper).unwrap();
                assert_eq!((grid.width(), grid.height()), (15, 11));
                assert_perfect_maze(&grid);
                assert_border_walled(&grid);
            }
        }
    }

    #[test]
    fn test_closing_any_passage_disconnects() {
        for generator in Generator::ALL {
            let mut visualizer = NoopVisualizer;
            let mut stepper = Stepper::new(&mut visualizer, Duration::ZERO);
            let mut rng = rng_from_seed(Some(7));
            let grid = generate_maze(9, 9, generator, &mut rng, &mut stepper).unwrap();
            let total = grid.maze_cells().count();
            let slots = grid
                .maze_cells()
                .flat_map(|(x, y)| [(x + 1, y), (x, y + 1)])
                .filter(|&slot| !grid.is_boundary(slot) && grid[slot] == Cell::Empty)
                .collect::<Vec<_>>();
            for slot in slots {
                let mut closed = grid.clone();
                closed[slot] = Cell::Wall;
                assert!(reachable_cells(&closed, (1, 1)) < total);
            }
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        for generator in Generator::ALL {
            let mut visualizer = NoopVisualizer;
            let mut stepper = Stepper::new(&mut visualizer, Duration::ZERO);
            let a = generate_maze(21, 15, generator, &mut rng_from_seed(Some(42)), &mut stepper)
                .unwrap();
            let b = generate_maze(21, 15, generator, &mut rng_from_seed(Some(42)), &mut stepper)
                .unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_cancelled_generation_leaves_valid_grid() {
        for generator in Generator::ALL {
            let mut visualizer = NoopVisualizer;
            let cancel = Arc::new(AtomicBool::new(true));
            let mut stepper = Stepper::new(&mut visualizer, Duration::ZERO).with_cancel(cancel);
            let mut grid = Grid::with_odd_dimensions(11, 11, Cell::Wall);
            let mut rng = rng_from_seed(Some(1));
            let result = carve_maze(&mut grid, generator, &mut rng, &mut stepper);
            assert_eq!(result, Err(MazeError::Cancelled));
            assert_eq!((grid.width(), grid.height()), (11, 11));
            assert!(
                grid.cells()
                    .iter()
                    .all(|&c| matches!(c, Cell::Wall | Cell::Empty))
            );
        }
    }

    #[test]
    fn test_cancel_midway_leaves_valid_grid() {
        for generator in Generator::ALL {
            let cancel = Arc::new(AtomicBool::new(false));
            let mut visualizer = CancelAfter::new(5, cancel.clone());
            let mut stepper = Stepper::new(&mut visualizer, Duration::ZERO).with_cancel(cancel);
            let mut grid = Grid::with_odd_dimensions(21, 21, Cell::Wall);
            let mut rng = rng_from_seed(Some(4));
            let result = carve_maze(&mut grid, generator, &mut rng, &mut stepper);
            assert_eq!(result, Err(MazeError::Cancelled), "{}", generator);
            assert!(stepper.steps() >= 5);
            assert_eq!((grid.width(), grid.height()), (21, 21));
            assert!(
                grid.cells()
                    .iter()
                    .all(|&c| matches!(c, Cell::Wall | Cell::Empty))
            );
            assert_border_walled(&grid);
        }
    }

    #[test]
    fn test_even_grid_keeps_border_walled() {
        // Loaded grids are not rounded to odd dimensions
        for generator in [Generator::RecurBacktrack, Generator::Prim] {
            for seed in 0..20 {
                let mut visualizer = NoopVisualizer;
                let mut stepper = Stepper::new(&mut visualizer, Duration::ZERO);
                let mut grid = Grid::new(6, 8, Cell::Wall);
                let mut rng = rng_from_seed(Some(seed));
                carve_maze(&mut grid, generator, &mut rng, &mut stepper).unwrap();
                assert_border_walled(&grid);
                assert!(grid.maze_cells().all(|c| grid[c] == Cell::Empty));
            }
        }
    }

    #[test]
    fn test_smallest_maze() {
        for generator in Generator::ALL {
            let mut visualizer = NoopVisualizer;
            let mut stepper = Stepper::new(&mut visualizer, Duration::ZERO);
            let grid = generate_maze(3, 3, generator, &mut rng_from_seed(Some(0)), &mut stepper)
                .unwrap();
            assert_eq!(grid.count(Cell::Empty), 1);
            assert_eq!(grid[(1, 1)], Cell::Empty);
        }
    }

    #[test]
    fn test_generator_selector() {
        assert_eq!(Generator::from_selector("1"), Some(Generator::RecurBacktrack));
        assert_eq!(Generator::from_selector(" 4\n"), Some(Generator::Kruskal));
        assert_eq!(Generator::from_selector("0"), None);
        assert_eq!(Generator::from_selector("5"), None);
        assert_eq!(Generator::from_selector("prim"), None);
    }

    #[test]
    fn test_random_cell_is_odd() {
        let grid = Grid::new(7, 5, Cell::Wall);
        let mut rng = rng_from_seed(Some(3));
        for _ in 0..50 {
            let (x, y) = random_cell(&grid, &mut rng).unwrap();
            assert!(x % 2 == 1 && y % 2 == 1);
            assert!(x < 6 && y < 4);
        }
        let even = Grid::new(6, 4, Cell::Wall);
        for _ in 0..50 {
            let (x, y) = random_cell(&even, &mut rng).unwrap();
            assert!(x <= 3 && y == 1);
        }
        assert_eq!(random_cell(&Grid::new(2, 5, Cell::Wall), &mut rng), None);
    }
}
