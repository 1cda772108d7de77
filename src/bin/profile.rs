use std::time::{Duration, Instant};

use mazecraft::{
    Cell,
    config::{MIN_DIMENSION, Settings},
    generators::{Generator, generate_maze, rng_from_seed},
    logging,
    solvers::{Solver, place_endpoints, solve_maze},
    visualize::{NoopVisualizer, Stepper},
};

const DEFAULT_SIZE: usize = 201;

/// Side length of the profiled mazes. Too small values are raised so that the start and goal
/// corners stay inside the border.
fn parse_size(arg: Option<&str>) -> usize {
    arg.and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_SIZE)
        .max(MIN_DIMENSION)
}

/// Runs every generator and solver pair without animation and reports timings.
///
/// Usage: `profile [size] [seed]`
fn main() -> std::io::Result<()> {
    let settings = Settings::from_env();
    let _guard = logging::init(&settings.log_dir, settings.log_level)?;

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let size = parse_size(args.next().as_deref());
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .or(settings.seed)
        .unwrap_or(0);

    let mut visualizer = NoopVisualizer;
    let mut stepper = Stepper::new(&mut visualizer, Duration::ZERO);

    println!(
        "{:<32} {:<28} {:>10} {:>10} {:>8} {:>8}",
        "generator", "solver", "gen ms", "solve ms", "path", "visited"
    );
    for generator in Generator::ALL {
        let started = Instant::now();
        let mut rng = rng_from_seed(Some(seed));
        let maze = generate_maze(size, size, generator, &mut rng, &mut stepper)
            .map_err(std::io::Error::other)?;
        let generation = started.elapsed();

        let start = (1, 1);
        let goal = (maze.width() - 2, maze.height() - 2);
        for solver in Solver::ALL {
            let mut grid = maze.clone();
            place_endpoints(&mut grid, start, goal).map_err(std::io::Error::other)?;

            let started = Instant::now();
            let found = solve_maze(&mut grid, start, goal, solver, &mut stepper)
                .map_err(std::io::Error::other)?;
            let solving = started.elapsed();

            tracing::info!(
                "[profile] {} + {}: found={} in {:?}",
                generator,
                solver,
                found,
                solving
            );
            println!(
                "{:<32} {:<28} {:>10.3} {:>10.3} {:>8} {:>8}",
                generator.to_string(),
                solver.to_string(),
                generation.as_secs_f64() * 1000.0,
                solving.as_secs_f64() * 1000.0,
                grid.count(Cell::Path),
                grid.count(Cell::Visited)
            );
        }
    }
    Ok(())
}
