use std::io::{BufRead, Write};

use mazecraft::{
    config::{MAX_DIMENSION, MIN_DIMENSION, Settings},
    generators::{Generator, generate_maze, rng_from_seed},
    loader::load_maze_or_empty,
    logging,
    solvers::{Solver, place_endpoints, solve_maze},
    visualize::{Stepper, TerminalVisualizer, Visualizer},
};

fn prompt(message: &str) -> std::io::Result<String> {
    print!("{}", message);
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().lock().read_line(&mut input)?;
    Ok(input)
}

fn main() -> std::io::Result<()> {
    let settings = Settings::from_env();
    let _guard = logging::init(&settings.log_dir, settings.log_level)?;
    tracing::info!("[main] starting with {:?}", settings);

    let mut visualizer = TerminalVisualizer::new();

    if let Some(banner) = &settings.banner {
        let grid = load_maze_or_empty(banner);
        if !grid.is_empty() {
            visualizer.render(&grid, std::time::Duration::ZERO);
        }
    }

    println!("Welcome to the maze generator and solver!");
    println!(
        "Width and height must be odd numbers between {} and {}.",
        MIN_DIMENSION, MAX_DIMENSION
    );
    let input = prompt("Enter maze dimensions (width height): ")?;
    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<usize>().ok())
        .collect::<Vec<_>>();
    let (width, height) = match dims[..] {
        [w, h] => {
            let validated = Settings::validated_dimensions(w, h);
            if validated != (w, h) {
                println!("Invalid dimensions. Using a {}x{} maze.", validated.0, validated.1);
            }
            validated
        }
        _ => {
            println!(
                "Please enter two numbers. Using a {}x{} maze.",
                settings.width, settings.height
            );
            (settings.width, settings.height)
        }
    };

    println!("Select maze generation algorithm:");
    for (i, generator) in Generator::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, generator);
    }
    let generator = Generator::from_selector(&prompt("> ")?).unwrap_or_else(|| {
        println!("Invalid choice. Using {}.", settings.generator);
        tracing::warn!("[main] invalid generator selection");
        settings.generator
    });

    println!("Select maze solving algorithm:");
    for (i, solver) in Solver::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, solver);
    }
    let solver = Solver::from_selector(&prompt("> ")?).unwrap_or_else(|| {
        println!("Invalid choice. Using {}.", settings.solver);
        tracing::warn!("[main] invalid solver selection");
        settings.solver
    });

    let mut rng = rng_from_seed(settings.seed);
    let mut stepper = Stepper::new(&mut visualizer, settings.delay);

    let mut grid = generate_maze(width, height, generator, &mut rng, &mut stepper)
        .map_err(std::io::Error::other)?;

    let start = (1, 1);
    let goal = (grid.width() - 2, grid.height() - 2);
    place_endpoints(&mut grid, start, goal).map_err(std::io::Error::other)?;

    let goal_reached =
        solve_maze(&mut grid, start, goal, solver, &mut stepper).map_err(std::io::Error::other)?;
    if goal_reached {
        println!("Path found!");
    } else {
        println!("No path found.");
    }
    Ok(())
}
