//! Grid maze generation and path finding.
//!
//! A [`maze::Grid`] is carved by one of the [`generators::Generator`] strategies and then
//! searched by one of the [`solvers::Solver`] strategies. Both report every mutating step to
//! a [`visualize::Visualizer`] through a [`visualize::Stepper`].

pub mod config;
pub mod error;
pub mod generators;
pub mod loader;
pub mod logging;
pub mod maze;
pub mod solvers;
pub mod visualize;

pub use error::MazeError;
pub use maze::{Cell, Coord, Grid};
