use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::maze::{Cell, Grid};

/// Reads a stored character grid, one row per line.
///
/// Rows keep the length of their source line. Characters outside the cell alphabet are read
/// as walls.
pub fn load_maze(path: impl AsRef<Path>) -> std::io::Result<Vec<Vec<Cell>>> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut unknown = 0;
    let rows = reader
        .lines()
        .map(|line| {
            line.map(|line| {
                line.chars()
                    .map(|c| {
                        Cell::from_symbol(c).unwrap_or_else(|| {
                            unknown += 1;
                            Cell::Wall
                        })
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect::<std::io::Result<Vec<_>>>()?;
    if unknown > 0 {
        tracing::debug!(
            "[loader] {} characters in {} were read as walls",
            unknown,
            path.as_ref().display()
        );
    }
    Ok(rows)
}

/// Loads a stored grid, padding short rows with walls.
/// Any failure is logged and yields an empty grid.
pub fn load_maze_or_empty(path: impl AsRef<Path>) -> Grid {
    match load_maze(path.as_ref()) {
        Ok(rows) => Grid::from_rows(rows),
        Err(err) => {
            tracing::error!(
                "[loader] failed to open maze file {}: {}",
                path.as_ref().display(),
                err
            );
            Grid::empty()
        }
    }
}
