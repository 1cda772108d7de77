use rand::Rng;

use crate::{
    error::Result,
    maze::{Cell, Coord, Grid},
    visualize::Stepper,
};

/// Direction of a wall line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// Inclusive bounds of a region still to be divided. All four bounds are odd coordinates.
#[derive(Debug, Clone, Copy)]
struct Region {
    x_start: usize,
    x_end: usize,
    y_start: usize,
    y_end: usize,
}

impl Region {
    /// A region one cell thick in either axis has no room for an interior wall.
    fn is_divisible(&self) -> bool {
        self.x_end > self.x_start && self.y_end > self.y_start
    }
}

/// A wall line drawn across a region together with its single door.
#[derive(Debug, Clone, Copy)]
struct WallLine {
    orientation: Orientation,
    /// Row of a horizontal line or column of a vertical one
    at: usize,
    start: usize,
    end: usize,
    door: usize,
}

impl WallLine {
    fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let (orientation, at) = (self.orientation, self.at);
        (self.start..=self.end).map(move |i| match orientation {
            Orientation::Horizontal => (i, at),
            Orientation::Vertical => (at, i),
        })
    }

    fn door(&self) -> Coord {
        match self.orientation {
            Orientation::Horizontal => (self.door, self.at),
            Orientation::Vertical => (self.at, self.door),
        }
    }
}

/// Wider regions get a vertical line, taller ones a horizontal line, squares a coin flip.
fn choose_orientation<R: Rng + ?Sized>(region: &Region, rng: &mut R) -> Orientation {
    let width = region.x_end - region.x_start;
    let height = region.y_end - region.y_start;
    match width.cmp(&height) {
        std::cmp::Ordering::Less => Orientation::Horizontal,
        std::cmp::Ordering::Greater => Orientation::Vertical,
        std::cmp::Ordering::Equal => {
            if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            }
        }
    }
}

/// Even coordinate strictly between the odd bounds `start` and `end`.
fn random_wall_offset<R: Rng + ?Sized>(start: usize, end: usize, rng: &mut R) -> usize {
    start + 1 + 2 * rng.random_range(0..(end - start) / 2)
}

/// Odd coordinate in the inclusive range `start..=end`.
fn random_door_offset<R: Rng + ?Sized>(start: usize, end: usize, rng: &mut R) -> usize {
    start + 2 * rng.random_range(0..=(end - start) / 2)
}

pub fn recursive_division<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    stepper: &mut Stepper,
) -> Result<()> {
    let walls = divide(grid, rng, stepper)?;
    tracing::debug!("[recur_div] added {} wall lines", walls.len());
    Ok(())
}

fn divide<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    stepper: &mut Stepper,
) -> Result<Vec<WallLine>> {
    // Clear the interior, keeping the boundary walls
    grid.fill_interior(Cell::Empty);
    stepper.render(grid);

    let mut walls = Vec::new();
    if grid.width() < 3 || grid.height() < 3 {
        return Ok(walls);
    }

    // Pending regions are kept on a stack instead of recursing
    let mut pending = vec![Region {
        x_start: 1,
        x_end: grid.width() - 2,
        y_start: 1,
        y_end: grid.height() - 2,
    }];

    while let Some(region) = pending.pop() {
        stepper.check()?;
        if !region.is_divisible() {
            continue;
        }

        let wall = match choose_orientation(&region, rng) {
            Orientation::Horizontal => {
                let y_wall = random_wall_offset(region.y_start, region.y_end, rng);
                pending.push(Region {
                    y_end: y_wall - 1,
                    ..region
                });
                pending.push(Region {
                    y_start: y_wall + 1,
                    ..region
                });
                WallLine {
                    orientation: Orientation::Horizontal,
                    at: y_wall,
                    start: region.x_start,
                    end: region.x_end,
                    door: random_door_offset(region.x_start, region.x_end, rng),
                }
            }
            Orientation::Vertical => {
                let x_wall = random_wall_offset(region.x_start, region.x_end, rng);
                pending.push(Region {
                    x_end: x_wall - 1,
                    ..region
                });
                pending.push(Region {
                    x_start: x_wall + 1,
                    ..region
                });
                WallLine {
                    orientation: Orientation::Vertical,
                    at: x_wall,
                    start: region.y_start,
                    end: region.y_end,
                    door: random_door_offset(region.y_start, region.y_end, rng),
                }
            }
        };

        wall.cells().for_each(|c| grid[c] = Cell::Wall);
        grid[wall.door()] = Cell::Empty;
        stepper.render(grid);
        walls.push(wall);
    }
    Ok(walls)
}
