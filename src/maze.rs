pub mod cell;

use std::fmt;

pub use cell::Cell;

/// Grid coordinate as `(x, y)`, i.e. `(column, row)`.
pub type Coord = (usize, usize);

/// Rectangular matrix of cell states.
///
/// Carving algorithms treat odd coordinates as cell centers and even coordinates as the
/// wall slots between them, so generated grids always have odd dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates a grid of exactly `width` x `height` cells filled with `cell`.
    pub fn new(width: usize, height: usize, cell: Cell) -> Self {
        let data = vec![cell; width * height].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Creates a grid whose dimensions are rounded up to the next odd value.
    pub fn with_odd_dimensions(width: usize, height: usize, cell: Cell) -> Self {
        Grid::new(width | 1, height | 1, cell)
    }

    /// A grid with no cells, used as the result of a failed load.
    pub fn empty() -> Self {
        Grid::new(0, 0, Cell::Wall)
    }

    /// Builds a grid from rows of possibly different lengths.
    /// Short rows are padded with walls up to the widest row.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();
        let data = rows
            .into_iter()
            .flat_map(|mut row| {
                row.resize(width, Cell::Wall);
                row
            })
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    pub fn is_boundary(&self, coord: Coord) -> bool {
        let (x, y) = coord;
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    pub(crate) fn ravel_index(&self, coord: Coord) -> usize {
        coord.1 * self.width + coord.0
    }

    pub fn cells(&self) -> &[Cell] {
        &self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks panics on a zero chunk size
        self.data.chunks(self.width.max(1))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.data.iter().filter(|&&c| c == cell).count()
    }

    /// Returns the first coordinate holding `cell`, scanning row by row.
    pub fn find(&self, cell: Cell) -> Option<Coord> {
        self.data
            .iter()
            .position(|&c| c == cell)
            .map(|idx| (idx % self.width, idx / self.width))
    }

    pub fn fill(&mut self, cell: Cell) {
        self.data.fill(cell);
    }

    /// Fills every non-boundary cell with `cell` and sets the boundary to walls.
    pub fn fill_interior(&mut self, cell: Cell) {
        (0..self.height).for_each(|y| {
            (0..self.width).for_each(|x| {
                let value = if self.is_boundary((x, y)) {
                    Cell::Wall
                } else {
                    cell
                };
                self[(x, y)] = value;
            });
        });
    }

    /// Resets Path and Visited markers left by a previous solve back to empty cells.
    pub fn clear_search_marks(&mut self) {
        self.data
            .iter_mut()
            .filter(|c| c.is_search_mark())
            .for_each(|c| *c = Cell::Empty);
    }

    /// Odd-coordinate cell centers inside the border, row by row.
    pub fn maze_cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width, self.height);
        (1..height.saturating_sub(1))
            .step_by(2)
            .flat_map(move |y| (1..width.saturating_sub(1)).step_by(2).map(move |x| (x, y)))
    }

    /// Get in-bounds neighbors of a cell in east, west, north, south order.
    /// North is `y + 1` and south is `y - 1`.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let (x, y) = coord;
        [
            // wrapping_sub turns 0 - 1 into usize::MAX, which the bounds check filters out
            (x.saturating_add(1), y),
            (x.wrapping_sub(1), y),
            (x, y.saturating_add(1)),
            (x, y.wrapping_sub(1)),
        ]
        .into_iter()
        .filter(move |&c| self.is_in_bounds(c))
    }

    /// Get the cell centers two steps away from `coord` that stay inside the border,
    /// in the same order as [`Grid::neighbors`].
    pub fn carve_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let (x, y) = coord;
        // No arithmetic on wrapped values: usize::MAX - 1 simply fails the upper bound
        let (max_x, max_y) = (self.width.saturating_sub(1), self.height.saturating_sub(1));
        [
            (x.saturating_add(2), y),
            (x.wrapping_sub(2), y),
            (x, y.saturating_add(2)),
            (x, y.wrapping_sub(2)),
        ]
        .into_iter()
        .filter(move |&(nx, ny)| nx > 0 && ny > 0 && nx < max_x && ny < max_y)
    }

    /// Renders the grid using the plain storage symbols, one line per row.
    pub fn to_text(&self) -> String {
        self.rows()
            .take(self.height)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The wall slot halfway between two cell centers.
pub fn between(a: Coord, b: Coord) -> Coord {
    ((a.0 + b.0) / 2, (a.1 + b.1) / 2)
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows().take(self.height) {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
