use crossterm::style::{Color, Stylize};

use std::fmt;

/// State of a single grid cell.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Wall,
    Empty,
    Start,
    Goal,
    /// Part of the route found by a solver.
    Path,
    /// Expanded by a solver without being on the final route.
    Visited,
}

impl Cell {
    /// The width of each cell when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// Plain character used when a grid is stored as text.
    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Empty => ' ',
            Cell::Start => 'S',
            Cell::Goal => 'G',
            Cell::Path => '*',
            Cell::Visited => '.',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '#' => Some(Cell::Wall),
            ' ' => Some(Cell::Empty),
            'S' => Some(Cell::Start),
            'G' => Some(Cell::Goal),
            '*' => Some(Cell::Path),
            '.' => Some(Cell::Visited),
            _ => None,
        }
    }

    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    /// Path and Visited markers left behind by a solver.
    pub fn is_search_mark(self) -> bool {
        matches!(self, Cell::Path | Cell::Visited)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Cell::Wall => "██".with(Color::DarkGrey),
            Cell::Empty => "  ".with(Color::Reset),
            Cell::Start => "S ".with(Color::Green),
            Cell::Goal => "G ".with(Color::Red),
            Cell::Path => "* ".with(Color::Yellow),
            Cell::Visited => ". ".with(Color::Blue),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
