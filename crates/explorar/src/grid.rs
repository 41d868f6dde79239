//! Flat cell store tracking which cells rovers have visited.

use crate::config::GridBounds;
use crate::heading::Heading;
use crate::position::Position;
use crate::result::{ExplorarError, ExplorarResult};
use serde::{Deserialize, Serialize};

/// Marker recorded for one grid cell, last write wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Initial sentinel; no rover has ever been here
    Unvisited,
    /// A rover was here and has since moved on
    Trail,
    /// A rover is here now, facing the given way
    Rover(Heading),
}

impl Cell {
    /// Character shown for this cell when the grid is rendered
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Unvisited => '.',
            Self::Trail => 'X',
            Self::Rover(heading) => heading.glyph(),
        }
    }

    /// True for anything except the unvisited sentinel
    #[must_use]
    pub const fn is_visited(self) -> bool {
        !matches!(self, Self::Unvisited)
    }
}

/// Fixed-size grid of cell markers, stored as a single flat buffer
/// with row-major coordinate-to-index mapping.
///
/// The grid does no bounds checking of its own: every [`Position`]
/// handed to [`Grid::mark`] already satisfies the grid invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: GridBounds,
}

impl Grid {
    /// Create a grid with every cell unvisited
    #[must_use]
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            cells: vec![Cell::Unvisited; bounds.cell_count()],
            bounds,
        }
    }

    /// The bounds this grid was created with
    #[must_use]
    pub const fn bounds(&self) -> GridBounds {
        self.bounds
    }

    fn index_of(&self, x: i32, y: i32) -> usize {
        (y * self.bounds.max_x + x) as usize
    }

    /// Record a marker at a position, overwriting whatever was there
    pub fn mark(&mut self, position: Position, cell: Cell) {
        let index = self.index_of(position.x(), position.y());
        self.cells[index] = cell;
    }

    /// Marker at raw coordinates, `None` outside the grid
    #[must_use]
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        if self.bounds.contains(x, y) {
            Some(self.cells[self.index_of(x, y)])
        } else {
            None
        }
    }

    /// Iterate every cell as `(x, y, marker)`, row by row from y = 0
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(index, cell)| {
            let x = index as i32 % self.bounds.max_x;
            let y = index as i32 / self.bounds.max_x;
            (x, y, *cell)
        })
    }

    /// Number of cells still holding the unvisited sentinel
    #[must_use]
    pub fn unvisited_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_visited()).count()
    }

    /// True iff every cell has been visited at least once
    #[must_use]
    pub fn is_fully_covered(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_visited())
    }

    /// Fail with [`ExplorarError::IncompleteCoverage`] unless every cell
    /// has been visited
    pub fn must_be_fully_traversed(&self) -> ExplorarResult<()> {
        let unvisited = self.unvisited_count();
        if unvisited == 0 {
            Ok(())
        } else {
            Err(ExplorarError::IncompleteCoverage {
                unvisited,
                total: self.cells.len(),
            })
        }
    }

    /// Render the grid as display rows, north (largest y) first
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        (0..self.bounds.max_y)
            .rev()
            .map(|y| {
                (0..self.bounds.max_x)
                    .map(|x| self.cells[self.index_of(x, y)].glyph())
                    .collect()
            })
            .collect()
    }
}
