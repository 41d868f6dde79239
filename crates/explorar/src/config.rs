//! Grid bounds and simulation configuration.

use serde::{Deserialize, Serialize};

/// Default exclusive upper bound for x coordinates
pub const DEFAULT_MAX_X: i32 = 6;

/// Default exclusive upper bound for y coordinates
pub const DEFAULT_MAX_Y: i32 = 6;

/// Exclusive upper bounds of the rover grid.
///
/// Valid coordinates satisfy `0 <= x < max_x` and `0 <= y < max_y`.
/// The reference grid is 6x6; the bounds travel as a value so nothing
/// else hard-codes the grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    /// Exclusive upper bound for x
    pub max_x: i32,
    /// Exclusive upper bound for y
    pub max_y: i32,
}

impl GridBounds {
    /// Create bounds for a `max_x` by `max_y` grid
    #[must_use]
    pub const fn new(max_x: i32, max_y: i32) -> Self {
        Self { max_x, max_y }
    }

    /// Check whether a coordinate pair lies inside the grid
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.max_x && y >= 0 && y < self.max_y
    }

    /// Total number of cells in the grid
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        (self.max_x * self.max_y) as usize
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_X, DEFAULT_MAX_Y)
    }
}

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid bounds shared by parser, rovers and the coverage tracker
    pub bounds: GridBounds,
    /// Stop the script at the first failing line instead of continuing
    pub fail_fast: bool,
}

impl SimulationConfig {
    /// Create a configuration with the given bounds and fail-fast behavior
    #[must_use]
    pub const fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            fail_fast: true,
        }
    }

    /// Set the grid bounds
    #[must_use]
    pub const fn with_bounds(mut self, bounds: GridBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set whether the first failing line stops the script
    #[must_use]
    pub const fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(GridBounds::default())
    }
}
