//! Bounds-checked grid coordinates.

use crate::config::GridBounds;
use crate::heading::Heading;
use crate::result::{ExplorarError, ExplorarResult};
use serde::Serialize;
use std::fmt;

/// An immutable in-bounds grid coordinate.
///
/// Construction is the single bounds-enforcement point in the system:
/// a `Position` that exists is in bounds, so downstream code (the grid,
/// the renderer) never re-checks. Moving produces a new value through
/// the same checked constructor; there is no wraparound and no clamping.
///
/// `Deserialize` is not derived: a deserialized value would skip the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Create a position, rejecting anything outside the bounds
    pub fn new(x: i32, y: i32, bounds: GridBounds) -> ExplorarResult<Self> {
        if bounds.contains(x, y) {
            Ok(Self { x, y })
        } else {
            Err(ExplorarError::out_of_bounds(x, y, bounds))
        }
    }

    /// The x coordinate
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// The y coordinate
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// One step along a heading, as a new bounds-checked position.
    ///
    /// A step that would leave the grid fails with the same error as
    /// constructing that coordinate directly.
    pub fn advanced(self, heading: Heading, bounds: GridBounds) -> ExplorarResult<Self> {
        let (dx, dy) = heading.delta();
        Self::new(self.x + dx, self.y + dy, bounds)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
