//! Compass headings and the turn transition table.
//!
//! The four headings form a cyclic group of order 4 under left-turn;
//! right-turn is its inverse. Transitions live in one match over
//! `(Heading, Rotation)` rather than per-variant dispatch.

use crate::command::Command;
use crate::result::{ExplorarError, ExplorarResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four compass directions a rover can face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// Facing up the grid (increasing y)
    North,
    /// Facing down the grid (decreasing y)
    South,
    /// Facing right (increasing x)
    East,
    /// Facing left (decreasing x)
    West,
}

/// Turn kind applied to a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// Counter-clockwise quarter turn
    Left,
    /// Clockwise quarter turn
    Right,
}

impl Heading {
    /// All headings, in declaration order
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Parse a heading from its upper-case letter
    pub fn from_char(c: char) -> ExplorarResult<Self> {
        match c {
            'N' => Ok(Self::North),
            'S' => Ok(Self::South),
            'E' => Ok(Self::East),
            'W' => Ok(Self::West),
            other => Err(ExplorarError::InvalidHeadingChar {
                message: format!("'{other}' is not one of N, S, E, W"),
            }),
        }
    }

    /// The letter used in the line grammar
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// Arrow glyph shown on the grid for a rover facing this way
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::North => '^',
            Self::South => 'V',
            Self::East => '>',
            Self::West => '<',
        }
    }

    /// Movement delta `(dx, dy)` for one forward step
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }

    /// The heading after a quarter turn. Pure and total.
    #[must_use]
    pub const fn turned(self, rotation: Rotation) -> Self {
        match (self, rotation) {
            (Self::North, Rotation::Left) => Self::West,
            (Self::North, Rotation::Right) => Self::East,
            (Self::South, Rotation::Left) => Self::East,
            (Self::South, Rotation::Right) => Self::West,
            (Self::East, Rotation::Left) => Self::North,
            (Self::East, Rotation::Right) => Self::South,
            (Self::West, Rotation::Left) => Self::South,
            (Self::West, Rotation::Right) => Self::North,
        }
    }

    /// Apply a turn command.
    ///
    /// Callers must never pass [`Command::MoveForward`]; doing so is a
    /// contract violation reported as an invariant failure, not a user
    /// input error.
    pub fn turn(self, command: Command) -> ExplorarResult<Self> {
        match command.rotation() {
            Some(rotation) => Ok(self.turned(rotation)),
            None => Err(ExplorarError::invariant(format!(
                "heading cannot turn on command '{}'",
                command.as_char()
            ))),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
