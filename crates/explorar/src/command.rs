//! Movement commands parsed from the line grammar.

use crate::heading::Rotation;
use serde::{Deserialize, Serialize};

/// One instruction for a rover, mapped one-to-one from the letters L, R, M
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Rotate the heading a quarter turn counter-clockwise
    TurnLeft,
    /// Rotate the heading a quarter turn clockwise
    TurnRight,
    /// Step one cell in the current heading
    MoveForward,
}

impl Command {
    /// Map an upper-case command letter to a command.
    ///
    /// Returns `None` for anything outside {L, R, M}; the parser collects
    /// every offending character before reporting, so the miss itself is
    /// not an error value here.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Self::TurnLeft),
            'R' => Some(Self::TurnRight),
            'M' => Some(Self::MoveForward),
            _ => None,
        }
    }

    /// The letter used in the line grammar
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
            Self::MoveForward => 'M',
        }
    }

    /// The rotation this command applies, or `None` for a forward move
    #[must_use]
    pub const fn rotation(self) -> Option<Rotation> {
        match self {
            Self::TurnLeft => Some(Rotation::Left),
            Self::TurnRight => Some(Rotation::Right),
            Self::MoveForward => None,
        }
    }

    /// True for the two turn commands
    #[must_use]
    pub const fn is_turn(self) -> bool {
        self.rotation().is_some()
    }
}
