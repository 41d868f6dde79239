//! Result and error types for Explorar.

use crate::config::GridBounds;
use thiserror::Error;

/// Result type for Explorar operations
pub type ExplorarResult<T> = Result<T, ExplorarError>;

/// Errors that can occur while parsing, moving or verifying rovers
#[derive(Debug, Error)]
pub enum ExplorarError {
    /// Input line has no `|` separator between position and commands
    #[error("missing '|' separator in line '{line}'")]
    MissingSeparator {
        /// Offending input line
        line: String,
    },

    /// Command part after the separator is empty
    #[error("no movement commands in line '{line}'")]
    EmptyCommandSequence {
        /// Offending input line
        line: String,
    },

    /// Command part contains characters outside L, R and M
    #[error("invalid command character(s) '{found}' in line '{line}'")]
    InvalidCommandChar {
        /// Offending input line
        line: String,
        /// Every offending character, in input order
        found: String,
    },

    /// Starting-position part does not split into exactly three tokens
    #[error("expected 'X Y H' before the '|' in line '{line}', found {found} token(s)")]
    MalformedStartingPosition {
        /// Offending input line
        line: String,
        /// Number of space-separated tokens actually present
        found: usize,
    },

    /// Coordinate token is not a single ASCII digit
    #[error("coordinate '{token}' in line '{line}' is not a single digit")]
    NonDigitCoordinate {
        /// Offending input line
        line: String,
        /// Token that failed digit validation
        token: String,
    },

    /// Coordinate pair falls outside the grid bounds
    #[error("out of bounds: {message}")]
    OutOfBounds {
        /// Explanation with the rejected coordinates
        message: String,
    },

    /// Heading token is not one of N, S, E or W
    #[error("invalid heading: {message}")]
    InvalidHeadingChar {
        /// Explanation with the rejected token
        message: String,
    },

    /// Internal contract violation; indicates a logic defect, not bad input
    #[error("invariant failure: {message}")]
    InvariantFailure {
        /// What the violated contract was
        message: String,
    },

    /// Rover finished somewhere other than the expected cell
    #[error("expected rover at ({expected_x}, {expected_y}), found it at ({actual_x}, {actual_y})")]
    UnexpectedLocation {
        /// Expected x coordinate
        expected_x: i32,
        /// Expected y coordinate
        expected_y: i32,
        /// Actual x coordinate
        actual_x: i32,
        /// Actual y coordinate
        actual_y: i32,
    },

    /// Grid cells remain unvisited after a run
    #[error("grid not fully traversed: {unvisited} of {total} cells never visited")]
    IncompleteCoverage {
        /// Cells still holding the unvisited sentinel
        unvisited: usize,
        /// Total cells in the grid
        total: usize,
    },
}

impl ExplorarError {
    /// Create an out-of-bounds error for a rejected coordinate pair
    #[must_use]
    pub fn out_of_bounds(x: i32, y: i32, bounds: GridBounds) -> Self {
        Self::OutOfBounds {
            message: format!(
                "position ({x}, {y}) is outside the {}x{} grid",
                bounds.max_x, bounds.max_y
            ),
        }
    }

    /// Create an invariant-failure error
    #[must_use]
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantFailure {
            message: message.into(),
        }
    }

    /// Which class of the error taxonomy this error belongs to
    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::MissingSeparator { .. }
            | Self::EmptyCommandSequence { .. }
            | Self::InvalidCommandChar { .. }
            | Self::MalformedStartingPosition { .. }
            | Self::NonDigitCoordinate { .. }
            | Self::InvalidHeadingChar { .. } => ErrorClass::Input,
            Self::OutOfBounds { .. } => ErrorClass::Bounds,
            Self::InvariantFailure { .. } => ErrorClass::Invariant,
            Self::UnexpectedLocation { .. } | Self::IncompleteCoverage { .. } => {
                ErrorClass::Verification
            }
        }
    }

    /// True for internal contract violations that must never be retried
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        self.class() == ErrorClass::Invariant
    }
}

/// Error taxonomy: how a failure may be handled by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Parser validation failure; recoverable at the caller's discretion
    Input,
    /// Rover attempted to leave the grid; fatal to that rover only
    Bounds,
    /// Internal contract violation; unconditionally fatal
    Invariant,
    /// Expected post-condition did not hold; test/verification use
    Verification,
}
