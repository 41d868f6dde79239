//! Strict line parser for rover movement scripts.
//!
//! One line describes one rover: its starting position, its heading and
//! the commands it will replay.
//!
//! # Grammar
//!
//! ```text
//! <line>     ::= <pos> "|" <commands>
//! <pos>      ::= <digit> " " <digit> " " <heading>
//! <digit>    ::= "0".."9"            (single character only)
//! <heading>  ::= "N" | "S" | "E" | "W"
//! <commands> ::= one or more of "L" | "R" | "M"
//! ```
//!
//! Input is case-insensitive; the parser upper-cases once and validates
//! everything against that form. Validation runs as an ordered series of
//! independent checks, each with its own error kind, finishing with a
//! round-trip self-check: the canonical string rebuilt from the parsed
//! fields must equal the upper-cased input exactly, otherwise the parser
//! accepted something it cannot reproduce and reports an invariant
//! failure.

use crate::command::Command;
use crate::config::GridBounds;
use crate::heading::Heading;
use crate::result::{ExplorarError, ExplorarResult};
use tracing::{debug, warn};

/// A fully validated movement line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Starting x coordinate, already inside the bounds
    pub x: i32,
    /// Starting y coordinate, already inside the bounds
    pub y: i32,
    /// Starting heading
    pub heading: Heading,
    /// Commands to replay, never empty
    pub commands: Vec<Command>,
    /// Advisory only: the command part contained "LR" or "RL", a pair of
    /// turns that cancel each other out
    pub redundant_rotation: bool,
}

/// Validate one raw movement line against the grammar and the grid bounds.
///
/// Checks run in order and stop at the first failure; every error carries
/// the offending line and the reason. The redundant-rotation check never
/// fails the line, it only warns.
pub fn parse_line(line: &str, bounds: GridBounds) -> ExplorarResult<ParsedLine> {
    let upper = line.to_uppercase();

    // 1. Exactly one separator between position and commands.
    let parts: Vec<&str> = upper.split('|').collect();
    if parts.len() != 2 {
        return Err(ExplorarError::MissingSeparator {
            line: line.to_string(),
        });
    }
    let (position_part, command_part) = (parts[0], parts[1]);

    // 2. Commands: non-empty, drawn from {L, R, M}. Every offending
    // character is reported, not just the first.
    if command_part.is_empty() {
        return Err(ExplorarError::EmptyCommandSequence {
            line: line.to_string(),
        });
    }
    let invalid: String = command_part
        .chars()
        .filter(|c| Command::from_char(*c).is_none())
        .collect();
    if !invalid.is_empty() {
        return Err(ExplorarError::InvalidCommandChar {
            line: line.to_string(),
            found: invalid,
        });
    }
    let commands: Vec<Command> = command_part.chars().filter_map(Command::from_char).collect();

    // 3. Advisory: adjacent L-then-R or R-then-L cancels itself out.
    let redundant_rotation = command_part.contains("LR") || command_part.contains("RL");
    if redundant_rotation {
        warn!(line = %line, "redundant rotation: commands contain an adjacent LR or RL pair");
    }

    // 4. Position part: exactly three space-separated tokens.
    let tokens: Vec<&str> = position_part.split(' ').collect();
    if tokens.len() != 3 {
        return Err(ExplorarError::MalformedStartingPosition {
            line: line.to_string(),
            found: tokens.len(),
        });
    }

    // 5. Coordinates: one ASCII digit each, nothing fancier.
    let x = single_digit(tokens[0]).ok_or_else(|| ExplorarError::NonDigitCoordinate {
        line: line.to_string(),
        token: tokens[0].to_string(),
    })?;
    let y = single_digit(tokens[1]).ok_or_else(|| ExplorarError::NonDigitCoordinate {
        line: line.to_string(),
        token: tokens[1].to_string(),
    })?;

    // 6. Early bounds gate. Position's constructor re-checks this when the
    // rover is built; both checks stay on purpose.
    if !bounds.contains(x, y) {
        return Err(ExplorarError::OutOfBounds {
            message: format!(
                "starting position ({x}, {y}) in line '{line}' is outside the {}x{} grid",
                bounds.max_x, bounds.max_y
            ),
        });
    }

    // 7. Heading: exactly one compass letter.
    let heading = heading_token(tokens[2], line)?;

    // 8. Round-trip self-check: rebuild the canonical line from what we
    // parsed and require it to match the upper-cased input exactly.
    let command_text: String = commands.iter().map(|c| c.as_char()).collect();
    let canonical = format!("{x} {y} {heading}|{command_text}");
    if canonical != upper {
        return Err(ExplorarError::invariant(format!(
            "parsed line '{line}' reformats as '{canonical}', expected '{upper}'"
        )));
    }

    debug!(x, y, heading = %heading, commands = commands.len(), "accepted movement line");

    Ok(ParsedLine {
        x,
        y,
        heading,
        commands,
        redundant_rotation,
    })
}

fn single_digit(token: &str) -> Option<i32> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10).map(|d| d as i32),
        _ => None,
    }
}

fn heading_token(token: &str, line: &str) -> ExplorarResult<Heading> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        Heading::from_char(c).map_err(|_| invalid_heading(token, line))
    } else {
        Err(invalid_heading(token, line))
    }
}

fn invalid_heading(token: &str, line: &str) -> ExplorarError {
    ExplorarError::InvalidHeadingChar {
        message: format!("heading '{token}' in line '{line}' is not one of N, S, E, W"),
    }
}
