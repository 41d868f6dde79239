//! A rover replaying its command sequence against the shared grid.

use crate::command::Command;
use crate::config::GridBounds;
use crate::grid::{Cell, Grid};
use crate::heading::Heading;
use crate::parser::parse_line;
use crate::position::Position;
use crate::render::RenderSink;
use crate::result::{ExplorarError, ExplorarResult};
use tracing::trace;

/// One rover: a heading, a bounds-checked position and the commands it
/// will replay. Heading and position are replaced, never mutated, as
/// each command is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rover {
    position: Position,
    heading: Heading,
    commands: Vec<Command>,
    bounds: GridBounds,
}

impl Rover {
    /// Create a rover from already-validated parts
    #[must_use]
    pub fn new(
        position: Position,
        heading: Heading,
        commands: Vec<Command>,
        bounds: GridBounds,
    ) -> Self {
        Self {
            position,
            heading,
            commands,
            bounds,
        }
    }

    /// Parse one movement line into a rover.
    ///
    /// The parser has already bounds-checked the starting coordinates;
    /// building the [`Position`] here passes them through the checked
    /// constructor a second time, which is the enforcement point the
    /// rest of the system trusts.
    pub fn from_line(line: &str, bounds: GridBounds) -> ExplorarResult<Self> {
        let parsed = parse_line(line, bounds)?;
        let position = Position::new(parsed.x, parsed.y, bounds)?;
        Ok(Self::new(position, parsed.heading, parsed.commands, bounds))
    }

    /// Current position
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Current heading
    #[must_use]
    pub const fn heading(&self) -> Heading {
        self.heading
    }

    /// The command sequence this rover replays
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// The bounds this rover moves within
    #[must_use]
    pub const fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Replay every command against the grid.
    ///
    /// Each step first marks the cell being left as trail, then applies
    /// the command, then marks the new cell with the heading glyph and
    /// hands the sink a frame. A move off the grid fails immediately and
    /// abandons the remaining commands; markings from earlier steps stay
    /// as they are.
    pub fn run(&mut self, grid: &mut Grid, sink: &mut dyn RenderSink) -> ExplorarResult<()> {
        grid.mark(self.position, Cell::Rover(self.heading));
        sink.frame(grid, self);

        for command in self.commands.clone() {
            grid.mark(self.position, Cell::Trail);
            match command {
                Command::MoveForward => {
                    self.position = self.position.advanced(self.heading, self.bounds)?;
                }
                Command::TurnLeft | Command::TurnRight => {
                    self.heading = self.heading.turn(command)?;
                }
            }
            grid.mark(self.position, Cell::Rover(self.heading));
            trace!(
                command = %command.as_char(),
                position = %self.position,
                heading = %self.heading,
                "applied command"
            );
            sink.frame(grid, self);
        }
        Ok(())
    }

    /// Verify the rover ended where expected.
    ///
    /// Fails with [`ExplorarError::UnexpectedLocation`] on mismatch;
    /// meant for verification code, not the normal run path.
    pub fn must_be_at(&self, x: i32, y: i32) -> ExplorarResult<()> {
        if self.position.x() == x && self.position.y() == y {
            Ok(())
        } else {
            Err(ExplorarError::UnexpectedLocation {
                expected_x: x,
                expected_y: y,
                actual_x: self.position.x(),
                actual_y: self.position.y(),
            })
        }
    }
}
