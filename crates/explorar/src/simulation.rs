//! Sequential script runner: many movement lines, one shared grid.

use crate::config::SimulationConfig;
use crate::grid::Grid;
use crate::render::RenderSink;
use crate::result::ExplorarResult;
use crate::rover::Rover;
use serde::{Deserialize, Serialize};
use tracing::error;

/// True for lines the runner hands to the parser.
///
/// Blank lines are skipped, as are comments, where a comment is a line
/// whose very first character is `#`. An indented `#` is not a comment
/// and will reach the parser.
#[must_use]
pub fn is_effective_line(line: &str) -> bool {
    !line.trim().is_empty() && !line.starts_with('#')
}

/// Iterate the effective lines of a script with their 1-based numbers
pub fn effective_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| is_effective_line(line))
        .map(|(index, line)| (index + 1, line))
}

/// How one effective line of a script ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStatus {
    /// The rover replayed every command
    Completed {
        /// Final x coordinate
        x: i32,
        /// Final y coordinate
        y: i32,
        /// Final heading letter
        heading: char,
    },
    /// The line was rejected or the rover aborted mid-run
    Failed {
        /// Rendered error for this line
        error: String,
    },
}

/// Outcome of one effective script line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineOutcome {
    /// 1-based line number in the original script
    pub line_number: usize,
    /// The line as it appeared in the script
    pub line: String,
    /// What happened when it ran
    pub status: LineStatus,
}

impl LineOutcome {
    fn completed(line_number: usize, line: &str, rover: &Rover) -> Self {
        Self {
            line_number,
            line: line.to_string(),
            status: LineStatus::Completed {
                x: rover.position().x(),
                y: rover.position().y(),
                heading: rover.heading().as_char(),
            },
        }
    }

    fn failed(line_number: usize, line: &str, error: &crate::result::ExplorarError) -> Self {
        Self {
            line_number,
            line: line.to_string(),
            status: LineStatus::Failed {
                error: error.to_string(),
            },
        }
    }

    /// True if the rover replayed every command on this line
    #[must_use]
    pub fn succeeded(&self) -> bool {
        matches!(self.status, LineStatus::Completed { .. })
    }
}

/// Per-line outcomes of one script run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScriptReport {
    /// One entry per effective line, in script order
    pub outcomes: Vec<LineOutcome>,
}

impl ScriptReport {
    /// Number of lines that replayed fully
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    /// Number of lines that failed
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.completed_count()
    }

    /// True iff every effective line replayed fully
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(LineOutcome::succeeded)
    }

    /// The outcomes that failed, in script order
    pub fn failures(&self) -> impl Iterator<Item = &LineOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

/// A simulation run: one grid, shared in turn by every rover a script
/// describes. Rovers execute strictly one after another, in line order.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    config: SimulationConfig,
}

impl Simulation {
    /// Create a simulation with a fresh, fully unvisited grid
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            grid: Grid::new(config.bounds),
            config,
        }
    }

    /// The shared grid in its current state
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The configuration this simulation runs with
    #[must_use]
    pub const fn config(&self) -> SimulationConfig {
        self.config
    }

    /// Parse one line and replay the rover it describes against the
    /// shared grid, returning the rover in its final state
    pub fn run_line(&mut self, line: &str, sink: &mut dyn RenderSink) -> ExplorarResult<Rover> {
        let mut rover = Rover::from_line(line, self.config.bounds)?;
        rover.run(&mut self.grid, sink)?;
        Ok(rover)
    }

    /// Run a whole movement script.
    ///
    /// Blank and comment lines are skipped; every other line becomes one
    /// rover. Input and bounds failures are recorded in the report; with
    /// `fail_fast` set the first such failure also stops the run.
    /// Invariant failures are different: they indicate a logic defect,
    /// so they abort the whole script as an `Err` no matter the policy.
    pub fn run_script(
        &mut self,
        text: &str,
        sink: &mut dyn RenderSink,
    ) -> ExplorarResult<ScriptReport> {
        let mut report = ScriptReport::default();
        for (line_number, line) in effective_lines(text) {
            match self.run_line(line, sink) {
                Ok(rover) => {
                    report
                        .outcomes
                        .push(LineOutcome::completed(line_number, line, &rover));
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    error!(line_number, line = %line, %err, "movement line failed");
                    report
                        .outcomes
                        .push(LineOutcome::failed(line_number, line, &err));
                    if self.config.fail_fast {
                        break;
                    }
                }
            }
        }
        Ok(report)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
