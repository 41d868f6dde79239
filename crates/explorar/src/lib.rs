//! Explorar: bounded-grid rover simulation.
//!
//! Explorar (Spanish: "to explore") replays textual movement scripts on
//! a small rectangular grid. Each line of a script places one rover and
//! walks it through a command sequence; the shared grid remembers every
//! visited cell so a whole script can be checked for full coverage.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     EXPLORAR Architecture                        │
//! ├──────────────────────────────────────────────────────────────────┤
//! │   ┌───────────┐    ┌───────────┐    ┌───────────┐    ┌────────┐  │
//! │   │ Movement  │    │ Line      │    │ Rover     │    │ Grid   │  │
//! │   │ Script    │───►│ Parser    │───►│ Replay    │───►│ Cover- │  │
//! │   │ (text)    │    │ (strict)  │    │ (steps)   │    │ age    │  │
//! │   └───────────┘    └───────────┘    └─────┬─────┘    └────────┘  │
//! │                                           │                      │
//! │                                           ▼                      │
//! │                                     ┌───────────┐                │
//! │                                     │ Render    │                │
//! │                                     │ Sink      │                │
//! │                                     └───────────┘                │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use explorar::{NullSink, Simulation};
//!
//! let mut sim = Simulation::default();
//! let rover = sim.run_line("0 0 E|MMLM", &mut NullSink)?;
//! rover.must_be_at(2, 1)?;
//! # Ok::<(), explorar::ExplorarError>(())
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod command;
mod config;
mod grid;
mod heading;
mod parser;
mod position;
mod render;
mod result;
mod rover;
mod simulation;

pub use command::Command;
pub use config::{GridBounds, SimulationConfig, DEFAULT_MAX_X, DEFAULT_MAX_Y};
pub use grid::{Cell, Grid};
pub use heading::{Heading, Rotation};
pub use parser::{parse_line, ParsedLine};
pub use position::Position;
pub use render::{FrameCounter, NullSink, RenderSink};
pub use result::{ErrorClass, ExplorarError, ExplorarResult};
pub use rover::Rover;
pub use simulation::{
    effective_lines, is_effective_line, LineOutcome, LineStatus, ScriptReport, Simulation,
};
