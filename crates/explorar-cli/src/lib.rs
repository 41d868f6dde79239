//! Explorador CLI Library
//!
//! Command-line interface for the Explorar rover simulation. The binary
//! in `main.rs` is a thin dispatcher; everything it calls lives here so
//! the argument surface, validation, and rendering stay unit-testable.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod check;
mod commands;
mod config;
mod error;
mod output;

pub use check::{
    check_script, render_check_json, render_check_report, CheckReport, LineDiagnostic,
};
pub use commands::{CheckArgs, CheckFormat, Cli, ColorArg, Commands, RunArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{ConsoleSink, MissionReporter};
