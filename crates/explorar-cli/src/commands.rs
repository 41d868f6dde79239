//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Explorador: CLI for Explorar - grid rover replay on a bounded plateau
#[derive(Parser, Debug)]
#[command(name = "explorador")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a movements script and replay each rover on the grid
    Run(RunArgs),

    /// Validate a movements script without moving any rover
    Check(CheckArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Movements script to execute
    pub script: PathBuf,

    /// Inter-step animation delay in milliseconds
    #[arg(long, default_value = "0")]
    pub delay_ms: u64,

    /// Skip frame-by-frame drawing, print only the final grid
    #[arg(long)]
    pub no_animation: bool,

    /// Keep running remaining lines after one fails
    #[arg(long)]
    pub keep_going: bool,

    /// Fail unless every cell was visited by the end of the run
    #[arg(long)]
    pub require_full_coverage: bool,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Movements script to validate
    pub script: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: CheckFormat,
}

/// Output format for the check command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckFormat {
    /// Human-readable diagnostics
    #[default]
    Human,
    /// JSON diagnostics
    Json,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
