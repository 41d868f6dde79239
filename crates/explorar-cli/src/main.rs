//! Explorador CLI: replay grid rover movement scripts
//!
//! ## Usage
//!
//! ```bash
//! explorador run mission.txt                  # Replay a movements script
//! explorador run mission.txt --delay-ms 40    # Animate with a visible delay
//! explorador run mission.txt --keep-going     # Record failures, keep moving
//! explorador check mission.txt --format json  # Validate without running
//! ```

use clap::Parser;
use explorador::{
    check_script, render_check_json, render_check_report, CheckArgs, CheckFormat, Cli, CliConfig,
    CliError, CliResult, ColorChoice, Commands, ConsoleSink, MissionReporter, RunArgs, Verbosity,
};
use explorar::{GridBounds, NullSink, RenderSink, Simulation, SimulationConfig};
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    init_tracing(config.verbosity);

    match cli.command {
        Commands::Run(args) => run_mission(&config, &args),
        Commands::Check(args) => run_check(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let color: ColorChoice = cli.color.clone().into();

    CliConfig::new().with_verbosity(verbosity).with_color(color)
}

/// Route core `tracing` events to stderr
///
/// `EXPLORAR_LOG` overrides the level derived from `-v`/`-q`, using the
/// usual env-filter directive syntax.
fn init_tracing(verbosity: Verbosity) {
    let filter = tracing_subscriber::EnvFilter::try_from_env("EXPLORAR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(verbosity.tracing_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_mission(config: &CliConfig, args: &RunArgs) -> CliResult<()> {
    let config = config
        .clone()
        .with_delay_ms(args.delay_ms)
        .with_animate(!args.no_animation)
        .with_keep_going(args.keep_going)
        .with_require_full_coverage(args.require_full_coverage);

    let text = std::fs::read_to_string(&args.script)?;
    debug!(script = %args.script.display(), bytes = text.len(), "loaded movements script");

    let reporter = MissionReporter::new(config.color.should_color(), config.verbosity.is_quiet());
    if config.verbosity.is_verbose() {
        let effective = explorar::effective_lines(&text).count();
        reporter.info(&format!(
            "{} effective line(s) in {}",
            effective,
            args.script.display()
        ));
    }

    let sim_config = SimulationConfig::default().with_fail_fast(!config.keep_going);
    let mut sim = Simulation::new(sim_config);

    let mut console_sink;
    let mut null_sink = NullSink;
    let sink: &mut dyn RenderSink = if config.animate {
        console_sink = ConsoleSink::new(config.step_delay());
        &mut console_sink
    } else {
        &mut null_sink
    };

    let started = Instant::now();
    let report = sim.run_script(&text, sink)?;
    let elapsed = started.elapsed();

    if !config.animate {
        reporter.grid(sim.grid());
    }

    for outcome in report.failures() {
        reporter.failure(&format!("line {}: {}", outcome.line_number, outcome.line));
    }

    let total_cells = sim.grid().bounds().cell_count();
    let visited = total_cells - sim.grid().unvisited_count();
    if sim.grid().is_fully_covered() {
        reporter.success(&format!("coverage: {visited}/{total_cells} cells visited"));
    } else {
        reporter.warning(&format!("coverage: {visited}/{total_cells} cells visited"));
    }

    reporter.summary(report.completed_count(), report.failure_count(), elapsed);

    if !report.all_succeeded() {
        return Err(CliError::mission_failed(format!(
            "{} of {} line(s) failed",
            report.failure_count(),
            report.outcomes.len()
        )));
    }

    if config.require_full_coverage {
        sim.grid().must_be_fully_traversed()?;
    }

    Ok(())
}

fn run_check(config: &CliConfig, args: &CheckArgs) -> CliResult<()> {
    let text = std::fs::read_to_string(&args.script)?;
    let report = check_script(&text, GridBounds::default());
    debug!(
        script = %args.script.display(),
        checked = report.diagnostics.len(),
        invalid = report.invalid_count(),
        "validated movements script"
    );

    match args.format {
        CheckFormat::Human => {
            if !config.verbosity.is_quiet() {
                print!("{}", render_check_report(&report));
            }
        }
        CheckFormat::Json => {
            // Machine output prints even in quiet mode
            let json =
                render_check_json(&report).map_err(|e| CliError::report_generation(e.to_string()))?;
            println!("{json}");
        }
    }

    if !report.all_valid() {
        return Err(CliError::validation_failed(format!(
            "{} of {} line(s) invalid",
            report.invalid_count(),
            report.diagnostics.len()
        )));
    }

    Ok(())
}
