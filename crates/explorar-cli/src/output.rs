//! Console rendering and mission status reporting

use console::{style, Style, Term};
use explorar::{Grid, RenderSink, Rover};
use std::time::Duration;

/// Render sink that replays each rover step on the terminal
///
/// Each frame redraws the whole grid with north at the top plus a pose
/// line, then sleeps the configured delay. The previous frame is erased
/// in place so the grid appears to animate.
#[derive(Debug)]
pub struct ConsoleSink {
    term: Term,
    delay: Duration,
    drawn_lines: usize,
}

impl ConsoleSink {
    /// Create a sink drawing to stdout with the given inter-step delay
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            term: Term::stdout(),
            delay,
            drawn_lines: 0,
        }
    }
}

impl RenderSink for ConsoleSink {
    fn frame(&mut self, grid: &Grid, rover: &Rover) {
        if self.drawn_lines > 0 {
            let _ = self.term.clear_last_lines(self.drawn_lines);
        }

        let mut lines = grid.to_lines();
        lines.push(format!(
            "rover at {} facing {}",
            rover.position(),
            rover.heading()
        ));

        for line in &lines {
            let _ = self.term.write_line(line);
        }
        self.drawn_lines = lines.len();

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

/// Status reporter for mission execution
#[derive(Debug)]
pub struct MissionReporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for MissionReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl MissionReporter {
    /// Create a new mission reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stdout(),
            use_color,
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("✓").green().bold().to_string()
        } else {
            "OK".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a failure message
    pub fn failure(&self, message: &str) {
        // Failures print even in quiet mode
        let prefix = if self.use_color {
            style("✗").red().bold().to_string()
        } else {
            "FAIL".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("⚠").yellow().bold().to_string()
        } else {
            "WARN".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }

        let prefix = if self.use_color {
            style("ℹ").blue().bold().to_string()
        } else {
            "INFO".to_string()
        };

        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print the grid, north at the top
    pub fn grid(&self, grid: &Grid) {
        if self.quiet {
            return;
        }

        for line in grid.to_lines() {
            let _ = self.term.write_line(&line);
        }
    }

    /// Print the mission summary
    pub fn summary(&self, completed: usize, failed: usize, duration: Duration) {
        if self.quiet && failed == 0 {
            return;
        }

        let total = completed + failed;
        let duration_secs = duration.as_secs_f64();

        if self.use_color {
            let completed_style = Style::new().green().bold();
            let failed_style = Style::new().red().bold();

            let status = if failed > 0 {
                failed_style.apply_to("FAILED")
            } else {
                completed_style.apply_to("PASSED")
            };

            let _ = self.term.write_line(&format!(
                "{} {} line(s) in {:.2}s ({} completed, {} failed)",
                status,
                total,
                duration_secs,
                completed_style.apply_to(completed),
                if failed > 0 {
                    failed_style.apply_to(failed).to_string()
                } else {
                    failed.to_string()
                }
            ));
        } else {
            let status = if failed > 0 { "FAILED" } else { "PASSED" };
            let _ = self.term.write_line(&format!(
                "{status} {total} line(s) in {duration_secs:.2}s ({completed} completed, {failed} failed)"
            ));
        }
    }
}
