//! CLI configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - minimal output
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Check if debug mode
    #[must_use]
    pub const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }

    /// Default tracing directive for this level when `EXPLORAR_LOG` is unset
    #[must_use]
    pub const fn tracing_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stdout_is_terminal(),
        }
    }
}

/// Check if stdout is a terminal
fn stdout_is_terminal() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stdout())
}

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Inter-step animation delay in milliseconds
    pub delay_ms: u64,
    /// Redraw the grid after every applied command
    pub animate: bool,
    /// Keep running remaining lines after one fails
    pub keep_going: bool,
    /// Fail the run unless every cell was visited
    pub require_full_coverage: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            delay_ms: 0,
            animate: true,
            keep_going: false,
            require_full_coverage: false,
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set the inter-step delay in milliseconds
    #[must_use]
    pub const fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Enable or disable frame-by-frame animation
    #[must_use]
    pub const fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Keep running remaining lines after one fails
    #[must_use]
    pub const fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Require every grid cell to be visited by the end of the run
    #[must_use]
    pub const fn with_require_full_coverage(mut self, require: bool) -> Self {
        self.require_full_coverage = require;
        self
    }

    /// Inter-step delay as a [`Duration`]
    #[must_use]
    pub const fn step_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod verbosity_tests {
        use super::*;

        #[test]
        fn test_default_verbosity() {
            let v = Verbosity::default();
            assert_eq!(v, Verbosity::Normal);
        }

        #[test]
        fn test_is_quiet() {
            assert!(Verbosity::Quiet.is_quiet());
            assert!(!Verbosity::Normal.is_quiet());
            assert!(!Verbosity::Verbose.is_quiet());
            assert!(!Verbosity::Debug.is_quiet());
        }

        #[test]
        fn test_is_verbose() {
            assert!(!Verbosity::Quiet.is_verbose());
            assert!(!Verbosity::Normal.is_verbose());
            assert!(Verbosity::Verbose.is_verbose());
            assert!(Verbosity::Debug.is_verbose());
        }

        #[test]
        fn test_is_debug() {
            assert!(!Verbosity::Quiet.is_debug());
            assert!(!Verbosity::Verbose.is_debug());
            assert!(Verbosity::Debug.is_debug());
        }

        #[test]
        fn test_tracing_directive_ladder() {
            assert_eq!(Verbosity::Quiet.tracing_directive(), "error");
            assert_eq!(Verbosity::Normal.tracing_directive(), "warn");
            assert_eq!(Verbosity::Verbose.tracing_directive(), "debug");
            assert_eq!(Verbosity::Debug.tracing_directive(), "trace");
        }

        #[test]
        fn test_serialize() {
            let json = serde_json::to_string(&Verbosity::Debug).unwrap();
            assert!(json.contains("Debug"));
        }

        #[test]
        fn test_deserialize() {
            let v: Verbosity = serde_json::from_str("\"Quiet\"").unwrap();
            assert_eq!(v, Verbosity::Quiet);
        }
    }

    mod color_choice_tests {
        use super::*;

        #[test]
        fn test_default_color() {
            let c = ColorChoice::default();
            assert_eq!(c, ColorChoice::Auto);
        }

        #[test]
        fn test_should_color_always() {
            assert!(ColorChoice::Always.should_color());
        }

        #[test]
        fn test_should_color_never() {
            assert!(!ColorChoice::Never.should_color());
        }

        #[test]
        fn test_should_color_auto() {
            // Auto depends on terminal detection, just ensure it doesn't panic
            let _ = ColorChoice::Auto.should_color();
        }

        #[test]
        fn test_serialize() {
            let json = serde_json::to_string(&ColorChoice::Always).unwrap();
            assert!(json.contains("Always"));
        }

        #[test]
        fn test_deserialize() {
            let c: ColorChoice = serde_json::from_str("\"Never\"").unwrap();
            assert_eq!(c, ColorChoice::Never);
        }
    }

    mod cli_config_tests {
        use super::*;

        #[test]
        fn test_default_config() {
            let config = CliConfig::default();
            assert_eq!(config.verbosity, Verbosity::Normal);
            assert_eq!(config.color, ColorChoice::Auto);
            assert_eq!(config.delay_ms, 0);
            assert!(config.animate);
            assert!(!config.keep_going);
            assert!(!config.require_full_coverage);
        }

        #[test]
        fn test_with_verbosity() {
            let config = CliConfig::new().with_verbosity(Verbosity::Debug);
            assert_eq!(config.verbosity, Verbosity::Debug);
        }

        #[test]
        fn test_with_color() {
            let config = CliConfig::new().with_color(ColorChoice::Never);
            assert_eq!(config.color, ColorChoice::Never);
        }

        #[test]
        fn test_with_delay_ms() {
            let config = CliConfig::new().with_delay_ms(40);
            assert_eq!(config.delay_ms, 40);
            assert_eq!(config.step_delay(), Duration::from_millis(40));
        }

        #[test]
        fn test_with_animate() {
            let config = CliConfig::new().with_animate(false);
            assert!(!config.animate);
        }

        #[test]
        fn test_with_keep_going() {
            let config = CliConfig::new().with_keep_going(true);
            assert!(config.keep_going);
        }

        #[test]
        fn test_with_require_full_coverage() {
            let config = CliConfig::new().with_require_full_coverage(true);
            assert!(config.require_full_coverage);
        }

        #[test]
        fn test_chained_builders() {
            let config = CliConfig::new()
                .with_verbosity(Verbosity::Verbose)
                .with_color(ColorChoice::Always)
                .with_delay_ms(10)
                .with_animate(false)
                .with_keep_going(true);

            assert_eq!(config.verbosity, Verbosity::Verbose);
            assert_eq!(config.color, ColorChoice::Always);
            assert_eq!(config.delay_ms, 10);
            assert!(!config.animate);
            assert!(config.keep_going);
        }

        #[test]
        fn test_step_delay_zero_by_default() {
            let config = CliConfig::default();
            assert_eq!(config.step_delay(), Duration::ZERO);
        }

        #[test]
        fn test_serialize() {
            let config = CliConfig::new().with_keep_going(true);
            let json = serde_json::to_string(&config).unwrap();
            assert!(json.contains("keep_going"));
            assert!(json.contains("true"));
        }

        #[test]
        fn test_deserialize() {
            let json = r#"{"verbosity":"Debug","color":"Always","delay_ms":25,"animate":false,"keep_going":true,"require_full_coverage":true}"#;
            let config: CliConfig = serde_json::from_str(json).unwrap();
            assert_eq!(config.verbosity, Verbosity::Debug);
            assert_eq!(config.color, ColorChoice::Always);
            assert_eq!(config.delay_ms, 25);
            assert!(!config.animate);
            assert!(config.keep_going);
            assert!(config.require_full_coverage);
        }
    }
}
