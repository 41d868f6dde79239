//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Core simulation error
    #[error("{0}")]
    Explorar(#[from] explorar::ExplorarError),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// One or more script lines failed
    #[error("Mission failed: {message}")]
    MissionFailed {
        /// Error message
        message: String,
    },

    /// One or more script lines were rejected during validation
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Error message
        message: String,
    },

    /// Report generation error
    #[error("Report generation failed: {message}")]
    ReportGeneration {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a mission failure error
    #[must_use]
    pub fn mission_failed(message: impl Into<String>) -> Self {
        Self::MissionFailed {
            message: message.into(),
        }
    }

    /// Create a validation failure error
    #[must_use]
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }

    /// Create a report generation error
    #[must_use]
    pub fn report_generation(message: impl Into<String>) -> Self {
        Self::ReportGeneration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = CliError::invalid_argument("bad arg");
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("bad arg"));
    }

    #[test]
    fn test_mission_failed_error() {
        let err = CliError::mission_failed("2 of 3 lines failed");
        assert!(err.to_string().contains("Mission failed"));
    }

    #[test]
    fn test_validation_failed_error() {
        let err = CliError::validation_failed("1 invalid line");
        assert!(err.to_string().contains("Validation failed"));
    }

    #[test]
    fn test_report_generation_error() {
        let err = CliError::report_generation("serialization broke");
        assert!(err.to_string().contains("Report"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let cli_err: CliError = io_err.into();
        assert!(cli_err.to_string().contains("I/O"));
    }

    #[test]
    fn test_explorar_error_from() {
        let core_err = explorar::ExplorarError::invariant("broken transition");
        let cli_err: CliError = core_err.into();
        assert!(cli_err.to_string().contains("broken transition"));
    }
}
