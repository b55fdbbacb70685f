//! CLI error types.

use std::fmt;

use dogapi::config::ConfigError;
use dogapi::logging::LoggingError;
use dogapi::provider::HttpError;

/// Errors surfaced by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Configuration file or argument problem.
    Config(ConfigError),

    /// Logging could not be set up.
    Logging(LoggingError),

    /// The HTTP client could not be created.
    HttpClient(HttpError),

    /// Reading from or writing to the terminal failed.
    Io(std::io::Error),

    /// One or more breeds could not be resolved.
    NotFound(usize),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound(_) => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Logging(e) => write!(f, "Logging error: {}", e),
            CliError::HttpClient(e) => write!(f, "HTTP client error: {}", e),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::NotFound(count) => write!(f, "{} breed(s) not found", count),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Logging(e) => Some(e),
            CliError::HttpClient(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::NotFound(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<LoggingError> for CliError {
    fn from(e: LoggingError) -> Self {
        CliError::Logging(e)
    }
}

impl From<HttpError> for CliError {
    fn from(e: HttpError) -> Self {
        CliError::HttpClient(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
