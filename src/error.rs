//! Unified error handling for moltenv
//!
//! Building the environment itself never fails; errors only come from the
//! edges around it: loading bindings files and launching the bot process.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum MoltenvError {
    /// Configuration errors (unsupported or malformed bindings files)
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Filesystem errors
    #[error("Filesystem error: {message} (path: {})", .path.display())]
    Filesystem {
        message: String,
        path: PathBuf,
        source: io::Error,
    },

    /// Process launch errors
    #[error("Process error: {message}")]
    Process {
        message: String,
        command: String,
        source: io::Error,
    },
}

/// Error categories, used for user messaging and exit handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Filesystem,
    Process,
}

impl ErrorCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ErrorCategory::Config => "Configuration",
            ErrorCategory::Filesystem => "Filesystem",
            ErrorCategory::Process => "Process",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl MoltenvError {
    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        MoltenvError::Config {
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Configuration error caused by a parser failure
    pub fn config_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        MoltenvError::Config {
            message: message.into(),
            path,
            source: Some(source.into()),
        }
    }

    pub fn filesystem(message: impl Into<String>, path: impl Into<PathBuf>, source: io::Error) -> Self {
        MoltenvError::Filesystem {
            message: message.into(),
            path: path.into(),
            source,
        }
    }

    pub fn process(message: impl Into<String>, command: impl Into<String>, source: io::Error) -> Self {
        MoltenvError::Process {
            message: message.into(),
            command: command.into(),
            source,
        }
    }

    /// Get error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            MoltenvError::Config { .. } => ErrorCategory::Config,
            MoltenvError::Filesystem { .. } => ErrorCategory::Filesystem,
            MoltenvError::Process { .. } => ErrorCategory::Process,
        }
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            MoltenvError::Config {
                message,
                path,
                source,
            } => {
                let detail = match source {
                    Some(source) => format!("{}: {}", message, source),
                    None => message.clone(),
                };
                match path {
                    Some(path) => format!("Bindings file '{}' problem: {}", path.display(), detail),
                    None => format!("Configuration problem: {}", detail),
                }
            }
            MoltenvError::Filesystem {
                message,
                path,
                source,
            } => {
                format!("{} '{}': {}", message, path.display(), source)
            }
            MoltenvError::Process {
                message,
                command,
                source,
            } => match source.kind() {
                io::ErrorKind::NotFound => {
                    format!("Command '{}' not found. Is it installed and on PATH?", command)
                }
                io::ErrorKind::PermissionDenied => {
                    format!("Permission denied while launching '{}'", command)
                }
                _ => format!("{} '{}': {}", message, command, source),
            },
        }
    }
}

/// Result type alias for convenience
pub type MoltenvResult<T> = Result<T, MoltenvError>;
