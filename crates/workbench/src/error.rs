#![forbid(unsafe_code)]

//! Workbench error model.
//!
//! Geometry never fails; errors only come from loading configuration.

use std::fmt;

use workbench_layout::ConfigError;

/// Top-level error type for workbench hosts.
#[derive(Debug)]
pub enum Error {
    /// Configuration could not be parsed or validated.
    Config(ConfigError),
    /// Raw I/O error (convenience variant for `?` on io::Result).
    Io(std::io::Error),
}

/// Standard result type for workbench APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Error type label for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Io(_) => "io",
        }
    }

    /// Whether the host can carry on with default settings.
    ///
    /// A missing config file is recoverable; a present but broken one is not.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(err) => err.kind() == std::io::ErrorKind::NotFound,
            Self::Config(_) => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "I/O: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;

    use super::*;

    #[test]
    fn missing_file_is_recoverable() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.error_type(), "io");
        assert!(err.is_recoverable());
        assert!(format!("{err}").starts_with("I/O:"));
    }

    #[test]
    fn config_errors_are_not_recoverable() {
        let err = Error::from(ConfigError::UnknownPlacement("middle".into()));
        assert_eq!(err.error_type(), "config");
        assert!(!err.is_recoverable());
        assert!(format!("{err}").contains("middle"));
        assert!(StdError::source(&err).is_some());
    }
}
