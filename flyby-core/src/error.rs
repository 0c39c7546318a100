/// Error types for the flyby core
use std::fmt;

/// Result type for flyby operations
pub type FlybyResult<T> = Result<T, FlybyError>;

/// Errors raised while configuring a camera. Per-frame updates never fail.
#[derive(Debug)]
pub enum FlybyError {
    /// Perspective parameters that cannot produce a usable frustum
    InvalidProjection(String),
    /// Reading or writing an options file failed
    Io(std::io::Error),
    /// TOML options could not be parsed or serialized
    OptionsParse(String),
    /// Name that does not match any camera action
    UnknownAction(String),
}

impl fmt::Display for FlybyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProjection(msg) => write!(f, "invalid projection: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => write!(f, "options parse error: {msg}"),
            Self::UnknownAction(name) => write!(f, "unknown camera action: {name}"),
        }
    }
}

impl std::error::Error for FlybyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FlybyError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        let err = FlybyError::InvalidProjection("aspect must be positive, got 0".to_string());
        assert_eq!(err.to_string(), "invalid projection: aspect must be positive, got 0");

        let err = FlybyError::OptionsParse("expected a table".to_string());
        assert_eq!(err.to_string(), "options parse error: expected a table");
    }

    #[test]
    fn test_io_source_is_kept() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
        let err: FlybyError = io.into();
        assert!(matches!(err, FlybyError::Io(_)));
        assert!(err.source().is_some());
        assert!(FlybyError::OptionsParse(String::new()).source().is_none());
    }
}
