use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the fontface generator
#[derive(Debug)]
pub enum Error {
    /// IO operations errors
    Io(io::Error),
    /// Invalid file or directory path
    InvalidPath(PathBuf),
    /// Configuration errors
    Config(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::InvalidPath(path) => write!(f, "Invalid path: {}", path.display()),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type alias for fontface operations
pub type Result<T> = std::result::Result<T, Error>;
