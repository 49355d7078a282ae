use std::fmt;

/// Result type for scorecard-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the agent executor boundary
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// A trace record could not be decoded
    Json(serde_json::Error),

    /// The executor (or another collaborator the run needs) is not available
    Unavailable(String),

    /// The executor failed while producing the trace
    Executor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "Trace decode error: {}", err),
            Error::Unavailable(msg) => write!(f, "Collaborator unavailable: {}", msg),
            Error::Executor(msg) => write!(f, "Agent executor failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Unavailable(_) | Error::Executor(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
