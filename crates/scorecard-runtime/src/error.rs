use std::fmt;

/// Result type for scorecard-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Trace pipeline or export error
    Engine(scorecard_engine::Error),

    /// Agent executor error outside of a stream
    Agent(scorecard_types::Error),

    /// HTTP transport failed
    Http(reqwest::Error),

    /// The API answered with an error status or an unexpected body
    Api(String),

    /// No college matched the query
    NotFound(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// File type not accepted for upload
    UploadRejected(String),

    /// Invalid operation or state
    InvalidOperation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Engine(err) => write!(f, "{}", err),
            Error::Agent(err) => write!(f, "{}", err),
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Api(msg) => write!(f, "API error: {}", msg),
            Error::NotFound(name) => write!(f, "College not found: {}", name),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::UploadRejected(msg) => write!(f, "File type disallowed: {}", msg),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Engine(err) => Some(err),
            Error::Agent(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Api(_)
            | Error::NotFound(_)
            | Error::Config(_)
            | Error::UploadRejected(_)
            | Error::InvalidOperation(_) => None,
        }
    }
}

impl From<scorecard_engine::Error> for Error {
    fn from(err: scorecard_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<scorecard_types::Error> for Error {
    fn from(err: scorecard_types::Error) -> Self {
        Error::Agent(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
