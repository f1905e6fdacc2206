use thiserror::Error;
use zdash_engine::TransitionError;

/// Result type for zdash-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring the client or loading data
#[derive(Debug, Error)]
pub enum Error {
    /// Config file could not be parsed or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required setting was not provided by any source
    #[error("Missing {name}: pass --{flag} or set {env}")]
    MissingSetting {
        name: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    /// Transport-level failure (DNS, TLS, timeout, connection reset)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API responded with HTTP {status}: {body}")]
    Response { status: u16, body: String },

    #[error("Failed to decode {resource} page: {message}")]
    Decode { resource: String, message: String },

    #[error("Invalid session transition: {0}")]
    Transition(#[from] TransitionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for problems the user fixes by configuring zdash, not by retrying
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_) | Error::MissingSetting { .. })
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
