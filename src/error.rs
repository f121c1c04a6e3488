//! Error types for the brickftp library.

use thiserror::Error;

/// Boxed source error carried by [`BrickError::Transport`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for brickftp operations.
///
/// The first four variants cover every way a remote call can fail; callers
/// match on them to decide how to recover. None of them is retried.
#[derive(Error, Debug)]
pub enum BrickError {
    /// The network call could not complete (DNS, connect, timeout).
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// A body that should have been JSON could not be parsed, or lacked a
    /// field the protocol requires.
    #[error("Protocol error (HTTP {status}): {message}; body: {body}")]
    Protocol {
        status: u16,
        message: String,
        body: String,
    },

    /// The API answered with a failing status and an `error` message.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The raw upload or download exchange did not succeed.
    #[error("Transfer failed (HTTP {status}): {body}")]
    Transfer { status: u16, body: String },

    /// Content exceeds what a single-part upload can carry.
    #[error("Upload of {size} bytes exceeds the single-part limit of {limit} bytes")]
    UploadTooLarge { size: u64, limit: u64 },

    /// Local file read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BrickError {
    /// Build a transport error from any source error.
    pub fn transport<E>(source: E) -> Self
    where
        E: Into<BoxError>,
    {
        BrickError::Transport(source.into())
    }

    /// True if this is a transport failure caused by a timeout.
    pub fn is_timeout(&self) -> bool {
        let BrickError::Transport(source) = self else {
            return false;
        };
        if let Some(err) = source.downcast_ref::<reqwest::Error>() {
            return err.is_timeout();
        }
        if let Some(err) = source.downcast_ref::<std::io::Error>() {
            return err.kind() == std::io::ErrorKind::TimedOut;
        }
        false
    }

    /// HTTP status attached to the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BrickError::Protocol { status, .. }
            | BrickError::Api { status, .. }
            | BrickError::Transfer { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BrickError {
    fn from(err: reqwest::Error) -> Self {
        BrickError::Transport(Box::new(err))
    }
}

/// Result type alias for brickftp operations.
pub type Result<T> = std::result::Result<T, BrickError>;
