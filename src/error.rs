// Pipeline errors: the read stage and the decode stage fail separately.

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why the atomic status read did not complete.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("status key is not present in the database")]
    MissingKey,
    #[error("transaction cancelled")]
    Cancelled,
    #[error("transaction timed out after {timeout_ms}ms")]
    TimedOut { timeout_ms: u64 },
    #[error("cluster unavailable")]
    Unavailable,
    #[error("transaction failed: {0}")]
    Backend(#[source] BoxError),
}

impl ReadError {
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        ReadError::Backend(err.into())
    }
}

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("cannot get status")]
    Read(#[source] ReadError),
    #[error("cannot decode json")]
    Decode(#[source] serde_json::Error),
}

impl StatusError {
    pub fn is_read(&self) -> bool {
        matches!(self, StatusError::Read(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, StatusError::Decode(_))
    }

    /// Underlying read cause, if this failed at the read stage.
    pub fn read_cause(&self) -> Option<&ReadError> {
        match self {
            StatusError::Read(e) => Some(e),
            StatusError::Decode(_) => None,
        }
    }
}

impl From<ReadError> for StatusError {
    fn from(e: ReadError) -> Self {
        StatusError::Read(e)
    }
}
