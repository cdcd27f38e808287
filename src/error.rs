use thiserror::Error;

pub type Result<T> = std::result::Result<T, FixerError>;

/// Everything an [`Exchange`](crate::Exchange) call can fail with.
///
/// Transport problems of any kind collapse into `Connection`, so callers only
/// need to match on one variant for "could not reach the service".
#[derive(Debug, Error)]
pub enum FixerError {
    #[error("{0}")]
    Connection(String),
    #[error("Response body is malformed.")]
    Response,
    #[error("{0}")]
    Configuration(String),
}

impl FixerError {
    pub fn is_connection(&self) -> bool {
        matches!(self, FixerError::Connection(_))
    }

    pub fn is_response(&self) -> bool {
        matches!(self, FixerError::Response)
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, FixerError::Configuration(_))
    }
}
