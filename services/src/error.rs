use grader::error::GraderError;
use store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Grader(#[from] GraderError),
    /// An operation was invoked on an attempt in the wrong lifecycle
    /// state, e.g. scoring an attempt that is no longer in progress.
    #[error("invalid attempt state: {0}")]
    InvalidState(String),
}
