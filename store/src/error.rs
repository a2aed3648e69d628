use thiserror::Error;

/// Failures raised by a repository implementation.
///
/// These are infrastructure errors. Domain outcomes (wrong answer, timeout)
/// are never represented here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },
    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        StoreError::NotFound { entity, id }
    }
}
