use thiserror::Error;

/// Infrastructure failures raised while grading.
///
/// A wrong or malformed submission is a verdict, not an error; the only
/// thing that can fail here is reading the files themselves. Callers must
/// not record any verdict when this is returned.
#[derive(Debug, Error)]
pub enum GraderError {
    #[error("file unreadable: {0}")]
    FileRead(String),
}
