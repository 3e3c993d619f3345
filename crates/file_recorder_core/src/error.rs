use thiserror::Error;

/// Failure exits of one invocation.
///
/// Collaborator messages are carried through untouched; no attempt is made to
/// tell transient from permanent failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecorderError {
    #[error("failed to write object '{key}' to bucket '{bucket}': {message}")]
    ObjectWrite {
        bucket: String,
        key: String,
        message: String,
    },
    /// Raised after the object already exists; the object is left in place.
    #[error("failed to write record '{file_path}' to table '{table}': {message}")]
    RecordWrite {
        table: String,
        file_path: String,
        message: String,
    },
    #[error("failed to encode response: {0}")]
    Response(String),
}

impl From<serde_json::Error> for RecorderError {
    fn from(error: serde_json::Error) -> Self {
        Self::Response(error.to_string())
    }
}
