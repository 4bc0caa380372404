use thiserror::Error;

/// Errors raised while loading mock data from disk.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate conversation id `{0}`")]
    DuplicateConversation(String),

    #[error("duplicate message id `{0}`")]
    DuplicateMessage(String),

    #[error("message `{0}` has empty text")]
    EmptyMessage(String),

    #[error("time offset of `{id}` is out of range: {minutes} minutes")]
    OffsetOutOfRange { id: String, minutes: i64 },
}
