/// Errors that can occur during object storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The object key is not a flat, safe file name.
    #[error("invalid object key: {0}")]
    InvalidKey(String),
    /// An I/O error occurred.
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The remote store answered with a non-success status.
    #[error("object store responded with status {status}: {message}")]
    Rejected { status: u16, message: String },
    /// The storage client failed before a response was received.
    #[error("object store client error: {0}")]
    Client(String),
    /// The configured backend is not available in this build.
    #[error("storage backend unavailable: {0}")]
    Unsupported(String),
}
