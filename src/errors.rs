use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecureBucketError {
    #[error("Credentials error: {0}")]
    Credentials(#[from] crate::credentials::CredentialsError),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    #[error("Failed to create async runtime: {0}")]
    Runtime(std::io::Error),

    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Interrupted while waiting for input")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, SecureBucketError>;
