pub mod bucket;
pub mod client;
pub mod error;
pub mod models;
pub mod upload;

// Re-export types for convenient access from other modules
pub use error::StorageError;
pub use models::{BucketSummary, S3StorageClient, StorageConfig, UploadReceipt};
