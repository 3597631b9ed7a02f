use crate::read_interactive_input::{GrammarFragment, ReadValResult};
use crate::storage::{BucketSummary, S3StorageClient, StorageError, UploadReceipt};
use mockall::automock;

/// Interface for the storage operations the workflow consumes, to facilitate testing
#[automock]
pub trait ObjectStore {
    fn create_bucket(&self, bucket_name: &str) -> Result<(), StorageError>;
    fn list_buckets(&self) -> Result<Vec<BucketSummary>, StorageError>;
    fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<UploadReceipt, StorageError>;
}

/// Interface for prompting the user, to facilitate testing
#[automock]
pub trait ReadInteractiveInputHelper {
    fn read_val_from_cmd_line_and_proceed(
        &self,
        grammars: &mut [GrammarFragment],
        size: Option<usize>,
    ) -> ReadValResult;
}

impl ObjectStore for S3StorageClient {
    fn create_bucket(&self, bucket_name: &str) -> Result<(), StorageError> {
        S3StorageClient::create_bucket(self, bucket_name)
    }

    fn list_buckets(&self) -> Result<Vec<BucketSummary>, StorageError> {
        S3StorageClient::list_buckets(self)
    }

    fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<UploadReceipt, StorageError> {
        S3StorageClient::put_object(self, bucket, key, body)
    }
}

/// Default implementation of ReadInteractiveInputHelper that reads the real terminal
pub struct DefaultReadInteractiveInputHelper;

impl ReadInteractiveInputHelper for DefaultReadInteractiveInputHelper {
    fn read_val_from_cmd_line_and_proceed(
        &self,
        grammars: &mut [GrammarFragment],
        size: Option<usize>,
    ) -> ReadValResult {
        crate::read_interactive_input::read_val_from_cmd_line_and_proceed_default(grammars, size)
    }
}
