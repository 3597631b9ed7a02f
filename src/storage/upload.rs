use crate::storage::error::StorageError;
use crate::storage::models::{S3StorageClient, UploadReceipt};
use crate::utils::log_utils;
use aws_sdk_s3::primitives::ByteStream;

impl S3StorageClient {
    /// Upload `body` as a single object. No chunking, no size limit.
    ///
    /// # Errors
    ///
    /// Returns a tagged error if the provider rejects the request or it can't be sent.
    pub fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<UploadReceipt, StorageError> {
        let size = body.len();
        log_utils::debug(
            &format!("PutObject request: bucket={bucket} key={key} bytes={size}"),
            self.verbose,
        );

        self.runtime.block_on(async {
            let response = self
                .client
                .put_object()
                .bucket(bucket)
                .key(key)
                .body(ByteStream::from(body))
                .send()
                .await
                .map_err(|e| StorageError::from_sdk_error("PutObject", e))?;

            Ok::<UploadReceipt, StorageError>(UploadReceipt {
                bucket: bucket.to_string(),
                key: key.to_string(),
                e_tag: response.e_tag().map(|tag| tag.replace('"', "")), // Remove quotes from ETag
                size,
            })
        })
    }
}
