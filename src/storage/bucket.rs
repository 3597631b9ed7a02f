use crate::storage::error::StorageError;
use crate::storage::models::{BucketSummary, S3StorageClient};
use crate::utils::log_utils;
use aws_sdk_s3::primitives::DateTimeFormat;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

/// Region that takes no location constraint on create-bucket
pub const DEFAULT_LOCATION_REGION: &str = "us-east-1";

/// Location constraint to send when creating a bucket in `region`
#[must_use]
pub fn location_constraint(region: &str) -> Option<BucketLocationConstraint> {
    if region == DEFAULT_LOCATION_REGION {
        None
    } else {
        Some(BucketLocationConstraint::from(region))
    }
}

impl S3StorageClient {
    /// Create a bucket in the client's region
    ///
    /// # Errors
    ///
    /// Returns a tagged error; a taken name comes back as `StorageError::AlreadyExists`.
    pub fn create_bucket(&self, bucket_name: &str) -> Result<(), StorageError> {
        log_utils::debug(
            &format!("Creating bucket '{bucket_name}' in {}", self.region),
            self.verbose,
        );

        self.runtime.block_on(async {
            let mut request = self.client.create_bucket().bucket(bucket_name);
            if let Some(constraint) = location_constraint(&self.region) {
                request = request.create_bucket_configuration(
                    CreateBucketConfiguration::builder()
                        .location_constraint(constraint)
                        .build(),
                );
            }

            request
                .send()
                .await
                .map(|_| ())
                .map_err(|e| StorageError::from_sdk_error("CreateBucket", e))
        })
    }

    /// List every bucket visible to the credentials
    ///
    /// # Errors
    ///
    /// Returns a tagged error if the listing request fails.
    pub fn list_buckets(&self) -> Result<Vec<BucketSummary>, StorageError> {
        let buckets = self.runtime.block_on(async {
            let response = self
                .client
                .list_buckets()
                .send()
                .await
                .map_err(|e| StorageError::from_sdk_error("ListBuckets", e))?;

            let summaries = response
                .buckets
                .unwrap_or_default()
                .into_iter()
                .filter_map(|bucket| {
                    let creation_date = bucket
                        .creation_date
                        .and_then(|d| d.fmt(DateTimeFormat::DateTime).ok());
                    bucket.name.map(|name| BucketSummary {
                        name,
                        creation_date,
                    })
                })
                .collect::<Vec<_>>();

            Ok::<Vec<BucketSummary>, StorageError>(summaries)
        })?;

        log_utils::debug(&format!("Found {} buckets", buckets.len()), self.verbose);
        Ok(buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_east_1_sends_no_constraint() {
        assert!(location_constraint("us-east-1").is_none());
    }

    #[test]
    fn other_regions_send_their_name() {
        let constraint = location_constraint("eu-west-1").unwrap();
        assert_eq!(constraint.as_str(), "eu-west-1");
    }
}
