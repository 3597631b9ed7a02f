use crate::args::Args;
use crate::credentials::Credentials;
use aws_sdk_s3::Client;

/// Configuration for the storage client
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub credentials: Credentials,
    pub region: String,
    pub endpoint_url: Option<String>, // Only set for S3-compatible providers
}

impl StorageConfig {
    #[must_use]
    pub fn from_args(args: &Args, credentials: Credentials) -> Self {
        Self {
            credentials,
            region: args.region.clone(),
            endpoint_url: args.endpoint_url.clone(),
        }
    }
}

/// One entry of a bucket listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
    pub name: String,
    pub creation_date: Option<String>,
}

/// Represents the result of a put-object call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    pub bucket: String,
    pub key: String,
    pub e_tag: Option<String>,
    pub size: usize,
}

/// Blocking client for an S3-compatible storage provider
pub struct S3StorageClient {
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) region: String,
    pub verbose: u8,
}
