use crate::errors::{Result, SecureBucketError};
use crate::storage::models::{S3StorageClient, StorageConfig};
use crate::utils::log_utils;
use aws_config::retry::RetryConfig;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Region};

impl S3StorageClient {
    /// Create a new client from the provided config. No request is sent here.
    ///
    /// # Errors
    ///
    /// Returns an error if the tokio runtime can't be created.
    pub fn new(config: StorageConfig, verbose: u8) -> Result<Self> {
        // Runtime is reused for every request this client sends
        let runtime = tokio::runtime::Runtime::new().map_err(SecureBucketError::Runtime)?;

        log_utils::debug("Creating storage client with these parameters:", verbose);
        log_utils::debug(&format!("Region: {}", config.region), verbose);
        log_utils::debug(
            &format!(
                "Endpoint: {}",
                config.endpoint_url.as_deref().unwrap_or("provider default")
            ),
            verbose,
        );
        log_utils::debug(
            &format!("Key ID: {}", config.credentials.redacted_key_id()),
            verbose,
        );

        let region = config.region.clone();
        let s3_config = runtime.block_on(async {
            let credentials = Credentials::new(
                config.credentials.key_id.clone(),
                config.credentials.secret.clone(),
                None, // No session token
                None, // No expiry
                "IniFileCredentials",
            );

            let mut builder = aws_sdk_s3::Config::builder()
                .region(Region::new(config.region.clone()))
                .credentials_provider(credentials)
                .retry_config(RetryConfig::disabled())
                .behavior_version(BehaviorVersion::latest());

            if let Some(endpoint) = &config.endpoint_url {
                // S3-compatible providers rarely support virtual-hosted buckets
                builder = builder.endpoint_url(endpoint).force_path_style(true);
            }

            builder.build()
        });

        Ok(Self {
            client: Client::from_conf(s3_config),
            runtime,
            region,
            verbose,
        })
    }

    /// Region every request is signed for
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }
}
