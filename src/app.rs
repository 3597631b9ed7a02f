use crate::args::Args;
use crate::credentials::load_credentials;
use crate::errors::Result;
use crate::interfaces::DefaultReadInteractiveInputHelper;
use crate::storage::{S3StorageClient, StorageConfig};
use crate::utils::log_utils::Logger;
use crate::workflow::run_workflow;

/// Load credentials, open the storage client once, and run the interactive session
///
/// # Errors
///
/// Returns an error if the credentials can't be loaded, the client can't be built,
/// or the session hits a fatal error.
pub fn run_app(args: &Args) -> Result<()> {
    let logger = Logger::new(args.verbose);

    let credentials = load_credentials(&args.config)?;
    logger.info(&format!(
        "Loaded credentials from '{}' (key id {})",
        args.config.display(),
        credentials.redacted_key_id()
    ));

    let client = S3StorageClient::new(
        StorageConfig::from_args(args, credentials),
        logger.verbosity(),
    )?;
    logger.info(&format!("Storage client ready for region {}", client.region()));
    let input = DefaultReadInteractiveInputHelper;

    let outcome = run_workflow(&client, &input, &logger)?;
    logger.debug(&format!("Bucket resolution: {:?}", outcome.resolution));
    Ok(())
}
