pub mod bucket_resolver;
pub mod prompts;
pub mod upload_loop;

pub use bucket_resolver::{BucketOption, BucketResolution, BucketResolver};
pub use upload_loop::{
    ObjectKind, UploadLoop, UploadOutcome, UploadRequest, UploadState, UploadSummary,
};

use crate::errors::Result;
use crate::interfaces::{ObjectStore, ReadInteractiveInputHelper};
use crate::utils::log_utils::Logger;

/// What a full interactive session did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOutcome {
    pub resolution: BucketResolution,
    /// `None` when resolution was aborted and the upload loop never ran
    pub summary: Option<UploadSummary>,
}

/// Resolve a bucket, then offer uploads into it
///
/// # Errors
///
/// Returns an error if bucket creation fails for a reason other than a taken name,
/// a file chosen for upload can't be read, or the user interrupts a prompt.
pub fn run_workflow<S, R>(store: &S, input: &R, logger: &Logger) -> Result<WorkflowOutcome>
where
    S: ObjectStore + ?Sized,
    R: ReadInteractiveInputHelper + ?Sized,
{
    let resolution = BucketResolver::new(store, input, logger).resolve()?;

    match &resolution {
        BucketResolution::Aborted => {
            return Ok(WorkflowOutcome {
                resolution,
                summary: None,
            });
        }
        BucketResolution::NotFound(name) => logger.warn(&format!(
            "No bucket named '{name}' was found in your account, uploads in this session will fail"
        )),
        BucketResolution::Created(name) | BucketResolution::Matched(name) => {
            logger.info(&format!("Uploads will go to bucket '{name}'"));
        }
    }

    let summary = UploadLoop::new(store, input, &resolution, logger).run()?;
    logger.info(&format!(
        "Session finished: {} uploaded, {} rejected, {} failed",
        summary.uploaded, summary.rejected, summary.failed
    ));

    Ok(WorkflowOutcome {
        resolution,
        summary: Some(summary),
    })
}
