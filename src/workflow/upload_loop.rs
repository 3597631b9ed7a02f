use crate::errors::{Result, SecureBucketError};
use crate::interfaces::{ObjectStore, ReadInteractiveInputHelper};
use crate::read_interactive_input::{GrammarFragment, ReadValResult};
use crate::workflow::bucket_resolver::read_answer;
use crate::storage::{StorageError, UploadReceipt};
use crate::utils::log_utils::Logger;
use crate::utils::path_utils::expand_tilde;
use crate::workflow::bucket_resolver::BucketResolution;
use crate::workflow::prompts;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// True when the path's extension, lower-cased, is one of `IMAGE_EXTENSIONS`
#[must_use]
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Image,
    File,
}

impl ObjectKind {
    #[must_use]
    pub fn from_choice(choice: Option<&str>) -> Self {
        match choice {
            Some(prompts::CHOICE_IMAGE) => ObjectKind::Image,
            _ => ObjectKind::File,
        }
    }
}

/// One file the user asked to upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub kind: ObjectKind,
    pub file_path: PathBuf,
    pub key: String,
}

/// Upload loop states. Every transition out of `AwaitingDecision` and `Prompting` waits on the user;
/// `Done` is reached only when the user declines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadState {
    AwaitingDecision { first: bool },
    Prompting,
    Uploading(UploadRequest),
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded(UploadReceipt),
    /// Image path whose extension isn't allowed; nothing was read or sent
    Rejected,
    /// No usable bucket this session; nothing was read or sent
    BucketUnresolved,
    Failed(StorageError),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UploadSummary {
    pub uploaded: usize,
    pub rejected: usize,
    pub failed: usize,
}

impl UploadSummary {
    fn record(&mut self, outcome: &UploadOutcome) {
        match outcome {
            UploadOutcome::Uploaded(_) => self.uploaded += 1,
            UploadOutcome::Rejected => self.rejected += 1,
            UploadOutcome::BucketUnresolved | UploadOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Read a whole file into memory. The handle is closed before this returns.
///
/// # Errors
///
/// Returns an error naming the path if it can't be opened or read.
pub fn read_object_body(path: &Path) -> Result<Vec<u8>> {
    let expanded = expand_tilde(path).map_err(SecureBucketError::PathError)?;
    let read_error = |source| SecureBucketError::ReadFile {
        path: path.display().to_string(),
        source,
    };

    let mut body = Vec::new();
    File::open(&expanded)
        .map_err(read_error)?
        .read_to_end(&mut body)
        .map_err(read_error)?;
    Ok(body)
}

pub struct UploadLoop<'a, S: ?Sized, R: ?Sized> {
    store: &'a S,
    input: &'a R,
    resolution: &'a BucketResolution,
    logger: &'a Logger,
    summary: UploadSummary,
}

impl<'a, S, R> UploadLoop<'a, S, R>
where
    S: ObjectStore + ?Sized,
    R: ReadInteractiveInputHelper + ?Sized,
{
    pub fn new(
        store: &'a S,
        input: &'a R,
        resolution: &'a BucketResolution,
        logger: &'a Logger,
    ) -> Self {
        Self {
            store,
            input,
            resolution,
            logger,
            summary: UploadSummary::default(),
        }
    }

    /// Drive the state machine until the user declines
    ///
    /// # Errors
    ///
    /// Returns an error if a chosen file can't be read or the user interrupts a prompt.
    pub fn run(&mut self) -> Result<UploadSummary> {
        let mut state = UploadState::AwaitingDecision { first: true };
        while state != UploadState::Done {
            state = self.step(state)?;
        }
        Ok(self.summary)
    }

    /// Perform one transition
    ///
    /// # Errors
    ///
    /// Returns an error if the file of an `Uploading` request can't be read,
    /// or the user interrupts a prompt.
    pub fn step(&mut self, state: UploadState) -> Result<UploadState> {
        let next = match state {
            UploadState::AwaitingDecision { first } => {
                let grammar = if first {
                    prompts::add_object_grammar()
                } else {
                    prompts::add_another_object_grammar()
                };
                if self.prompt(grammar)?.is_yes() {
                    UploadState::Prompting
                } else {
                    UploadState::Done
                }
            }
            UploadState::Prompting => UploadState::Uploading(self.prompt_for_request()?),
            UploadState::Uploading(request) => {
                let outcome = self.upload(&request)?;
                self.summary.record(&outcome);
                UploadState::AwaitingDecision { first: false }
            }
            UploadState::Done => UploadState::Done,
        };
        Ok(next)
    }

    /// Counts so far
    #[must_use]
    pub fn summary(&self) -> UploadSummary {
        self.summary
    }

    fn prompt_for_request(&self) -> Result<UploadRequest> {
        let kind = self.prompt(prompts::object_kind_grammar())?;
        let kind = ObjectKind::from_choice(kind.user_entered_val.as_deref());

        let file_path = self.ask(prompts::file_path_grammar())?;
        let key = self.ask(prompts::object_key_grammar(&file_path))?;

        Ok(UploadRequest {
            kind,
            file_path: PathBuf::from(file_path),
            key,
        })
    }

    /// Validate, read and send one file
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read.
    pub fn upload(&self, request: &UploadRequest) -> Result<UploadOutcome> {
        let display_path = request.file_path.display().to_string();

        if request.kind == ObjectKind::Image && !has_image_extension(&request.file_path) {
            println!(
                "\n'{display_path}' is not a supported image type ({}), skipping it.",
                IMAGE_EXTENSIONS.join(", ")
            );
            return Ok(UploadOutcome::Rejected);
        }

        let Some(bucket) = self.resolution.bucket_name() else {
            print_upload_failure(&display_path, self.resolution.requested_name());
            println!("No bucket was resolved for this session.");
            return Ok(UploadOutcome::BucketUnresolved);
        };

        let body = read_object_body(&request.file_path)?;
        self.logger.info(&format!(
            "Read {} bytes from '{display_path}'",
            body.len()
        ));

        match self.store.put_object(bucket, &request.key, body) {
            Ok(receipt) => {
                println!(
                    "\nUploaded '{display_path}' to bucket '{}' as '{}' ({} bytes)",
                    receipt.bucket, receipt.key, receipt.size
                );
                if let Some(e_tag) = &receipt.e_tag {
                    println!("ETag: {e_tag}");
                }
                Ok(UploadOutcome::Uploaded(receipt))
            }
            Err(e) => {
                print_upload_failure(&display_path, bucket);
                println!("Hint: {}", e.hint());
                if !e.is_client_error() {
                    self.logger.info("This kind of failure can succeed if you try the same file again");
                }
                self.logger.debug(&format!("PutObject failed: {e}"));
                Ok(UploadOutcome::Failed(e))
            }
        }
    }

    fn prompt(&self, grammars: Vec<GrammarFragment>) -> Result<ReadValResult> {
        read_answer(self.input, grammars)
    }

    fn ask(&self, grammars: Vec<GrammarFragment>) -> Result<String> {
        Ok(self.prompt(grammars)?.user_entered_val.unwrap_or_default())
    }
}

fn print_upload_failure(display_path: &str, bucket: &str) {
    println!("\nThe file at path '{display_path}' failed to be put in bucket '{bucket}'");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn image_extensions_ignore_case() {
        assert!(has_image_extension(Path::new("cat.png")));
        assert!(has_image_extension(Path::new("dir/cat.JPG")));
        assert!(has_image_extension(Path::new("cat.Jpeg")));
        assert!(!has_image_extension(Path::new("cat.gif")));
        assert!(!has_image_extension(Path::new("png")));
        assert!(!has_image_extension(Path::new("notes.png.txt")));
    }

    #[test]
    fn kind_choice() {
        assert_eq!(ObjectKind::from_choice(Some("i")), ObjectKind::Image);
        assert_eq!(ObjectKind::from_choice(Some("f")), ObjectKind::File);
        assert_eq!(ObjectKind::from_choice(None), ObjectKind::File);
    }

    #[test]
    fn body_is_exact_file_bytes() {
        let mut file = NamedTempFile::new().unwrap();
        let bytes = [0u8, 159, 146, 150, 10, 13, 255];
        file.write_all(&bytes).unwrap();
        assert_eq!(read_object_body(file.path()).unwrap(), bytes.to_vec());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_object_body(Path::new("/no/such/file.bin")).unwrap_err();
        assert!(err.to_string().contains("/no/such/file.bin"));
    }

    #[test]
    fn summary_counts_outcomes() {
        let mut summary = UploadSummary::default();
        summary.record(&UploadOutcome::Rejected);
        summary.record(&UploadOutcome::BucketUnresolved);
        summary.record(&UploadOutcome::Failed(StorageError::Transient("x".to_string())));
        assert_eq!(
            summary,
            UploadSummary {
                uploaded: 0,
                rejected: 1,
                failed: 2
            }
        );
    }
}
