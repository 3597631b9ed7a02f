use crate::errors::{Result, SecureBucketError};
use crate::interfaces::{ObjectStore, ReadInteractiveInputHelper};
use crate::read_interactive_input::{GrammarFragment, ReadValResult};
use crate::storage::StorageError;
use crate::utils::log_utils::Logger;
use crate::workflow::prompts;

/// What the user picked from the first menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketOption {
    CreateNew,
    UseExisting,
    Exit,
}

impl BucketOption {
    #[must_use]
    pub fn from_choice(choice: Option<&str>) -> Self {
        match choice {
            Some(prompts::CHOICE_NEW_BUCKET) => BucketOption::CreateNew,
            Some(prompts::CHOICE_EXISTING_BUCKET) => BucketOption::UseExisting,
            _ => BucketOption::Exit,
        }
    }
}

/// Outcome of bucket resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketResolution {
    /// A new bucket was created under this name
    Created(String),
    /// The name matched a bucket in the account's listing
    Matched(String),
    /// The listing had no bucket with this exact name
    NotFound(String),
    /// The user chose to exit, or the listing could not be fetched
    Aborted,
}

impl BucketResolution {
    /// Bucket that uploads may target, only set when it was created or matched
    #[must_use]
    pub fn bucket_name(&self) -> Option<&str> {
        match self {
            BucketResolution::Created(name) | BucketResolution::Matched(name) => Some(name),
            BucketResolution::NotFound(_) | BucketResolution::Aborted => None,
        }
    }

    /// Name the user asked for, whether or not it resolved
    #[must_use]
    pub fn requested_name(&self) -> &str {
        match self {
            BucketResolution::Created(name)
            | BucketResolution::Matched(name)
            | BucketResolution::NotFound(name) => name,
            BucketResolution::Aborted => "",
        }
    }
}

pub struct BucketResolver<'a, S: ?Sized, R: ?Sized> {
    store: &'a S,
    input: &'a R,
    logger: &'a Logger,
}

impl<'a, S, R> BucketResolver<'a, S, R>
where
    S: ObjectStore + ?Sized,
    R: ReadInteractiveInputHelper + ?Sized,
{
    pub fn new(store: &'a S, input: &'a R, logger: &'a Logger) -> Self {
        Self {
            store,
            input,
            logger,
        }
    }

    /// Ask whether to create or reuse a bucket, then do it
    ///
    /// # Errors
    ///
    /// Returns an error if bucket creation fails for any reason other than a taken name,
    /// or the user interrupts a prompt.
    pub fn resolve(&self) -> Result<BucketResolution> {
        let choice = self.prompt(prompts::bucket_option_grammar())?;

        match BucketOption::from_choice(choice.user_entered_val.as_deref()) {
            BucketOption::CreateNew => self.create_new(),
            BucketOption::UseExisting => self.use_existing(),
            BucketOption::Exit => {
                self.logger.info("No bucket option chosen, exiting");
                Ok(BucketResolution::Aborted)
            }
        }
    }

    /// Prompt for names until one is created or the user gives up
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the name for a reason other than it being taken,
    /// or the user interrupts a prompt.
    pub fn create_new(&self) -> Result<BucketResolution> {
        loop {
            println!("{}", prompts::BUCKET_NAMING_RULES);
            let bucket_name = self.ask(prompts::new_bucket_name_grammar())?;
            if bucket_name.is_empty() {
                println!("\nA bucket name is required.");
                continue;
            }

            match self.store.create_bucket(&bucket_name) {
                Ok(()) => {
                    println!("\nBucket '{bucket_name}' successfully created");
                    return Ok(BucketResolution::Created(bucket_name));
                }
                Err(StorageError::AlreadyExists(detail)) => {
                    self.logger.debug(&detail);
                    println!(
                        "\nThe bucket that you want to create already exists. \
                         Bucket names must be globally unique, try a name that is unique."
                    );
                    if !self.prompt(prompts::retry_bucket_grammar(&bucket_name))?.is_yes() {
                        return Ok(BucketResolution::Aborted);
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Prompt for an exact name and look it up in the account's listing
    ///
    /// # Errors
    ///
    /// Returns an error if the user interrupts the prompt.
    pub fn use_existing(&self) -> Result<BucketResolution> {
        let bucket_name = self.ask(prompts::existing_bucket_name_grammar())?;

        let buckets = match self.store.list_buckets() {
            Ok(buckets) => buckets,
            Err(e) => {
                println!("API issue when trying to get the S3 buckets in your account.");
                self.logger.debug(&format!("ListBuckets failed: {e}"));
                return Ok(BucketResolution::Aborted);
            }
        };
        self.logger
            .debug(&format!("Account lists {} buckets", buckets.len()));

        if buckets.iter().any(|b| b.name == bucket_name) {
            self.logger.info(&format!("Using existing bucket '{bucket_name}'"));
            Ok(BucketResolution::Matched(bucket_name))
        } else {
            Ok(BucketResolution::NotFound(bucket_name))
        }
    }

    fn prompt(&self, grammars: Vec<GrammarFragment>) -> Result<ReadValResult> {
        read_answer(self.input, grammars)
    }

    fn ask(&self, grammars: Vec<GrammarFragment>) -> Result<String> {
        Ok(self.prompt(grammars)?.user_entered_val.unwrap_or_default())
    }
}

/// Show one prompt and wait for the answer. Ctrl-C, Ctrl-D and end of input end the session.
///
/// # Errors
///
/// Returns `SecureBucketError::Interrupted` if the user interrupted the prompt.
pub fn read_answer<R>(input: &R, mut grammars: Vec<GrammarFragment>) -> Result<ReadValResult>
where
    R: ReadInteractiveInputHelper + ?Sized,
{
    let result = input.read_val_from_cmd_line_and_proceed(&mut grammars, None);
    if result.was_interrupted {
        return Err(SecureBucketError::Interrupted);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices() {
        assert_eq!(BucketOption::from_choice(Some("1")), BucketOption::CreateNew);
        assert_eq!(BucketOption::from_choice(Some("2")), BucketOption::UseExisting);
        assert_eq!(BucketOption::from_choice(Some("3")), BucketOption::Exit);
        assert_eq!(BucketOption::from_choice(None), BucketOption::Exit);
    }

    #[test]
    fn only_created_or_matched_buckets_are_usable() {
        let created = BucketResolution::Created("a".to_string());
        let matched = BucketResolution::Matched("b".to_string());
        let missing = BucketResolution::NotFound("c".to_string());
        assert_eq!(created.bucket_name(), Some("a"));
        assert_eq!(matched.bucket_name(), Some("b"));
        assert_eq!(missing.bucket_name(), None);
        assert_eq!(missing.requested_name(), "c");
        assert_eq!(BucketResolution::Aborted.requested_name(), "");
    }
}
