use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use std::fmt::Debug;
use thiserror::Error;

/// Storage failure tagged by cause so callers can branch on it
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("transient failure: {0}")]
    Transient(String),

    #[error("unknown failure: {0}")]
    Unknown(String),
}

impl StorageError {
    /// Classify an SDK error returned by `operation`
    pub fn from_sdk_error<E, R>(operation: &str, err: SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: Debug,
    {
        let detail = format!("{operation}: {}", DisplayErrorContext(&err));
        match &err {
            SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => Self::Transient(detail),
            _ => Self::from_code(err.code(), detail),
        }
    }

    /// Classify by the provider's error code
    #[must_use]
    pub fn from_code(code: Option<&str>, detail: String) -> Self {
        match code {
            Some("NoSuchBucket" | "NoSuchKey" | "NotFound") => Self::NotFound(detail),
            Some(
                "AccessDenied"
                | "AllAccessDisabled"
                | "AccountProblem"
                | "Forbidden"
                | "InvalidAccessKeyId"
                | "SignatureDoesNotMatch",
            ) => Self::AccessDenied(detail),
            Some("BucketAlreadyExists" | "BucketAlreadyOwnedByYou") => Self::AlreadyExists(detail),
            Some(
                "InternalError"
                | "RequestTimeout"
                | "ServiceUnavailable"
                | "SlowDown"
                | "OperationAborted",
            ) => Self::Transient(detail),
            _ => Self::Unknown(detail),
        }
    }

    /// The request was rejected because of something the caller sent
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::AccessDenied(_) | Self::AlreadyExists(_)
        )
    }

    /// One-line suggestion printed next to a failed upload
    #[must_use]
    pub fn hint(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "the bucket does not exist or is not visible to these credentials",
            Self::AccessDenied(_) => "the credentials in the config file are not allowed to do this",
            Self::AlreadyExists(_) => "the name is already taken",
            Self::Transient(_) => "the provider or network had a temporary problem, try again",
            Self::Unknown(_) => "run with -v -v for the full error",
        }
    }
}
