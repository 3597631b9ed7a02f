use std::collections::VecDeque;

use secure_bucket::errors::SecureBucketError;
use secure_bucket::interfaces::{MockObjectStore, MockReadInteractiveInputHelper};
use secure_bucket::read_interactive_input::ReadValResult;
use secure_bucket::storage::{BucketSummary, StorageError};
use secure_bucket::testing::ScriptedInputHelper;
use secure_bucket::utils::log_utils::Logger;
use secure_bucket::workflow::{BucketResolution, BucketResolver};

fn bucket(name: &str) -> BucketSummary {
    BucketSummary {
        name: name.to_string(),
        creation_date: None,
    }
}

fn taken(name: &str) -> StorageError {
    StorageError::AlreadyExists(format!("CreateBucket: {name} is taken"))
}

#[test]
fn test_new_bucket_is_created_on_first_try() {
    let logger = Logger::new(0);
    let input = ScriptedInputHelper::new(["1", "my-unique-bucket-001"]);
    let mut store = MockObjectStore::new();
    store
        .expect_create_bucket()
        .withf(|name| name == "my-unique-bucket-001")
        .times(1)
        .returning(|_| Ok(()));

    let resolution = BucketResolver::new(&store, &input, &logger).resolve().unwrap();

    assert_eq!(
        resolution,
        BucketResolution::Created("my-unique-bucket-001".to_string())
    );
    assert_eq!(input.remaining(), 0);
}

#[test]
fn test_collision_reprompts_once_then_succeeds() {
    let logger = Logger::new(0);
    let input = ScriptedInputHelper::new(["1", "taken-name", "y", "fresh-name-002"]);
    let mut store = MockObjectStore::new();
    store
        .expect_create_bucket()
        .withf(|name| name == "taken-name")
        .times(1)
        .returning(|name| Err(taken(name)));
    store
        .expect_create_bucket()
        .withf(|name| name == "fresh-name-002")
        .times(1)
        .returning(|_| Ok(()));

    let resolution = BucketResolver::new(&store, &input, &logger).resolve().unwrap();

    assert_eq!(
        resolution,
        BucketResolution::Created("fresh-name-002".to_string())
    );
    let retry_prompts = input
        .prompts()
        .iter()
        .filter(|p| p.contains("already exists"))
        .count();
    assert_eq!(retry_prompts, 1);
}

#[test]
fn test_collision_retry_accepts_uppercase_y() {
    let logger = Logger::new(0);
    let input = ScriptedInputHelper::new(["1", "taken-a", "Y", "taken-b", "y", "free-c"]);
    let mut store = MockObjectStore::new();
    store
        .expect_create_bucket()
        .withf(|name| name.starts_with("taken-"))
        .times(2)
        .returning(|name| Err(taken(name)));
    store
        .expect_create_bucket()
        .withf(|name| name == "free-c")
        .times(1)
        .returning(|_| Ok(()));

    let resolution = BucketResolver::new(&store, &input, &logger).resolve().unwrap();

    assert_eq!(resolution, BucketResolution::Created("free-c".to_string()));
    let retry_prompts = input
        .prompts()
        .iter()
        .filter(|p| p.contains("already exists"))
        .count();
    assert_eq!(retry_prompts, 2);
}

#[test]
fn test_collision_then_decline_aborts() {
    let logger = Logger::new(0);
    let input = ScriptedInputHelper::new(["1", "taken-name", "n", "never-read"]);
    let mut store = MockObjectStore::new();
    store
        .expect_create_bucket()
        .times(1)
        .returning(|name| Err(taken(name)));

    let resolution = BucketResolver::new(&store, &input, &logger).resolve().unwrap();

    assert_eq!(resolution, BucketResolution::Aborted);
    assert_eq!(input.remaining(), 1);
}

#[test]
fn test_empty_name_reprompts_without_calling_the_api() {
    let logger = Logger::new(0);
    let input = ScriptedInputHelper::new(["1", "", "good-name"]);
    let mut store = MockObjectStore::new();
    store
        .expect_create_bucket()
        .withf(|name| name == "good-name")
        .times(1)
        .returning(|_| Ok(()));

    let resolution = BucketResolver::new(&store, &input, &logger).resolve().unwrap();

    assert_eq!(resolution, BucketResolution::Created("good-name".to_string()));
}

#[test]
fn test_other_create_failures_are_fatal() {
    let logger = Logger::new(0);
    let input = ScriptedInputHelper::new(["1", "locked-down"]);
    let mut store = MockObjectStore::new();
    store
        .expect_create_bucket()
        .times(1)
        .returning(|_| Err(StorageError::AccessDenied("CreateBucket: denied".to_string())));

    let err = BucketResolver::new(&store, &input, &logger)
        .resolve()
        .unwrap_err();

    assert!(matches!(
        err,
        SecureBucketError::Storage(StorageError::AccessDenied(_))
    ));
}

#[test]
fn test_existing_bucket_matches_exactly() {
    let logger = Logger::new(0);
    let input = ScriptedInputHelper::new(["2", "photos-bucket"]);
    let mut store = MockObjectStore::new();
    store
        .expect_list_buckets()
        .times(1)
        .returning(|| Ok(vec![bucket("logs"), bucket("photos-bucket")]));

    let resolution = BucketResolver::new(&store, &input, &logger).resolve().unwrap();

    assert_eq!(
        resolution,
        BucketResolution::Matched("photos-bucket".to_string())
    );
}

#[test]
fn test_existing_bucket_match_is_case_sensitive() {
    let logger = Logger::new(0);
    let input = ScriptedInputHelper::new(["2", "Photos-Bucket"]);
    let mut store = MockObjectStore::new();
    store
        .expect_list_buckets()
        .times(1)
        .returning(|| Ok(vec![bucket("photos-bucket")]));

    let resolution = BucketResolver::new(&store, &input, &logger).resolve().unwrap();

    assert_eq!(
        resolution,
        BucketResolution::NotFound("Photos-Bucket".to_string())
    );
    assert_eq!(resolution.bucket_name(), None);
}

#[test]
fn test_listing_failure_aborts_without_more_prompts() {
    let logger = Logger::new(0);
    let input = ScriptedInputHelper::new(["2", "photos-bucket", "1"]);
    let mut store = MockObjectStore::new();
    store
        .expect_list_buckets()
        .times(1)
        .returning(|| Err(StorageError::Transient("ListBuckets: timed out".to_string())));

    let resolution = BucketResolver::new(&store, &input, &logger).resolve().unwrap();

    assert_eq!(resolution, BucketResolution::Aborted);
    assert_eq!(input.prompts().len(), 2);
    assert_eq!(input.remaining(), 1);
}

#[test]
fn test_any_other_menu_answer_exits() {
    let logger = Logger::new(0);
    for answer in ["q", "3", "", "new"] {
        let input = ScriptedInputHelper::new([answer]);
        // No expectations: any storage call would panic
        let store = MockObjectStore::new();

        let resolution = BucketResolver::new(&store, &input, &logger).resolve().unwrap();

        assert_eq!(resolution, BucketResolution::Aborted, "answer {answer:?}");
        assert_eq!(input.prompts().len(), 1);
    }
}

#[test]
fn test_interrupt_at_menu_is_an_error() {
    let logger = Logger::new(0);
    let mut read_val_helper = MockReadInteractiveInputHelper::new();
    read_val_helper
        .expect_read_val_from_cmd_line_and_proceed()
        .times(1)
        .returning(|_, _| ReadValResult {
            user_entered_val: None,
            was_interrupted: true,
        });
    let store = MockObjectStore::new();

    let err = BucketResolver::new(&store, &read_val_helper, &logger)
        .resolve()
        .unwrap_err();

    assert!(matches!(err, SecureBucketError::Interrupted));
}

#[test]
fn test_end_of_input_at_name_prompt_is_an_error() {
    let logger = Logger::new(0);
    for choice in ["1", "2"] {
        let input = ScriptedInputHelper::new([choice]);
        // No expectations: the name was never entered, so no storage call may happen
        let store = MockObjectStore::new();

        let err = BucketResolver::new(&store, &input, &logger)
            .resolve()
            .unwrap_err();

        assert!(matches!(err, SecureBucketError::Interrupted), "choice {choice}");
    }
}

#[test]
fn test_end_of_input_at_retry_prompt_is_an_error() {
    let logger = Logger::new(0);
    let input = ScriptedInputHelper::new(["1", "taken-name"]);
    let mut store = MockObjectStore::new();
    store
        .expect_create_bucket()
        .times(1)
        .returning(|name| Err(taken(name)));

    let err = BucketResolver::new(&store, &input, &logger)
        .resolve()
        .unwrap_err();

    assert!(matches!(err, SecureBucketError::Interrupted));
}

#[test]
fn test_padded_menu_answer_selects_create() {
    let logger = Logger::new(0);
    let input = ScriptedInputHelper::new([" 1 ", "padded-choice-bucket"]);
    let mut store = MockObjectStore::new();
    store
        .expect_create_bucket()
        .withf(|name| name == "padded-choice-bucket")
        .times(1)
        .returning(|_| Ok(()));

    let resolution = BucketResolver::new(&store, &input, &logger).resolve().unwrap();

    assert_eq!(
        resolution,
        BucketResolution::Created("padded-choice-bucket".to_string())
    );
}

#[test]
fn test_mocked_prompts_drive_existing_lookup() {
    let logger = Logger::new(0);
    let mut answers = VecDeque::from(vec!["2".to_string(), "archive".to_string()]);
    let mut read_val_helper = MockReadInteractiveInputHelper::new();
    read_val_helper
        .expect_read_val_from_cmd_line_and_proceed()
        .times(2)
        .returning(move |_, _| ReadValResult {
            user_entered_val: answers.pop_front(),
            was_interrupted: false,
        });
    let mut store = MockObjectStore::new();
    store
        .expect_list_buckets()
        .times(1)
        .returning(|| Ok(vec![bucket("archive")]));

    let resolution = BucketResolver::new(&store, &read_val_helper, &logger)
        .resolve()
        .unwrap();

    assert_eq!(resolution, BucketResolution::Matched("archive".to_string()));
}
