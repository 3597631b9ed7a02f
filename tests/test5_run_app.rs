use std::io::Write;

use secure_bucket::credentials::CredentialsError;
use secure_bucket::errors::SecureBucketError;
use secure_bucket::{Args, run_app};
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_config_file_fails_before_any_prompt() {
    let args = Args {
        config: std::path::PathBuf::from("/no/such/dir/config.ini"),
        ..Default::default()
    };

    let err = run_app(&args).unwrap_err();

    assert!(matches!(
        err,
        SecureBucketError::Credentials(CredentialsError::Io { .. })
    ));
    assert!(err.to_string().contains("/no/such/dir/config.ini"));
}

#[test]
fn test_config_without_secret_section_fails() {
    let file = config_file("[AWS Access Key Id]\nkey_id = AKIAEXAMPLE\n");
    let args = Args {
        config: file.path().to_path_buf(),
        verbose: 2,
        ..Default::default()
    };

    let err = run_app(&args).unwrap_err();

    assert!(matches!(
        err,
        SecureBucketError::Credentials(CredentialsError::MissingSection("AWS Secret Key"))
    ));
}
