//! Prompt text for every question the workflow asks

use crate::read_interactive_input::GrammarFragment;

pub const BUCKET_NAMING_RULES: &str = "\nS3 bucket naming rules:\
\n- Bucket names must be between 3 and 63 characters long\
\n- Only lowercase letters, numbers, dots (.) and hyphens (-)\
\n- Must begin and end with a letter or number\
\n- Must not contain two adjacent periods\
\n- Must not be formatted as an IP address, e.g. '192.168.5.4'\
\n- Must not start with 'xn--', 'sthree-', 'sthree-configurator' or 'amzn-s3-demo-'\
\n- Must not end with '-s3alias', '--ol-s3', '.mrap' or '--x-s3'";

pub const CHOICE_NEW_BUCKET: &str = "1";
pub const CHOICE_EXISTING_BUCKET: &str = "2";
pub const CHOICE_YES: &str = "y";
pub const CHOICE_IMAGE: &str = "i";

#[must_use]
pub fn bucket_option_grammar() -> Vec<GrammarFragment> {
    vec![
        GrammarFragment::verbiage(
            "\nDo you want to create a new bucket or add an object to an existing bucket? Type",
        ),
        GrammarFragment::user_choice(CHOICE_NEW_BUCKET),
        GrammarFragment::verbiage("for a new bucket,"),
        GrammarFragment::user_choice(CHOICE_EXISTING_BUCKET),
        GrammarFragment::verbiage("for an existing bucket, or any other character to exit:"),
    ]
}

/// `question` followed by the usual "type 'y' for yes" tail
#[must_use]
pub fn yes_no_grammar(question: &str) -> Vec<GrammarFragment> {
    vec![
        GrammarFragment::verbiage(question),
        GrammarFragment::verbiage("Type"),
        GrammarFragment::user_choice(CHOICE_YES),
        GrammarFragment::verbiage("for yes, or any other character to exit:"),
    ]
}

#[must_use]
pub fn new_bucket_name_grammar() -> Vec<GrammarFragment> {
    vec![GrammarFragment::verbiage(
        "\nWhat's the name of the S3 bucket that you want to create? \
         (bucket names must be globally unique, so make it specific):",
    )]
}

#[must_use]
pub fn retry_bucket_grammar(bucket_name: &str) -> Vec<GrammarFragment> {
    vec![
        GrammarFragment::verbiage("\nThe bucket"),
        GrammarFragment::bucket_name(bucket_name),
        GrammarFragment::verbiage("already exists. Would you like to try another name? Type"),
        GrammarFragment::user_choice(CHOICE_YES),
        GrammarFragment::verbiage("for yes, or any other character to exit:"),
    ]
}

#[must_use]
pub fn existing_bucket_name_grammar() -> Vec<GrammarFragment> {
    vec![GrammarFragment::verbiage(
        "What's the exact name of the bucket that you want to use?",
    )]
}

#[must_use]
pub fn add_object_grammar() -> Vec<GrammarFragment> {
    yes_no_grammar("\nWould you like to add an object to your bucket?")
}

#[must_use]
pub fn add_another_object_grammar() -> Vec<GrammarFragment> {
    yes_no_grammar("\nDo you want to add another object to the bucket?")
}

#[must_use]
pub fn object_kind_grammar() -> Vec<GrammarFragment> {
    vec![
        GrammarFragment::verbiage("Is this object an image? Type"),
        GrammarFragment::user_choice(CHOICE_IMAGE),
        GrammarFragment::verbiage("for an image (jpg, jpeg, png), or any other character for a generic file:"),
    ]
}

#[must_use]
pub fn file_path_grammar() -> Vec<GrammarFragment> {
    vec![GrammarFragment::verbiage(
        "What's the path to the file you want to put into the bucket?",
    )]
}

#[must_use]
pub fn object_key_grammar(file_path: &str) -> Vec<GrammarFragment> {
    vec![
        GrammarFragment::verbiage("Key name for"),
        GrammarFragment::file_name(file_path),
        GrammarFragment::verbiage("(include the file type extension):"),
    ]
}
