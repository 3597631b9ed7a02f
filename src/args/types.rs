use clap::Parser;
use std::path::PathBuf;

use super::validators::validate;
use crate::utils::path_utils::check_readable_file;

pub const DEFAULT_CONFIG_FILE: &str = "config.ini";
pub const DEFAULT_REGION: &str = "us-east-1";

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// INI file holding the access key id and secret key
    #[arg(
        short = 'c',
        long,
        value_name = "PATH",
        default_value = DEFAULT_CONFIG_FILE,
        value_parser = check_readable_file
    )]
    pub config: PathBuf,

    /// Region used for every storage request
    #[arg(short = 'r', long, value_name = "REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Endpoint for S3-compatible providers, e.g. https://s3.us-west-004.backblazeb2.com
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Validate the arguments
    ///
    /// # Errors
    ///
    /// Returns an error string if the region is blank or the endpoint is not an http(s) URL.
    pub fn validate(&self) -> Result<(), String> {
        validate(self)
    }
}

impl Default for Args {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            verbose: 0,
        }
    }
}
