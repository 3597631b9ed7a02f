use super::types::Args;

/// Validate the args
///
/// # Errors
///
/// Returns an error if the region is empty or the endpoint URL has no http(s) scheme.
pub fn validate(args: &Args) -> Result<(), String> {
    if args.region.trim().is_empty() {
        return Err("--region must not be empty".to_string());
    }
    if let Some(endpoint) = &args.endpoint_url
        && !(endpoint.starts_with("https://") || endpoint.starts_with("http://"))
    {
        return Err(format!(
            "--endpoint-url must start with http:// or https://, got '{endpoint}'"
        ));
    }
    Ok(())
}
