use thiserror::Error;

/// Local rejection of the URL input. Never reaches the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a URL")]
    Empty,
    #[error("URL must start with http:// or https://")]
    UnsupportedScheme,
}

/// Checks the URL exactly as typed: non-empty and starting with an http(s) prefix.
///
/// Only the prefix is checked; the service validates the rest.
pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::UnsupportedScheme);
    }
    Ok(())
}
