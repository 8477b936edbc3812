use crate::utils::error::{DirectoryError, Result};
use std::fmt::Display;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl Display, reason: impl Into<String>) -> DirectoryError {
    DirectoryError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Service endpoints must be absolute http(s) URLs.
pub fn validate_endpoint(field: &str, endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field, endpoint, format!("Not a valid endpoint URL: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => {
            let reason = format!("Endpoint scheme '{}' is not http(s)", scheme);
            Err(invalid(field, endpoint, reason))
        }
    }
}

pub fn validate_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "Must not be blank"));
    }
    if value.contains('\0') {
        return Err(invalid(field, value.escape_debug(), "Must not contain NUL characters"));
    }
    Ok(())
}

pub fn validate_range<T>(field: &str, value: T, min: T, max: T) -> Result<()>
where
    T: PartialOrd + Display,
{
    if value < min || value > max {
        let reason = format!("Expected a value from {} to {}", min, max);
        return Err(invalid(field, value, reason));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_must_be_http() {
        assert!(validate_endpoint("inference.endpoint", "https://api.openai.com/v1").is_ok());
        assert!(validate_endpoint("places.endpoint", "http://127.0.0.1:9000/place").is_ok());
        assert!(validate_endpoint("inference.endpoint", "").is_err());
        assert!(validate_endpoint("inference.endpoint", "api.openai.com").is_err());

        let err = validate_endpoint("places.endpoint", "ftp://maps.example").unwrap_err();
        match err {
            DirectoryError::InvalidConfigValueError { field, reason, .. } => {
                assert_eq!(field, "places.endpoint");
                assert!(reason.contains("ftp"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_sampling_ranges() {
        assert!(validate_range("inference.temperature", 0.5, 0.0, 2.0).is_ok());
        assert!(validate_range("inference.top_p", 1.5, 0.0, 1.0).is_err());
        assert!(validate_range("inference.max_tokens", 0u32, 1, u32::MAX).is_err());
    }

    #[test]
    fn test_blank_values_are_rejected() {
        assert!(validate_non_empty("places.language", "he").is_ok());
        assert!(validate_non_empty("places.language", "  ").is_err());
        assert!(validate_non_empty("preferences.directory", "prefs\0dir").is_err());
    }
}
