use crate::utils::error::{MarsPhotosError, Result};
use url::Url;

/// Setup-time validation for configuration types.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid_value(field_name: &str, value: &str, reason: impl Into<String>) -> MarsPhotosError {
    MarsPhotosError::configuration(format!(
        "invalid value for `{}` ({:?}): {}",
        field_name,
        value,
        reason.into()
    ))
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid_value(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid_value(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid_value(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid_value(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

/// Rejects empty and whitespace-only values. The message never echoes the value,
/// since this guards credentials.
pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MarsPhotosError::configuration(format!(
            "`{}` is required and cannot be empty or whitespace-only",
            field_name
        )));
    }
    Ok(())
}
