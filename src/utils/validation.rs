use crate::utils::error::{PollerError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> PollerError {
    PollerError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The preview endpoint: a plain http(s) URL. Requests never carry auth, so
/// credentials embedded in the URL are refused rather than silently sent.
pub fn validate_endpoint(field_name: &str, endpoint: &str) -> Result<Url> {
    if endpoint.trim().is_empty() {
        return Err(invalid(field_name, endpoint, "Endpoint cannot be empty"));
    }

    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field_name, endpoint, format!("Not a URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            endpoint,
            format!("Only http and https are polled, got {}", url.scheme()),
        ));
    }

    if !url.username().is_empty() || url.password().is_some() {
        return Err(invalid(
            field_name,
            endpoint,
            "Credentials in the endpoint are not supported",
        ));
    }

    Ok(url)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}
