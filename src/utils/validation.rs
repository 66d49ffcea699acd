use crate::utils::error::{FrontError, Result};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> FrontError {
    FrontError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// API base URL: endpoint paths are appended to it, so no query or fragment.
pub fn validate_base_url(field: &str, raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        return Err(invalid(field, raw, "Base URL cannot be empty"));
    }

    let url = Url::parse(raw).map_err(|e| invalid(field, raw, format!("Invalid URL format: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            raw,
            format!("Backend must be reached over http or https, got {}", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(invalid(field, raw, "Base URL has no host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(field, raw, "Base URL cannot carry a query or fragment"));
    }
    Ok(())
}

/// Cookie file location: must name a file, not a directory.
pub fn validate_cookie_path(field: &str, raw: &str) -> Result<()> {
    if raw.trim().is_empty() {
        return Err(invalid(field, raw, "Cookie path cannot be empty"));
    }
    if raw.contains('\0') {
        return Err(invalid(field, raw, "Cookie path contains null bytes"));
    }
    if raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR) {
        return Err(invalid(field, raw, "Cookie path must name a file, not a directory"));
    }
    if Path::new(raw).is_dir() {
        return Err(invalid(field, raw, "Cookie path points at an existing directory"));
    }
    Ok(())
}

pub fn validate_range(field: &str, value: u64, min: u64, max: u64) -> Result<()> {
    if value < min {
        return Err(invalid(field, value, format!("Value must be at least {}", min)));
    }
    if value > max {
        return Err(invalid(field, value, format!("Value must be at most {}", max)));
    }
    Ok(())
}
