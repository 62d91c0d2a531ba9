use crate::utils::error::{Result, RoadmapError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_endpoint_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(RoadmapError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RoadmapError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RoadmapError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RoadmapError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RoadmapError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_day_number(day: u8) -> Result<()> {
    if (1..=33).contains(&day) {
        Ok(())
    } else {
        Err(RoadmapError::UnknownDay(day))
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RoadmapError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| RoadmapError::MissingConfig {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint_url() {
        assert!(validate_endpoint_url("api_endpoint", "https://example.com").is_ok());
        assert!(validate_endpoint_url("api_endpoint", "http://example.com").is_ok());
        assert!(validate_endpoint_url("api_endpoint", "").is_err());
        assert!(validate_endpoint_url("api_endpoint", "not-a-url").is_err());
        assert!(validate_endpoint_url("api_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_day_number() {
        assert!(validate_day_number(1).is_ok());
        assert!(validate_day_number(33).is_ok());
        assert!(validate_day_number(0).is_err());
        assert!(validate_day_number(34).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("workspace", ".roadmap").is_ok());
        assert!(validate_path("workspace", "").is_err());
        assert!(validate_path("workspace", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("title", "Rust Challenge").is_ok());
        assert!(validate_non_empty_string("title", "   ").is_err());
    }
}
