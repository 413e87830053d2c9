use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use url::Url;

pub const SUPPORTED_OUTPUT_FORMATS: &[&str] = &["json", "csv"];
pub const MAX_TIMEOUT_SECONDS: u64 = 600;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_profiles(field_name: &str, profiles: &[String]) -> Result<()> {
    if profiles.is_empty() {
        return Err(EtlError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for profile in profiles {
        validate_url(field_name, profile)?;
    }
    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(EtlError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for format in formats {
        if !SUPPORTED_OUTPUT_FORMATS.contains(&format.as_str()) {
            return Err(EtlError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_OUTPUT_FORMATS.join(", ")
                ),
            });
        }
    }
    Ok(())
}

/// 抓取相關欄位的檢查（CLI 與 HTTP 服務共用）
pub fn validate_source_fields(
    profiles: &[String],
    user_agent: &str,
    timeout_seconds: u64,
    link_base: &str,
) -> Result<()> {
    validate_profiles("profiles", profiles)?;
    validate_non_empty_string("user_agent", user_agent)?;
    validate_range("timeout_seconds", timeout_seconds, 1, MAX_TIMEOUT_SECONDS)?;
    validate_url("link_base", link_base)?;
    Ok(())
}

/// 所有設定來源共用的檢查
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_source_fields(
        config.profiles(),
        config.user_agent(),
        config.timeout_seconds(),
        config.link_base(),
    )?;
    validate_path("output_path", config.output_path())?;
    validate_output_formats("output_formats", config.output_formats())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("profiles", "https://scholar.google.com/citations?user=x").is_ok());
        assert!(validate_url("profiles", "http://example.com").is_ok());
        assert!(validate_url("profiles", "").is_err());
        assert!(validate_url("profiles", "invalid-url").is_err());
        assert!(validate_url("profiles", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_profiles() {
        let good = vec!["https://scholar.google.co.in/citations?user=a".to_string()];
        assert!(validate_profiles("profiles", &good).is_ok());

        let empty: Vec<String> = vec![];
        assert!(matches!(
            validate_profiles("profiles", &empty),
            Err(EtlError::MissingConfigError { .. })
        ));

        let bad = vec![good[0].clone(), "scholar.google.com".to_string()];
        assert!(validate_profiles("profiles", &bad).is_err());
    }

    #[test]
    fn test_validate_output_formats() {
        let formats = vec!["json".to_string(), "csv".to_string()];
        assert!(validate_output_formats("output_formats", &formats).is_ok());

        let invalid = vec!["xlsx".to_string()];
        assert!(validate_output_formats("output_formats", &invalid).is_err());
    }

    #[test]
    fn test_validate_source_fields() {
        let profiles = vec!["https://scholar.google.com/citations?user=a".to_string()];
        assert!(
            validate_source_fields(&profiles, "agent/1.0", 30, "https://scholar.google.com").is_ok()
        );
        assert!(validate_source_fields(&profiles, "  ", 30, "https://scholar.google.com").is_err());
        assert!(validate_source_fields(&profiles, "agent/1.0", 0, "https://scholar.google.com").is_err());
        assert!(validate_source_fields(&profiles, "agent/1.0", 30, "scholar.google.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_seconds", 30u64, 1, MAX_TIMEOUT_SECONDS).is_ok());
        assert!(validate_range("timeout_seconds", 0u64, 1, MAX_TIMEOUT_SECONDS).is_err());
        assert!(validate_range("timeout_seconds", 601u64, 1, MAX_TIMEOUT_SECONDS).is_err());
    }
}
