//! Optional `course.toml` file with README text and run settings.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

/// On-disk course configuration. Every field is optional; missing values
/// fall back to the built-in defaults.
///
/// ```toml
/// [course]
/// title = "30-Day Beginner Rust Challenge 🦀"
/// tip = "Re-run yesterday's lesson before starting a new one."
///
/// [run]
/// api_endpoint = "${ROADMAP_API_ENDPOINT}"
/// workspace = ".roadmap"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseFile {
    #[serde(default)]
    pub course: CourseSection,
    #[serde(default)]
    pub run: RunSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseSection {
    pub title: Option<String>,
    pub welcome: Option<String>,
    pub tip: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    pub api_endpoint: Option<String>,
    pub workspace: Option<String>,
}

impl CourseFile {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }

    /// Replaces `${VAR_NAME}` placeholders with environment variables.
    /// Unset variables are left as-is so the error surfaces at validation.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for CourseFile {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.run.api_endpoint {
            validation::validate_endpoint_url("run.api_endpoint", endpoint)?;
        }
        if let Some(workspace) = &self.run.workspace {
            validation::validate_path("run.workspace", workspace)?;
        }
        if let Some(title) = &self.course.title {
            validation::validate_non_empty_string("course.title", title)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_course_file() {
        let toml_content = r#"
[course]
title = "My Rust Course"
tip = "Take notes."

[run]
api_endpoint = "https://api.example.com/users/1"
workspace = ".scratch"
"#;

        let config = CourseFile::from_toml_str(toml_content).unwrap();

        assert_eq!(config.course.title.as_deref(), Some("My Rust Course"));
        assert_eq!(config.run.workspace.as_deref(), Some(".scratch"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_valid() {
        let config = CourseFile::from_toml_str("").unwrap();
        assert!(config.course.title.is_none());
        assert!(config.run.api_endpoint.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let toml_content = r#"
[course]
titel = "typo"
"#;
        assert!(CourseFile::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROADMAP_TEST_ENDPOINT", "https://test.api.com");

        let toml_content = r#"
[run]
api_endpoint = "${ROADMAP_TEST_ENDPOINT}"
"#;

        let config = CourseFile::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.run.api_endpoint.as_deref(),
            Some("https://test.api.com")
        );

        std::env::remove_var("ROADMAP_TEST_ENDPOINT");
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let toml_content = r#"
[run]
api_endpoint = "not-a-url"
"#;
        let config = CourseFile::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[course]
welcome = "Welcome aboard!"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = CourseFile::from_path(temp_file.path()).unwrap();
        assert_eq!(config.course.welcome.as_deref(), Some("Welcome aboard!"));
    }
}
