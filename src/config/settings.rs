//! Merged runtime settings: command-line flags win over `course.toml`,
//! which wins over the built-in defaults.

use std::path::{Path, PathBuf};

use crate::config::course_file::CourseFile;
use crate::core::readme::{ReadmeBuilder, DEFAULT_TIP, DEFAULT_TITLE, DEFAULT_WELCOME};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

/// Same user endpoint day 27 fetches in its API walkthrough.
pub const DEFAULT_API_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users/1";

/// Scratch directory where lessons write their practice files.
pub const DEFAULT_WORKSPACE: &str = ".roadmap";

#[derive(Debug, Clone)]
pub struct CourseMeta {
    pub title: String,
    pub welcome: String,
    pub tip: String,
}

impl Default for CourseMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            welcome: DEFAULT_WELCOME.to_string(),
            tip: DEFAULT_TIP.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub workspace: PathBuf,
    pub api_endpoint: String,
    pub verbose: bool,
    pub course: CourseMeta,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_sources(None, None, None, false)
    }
}

impl Settings {
    /// Merges an optional course file with command-line overrides.
    pub fn from_sources(
        file: Option<&CourseFile>,
        workspace: Option<&str>,
        api_endpoint: Option<&str>,
        verbose: bool,
    ) -> Self {
        let file_workspace = file.and_then(|f| f.run.workspace.as_deref());
        let file_endpoint = file.and_then(|f| f.run.api_endpoint.as_deref());

        let course = CourseMeta {
            title: pick(file.and_then(|f| f.course.title.as_deref()), DEFAULT_TITLE),
            welcome: pick(
                file.and_then(|f| f.course.welcome.as_deref()),
                DEFAULT_WELCOME,
            ),
            tip: pick(file.and_then(|f| f.course.tip.as_deref()), DEFAULT_TIP),
        };

        Self {
            workspace: PathBuf::from(pick(workspace.or(file_workspace), DEFAULT_WORKSPACE)),
            api_endpoint: pick(api_endpoint.or(file_endpoint), DEFAULT_API_ENDPOINT),
            verbose,
            course,
        }
    }

    /// Loads settings from a course file path if the file exists.
    ///
    /// A missing file is not an error; the defaults apply. A present but
    /// unreadable or invalid file is reported.
    pub fn load(
        course_file: &Path,
        workspace: Option<&str>,
        api_endpoint: Option<&str>,
        verbose: bool,
    ) -> Result<Self> {
        let file = if course_file.exists() {
            Some(CourseFile::from_path(course_file)?)
        } else {
            None
        };
        let settings = Self::from_sources(file.as_ref(), workspace, api_endpoint, verbose);
        settings.validate()?;
        Ok(settings)
    }

    /// README renderer configured with this course's texts.
    pub fn readme_builder(&self) -> ReadmeBuilder {
        ReadmeBuilder::new()
            .with_title(self.course.title.clone())
            .with_welcome(self.course.welcome.clone())
            .with_tip(self.course.tip.clone())
    }
}

fn pick(value: Option<&str>, default: &str) -> String {
    value.unwrap_or(default).to_string()
}

impl ConfigProvider for Settings {
    fn workspace(&self) -> &Path {
        &self.workspace
    }

    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_endpoint_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_path("workspace", &self.workspace.to_string_lossy())?;
        validation::validate_non_empty_string("course.title", &self.course.title)?;
        Ok(())
    }
}
