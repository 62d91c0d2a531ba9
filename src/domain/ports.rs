use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// File persistence boundary. Lessons, the README generator and the to-do
/// store all go through this so tests can swap in an in-memory backend.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Configuration surface the engine needs, independent of whether it came
/// from CLI flags, a course file, or a test fixture.
pub trait ConfigProvider: Send + Sync {
    fn workspace(&self) -> &Path;
    fn api_endpoint(&self) -> &str;
    fn verbose(&self) -> bool;
}

/// Per-run context handed to every lesson.
#[derive(Debug, Clone)]
pub struct LessonContext {
    /// Scratch directory for lessons that write files (days 19, 27, 29).
    pub workspace: PathBuf,
    /// Endpoint the day 27 lesson fetches; tests point it at a mock server.
    pub api_endpoint: String,
}

impl LessonContext {
    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self {
            workspace: config.workspace().to_path_buf(),
            api_endpoint: config.api_endpoint().to_string(),
        }
    }

    /// Path of a scratch file inside the workspace.
    pub fn scratch_path(&self, name: &str) -> PathBuf {
        self.workspace.join(name)
    }

    /// Makes sure the workspace directory exists before a lesson writes
    /// into it.
    pub fn ensure_workspace(&self) -> Result<()> {
        std::fs::create_dir_all(&self.workspace)?;
        Ok(())
    }
}

/// One runnable day of the course.
#[async_trait]
pub trait Lesson: Send + Sync {
    /// Day number this lesson teaches, matching its catalog entry.
    fn day(&self) -> u8;

    /// Prints the day's demonstration to stdout.
    async fn run(&self, ctx: &LessonContext) -> Result<()>;
}
