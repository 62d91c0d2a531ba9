#[cfg(feature = "cli")]
pub mod cli;
pub mod course_file;
pub mod settings;

#[cfg(feature = "cli")]
pub use cli::{Cli, Command, TodoAction};
pub use course_file::CourseFile;
pub use settings::{CourseMeta, Settings, DEFAULT_API_ENDPOINT, DEFAULT_WORKSPACE};
