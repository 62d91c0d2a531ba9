pub mod config;
pub mod core;
pub mod days;
pub mod domain;
pub mod projects;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{Cli, Command, TodoAction};

pub use config::Settings;
pub use self::core::{
    catalog::Catalog, readme::ReadmeBuilder, runner::CourseEngine, storage::LocalStorage,
};
pub use days::lesson_for;
pub use domain::model::{Day, Phase, RunSummary, Selection};
pub use domain::ports::{ConfigProvider, Lesson, LessonContext, Storage};
pub use utils::error::{Result, RoadmapError};
