pub mod catalog;
pub mod readme;
pub mod runner;
pub mod storage;

pub use crate::domain::model::{Day, Phase, RunSummary, Selection};
pub use crate::domain::ports::{ConfigProvider, Lesson, LessonContext, Storage};
pub use crate::utils::error::Result;
