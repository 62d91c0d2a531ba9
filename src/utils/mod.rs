pub mod envcheck;
pub mod error;
pub mod logger;
pub mod validation;

pub use envcheck::EnvReport;
pub use error::{Result, RoadmapError};
