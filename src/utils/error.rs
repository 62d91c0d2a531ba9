use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoadmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unknown day {0}: the course covers days 1-33")]
    UnknownDay(u8),

    #[error("unknown operation '{0}': expected one of + - * / // % **")]
    UnknownOperation(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("cannot take the square root of {0}")]
    NegativeSqrt(f64),

    #[error("task description cannot be empty")]
    EmptyDescription,

    #[error("task {0} not found")]
    TaskNotFound(u64),

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("missing required configuration: {field}")]
    MissingConfig { field: String },
}

pub type Result<T> = std::result::Result<T, RoadmapError>;

impl RoadmapError {
    /// Process exit code for the CLI: configuration mistakes exit with 2,
    /// everything else with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfigValue { .. }
            | Self::MissingConfig { .. }
            | Self::UnknownDay(_)
            | Self::UnknownOperation(_) => 2,
            _ => 1,
        }
    }

    /// A short hint shown under the error message when there is an obvious
    /// next step for the user.
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Self::UnknownDay(_) => Some("run `roadmap list` to see every day of the course"),
            Self::UnknownOperation(_) => {
                Some("quote the operator in your shell, e.g. roadmap calc 2 '*' 3")
            }
            Self::DivisionByZero => Some("the second operand must be non-zero for / // %"),
            Self::EmptyDescription => Some("pass a non-empty task description"),
            Self::TaskNotFound(_) => Some("run `roadmap todo list` to see task ids"),
            Self::Http(_) => Some("check your network connection or pass --api-endpoint"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_exit_with_2() {
        let err = RoadmapError::MissingConfig {
            field: "workspace".to_string(),
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(RoadmapError::UnknownDay(99).exit_code(), 2);
    }

    #[test]
    fn runtime_errors_exit_with_1() {
        assert_eq!(RoadmapError::DivisionByZero.exit_code(), 1);
        assert_eq!(RoadmapError::TaskNotFound(7).exit_code(), 1);
    }

    #[test]
    fn unknown_day_message_names_the_range() {
        let message = RoadmapError::UnknownDay(42).to_string();
        assert!(message.contains("42"));
        assert!(message.contains("1-33"));
    }
}
