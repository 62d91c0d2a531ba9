use clap::{Parser, Subcommand};

/// Command-line interface of the `roadmap` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "roadmap")]
#[command(about = "A 30-day Rust learning roadmap with runnable lessons")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "DIR",
        help = "Scratch directory for lesson files"
    )]
    pub workspace: Option<String>,

    #[arg(
        long,
        global = true,
        value_name = "FILE",
        default_value = "course.toml",
        help = "Course configuration file"
    )]
    pub course_file: String,

    #[arg(
        long,
        global = true,
        value_name = "URL",
        help = "Endpoint used by the day 27 API lesson"
    )]
    pub api_endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the days of the course
    List {
        #[arg(long, help = "Only this phase: foundations, intermediate, advanced, bonus")]
        phase: Option<String>,
    },

    /// Show one day's overview and exercise
    Show {
        #[arg(value_name = "DAY")]
        day: u8,
    },

    /// Run one or more lessons
    Run {
        #[arg(long, value_name = "DAY", conflicts_with_all = ["phase", "all"])]
        day: Option<u8>,

        #[arg(long, value_name = "PHASE", conflicts_with = "all")]
        phase: Option<String>,

        #[arg(long, help = "Run every day of the course")]
        all: bool,
    },

    /// Generate the course README from the built-in catalog
    Readme {
        #[arg(long, value_name = "FILE", default_value = "README.md")]
        output: String,
    },

    /// Day 28 project: evaluate `A OP B` or print the demo table
    Calc {
        #[arg(long, help = "Print every operation applied to the operands (default 10 and 3)")]
        demo: bool,

        #[arg(
            value_name = "EXPR",
            trailing_var_arg = true,
            allow_hyphen_values = true,
            help = "Expression as three tokens, e.g. 10 x 3 or 10 / 0"
        )]
        expr: Vec<String>,
    },

    /// Day 29 project: manage the to-do list
    Todo {
        #[arg(
            long,
            global = true,
            value_name = "FILE",
            default_value = "todos.json",
            help = "Task file, relative to the workspace"
        )]
        file: String,

        #[command(subcommand)]
        action: TodoAction,
    },

    /// Check the local machine and Rust toolchain
    Check,
}

#[derive(Debug, Clone, Subcommand)]
pub enum TodoAction {
    /// Add a task
    Add {
        #[arg(value_name = "DESCRIPTION")]
        description: String,

        #[arg(long, default_value = "medium", help = "high, medium or low")]
        priority: String,
    },

    /// List tasks
    List {
        #[arg(long, help = "Hide completed tasks")]
        pending: bool,
    },

    /// Mark a task as completed
    Done {
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Remove a task
    Remove {
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Show completion statistics
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_with_day() {
        let cli = Cli::parse_from(["roadmap", "run", "--day", "7"]);
        match cli.command {
            Command::Run { day, phase, all } => {
                assert_eq!(day, Some(7));
                assert!(phase.is_none());
                assert!(!all);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn run_day_conflicts_with_all() {
        assert!(Cli::try_parse_from(["roadmap", "run", "--day", "7", "--all"]).is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::parse_from(["roadmap", "list", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn calc_accepts_hyphen_operator() {
        let cli = Cli::parse_from(["roadmap", "calc", "10", "-", "3"]);
        match cli.command {
            Command::Calc { demo, expr } => {
                assert!(!demo);
                assert_eq!(expr, vec!["10", "-", "3"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn todo_add_defaults_to_medium_priority() {
        let cli = Cli::parse_from(["roadmap", "todo", "add", "Learn ownership"]);
        match cli.command {
            Command::Todo { file, action } => {
                assert_eq!(file, "todos.json");
                match action {
                    TodoAction::Add {
                        description,
                        priority,
                    } => {
                        assert_eq!(description, "Learn ownership");
                        assert_eq!(priority, "medium");
                    }
                    other => panic!("unexpected action: {other:?}"),
                }
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
