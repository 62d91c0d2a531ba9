use clap::Parser;
use rust_roadmap::projects::calculator::{self, Operation};
use rust_roadmap::projects::todo::{Completion, Priority, TodoStore};
use rust_roadmap::utils::envcheck::EnvReport;
use rust_roadmap::utils::logger;
use rust_roadmap::{
    Catalog, Cli, Command, CourseEngine, LessonContext, LocalStorage, Phase, Result, RoadmapError,
    Selection, Settings, TodoAction,
};
use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting roadmap CLI");
    if cli.verbose {
        tracing::debug!("CLI arguments: {:?}", cli);
    }

    let settings = match Settings::load(
        Path::new(&cli.course_file),
        cli.workspace.as_deref(),
        cli.api_endpoint.as_deref(),
        cli.verbose,
    ) {
        Ok(settings) => settings,
        Err(e) => report_and_exit(e),
    };

    if let Err(e) = dispatch(cli.command, &settings).await {
        report_and_exit(e);
    }
}

fn report_and_exit(e: RoadmapError) -> ! {
    tracing::error!("Command failed: {}", e);
    eprintln!("❌ {}", e);
    if let Some(advice) = e.advice() {
        eprintln!("💡 {}", advice);
    }
    std::process::exit(e.exit_code());
}

async fn dispatch(command: Command, settings: &Settings) -> Result<()> {
    match command {
        Command::List { phase } => list_days(phase.as_deref()),
        Command::Show { day } => show_day(day),
        Command::Run { day, phase, all } => run_lessons(settings, day, phase.as_deref(), all).await,
        Command::Readme { output } => generate_readme(settings, &output).await,
        Command::Calc { demo, expr } => run_calculator(demo, &expr),
        Command::Todo { file, action } => run_todo(settings, &file, action).await,
        Command::Check => check_environment(),
    }
}

fn list_days(phase: Option<&str>) -> Result<()> {
    let catalog = Catalog::standard();
    let days: Vec<_> = match phase {
        Some(phase) => {
            let phase: Phase = phase.parse()?;
            catalog.phase_days(phase).collect()
        }
        None => catalog.iter().collect(),
    };

    println!("Day  Phase         Title");
    for day in &days {
        println!("{:>3}  {:<12}  {}", day.number, day.phase.label(), day.title);
    }
    println!();
    println!("{} day(s) listed. Try: roadmap run --day 1", days.len());
    Ok(())
}

fn show_day(number: u8) -> Result<()> {
    let catalog = Catalog::standard();
    let day = catalog
        .get(number)
        .ok_or(RoadmapError::UnknownDay(number))?;

    println!("📘 Day {:02}: {}", day.number, day.title);
    println!("Phase:  {}", day.phase.label());
    println!("Module: {}", day.module);
    println!();
    println!("{}", day.overview);
    println!();
    println!("Exercise:");
    println!("{}", day.exercise);
    println!();
    println!("Run it with: roadmap run --day {}", day.number);
    Ok(())
}

async fn run_lessons(
    settings: &Settings,
    day: Option<u8>,
    phase: Option<&str>,
    all: bool,
) -> Result<()> {
    let selection = Selection::from_cli(day, phase, all)?;
    let engine = CourseEngine::new(Catalog::standard(), LessonContext::from_config(settings));
    let summary = engine.run(&selection).await?;

    if summary.is_success() {
        println!("✅ {} day(s) completed successfully!", summary.days_run.len());
        return Ok(());
    }

    let completed = summary.days_run.len() - summary.failures.len();
    eprintln!(
        "⚠️ {} day(s) completed, {} failed:",
        completed,
        summary.failures.len()
    );
    for (day, message) in &summary.failures {
        eprintln!("  Day {:02}: {}", day, message);
    }
    std::process::exit(1);
}

async fn generate_readme(settings: &Settings, output: &str) -> Result<()> {
    let storage = LocalStorage::new(".");
    settings
        .readme_builder()
        .write_to(&storage, output, &Catalog::standard())
        .await?;
    tracing::info!("README written to {}", output);
    println!("✅ {} has been generated", output);
    Ok(())
}

fn run_calculator(demo: bool, expr: &[String]) -> Result<()> {
    if demo {
        let (a, b) = match expr {
            [] => (10.0, 3.0),
            [a, b] => (parse_operand(a)?, parse_operand(b)?),
            _ => {
                return Err(RoadmapError::InvalidConfigValue {
                    field: "expression".to_string(),
                    value: expr.join(" "),
                    reason: "--demo takes two operands at most".to_string(),
                });
            }
        };
        print!("{}", calculator::demo_table(a, b));
        return Ok(());
    }

    match expr {
        [op, value] if op.as_str() == "sqrt" => {
            let value = parse_operand(value)?;
            println!("Result: sqrt {} = {}", value, calculator::sqrt(value)?);
        }
        [a, op, b] => {
            let a = parse_operand(a)?;
            let op: Operation = op.parse()?;
            let b = parse_operand(b)?;
            println!("Result: {} {} {} = {}", a, op, b, calculator::evaluate(a, op, b)?);
        }
        _ => {
            return Err(RoadmapError::InvalidConfigValue {
                field: "expression".to_string(),
                value: expr.join(" "),
                reason: "expected <a> <op> <b>, sqrt <n> or --demo".to_string(),
            });
        }
    }
    Ok(())
}

fn parse_operand(raw: &str) -> Result<f64> {
    raw.parse().map_err(|_| RoadmapError::InvalidConfigValue {
        field: "operand".to_string(),
        value: raw.to_string(),
        reason: "not a number".to_string(),
    })
}

async fn run_todo(settings: &Settings, file: &str, action: TodoAction) -> Result<()> {
    let store = TodoStore::new(LocalStorage::new(settings.workspace.clone()));
    let mut tasks = store.load(file).await?;

    match action {
        TodoAction::Add {
            description,
            priority,
        } => {
            let priority: Priority = priority.parse()?;
            let id = tasks.add(&description, priority)?;
            store.save(file, &tasks).await?;
            println!("✅ Task '{}' added! (id {})", description.trim(), id);
        }
        TodoAction::List { pending } => {
            print!("{}", tasks.render(!pending));
        }
        TodoAction::Done { id } => match tasks.complete(id)? {
            Completion::Marked => {
                store.save(file, &tasks).await?;
                println!("✅ Task {} marked as completed!", id);
            }
            Completion::AlreadyDone => {
                println!("Task {} is already completed!", id);
            }
        },
        TodoAction::Remove { id } => {
            let removed = tasks.remove(id)?;
            store.save(file, &tasks).await?;
            println!("🗑️ Task '{}' deleted!", removed.description);
        }
        TodoAction::Stats => {
            print!("{}", tasks.stats());
        }
    }
    Ok(())
}

fn check_environment() -> Result<()> {
    let report = EnvReport::collect();
    for line in report.lines() {
        println!("{}", line);
    }
    println!();
    if report.toolchain_ok() {
        println!("✅ Toolchain looks good, happy hacking!");
        Ok(())
    } else {
        eprintln!("❌ rustc or cargo was not found on PATH");
        eprintln!("💡 Install Rust with rustup and run the check again");
        std::process::exit(1);
    }
}
