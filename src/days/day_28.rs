//! Day 28: The command-line calculator project.
//!
//! The real implementation lives in [`crate::projects::calculator`];
//! this lesson walks through what it can do. `roadmap calc` exposes it
//! directly.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::projects::calculator::{self, demo_table, History, Operation};
use crate::utils::error::Result;

pub struct CalculatorProject;

#[async_trait]
impl Lesson for CalculatorProject {
    fn day(&self) -> u8 {
        28
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        println!("=== Calculator demo ===");
        print!("{}", demo_table(10.0, 3.0));

        println!();
        println!("Division by zero is a value you can handle:");
        print!("{}", demo_table(5.0, 0.0));

        println!();
        println!("Square root checks its domain:");
        println!("sqrt(16) = {:?}", calculator::sqrt(16.0));
        match calculator::sqrt(-4.0) {
            Ok(value) => println!("sqrt(-4) = {value}"),
            Err(e) => println!("sqrt(-4) -> {e}"),
        }

        println!();
        println!("The history records what worked:");
        let mut history = History::new();
        let _ = history.record(10.0, Operation::Add, 3.0);
        let _ = history.record(10.0, Operation::Power, 2.0);
        let _ = history.record(1.0, Operation::Divide, 0.0); // not recorded
        for entry in history.entries() {
            println!("  {entry}");
        }
        println!("({} entries; the failed division is absent)", history.len());

        println!();
        println!("Try it yourself:  roadmap calc 10 x 3   or   roadmap calc --demo");
        Ok(())
    }
}
