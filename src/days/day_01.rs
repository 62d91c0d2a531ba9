//! Day 1: Introduction to Rust and setting up the toolchain.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::envcheck::EnvReport;
use crate::utils::error::Result;

pub struct Setup;

#[async_trait]
impl Lesson for Setup {
    fn day(&self) -> u8 {
        1
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        println!("Rust is a compiled systems language known for:");
        println!("- Memory safety without a garbage collector");
        println!("- Fearless concurrency checked at compile time");
        println!("- A package manager and build tool in one: cargo");
        println!("- An expressive type system with traits and enums");
        println!();
        println!("Popular uses of Rust:");
        println!("- Command-line tools (ripgrep, bat, fd)");
        println!("- Network services (axum, actix-web, tonic)");
        println!("- Embedded and systems programming");
        println!("- WebAssembly");
        println!();

        let report = EnvReport::collect();
        println!("Your machine:");
        for line in report.lines() {
            println!("  {line}");
        }
        println!();

        if report.toolchain_ok() {
            println!("✅ rustc and cargo are installed. You are ready for day 2!");
        } else {
            println!("⚠️ rustc or cargo was not found. Install them with rustup:");
            println!("   https://rustup.rs");
        }
        Ok(())
    }
}
