//! Day 30: Wrap-up and next steps.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct WrapUp;

#[async_trait]
impl Lesson for WrapUp {
    fn day(&self) -> u8 {
        30
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        println!("You did it! Start building small apps or explore axum and Bevy.");
        println!();
        println!("Thirty days covered:");
        println!("- Syntax, ownership basics, and control flow (days 1-12)");
        println!("- Collections, functions, errors, files, modules (days 13-22)");
        println!("- Structs, traits, crates, JSON, two projects (days 23-29)");
        println!();
        println!("Where to go next:");
        println!("- The Rust Book: https://doc.rust-lang.org/book/");
        println!("- Rustlings exercises: https://github.com/rust-lang/rustlings");
        println!("- Web services with axum, games with Bevy, CLIs with clap");
        println!("- Run `cargo clippy` on your own code and read every lint");
        println!();
        println!("Three bonus days await: run `roadmap run --phase bonus`.");
        Ok(())
    }
}
