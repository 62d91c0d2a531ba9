//! Day 17: Scope, shadowing, and constants.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct ScopeAndConsts;

const MAX_SIZE: usize = 100;
static COURSE_NAME: &str = "rust-roadmap";

#[async_trait]
impl Lesson for ScopeAndConsts {
    fn day(&self) -> u8 {
        17
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // A binding lives until the end of its block.
        let x = 5;
        {
            let x = 10; // shadows the outer x inside this block
            println!("inner x = {x}");
        }
        println!("outer x = {x}");

        // Blocks are expressions.
        let y = {
            let base = 3;
            base * base
        };
        println!("y from a block = {y}");

        // Shadowing can change the type; mut cannot.
        let input = "42";
        let input: i32 = input.parse().unwrap_or(0);
        println!("shadowed into a number: {input}");

        // Constants are inlined and must have a type.
        println!("MAX_SIZE = {MAX_SIZE}");
        println!("COURSE_NAME = {COURSE_NAME}");

        // There is no `global` keyword to mutate outer state. State that
        // must change gets owned by a value you pass around.
        struct Counter {
            count: u32,
        }
        impl Counter {
            fn increment(&mut self) -> u32 {
                self.count += 1;
                self.count
            }
        }
        let mut counter = Counter { count: 0 };
        counter.increment();
        counter.increment();
        println!("counter reached {}", counter.increment());

        // Inner functions see no outer locals; closures do.
        let step = 10;
        let add_step = |n: i32| n + step;
        println!("closure captured step: {}", add_step(5));
        Ok(())
    }
}
