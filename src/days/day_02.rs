//! Day 2: Printing, comments, and basic syntax.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Printing;

#[async_trait]
impl Lesson for Printing {
    fn day(&self) -> u8 {
        2
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // The classic first line.
        println!("Hello, World!");

        // println! takes a format string; arguments fill the {} holes.
        println!("{}, {} {}!", "Hello", "Rust", "World");

        // Joining with a separator.
        let words = ["Rust", "is", "awesome"];
        println!("{}", words.join("-"));
        println!("{}", ["Learning", "Rust", "today"].join(" | "));

        // print! leaves the cursor on the same line.
        print!("This is line 1 ");
        println!("and this continues it");

        // Named and inline format arguments.
        let name = "Alice";
        let age = 25;
        println!("Hello, my name is {name} and I am {age} years old.");
        println!("Hello, my name is {0} and I am {1} years old.", name, age);

        // Escape sequences and raw strings.
        println!("Tab:\tnewline up next\nDone.");
        println!("{}", r"C:\no\escapes\here");
        println!("{}", r#"Raw strings can hold "quotes" too"#);

        // Numbers can be padded, aligned and given a precision.
        println!("{:>8}", "right");
        println!("{:08.3}", 3.14159);
        println!("{:b} in binary, {:x} in hex", 42, 255);
        Ok(())
    }
}
