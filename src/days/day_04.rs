//! Day 4: Basic input and output.
//!
//! `stdin` always hands you a string; everything else is parsing. The
//! lesson replays a canned transcript so a course run never blocks
//! waiting for a keyboard.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct InputOutput;

/// What a user might have typed at the three prompts.
const TRANSCRIPT: [(&str, &str); 3] = [
    ("Enter your name: ", "Alice\n"),
    ("Enter your age: ", "25\n"),
    ("Enter your height in meters: ", "1.75\n"),
];

/// Trims the newline and parses a number, reporting bad input instead
/// of panicking.
pub fn parse_number<T: std::str::FromStr>(line: &str) -> std::result::Result<T, String> {
    line.trim()
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", line.trim()))
}

#[async_trait]
impl Lesson for InputOutput {
    fn day(&self) -> u8 {
        4
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        println!("Reading a line in Rust:");
        println!("    let mut line = String::new();");
        println!("    std::io::stdin().read_line(&mut line)?;");
        println!("The newline stays in the string, so call .trim() before using it.");
        println!();

        println!("Replaying a recorded session:");
        let [(p1, name), (p2, age_line), (p3, height_line)] = TRANSCRIPT;

        println!("{p1}{}", name.trim());
        let name = name.trim();
        println!("Hello, {name}! Your name has {} characters.", name.len());

        println!("{p2}{}", age_line.trim());
        match parse_number::<u32>(age_line) {
            Ok(age) => println!("Next year you will be {} years old.", age + 1),
            Err(e) => println!("{e}"),
        }

        println!("{p3}{}", height_line.trim());
        match parse_number::<f64>(height_line) {
            Ok(height) => println!("That is {:.0} centimeters.", height * 100.0),
            Err(e) => println!("{e}"),
        }

        println!();
        println!("Bad input is a value, not a crash:");
        match parse_number::<u32>("twenty\n") {
            Ok(age) => println!("age: {age}"),
            Err(e) => println!("{e}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numbers() {
        assert_eq!(parse_number::<u32>("25\n"), Ok(25));
        assert_eq!(parse_number::<f64>("  1.75  "), Ok(1.75));
    }

    #[test]
    fn reports_bad_input() {
        let err = parse_number::<u32>("twenty\n").unwrap_err();
        assert_eq!(err, "'twenty' is not a valid number");
    }
}
