//! Day 18: Error handling with Result and Option.
//!
//! Errors are values here. The helpers define their own error enums by
//! hand to show what derive macros like thiserror generate for you.

use async_trait::async_trait;
use std::fmt;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Errors;

#[derive(Debug, PartialEq, Eq)]
pub enum MathError {
    DivisionByZero,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DivisionByZero => write!(f, "cannot divide by zero"),
        }
    }
}

impl std::error::Error for MathError {}

pub fn safe_divide(a: f64, b: f64) -> std::result::Result<f64, MathError> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

#[derive(Debug, PartialEq, Eq)]
pub enum AgeError {
    Negative(i64),
    Unrealistic(i64),
}

impl fmt::Display for AgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeError::Negative(age) => write!(f, "age {age} is negative"),
            AgeError::Unrealistic(age) => write!(f, "age {age} is not realistic"),
        }
    }
}

impl std::error::Error for AgeError {}

pub fn validate_age(age: i64) -> std::result::Result<u8, AgeError> {
    if age < 0 {
        return Err(AgeError::Negative(age));
    }
    if age > 150 {
        return Err(AgeError::Unrealistic(age));
    }
    Ok(age as u8)
}

#[async_trait]
impl Lesson for Errors {
    fn day(&self) -> u8 {
        18
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // Result is Ok or Err; match handles both.
        match safe_divide(10.0, 3.0) {
            Ok(value) => println!("10 / 3 = {value:.4}"),
            Err(e) => println!("failed: {e}"),
        }
        match safe_divide(10.0, 0.0) {
            Ok(value) => println!("10 / 0 = {value}"),
            Err(e) => println!("failed: {e}"),
        }

        // Option is Some or None.
        let numbers = [1, 2, 3];
        println!("first: {:?}", numbers.first());
        println!("tenth: {:?}", numbers.get(9));
        println!("tenth or default: {}", numbers.get(9).unwrap_or(&0));

        // The ? operator forwards errors to the caller.
        fn parse_and_double(input: &str) -> std::result::Result<i32, std::num::ParseIntError> {
            let n: i32 = input.trim().parse()?;
            Ok(n * 2)
        }
        println!("parse_and_double(\"21\") = {:?}", parse_and_double("21"));
        println!("parse_and_double(\"abc\") = {:?}", parse_and_double("abc").is_err());

        // Combinators chain fallible steps without match pyramids.
        let doubled_even = "8"
            .parse::<i32>()
            .ok()
            .filter(|n| n % 2 == 0)
            .map(|n| n * 2);
        println!("doubled even: {doubled_even:?}");

        for age in [30, -5, 200] {
            match validate_age(age) {
                Ok(valid) => println!("age {valid} accepted"),
                Err(e) => println!("rejected: {e}"),
            }
        }

        println!();
        println!("In this crate the same pattern is one derive away:");
        println!("    #[derive(thiserror::Error, Debug)]");
        println!("    enum MathError {{ #[error(\"cannot divide by zero\")] DivisionByZero }}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(safe_divide(10.0, 0.0), Err(MathError::DivisionByZero));
        assert_eq!(safe_divide(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn age_validation() {
        assert_eq!(validate_age(30), Ok(30));
        assert_eq!(validate_age(-5), Err(AgeError::Negative(-5)));
        assert_eq!(validate_age(200), Err(AgeError::Unrealistic(200)));
    }

    #[test]
    fn age_errors_display_the_value() {
        assert_eq!(AgeError::Negative(-5).to_string(), "age -5 is negative");
    }
}
