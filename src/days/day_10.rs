//! Day 10: Looping with for loops, finishing on FizzBuzz.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct ForLoops;

/// The FizzBuzz rule for one number.
pub fn fizzbuzz(n: u32) -> String {
    match (n % 3, n % 5) {
        (0, 0) => "FizzBuzz".to_string(),
        (0, _) => "Fizz".to_string(),
        (_, 0) => "Buzz".to_string(),
        _ => n.to_string(),
    }
}

/// First `count` multiples of `base`.
pub fn multiples_of(base: u32, count: u32) -> Vec<u32> {
    (1..=count).map(|i| base * i).collect()
}

#[async_trait]
impl Lesson for ForLoops {
    fn day(&self) -> u8 {
        10
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // Ranges: exclusive, inclusive, stepped, reversed.
        for i in 0..5 {
            println!("Number: {i}");
        }
        println!("inclusive: {:?}", (1..=5).collect::<Vec<_>>());
        println!("stepped:   {:?}", (0..10).step_by(3).collect::<Vec<_>>());
        println!("reversed:  {:?}", (1..=5).rev().collect::<Vec<_>>());

        // Iterating collections and strings.
        let languages = ["Rust", "Python", "Go"];
        for language in &languages {
            println!("I know some {language}");
        }
        for c in "Rust".chars() {
            print!("{c} ");
        }
        println!();

        // enumerate gives the index for free.
        for (i, language) in languages.iter().enumerate() {
            println!("{}: {language}", i + 1);
        }

        // Nested loops: a star triangle.
        for row in 1..=4 {
            for _ in 0..row {
                print!("*");
            }
            println!();
        }

        // break and continue.
        for n in 0..10 {
            if n % 2 == 0 {
                continue;
            }
            if n > 7 {
                break;
            }
            print!("{n} ");
        }
        println!();

        println!("first 10 multiples of 3: {:?}", multiples_of(3, 10));

        println!("FizzBuzz from 1 to 15:");
        for n in 1..=15 {
            println!("{}", fizzbuzz(n));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fizzbuzz_rules() {
        assert_eq!(fizzbuzz(1), "1");
        assert_eq!(fizzbuzz(3), "Fizz");
        assert_eq!(fizzbuzz(5), "Buzz");
        assert_eq!(fizzbuzz(9), "Fizz");
        assert_eq!(fizzbuzz(10), "Buzz");
        assert_eq!(fizzbuzz(15), "FizzBuzz");
        assert_eq!(fizzbuzz(30), "FizzBuzz");
    }

    #[test]
    fn multiples_start_at_the_base() {
        assert_eq!(multiples_of(3, 5), vec![3, 6, 9, 12, 15]);
        assert!(multiples_of(7, 0).is_empty());
    }
}
