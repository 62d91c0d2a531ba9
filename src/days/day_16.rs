//! Day 16: Function arguments and return values.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct ArgsAndReturns;

/// Minimum, maximum and mean of a slice. Empty input has no stats.
pub fn stats(numbers: &[f64]) -> Option<(f64, f64, f64)> {
    let first = *numbers.first()?;
    let mut min = first;
    let mut max = first;
    let mut sum = 0.0;
    for &n in numbers {
        min = min.min(n);
        max = max.max(n);
        sum += n;
    }
    Some((min, max, sum / numbers.len() as f64))
}

/// Optional arguments are spelled Option; None means the default.
pub fn greet_with(name: &str, greeting: Option<&str>) -> String {
    format!("{}, {name}!", greeting.unwrap_or("Hello"))
}

#[async_trait]
impl Lesson for ArgsAndReturns {
    fn day(&self) -> u8 {
        16
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        fn add(x: i32, y: i32) -> i32 {
            x + y
        }
        println!("add(3, 4) = {}", add(3, 4));

        // Slices accept any number of values, like *args.
        fn sum_all(numbers: &[i32]) -> i32 {
            numbers.iter().sum()
        }
        println!("sum_all(&[1, 2, 3, 4]) = {}", sum_all(&[1, 2, 3, 4]));
        println!("sum_all(&[]) = {}", sum_all(&[]));

        // Defaults via Option.
        println!("{}", greet_with("Alice", None));
        println!("{}", greet_with("Bob", Some("Welcome")));

        // Returning several values as a tuple.
        fn is_even_odd(n: i32) -> (i32, &'static str) {
            (n, if n % 2 == 0 { "even" } else { "odd" })
        }
        let (n, parity) = is_even_odd(7);
        println!("{n} is {parity}");

        let scores = [92.0, 85.5, 78.0, 99.0];
        if let Some((min, max, mean)) = stats(&scores) {
            println!("min {min}, max {max}, mean {mean:.2}");
        }
        println!("stats of nothing: {:?}", stats(&[]));

        // Borrowing vs taking ownership.
        fn describe(words: &[String]) -> usize {
            words.len()
        }
        let words = vec!["a".to_string(), "b".to_string()];
        println!("described {} words; still usable: {words:?}", describe(&words));
        Ok(())
    }
}
