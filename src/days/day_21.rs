//! Day 21: A tour of everyday std methods.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct StdTour;

/// Median of a slice. Sorts a copy; NaNs are not expected.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

#[async_trait]
impl Lesson for StdTour {
    fn day(&self) -> u8 {
        21
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // Lengths and ranges.
        println!("\"Rust\".len() = {}", "Rust".len());
        println!("(1..=5).sum() = {}", (1..=5).sum::<i32>());
        println!("(1..=5).count() = {}", (1..=5).count());

        // min, max, abs, rounding.
        let numbers = [3, -1, 4, -1, 5, -9, 2, 6];
        println!("numbers: {numbers:?}");
        println!("min: {:?}", numbers.iter().min());
        println!("max: {:?}", numbers.iter().max());
        println!("(-9i32).abs() = {}", (-9_i32).abs());
        println!("2.71828f64.round() = {}", 2.71828_f64.round());
        println!("2.71828f64.floor() = {}", 2.71828_f64.floor());

        // Sorting, with and without a key.
        let mut words = vec!["banana", "Apple", "cherry"];
        words.sort();
        println!("sorted (case-sensitive): {words:?}");
        words.sort_by_key(|w| w.to_lowercase());
        println!("sorted by lowercase key: {words:?}");

        // Conversions.
        println!("i64::from(42u8) = {}", i64::from(42_u8));
        println!("u8::try_from(300i32) = {:?}", u8::try_from(300_i32));
        println!("42.to_string() = {:?}", 42.to_string());
        println!("\"3.5\".parse::<f64>() = {:?}", "3.5".parse::<f64>());

        // Sequences.
        println!("max by length: {:?}", ["hi", "hello", "hey"].iter().max_by_key(|w| w.len()));
        let reversed: String = "stressed".chars().rev().collect();
        println!("'stressed' reversed is '{reversed}'");
        println!("any even: {}", [1, 3, 5, 6].iter().any(|n| n % 2 == 0));
        println!("all positive: {}", [1, 3, 5, 6].iter().all(|n| *n > 0));

        println!("median of [3, 1, 2]: {:?}", median(&[3.0, 1.0, 2.0]));
        println!("median of [4, 1, 2, 3]: {:?}", median(&[4.0, 1.0, 2.0, 3.0]));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_odd_and_even_counts() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), Some(2.5));
    }

    #[test]
    fn median_of_empty_is_none() {
        assert_eq!(median(&[]), None);
    }
}
