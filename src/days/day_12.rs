//! Day 12: Iterator adapters.
//!
//! Everything a Python list comprehension does, spelled as a chain of
//! map, filter and collect.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Adapters;

pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

pub fn primes_below(limit: u32) -> Vec<u32> {
    (2..limit).filter(|&n| is_prime(n)).collect()
}

#[async_trait]
impl Lesson for Adapters {
    fn day(&self) -> u8 {
        12
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // map transforms, collect materializes.
        let squares: Vec<i32> = (0..5).map(|x| x * x).collect();
        println!("squares: {squares:?}");

        // filter keeps what the predicate accepts.
        let evens: Vec<i32> = (0..20).filter(|x| x % 2 == 0).collect();
        println!("evens: {evens:?}");

        // Both at once.
        let even_squares: Vec<i32> = (0..10).filter(|x| x % 2 == 0).map(|x| x * x).collect();
        println!("even squares: {even_squares:?}");

        // Strings go through the same machinery.
        let words = ["hello", "rust", "world"];
        let shouted: Vec<String> = words.iter().map(|w| w.to_uppercase()).collect();
        println!("shouted: {shouted:?}");
        let long_words: Vec<&&str> = words.iter().filter(|w| w.len() > 4).collect();
        println!("long words: {long_words:?}");

        // flat_map flattens a matrix.
        let matrix = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        let flat: Vec<i32> = matrix.iter().flat_map(|row| row.iter().copied()).collect();
        println!("flattened: {flat:?}");

        // zip pairs two sequences.
        let names = ["Alice", "Bob", "Carol"];
        let scores = [92, 85, 78];
        let paired: Vec<(&str, i32)> = names.iter().copied().zip(scores).collect();
        println!("paired: {paired:?}");

        // Folding down to a single value.
        let sum: i32 = (1..=10).sum();
        let product: i32 = (1..=5).product();
        println!("sum 1..=10 = {sum}, product 1..=5 = {product}");

        // Predicates as building blocks.
        println!("primes below 30: {:?}", primes_below(30));
        Ok(())
    }
}
