//! Day 31 (bonus): Iterators in depth.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Iterators;

/// Counts down to 1 and then stops.
pub struct Countdown(pub u32);

impl Iterator for Countdown {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.0 == 0 {
            return None;
        }
        let current = self.0;
        self.0 -= 1;
        Some(current)
    }
}

/// An endless Fibonacci stream; pair it with `take`.
pub struct Fibonacci {
    current: u64,
    next: u64,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self { current: 0, next: 1 }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let result = self.current;
        (self.current, self.next) = (self.next, self.current + self.next);
        Some(result)
    }
}

#[async_trait]
impl Lesson for Iterators {
    fn day(&self) -> u8 {
        31
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // Implementing Iterator by hand is one method.
        let launch: Vec<u32> = Countdown(5).collect();
        println!("countdown: {launch:?} liftoff!");

        // Infinite sequences are fine because iterators are lazy.
        let first_ten: Vec<u64> = Fibonacci::new().take(10).collect();
        println!("first 10 fibonacci: {first_ten:?}");
        let first_over_1000 = Fibonacci::new().find(|&n| n > 1000);
        println!("first fibonacci over 1000: {first_over_1000:?}");

        // Nothing runs until something consumes the chain.
        let lazy = (1..).map(|n| n * n).filter(|n| n % 2 == 1);
        println!("built a lazy chain; no squares computed yet");
        let five_odd_squares: Vec<i64> = lazy.take(5).collect();
        println!("now they are: {five_odd_squares:?}");

        // std::iter has building blocks of its own.
        let repeated: Vec<&str> = std::iter::repeat("ha").take(3).collect();
        println!("repeat: {repeated:?}");
        let powers: Vec<u64> = std::iter::successors(Some(1_u64), |&n| n.checked_mul(2))
            .take(8)
            .collect();
        println!("powers of two: {powers:?}");

        // Batching with chunks.
        let data: Vec<u32> = (1..=7).collect();
        for batch in data.chunks(3) {
            println!("processing batch {batch:?}");
        }
        Ok(())
    }
}
