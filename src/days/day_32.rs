//! Day 32 (bonus): Closures and function composition.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Closures;

/// g after f: compose(f, g)(x) is g(f(x)).
pub fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x| g(f(x))
}

/// A counter closed over its own state. Each call returns the next value.
pub fn make_counter(start: i64) -> impl FnMut() -> i64 {
    let mut count = start;
    move || {
        count += 1;
        count
    }
}

#[async_trait]
impl Lesson for Closures {
    fn day(&self) -> u8 {
        32
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // A closure captures its environment.
        let factor = 3;
        let triple = |x: i64| x * factor;
        println!("triple(14) = {}", triple(14));

        // Returning closures from functions.
        let make_multiplier = |factor: i64| move |x: i64| x * factor;
        let double = make_multiplier(2);
        println!("double(21) = {}", double(21));

        // FnMut closures mutate what they captured.
        let mut next = make_counter(0);
        println!("counter: {} {} {}", next(), next(), next());

        // Fn / FnMut / FnOnce is about how the capture is used.
        let owned = String::from("moved in");
        let consume = move || owned; // FnOnce: gives its capture away
        println!("consumed: {}", consume());

        // Composition builds pipelines out of small pieces.
        let add_one = |x: i64| x + 1;
        let square = |x: i64| x * x;
        let add_then_square = compose(add_one, square);
        let square_then_add = compose(square, add_one);
        println!("(6 + 1)^2 = {}", add_then_square(6));
        println!("6^2 + 1 = {}", square_then_add(6));

        // A cache captured by a closure: memoized squares.
        let mut cache: HashMap<u64, u64> = HashMap::new();
        let mut slow_square = |n: u64| {
            *cache.entry(n).or_insert_with(|| {
                println!("  computing {n}^2 ...");
                n * n
            })
        };
        println!("first call: {}", slow_square(12));
        println!("second call (cached): {}", slow_square(12));

        // Closures drive the iterator adapters from day 12.
        let lengths: Vec<usize> = ["closures", "capture", "state"]
            .iter()
            .map(|w| w.len())
            .collect();
        println!("lengths: {lengths:?}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_order() {
        let add_one = |x: i64| x + 1;
        let square = |x: i64| x * x;
        assert_eq!(compose(add_one, square)(6), 49);
        assert_eq!(compose(square, add_one)(6), 37);
    }

    #[test]
    fn counters_are_independent() {
        let mut a = make_counter(0);
        let mut b = make_counter(100);
        a();
        a();
        assert_eq!(a(), 3);
        assert_eq!(b(), 101);
    }
}
