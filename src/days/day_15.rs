//! Day 15: Defining and calling functions.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Functions;

pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

pub fn rectangle_area(length: f64, width: f64) -> f64 {
    length * width
}

/// nth Fibonacci number, iteratively. fib(0) = 0, fib(1) = 1.
pub fn fibonacci(n: u32) -> u64 {
    let (mut a, mut b) = (0_u64, 1_u64);
    for _ in 0..n {
        (a, b) = (b, a + b);
    }
    a
}

#[async_trait]
impl Lesson for Functions {
    fn day(&self) -> u8 {
        15
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // A function with no parameters and no return value.
        fn say_hello() {
            println!("Hello!");
        }
        say_hello();

        // Parameters are typed; the last expression is the return value.
        println!("{}", greet("Alice"));
        println!("area of 4.0 x 2.5: {}", rectangle_area(4.0, 2.5));

        // Statements end with a semicolon; expressions do not.
        fn double(x: i32) -> i32 {
            x * 2 // no semicolon: this is the return value
        }
        println!("double(21) = {}", double(21));

        // Early returns use the return keyword.
        fn sign(n: i32) -> &'static str {
            if n == 0 {
                return "zero";
            }
            if n > 0 {
                "positive"
            } else {
                "negative"
            }
        }
        println!("sign(-5) = {}", sign(-5));

        // Functions are values too.
        let op: fn(i32) -> i32 = double;
        println!("via function pointer: {}", op(10));

        println!("first 10 fibonacci numbers:");
        for n in 0..10 {
            print!("{} ", fibonacci(n));
        }
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fibonacci_sequence() {
        let seq: Vec<u64> = (0..10).map(fibonacci).collect();
        assert_eq!(seq, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn area_multiplies() {
        assert_eq!(rectangle_area(4.0, 2.5), 10.0);
    }

    #[test]
    fn greeting_includes_the_name() {
        assert_eq!(greet("Bob"), "Hello, Bob!");
    }
}
