//! Day 6: Arithmetic and assignment operators.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Arithmetic;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[async_trait]
impl Lesson for Arithmetic {
    fn day(&self) -> u8 {
        6
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        let a = 10;
        let b = 3;
        println!("a = {a}, b = {b}");
        println!("a + b = {}", a + b);
        println!("a - b = {}", a - b);
        println!("a * b = {}", a * b);
        println!("a / b = {} (integer division truncates)", a / b);
        println!("a % b = {}", a % b);

        // Floats divide the way a calculator does.
        let x = 10.0;
        let y = 3.0;
        println!("10.0 / 3.0 = {:.4}", x / y);
        println!("10.0 % 3.0 = {}", x % y);

        // Compound assignment.
        let mut total = 100;
        total += 20;
        total -= 5;
        total *= 2;
        println!("after += -= *=: {total}");

        // Overflow is a checked condition, not silent wraparound.
        let nearly_max: u8 = 250;
        println!("250u8.checked_add(10) = {:?}", nearly_max.checked_add(10));
        println!("250u8.saturating_add(10) = {}", nearly_max.saturating_add(10));
        println!("250u8.wrapping_add(10) = {}", nearly_max.wrapping_add(10));

        // Powers come from methods, not an operator.
        println!("2i32.pow(10) = {}", 2_i32.pow(10));
        println!("2.0f64.powf(0.5) = {}", 2.0_f64.powf(0.5));

        println!("25°C = {}°F", celsius_to_fahrenheit(25.0));
        Ok(())
    }
}
