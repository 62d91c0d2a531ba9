//! Day 8: Comparison, logical, and bitwise operators.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Operators;

// Unix-style permission bits, the classic bitwise example.
pub const READ: u8 = 0b100;
pub const WRITE: u8 = 0b010;
pub const EXECUTE: u8 = 0b001;

pub fn has_permission(permissions: u8, flag: u8) -> bool {
    permissions & flag != 0
}

#[async_trait]
impl Lesson for Operators {
    fn day(&self) -> u8 {
        8
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        let a = 5;
        let b = 10;
        println!("a = {a}, b = {b}");
        println!("a < b: {}", a < b);
        println!("a > b: {}", a > b);
        println!("a == b: {}", a == b);
        println!("a != b: {}", a != b);

        // && and || short-circuit; ! negates.
        println!("a < b && b > 0: {}", a < b && b > 0);
        println!("a > b || b < 0: {}", a > b || b < 0);
        println!("!(a == b): {}", !(a == b));

        let nums: Vec<i32> = vec![1, 2, 3];
        if nums.is_empty() {
            println!("vec is empty");
        } else {
            println!("vec has {} items", nums.len());
        }

        // Range checks read like math.
        let score = 85;
        println!("score in 80..=89: {}", (80..=89).contains(&score));

        // Bitwise operators on integers.
        let x: u8 = 12; // 1100
        let y: u8 = 8; //  1000
        println!("x = {x} ({x:04b}), y = {y} ({y:04b})");
        println!("x & y = {:2} ({:04b})", x & y, x & y);
        println!("x | y = {:2} ({:04b})", x | y, x | y);
        println!("x ^ y = {:2} ({:04b})", x ^ y, x ^ y);
        println!("x << 2 = {} ({:06b})", x << 2, x << 2);
        println!("x >> 2 = {} ({:04b})", x >> 2, x >> 2);

        // Flags in one byte.
        let permissions = READ | WRITE;
        println!("permissions = {permissions:03b}");
        println!("can read: {}", has_permission(permissions, READ));
        println!("can write: {}", has_permission(permissions, WRITE));
        println!("can execute: {}", has_permission(permissions, EXECUTE));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_flags_combine() {
        let perms = READ | WRITE;
        assert!(has_permission(perms, READ));
        assert!(has_permission(perms, WRITE));
        assert!(!has_permission(perms, EXECUTE));
        assert!(has_permission(READ | WRITE | EXECUTE, EXECUTE));
    }
}
