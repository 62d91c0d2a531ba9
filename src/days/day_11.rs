//! Day 11: Looping with while and loop.

use async_trait::async_trait;
use rand::Rng;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct WhileLoops;

/// n! with overflow detection. 21! no longer fits in a u64.
pub fn factorial(n: u64) -> Option<u64> {
    let mut result: u64 = 1;
    let mut i = 2;
    while i <= n {
        result = result.checked_mul(i)?;
        i += 1;
    }
    Some(result)
}

/// Repeatedly sums the digits until a single digit remains.
pub fn digital_root(mut n: u64) -> u64 {
    while n >= 10 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n
}

#[async_trait]
impl Lesson for WhileLoops {
    fn day(&self) -> u8 {
        11
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // while repeats as long as the condition holds.
        let mut count = 0;
        while count < 5 {
            println!("{count}");
            count += 1;
        }

        // loop runs forever until break; break can carry a value.
        let mut n = 1;
        let first_cube_over_100 = loop {
            let cube = n * n * n;
            if cube > 100 {
                break cube;
            }
            n += 1;
        };
        println!("first cube over 100: {first_cube_over_100}");

        // while let drains an Option-producing source.
        let mut stack = vec![1, 2, 3];
        while let Some(top) = stack.pop() {
            println!("popped {top}");
        }

        println!("10! = {:?}", factorial(10));
        println!("21! = {:?} (overflows u64)", factorial(21));
        println!("digital root of 9875 = {}", digital_root(9875));

        // A guessing game that plays itself with a halving search.
        let secret = rand::thread_rng().gen_range(1..=100);
        let (mut low, mut high) = (1, 100);
        let mut guesses = 0;
        loop {
            let guess = (low + high) / 2;
            guesses += 1;
            if guess == secret {
                println!("guessed {secret} in {guesses} tries");
                break;
            } else if guess < secret {
                low = guess + 1;
            } else {
                high = guess - 1;
            }
        }
        Ok(())
    }
}
