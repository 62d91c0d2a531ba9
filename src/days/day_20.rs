//! Day 20: Modules and the use statement.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct ModulesAndUse;

#[async_trait]
impl Lesson for ModulesAndUse {
    fn day(&self) -> u8 {
        20
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // std is always available; full paths work without any use.
        println!("sqrt(16) = {}", 16_f64.sqrt());
        println!("pi = {}", std::f64::consts::PI);

        // use brings items into scope.
        use std::f64::consts::E;
        println!("e = {E}");

        // Grouped and aliased imports.
        use std::collections::{HashMap as Map, VecDeque};
        let mut queue: VecDeque<i32> = VecDeque::new();
        queue.push_back(1);
        queue.push_front(0);
        println!("deque: {queue:?}");
        let map: Map<&str, i32> = Map::from([("answer", 42)]);
        println!("aliased HashMap: {map:?}");

        // The environment, like Python's sys/os modules.
        println!("program args: {:?}", std::env::args().take(1).collect::<Vec<_>>());
        match std::env::var("HOME") {
            Ok(home) => println!("HOME = {home}"),
            Err(_) => println!("HOME is not set"),
        }
        println!("current dir: {:?}", std::env::current_dir()?);

        // Time without any external crate.
        use std::time::{Duration, Instant};
        let started = Instant::now();
        std::thread::sleep(Duration::from_millis(5));
        println!("slept for {:?}", started.elapsed());

        println!();
        println!("Module paths in this crate:");
        println!("    crate::days::day_20     (this module)");
        println!("    crate::projects::todo   (the day 29 project)");
        println!("    self::, super::         (relative paths)");
        Ok(())
    }
}
