//! Day 33 (bonus): Drop, threads, and async tasks.

use async_trait::async_trait;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct ThreadsAndTasks;

/// Splits the numbers across worker threads and sums the partial
/// results sent back over a channel.
pub fn parallel_sum(numbers: &[i64], workers: usize) -> i64 {
    let workers = workers.max(1);
    let chunk_size = numbers.len().div_ceil(workers).max(1);
    let (tx, rx) = mpsc::channel();

    let mut spawned = 0;
    for chunk in numbers.chunks(chunk_size) {
        let tx = tx.clone();
        let chunk = chunk.to_vec();
        thread::spawn(move || {
            let partial: i64 = chunk.iter().sum();
            // The receiver outlives every sender here.
            let _ = tx.send(partial);
        });
        spawned += 1;
    }
    drop(tx);

    (0..spawned).map(|_| rx.recv().unwrap_or(0)).sum()
}

struct Guard {
    label: &'static str,
}

impl Drop for Guard {
    fn drop(&mut self) {
        println!("  dropping {}", self.label);
    }
}

#[async_trait]
impl Lesson for ThreadsAndTasks {
    fn day(&self) -> u8 {
        33
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // Drop runs when a value leaves scope, in reverse order.
        println!("RAII instead of context managers:");
        {
            let _outer = Guard { label: "outer" };
            let _inner = Guard { label: "inner" };
            println!("  inside the block");
        }
        println!("  after the block");

        // Threads with join handles.
        let handle = thread::spawn(|| "worker done");
        println!("{}", handle.join().unwrap_or("worker panicked"));

        // Channels move data between threads.
        let numbers: Vec<i64> = (1..=1000).collect();
        println!("parallel sum 1..=1000 = {}", parallel_sum(&numbers, 4));

        // Shared mutable state wants Arc + Mutex.
        let counter = Arc::new(Mutex::new(0_u32));
        let mut handles = Vec::new();
        for _ in 0..4 {
            let counter = Arc::clone(&counter);
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    if let Ok(mut guard) = counter.lock() {
                        *guard += 1;
                    }
                }
            }));
        }
        for handle in handles {
            let _ = handle.join();
        }
        println!(
            "four threads incremented to {}",
            counter.lock().map(|guard| *guard).unwrap_or(0)
        );

        // Async tasks: cooperative, cheap, awaited not joined.
        let task = tokio::spawn(async {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            "async task done"
        });
        match task.await {
            Ok(message) => println!("{message}"),
            Err(e) => println!("task failed: {e}"),
        }

        println!();
        println!("Threads suit CPU-bound work; async suits waiting on I/O.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_sum_matches_sequential() {
        let numbers: Vec<i64> = (1..=1000).collect();
        assert_eq!(parallel_sum(&numbers, 4), 500_500);
        assert_eq!(parallel_sum(&numbers, 1), 500_500);
        assert_eq!(parallel_sum(&[], 4), 0);
    }

    #[test]
    fn worker_count_can_exceed_input_length() {
        assert_eq!(parallel_sum(&[1, 2, 3], 16), 6);
    }
}
