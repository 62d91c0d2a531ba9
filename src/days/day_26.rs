//! Day 26: Working with external crates.
//!
//! The Cargo.toml of this repo already pulls in rand, chrono and
//! regex; this lesson shows each one doing its everyday job.

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct ExternalCrates;

/// Loose email shape check: something@something.tld
pub fn is_valid_email(candidate: &str) -> bool {
    let re = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
    re.is_match(candidate)
}

pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

#[async_trait]
impl Lesson for ExternalCrates {
    fn day(&self) -> u8 {
        26
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // rand: random numbers and choices.
        let mut rng = rand::thread_rng();
        let n = rng.gen_range(1..=10);
        println!("random 1..=10: {n}");
        let coin = if rng.gen_bool(0.5) { "heads" } else { "tails" };
        println!("coin flip: {coin}");
        let mut deck = vec!["ace", "king", "queen", "jack"];
        deck.shuffle(&mut rng);
        println!("shuffled: {deck:?}");

        // chrono: dates and times.
        let now = Utc::now();
        println!("now (UTC): {}", now.format("%Y-%m-%d %H:%M:%S"));
        println!("year {} day-of-year {}", now.year(), now.ordinal());
        println!("in 30 days: {}", (now + Duration::days(30)).format("%Y-%m-%d"));

        if let Some(birthday) = NaiveDate::from_ymd_opt(2026, 12, 31) {
            println!(
                "days until end of 2026: {}",
                days_between(now.date_naive(), birthday)
            );
        }

        // regex: pattern matching.
        for email in ["alice@example.com", "not-an-email", "bob@mail.co"] {
            println!("{email}: valid = {}", is_valid_email(email));
        }
        let digits = Regex::new(r"\d+").unwrap();
        let found: Vec<&str> = digits
            .find_iter("order 66 shipped on day 12")
            .map(|m| m.as_str())
            .collect();
        println!("numbers found: {found:?}");

        println!();
        println!("Adding a crate is one line in Cargo.toml, e.g.:");
        println!("    rand = \"0.8\"");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a.b+c@mail.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@nouser.com"));
    }

    #[test]
    fn date_arithmetic() {
        let from = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(days_between(from, to), 30);
        assert_eq!(days_between(to, from), -30);
    }
}
