//! Day 7: Conditional statements.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Conditionals;

/// The course's grading scale.
pub fn letter_grade(score: u32) -> char {
    match score {
        90.. => 'A',
        80..=89 => 'B',
        70..=79 => 'C',
        60..=69 => 'D',
        _ => 'F',
    }
}

pub fn grade_comment(grade: char) -> &'static str {
    match grade {
        'A' => "Excellent!",
        'B' => "Good job!",
        'C' => "Satisfactory",
        'D' => "Needs improvement",
        _ => "Study harder!",
    }
}

#[async_trait]
impl Lesson for Conditionals {
    fn day(&self) -> u8 {
        7
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // if is an expression; both branches must agree on the type.
        let age = 18;
        println!("Age: {age}");
        if age >= 18 {
            println!("You are an adult");
        } else {
            println!("You are a minor");
        }
        let status = if age >= 18 { "adult" } else { "minor" };
        println!("status = {status}");

        // else-if chains work, but match on ranges reads better.
        let score = 85;
        let grade = letter_grade(score);
        println!("Score: {score} -> Grade: {grade} ({})", grade_comment(grade));

        // match must cover every case; the compiler checks.
        let day_of_week = 6;
        let kind = match day_of_week {
            1..=5 => "weekday",
            6 | 7 => "weekend",
            _ => "not a day",
        };
        println!("Day {day_of_week} is a {kind}");

        // Guard clauses keep the happy path unindented.
        for balance in [120_i64, -3] {
            if balance < 0 {
                println!("balance {balance}: account overdrawn, skipping");
                continue;
            }
            println!("balance {balance}: ok");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grades_match_the_scale() {
        assert_eq!(letter_grade(95), 'A');
        assert_eq!(letter_grade(90), 'A');
        assert_eq!(letter_grade(85), 'B');
        assert_eq!(letter_grade(70), 'C');
        assert_eq!(letter_grade(60), 'D');
        assert_eq!(letter_grade(59), 'F');
        assert_eq!(letter_grade(0), 'F');
    }

    #[test]
    fn every_grade_has_a_comment() {
        for grade in ['A', 'B', 'C', 'D', 'F'] {
            assert!(!grade_comment(grade).is_empty());
        }
    }
}
