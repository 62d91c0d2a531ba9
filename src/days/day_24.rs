//! Day 24: Associated functions, methods, and defaults.

use async_trait::async_trait;
use std::fmt;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct MethodsAndDefaults;

#[derive(Debug, PartialEq)]
pub struct InsufficientFunds {
    pub balance: f64,
    pub requested: f64,
}

impl fmt::Display for InsufficientFunds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot withdraw {:.2}: balance is {:.2}",
            self.requested, self.balance
        )
    }
}

impl std::error::Error for InsufficientFunds {}

#[derive(Debug, Default)]
pub struct BankAccount {
    owner: String,
    balance: f64,
}

impl BankAccount {
    // An associated function: called on the type, not a value.
    pub fn open(owner: &str, initial: f64) -> Self {
        Self {
            owner: owner.to_string(),
            balance: initial,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }

    pub fn withdraw(&mut self, amount: f64) -> std::result::Result<f64, InsufficientFunds> {
        if amount > self.balance {
            return Err(InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

#[derive(Debug, Default)]
pub struct Student {
    pub name: String,
    pub grades: Vec<f64>,
}

impl Student {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_grade(mut self, grade: f64) -> Self {
        self.grades.push(grade);
        self
    }

    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        Some(self.grades.iter().sum::<f64>() / self.grades.len() as f64)
    }
}

#[async_trait]
impl Lesson for MethodsAndDefaults {
    fn day(&self) -> u8 {
        24
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // Type::function() constructs; value.method() operates.
        let mut account = BankAccount::open("Alice", 100.0);
        account.deposit(50.0);
        println!("{} has {:.2}", account.owner(), account.balance());

        match account.withdraw(30.0) {
            Ok(remaining) => println!("withdrew 30.00, {remaining:.2} left"),
            Err(e) => println!("{e}"),
        }
        match account.withdraw(1000.0) {
            Ok(remaining) => println!("withdrew, {remaining:.2} left"),
            Err(e) => println!("{e}"),
        }

        // Default gives a zero-value constructor for free.
        let empty = BankAccount::default();
        println!("default account balance: {:.2}", empty.balance());

        // Methods that take self by value can chain.
        let student = Student::named("Bob")
            .with_grade(88.0)
            .with_grade(94.0)
            .with_grade(75.0);
        println!(
            "{} averages {:?}",
            student.name,
            student.average().map(|avg| format!("{avg:.1}"))
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposits_and_withdrawals_move_the_balance() {
        let mut account = BankAccount::open("Test", 100.0);
        account.deposit(50.0);
        assert_eq!(account.withdraw(30.0).unwrap(), 120.0);
        assert_eq!(account.balance(), 120.0);
    }

    #[test]
    fn overdrawing_is_rejected() {
        let mut account = BankAccount::open("Test", 10.0);
        let err = account.withdraw(25.0).unwrap_err();
        assert_eq!(err.requested, 25.0);
        assert_eq!(account.balance(), 10.0);
        assert!(err.to_string().contains("balance is 10.00"));
    }

    #[test]
    fn student_average() {
        let student = Student::named("S").with_grade(80.0).with_grade(90.0);
        assert_eq!(student.average(), Some(85.0));
        assert_eq!(Student::named("T").average(), None);
    }
}
