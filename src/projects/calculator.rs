//! Day 28 project: a command-line calculator.
//!
//! The original exercise grows in three steps that all live here: the
//! seven binary operations, square root with domain checking, and a
//! history of past calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{Result, RoadmapError};

/// A binary operation the calculator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    Modulus,
    Power,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::FloorDivide,
        Operation::Modulus,
        Operation::Power,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::FloorDivide => "//",
            Operation::Modulus => "%",
            Operation::Power => "**",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
            Operation::FloorDivide => "Floor Division",
            Operation::Modulus => "Modulus",
            Operation::Power => "Exponentiation",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = RoadmapError;

    /// Parses an operator token. `x` is accepted for multiplication and
    /// `^` for exponentiation so expressions survive shell globbing.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Operation::Add),
            "-" => Ok(Operation::Subtract),
            "*" | "x" => Ok(Operation::Multiply),
            "/" => Ok(Operation::Divide),
            "//" => Ok(Operation::FloorDivide),
            "%" => Ok(Operation::Modulus),
            "**" | "^" => Ok(Operation::Power),
            other => Err(RoadmapError::UnknownOperation(other.to_string())),
        }
    }
}

/// Two operands and the operations between them.
///
/// Division, floor division and modulus return an error for a zero
/// divisor instead of panicking or producing infinities.
#[derive(Debug, Clone, Copy)]
pub struct Calculator {
    a: f64,
    b: f64,
}

impl Calculator {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn add(&self) -> f64 {
        self.a + self.b
    }

    pub fn subtract(&self) -> f64 {
        self.a - self.b
    }

    pub fn multiply(&self) -> f64 {
        self.a * self.b
    }

    pub fn divide(&self) -> Result<f64> {
        self.checked(|a, b| a / b)
    }

    /// Largest whole number of times `b` fits into `a`.
    pub fn floor_divide(&self) -> Result<f64> {
        self.checked(|a, b| (a / b).floor())
    }

    /// Remainder with the sign of the dividend, as `%` behaves on f64.
    pub fn modulus(&self) -> Result<f64> {
        self.checked(|a, b| a % b)
    }

    pub fn power(&self) -> f64 {
        self.a.powf(self.b)
    }

    fn checked(&self, op: impl Fn(f64, f64) -> f64) -> Result<f64> {
        if self.b == 0.0 {
            return Err(RoadmapError::DivisionByZero);
        }
        Ok(op(self.a, self.b))
    }

    pub fn apply(&self, op: Operation) -> Result<f64> {
        match op {
            Operation::Add => Ok(self.add()),
            Operation::Subtract => Ok(self.subtract()),
            Operation::Multiply => Ok(self.multiply()),
            Operation::Divide => self.divide(),
            Operation::FloorDivide => self.floor_divide(),
            Operation::Modulus => self.modulus(),
            Operation::Power => Ok(self.power()),
        }
    }

    /// Every operation applied to the pair, labeled for display.
    pub fn all_operations(&self) -> Vec<(&'static str, Result<f64>)> {
        Operation::ALL
            .iter()
            .map(|op| (op.label(), self.apply(*op)))
            .collect()
    }
}

/// Square root with a domain check for negative input.
pub fn sqrt(value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(RoadmapError::NegativeSqrt(value));
    }
    Ok(value.sqrt())
}

/// Evaluates a single `a op b` expression.
pub fn evaluate(a: f64, op: Operation, b: f64) -> Result<f64> {
    Calculator::new(a, b).apply(op)
}

/// One successful calculation, as kept in the history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Calculation {
    pub a: f64,
    pub op: Operation,
    pub b: f64,
    pub result: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.a, self.op, self.b, self.result)
    }
}

/// In-memory record of past calculations. Failed evaluations are not
/// recorded.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Calculation>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, a: f64, op: Operation, b: f64) -> Result<f64> {
        let result = evaluate(a, op, b)?;
        self.entries.push(Calculation { a, op, b, result });
        Ok(result)
    }

    pub fn entries(&self) -> &[Calculation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders the demo table for a pair of numbers, one labeled line per
/// operation, errors printed inline.
pub fn demo_table(a: f64, b: f64) -> String {
    let calc = Calculator::new(a, b);
    let mut out = String::new();
    out.push_str(&format!("Results for {} and {}:\n", a, b));
    out.push_str(&format!("{}\n", "-".repeat(30)));
    for (label, outcome) in calc.all_operations() {
        let rendered = match outcome {
            Ok(value) => value.to_string(),
            Err(e) => format!("Error: {}", e),
        };
        out.push_str(&format!("{:<15}: {}\n", label, rendered));
    }
    out
}
