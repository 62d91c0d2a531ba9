//! The compiled-in curriculum: 30 core days plus 3 bonus days.
//!
//! Titles, overviews and exercise snippets are fixed data; changing the
//! course means editing this table and the matching lesson module.

use crate::domain::model::{Day, Phase, Selection};
use crate::utils::error::{Result, RoadmapError};

pub const FIRST_DAY: u8 = 1;
pub const LAST_CORE_DAY: u8 = 30;
pub const LAST_DAY: u8 = 33;

/// Ordered collection of every day of the course.
#[derive(Debug, Clone)]
pub struct Catalog {
    days: Vec<Day>,
}

impl Catalog {
    /// The standard 33-day curriculum.
    pub fn standard() -> Self {
        let days = standard_days();
        debug_assert!(days.windows(2).all(|w| w[0].number < w[1].number));
        Self { days }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Day> {
        self.days.iter()
    }

    pub fn get(&self, number: u8) -> Option<&Day> {
        self.days.iter().find(|day| day.number == number)
    }

    /// Days 1..=30, the entries of the generated README table.
    pub fn core_days(&self) -> impl Iterator<Item = &Day> {
        self.days.iter().filter(|day| day.number <= LAST_CORE_DAY)
    }

    /// Days 31..=33.
    pub fn bonus_days(&self) -> impl Iterator<Item = &Day> {
        self.days.iter().filter(|day| day.number > LAST_CORE_DAY)
    }

    pub fn phase_days(&self, phase: Phase) -> impl Iterator<Item = &Day> + '_ {
        self.days.iter().filter(move |day| day.phase == phase)
    }

    /// Expands a run selection into concrete catalog entries, in day order.
    pub fn select(&self, selection: &Selection) -> Result<Vec<&Day>> {
        match selection {
            Selection::Day(number) => {
                let day = self.get(*number).ok_or(RoadmapError::UnknownDay(*number))?;
                Ok(vec![day])
            }
            Selection::Phase(phase) => Ok(self.phase_days(*phase).collect()),
            Selection::All => Ok(self.days.iter().collect()),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn day(
    number: u8,
    title: &'static str,
    overview: &'static str,
    exercise: &'static str,
    module: &'static str,
) -> Day {
    Day {
        number,
        title,
        overview,
        exercise,
        phase: Phase::of_day(number),
        module,
    }
}

#[rustfmt::skip]
fn standard_days() -> Vec<Day> {
    vec![
        day(1, "Introduction to Rust and Setting Up the Toolchain",
            "What Rust is good at, installing rustup, and checking that rustc and cargo answer.",
            "// No code today. Install Rust via rustup, then verify:\n//   rustc --version\n//   cargo --version",
            "src/days/day_01.rs"),
        day(2, "Printing, Comments, and Basic Syntax",
            "println! and print!, escape sequences, raw strings, and how comments work.",
            "fn main() {\n    println!(\"Hello, World!\"); // basic print statement\n}",
            "src/days/day_02.rs"),
        day(3, "Variables, Mutability, and Data Types",
            "let bindings, mut, shadowing, the numeric types, bool and char, and conversions.",
            "let name = \"Alice\";\nlet age = 25;\nprintln!(\"{name} {age}\");",
            "src/days/day_03.rs"),
        day(4, "Basic Input and Output",
            "Reading a line from stdin, trimming it, and parsing numbers without panicking.",
            "let mut name = String::new();\nstd::io::stdin().read_line(&mut name)?;\nprintln!(\"Hello, {}\", name.trim());",
            "src/days/day_04.rs"),
        day(5, "Strings and Text Processing",
            "String vs &str, the everyday string methods, slicing, and formatting.",
            "let text = \"Rust\";\nprintln!(\"{}\", text.to_uppercase());\nprintln!(\"{}\", text.len());",
            "src/days/day_05.rs"),
        day(6, "Arithmetic and Assignment Operators",
            "The arithmetic operators, integer vs float division, and overflow-safe math.",
            "let a = 10;\nlet b = 3;\nprintln!(\"{} {} {} {}\", a + b, a - b, a * b, a / b);",
            "src/days/day_06.rs"),
        day(7, "Conditional Statements (if, else if, match)",
            "Branching with if/else chains and why match is the Rust way to spell them.",
            "let age = 18;\nif age >= 18 {\n    println!(\"Adult\");\n} else {\n    println!(\"Minor\");\n}",
            "src/days/day_07.rs"),
        day(8, "Comparison, Logical, and Bitwise Operators",
            "Comparisons, && and ||, range checks, and a first look at bit twiddling.",
            "let a = 5;\nlet b = 10;\nprintln!(\"{}\", a < b && b > 0);",
            "src/days/day_08.rs"),
        day(9, "Working with Vectors",
            "Creating, indexing and mutating Vec, plus the shopping list exercise.",
            "let fruits = vec![\"apple\", \"banana\", \"cherry\"];\nprintln!(\"{}\", fruits[0]);",
            "src/days/day_09.rs"),
        day(10, "Looping with for Loops",
            "for over ranges and collections, enumerate, nested loops, and FizzBuzz.",
            "for i in 0..5 {\n    println!(\"Number: {i}\");\n}",
            "src/days/day_10.rs"),
        day(11, "Looping with while and loop",
            "while conditions, the bare loop, break/continue, and a guessing game.",
            "let mut count = 0;\nwhile count < 5 {\n    println!(\"{count}\");\n    count += 1;\n}",
            "src/days/day_11.rs"),
        day(12, "Iterator Adapters (map, filter, collect)",
            "The list-comprehension jobs done with iterator chains.",
            "let squares: Vec<i32> = (0..5).map(|x| x * x).collect();\nprintln!(\"{squares:?}\");",
            "src/days/day_12.rs"),
        day(13, "Tuples and Sets",
            "Tuples and destructuring, HashSet and BTreeSet, and the set algebra ops.",
            "let my_tuple = (1, 2, 3);\nlet my_set: std::collections::HashSet<_> = [1, 2, 2, 3].into_iter().collect();\nprintln!(\"{my_tuple:?} {my_set:?}\");",
            "src/days/day_13.rs"),
        day(14, "HashMaps (Key-Value Pairs)",
            "Insert, get, remove, the entry API for counting, and ordered BTreeMap.",
            "let mut person = std::collections::HashMap::new();\nperson.insert(\"name\", \"Alice\");\nprintln!(\"{}\", person[\"name\"]);",
            "src/days/day_14.rs"),
        day(15, "Functions (Defining and Calling)",
            "fn items, parameters, unit returns, and expression bodies.",
            "fn greet() {\n    println!(\"Hello!\");\n}\ngreet();",
            "src/days/day_15.rs"),
        day(16, "Function Arguments and Return Values",
            "Typed parameters, tuple returns, slice arguments, and Option defaults.",
            "fn add(x: i32, y: i32) -> i32 {\n    x + y\n}\nprintln!(\"{}\", add(3, 4));",
            "src/days/day_16.rs"),
        day(17, "Scope, Shadowing, and Constants",
            "Block scope, shadowing, const and static, and why there is no global mutation.",
            "let x = 5;\n{\n    let x = 10;\n    println!(\"{x}\"); // 10\n}\nprintln!(\"{x}\"); // 5",
            "src/days/day_17.rs"),
        day(18, "Error Handling with Result and Option",
            "Recoverable errors as values, the ? operator, and writing a custom error type.",
            "fn divide(a: f64, b: f64) -> Result<f64, String> {\n    if b == 0.0 {\n        return Err(\"cannot divide by zero\".into());\n    }\n    Ok(a / b)\n}\nprintln!(\"{:?}\", divide(10.0, 0.0));",
            "src/days/day_18.rs"),
        day(19, "Working with Files (Read/Write)",
            "Writing and reading text files, appending, line iteration, CSV and JSON files.",
            "std::fs::write(\"sample.txt\", \"Hello File\")?;\nlet text = std::fs::read_to_string(\"sample.txt\")?;\nprintln!(\"{text}\");",
            "src/days/day_19.rs"),
        day(20, "Modules and the use Statement",
            "Organizing code with mod, paths, and bringing std items into scope.",
            "use std::f64::consts::PI;\nprintln!(\"{}\", 16f64.sqrt());\nprintln!(\"{PI}\");",
            "src/days/day_20.rs"),
        day(21, "Common std Methods (len, ranges, min/max, sort)",
            "The built-ins tour: len, ranges, sum, min/max, sorting and zipping.",
            "println!(\"{}\", \"Rust\".len());\nprintln!(\"{}\", (1..=5).sum::<i32>());",
            "src/days/day_21.rs"),
        day(22, "Creating and Using Your Own Modules",
            "Declaring a module, pub items, and calling into it from elsewhere.",
            "mod greetings {\n    pub fn hello(name: &str) -> String {\n        format!(\"Hi {name}\")\n    }\n}\nprintln!(\"{}\", greetings::hello(\"Alice\"));",
            "src/days/day_22.rs"),
        day(23, "Structs and impl Blocks",
            "Defining structs, constructors, and methods with &self.",
            "struct Person {\n    name: String,\n}\n\nimpl Person {\n    fn greet(&self) {\n        println!(\"Hi {}\", self.name);\n    }\n}",
            "src/days/day_23.rs"),
        day(24, "Associated Functions, Methods, and Defaults",
            "Associated constants and constructors, Default, and chaining methods.",
            "let p = Person::new(\"Alice\");\np.greet();",
            "src/days/day_24.rs"),
        day(25, "Traits and Polymorphism",
            "Shared behavior with traits, default methods, and dyn trait objects.",
            "trait Animal {\n    fn speak(&self) -> String;\n}\n\nstruct Dog;\n\nimpl Animal for Dog {\n    fn speak(&self) -> String {\n        \"Bark\".to_string()\n    }\n}",
            "src/days/day_25.rs"),
        day(26, "Working with External Crates (rand, chrono, regex)",
            "Pulling crates from crates.io: random numbers, dates and times, regexes.",
            "use rand::Rng;\nlet n = rand::thread_rng().gen_range(1..=10);\nprintln!(\"{n}\");",
            "src/days/day_26.rs"),
        day(27, "Introduction to JSON and APIs",
            "Building and parsing JSON with serde_json, then fetching a user over HTTP.",
            "let data = serde_json::json!({ \"name\": \"Alice\" });\nprintln!(\"{data}\");",
            "src/days/day_27.rs"),
        day(28, "Basic Project: Command-line Calculator",
            "A calculator type with typed errors instead of error strings.",
            "let calc = Calculator::new(10.0, 3.0);\nprintln!(\"Sum: {}\", calc.add());\nprintln!(\"{:?}\", calc.divide());",
            "src/days/day_28.rs"),
        day(29, "Basic Project: To-Do List Manager",
            "A task list with priorities, timestamps, and JSON persistence.",
            "let mut tasks = TaskList::new();\ntasks.add(\"Learn Rust\", Priority::High)?;\nprintln!(\"{}\", tasks.render(true));",
            "src/days/day_29.rs"),
        day(30, "Wrap-up and Next Steps",
            "A recap of the course and where to go next in the Rust ecosystem.",
            "println!(\"You did it! Start building small apps or explore axum and Bevy.\");",
            "src/days/day_30.rs"),
        day(31, "Iterators In Depth (custom iterators, laziness)",
            "Implementing Iterator by hand, infinite sequences, and why laziness matters.",
            "struct Countdown(u32);\n\nimpl Iterator for Countdown {\n    type Item = u32;\n    fn next(&mut self) -> Option<u32> {\n        if self.0 == 0 {\n            return None;\n        }\n        self.0 -= 1;\n        Some(self.0 + 1)\n    }\n}",
            "src/days/day_31.rs"),
        day(32, "Closures and Function Composition",
            "Closures that capture, closures returned from functions, and composition.",
            "let make_multiplier = |factor: i64| move |x: i64| x * factor;\nlet double = make_multiplier(2);\nprintln!(\"{}\", double(21));",
            "src/days/day_32.rs"),
        day(33, "Drop, Threads, and Async Tasks",
            "RAII cleanup with Drop, spawning threads and channels, and tokio tasks.",
            "let handle = std::thread::spawn(|| \"worker done\");\nprintln!(\"{}\", handle.join().unwrap());",
            "src/days/day_33.rs"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_33_days() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 33);
        assert_eq!(catalog.core_days().count(), 30);
        assert_eq!(catalog.bonus_days().count(), 3);
    }

    #[test]
    fn day_numbers_are_dense_and_sorted() {
        let catalog = Catalog::standard();
        let numbers: Vec<u8> = catalog.iter().map(|day| day.number).collect();
        let expected: Vec<u8> = (FIRST_DAY..=LAST_DAY).collect();
        assert_eq!(numbers, expected);
    }

    #[test]
    fn select_expands_phases() {
        let catalog = Catalog::standard();
        let days = catalog
            .select(&Selection::Phase(Phase::Foundations))
            .unwrap();
        assert_eq!(days.len(), 12);
        assert!(days.iter().all(|day| day.phase == Phase::Foundations));
    }

    #[test]
    fn select_rejects_unknown_days() {
        let catalog = Catalog::standard();
        assert!(matches!(
            catalog.select(&Selection::Day(99)),
            Err(RoadmapError::UnknownDay(99))
        ));
    }
}
