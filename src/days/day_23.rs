//! Day 23: Structs and impl blocks.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct StructBasics;

#[derive(Debug)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }

    pub fn greet(&self) -> String {
        format!("Hi, I'm {} and I'm {} years old.", self.name, self.age)
    }

    pub fn have_birthday(&mut self) {
        self.age += 1;
    }
}

#[derive(Debug)]
pub struct Car {
    pub make: String,
    pub model: String,
    pub year: u32,
}

impl Car {
    pub fn describe(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

#[async_trait]
impl Lesson for StructBasics {
    fn day(&self) -> u8 {
        23
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // Construct, call methods, mutate through &mut self.
        let mut alice = Person::new("Alice", 25);
        println!("{}", alice.greet());
        alice.have_birthday();
        println!("after a birthday: {}", alice.greet());

        // Field access and struct update syntax.
        let car = Car {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
        };
        println!("car: {}", car.describe());
        let newer = Car { year: 2024, ..car };
        println!("newer: {}", newer.describe());

        // Tuple structs give positions names as a whole.
        #[derive(Debug)]
        struct Point(f64, f64);
        let p = Point(3.0, 4.0);
        println!("point {:?}, distance from origin {}", p, (p.0 * p.0 + p.1 * p.1).sqrt());

        // Unit structs carry no data at all.
        struct Marker;
        let _ = Marker;
        println!("a unit struct has size {}", std::mem::size_of::<Marker>());

        // Debug printing comes from one derive.
        println!("debug view: {alice:?}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_greets_and_ages() {
        let mut p = Person::new("Bob", 30);
        assert_eq!(p.greet(), "Hi, I'm Bob and I'm 30 years old.");
        p.have_birthday();
        assert_eq!(p.age, 31);
    }

    #[test]
    fn car_description() {
        let car = Car {
            make: "Honda".to_string(),
            model: "Civic".to_string(),
            year: 2018,
        };
        assert_eq!(car.describe(), "2018 Honda Civic");
    }
}
