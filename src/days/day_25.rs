//! Day 25: Traits and polymorphism.
//!
//! Where an inheritance hierarchy would be, Rust puts a trait and a
//! list of independent types implementing it.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct TraitBasics;

pub trait Animal {
    fn name(&self) -> &str;
    fn speak(&self) -> String;

    // Default method, available to every implementor.
    fn introduce(&self) -> String {
        format!("{} says: {}", self.name(), self.speak())
    }
}

pub struct Dog {
    pub name: String,
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        "Woof!".to_string()
    }
}

pub struct Cat {
    pub name: String,
}

impl Animal for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        "Meow!".to_string()
    }

    // Overriding the default.
    fn introduce(&self) -> String {
        format!("{} deigns to say: {}", self.name(), self.speak())
    }
}

pub struct Bird {
    pub name: String,
}

impl Animal for Bird {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        "Tweet!".to_string()
    }
}

/// One line per animal, whatever their concrete types are.
pub fn chorus(animals: &[Box<dyn Animal>]) -> Vec<String> {
    animals.iter().map(|animal| animal.introduce()).collect()
}

#[async_trait]
impl Lesson for TraitBasics {
    fn day(&self) -> u8 {
        25
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // Static dispatch: the type is known at compile time.
        fn loudest(animal: &impl Animal) -> String {
            animal.speak().to_uppercase()
        }
        let rex = Dog {
            name: "Rex".to_string(),
        };
        println!("{}", rex.introduce());
        println!("loudest: {}", loudest(&rex));

        // Dynamic dispatch: one collection, many types.
        let shelter: Vec<Box<dyn Animal>> = vec![
            Box::new(Dog {
                name: "Rex".to_string(),
            }),
            Box::new(Cat {
                name: "Whiskers".to_string(),
            }),
            Box::new(Bird {
                name: "Tweety".to_string(),
            }),
        ];
        for line in chorus(&shelter) {
            println!("{line}");
        }

        // Traits from std work the same way; Display is a trait.
        println!("{} animals housed today", shelter.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_method_uses_the_overrides() {
        let animals: Vec<Box<dyn Animal>> = vec![
            Box::new(Dog {
                name: "Rex".to_string(),
            }),
            Box::new(Cat {
                name: "Whiskers".to_string(),
            }),
        ];
        let lines = chorus(&animals);
        assert_eq!(lines[0], "Rex says: Woof!");
        assert_eq!(lines[1], "Whiskers deigns to say: Meow!");
    }
}
