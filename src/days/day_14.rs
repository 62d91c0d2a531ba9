//! Day 14: HashMaps.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Maps;

/// Lowercased word counts; punctuation is stripped from word edges.
pub fn word_frequency(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in text.split_whitespace() {
        let cleaned = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if cleaned.is_empty() {
            continue;
        }
        *counts.entry(cleaned).or_insert(0) += 1;
    }
    counts
}

#[async_trait]
impl Lesson for Maps {
    fn day(&self) -> u8 {
        14
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // Insert and look up.
        let mut person: HashMap<&str, &str> = HashMap::new();
        person.insert("name", "Alice");
        person.insert("city", "Berlin");
        println!("name: {:?}", person.get("name"));

        // get returns an Option; indexing panics on a missing key.
        println!("missing key: {:?}", person.get("age"));
        println!("with default: {}", person.get("age").unwrap_or(&"unknown"));

        // Updating and removing.
        person.insert("city", "Munich"); // overwrites
        person.remove("name");
        println!("after edits: {person:?}");
        println!("has 'city': {}", person.contains_key("city"));

        // The entry API: insert-or-update in one step.
        let mut inventory: HashMap<&str, u32> = HashMap::new();
        for fruit in ["apple", "banana", "apple", "cherry", "apple"] {
            *inventory.entry(fruit).or_insert(0) += 1;
        }
        println!("inventory: {inventory:?}");

        // HashMap iteration order is arbitrary; BTreeMap sorts by key.
        let sorted: BTreeMap<&str, u32> = inventory.into_iter().collect();
        for (fruit, count) in &sorted {
            println!("{fruit}: {count}");
        }

        // A map as a lookup table.
        let roman: HashMap<u32, &str> = [(1, "I"), (5, "V"), (10, "X"), (50, "L")].into();
        println!("10 in roman: {:?}", roman.get(&10));

        // The exercise: word frequency.
        let counts = word_frequency("the quick brown fox jumps over the lazy dog. The end!");
        let mut top: Vec<(String, usize)> = counts.into_iter().collect();
        top.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        println!("top words: {:?}", &top[..3.min(top.len())]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_case_insensitively() {
        let counts = word_frequency("The the THE end");
        assert_eq!(counts.get("the"), Some(&3));
        assert_eq!(counts.get("end"), Some(&1));
    }

    #[test]
    fn strips_punctuation_from_edges() {
        let counts = word_frequency("dog. dog! (dog)");
        assert_eq!(counts.get("dog"), Some(&3));
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(word_frequency("  ...  ").is_empty());
    }
}
