//! Day 9: Working with vectors.
//!
//! Ends with the shopping list exercise: comma-separated items in, a
//! numbered list and an optional total out.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Vectors;

/// Splits comma-separated input into trimmed, non-empty items.
pub fn parse_items(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders the numbered shopping list with a total when prices are given.
pub fn render_shopping_list(items: &[String], prices: Option<&[f64]>) -> String {
    let mut out = String::from("Shopping List:\n");
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, item));
    }
    match prices {
        Some(prices) if !prices.is_empty() => {
            let total: f64 = prices.iter().sum();
            out.push_str(&format!("Total cost: ${total:.2}\n"));
        }
        _ => out.push_str("No prices provided.\n"),
    }
    out
}

#[async_trait]
impl Lesson for Vectors {
    fn day(&self) -> u8 {
        9
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // Creating vectors.
        let fruits = vec!["apple", "banana", "cherry"];
        let from_range: Vec<i32> = (0..5).collect();
        println!("fruits: {fruits:?}");
        println!("from a range: {from_range:?}");

        // Indexing panics out of bounds; get() returns an Option.
        println!("first: {}", fruits[0]);
        println!("last: {:?}", fruits.last());
        println!("out of bounds: {:?}", fruits.get(10));

        // Slices.
        let numbers: Vec<i32> = (0..10).collect();
        println!("slice [2..6]: {:?}", &numbers[2..6]);
        let every_second: Vec<i32> = numbers.iter().step_by(2).copied().collect();
        println!("every 2nd: {every_second:?}");
        let reversed: Vec<i32> = numbers.iter().rev().copied().collect();
        println!("reversed: {reversed:?}");

        // Mutation.
        let mut fruits: Vec<String> = fruits.into_iter().map(String::from).collect();
        fruits[1] = "blueberry".to_string();
        fruits.push("orange".to_string());
        fruits.insert(1, "grape".to_string());
        fruits.extend(["kiwi".to_string(), "mango".to_string()]);
        println!("after edits: {fruits:?}");

        let removed = fruits.pop();
        println!("popped: {removed:?}");
        fruits.retain(|fruit| fruit != "grape");
        println!("after retain: {fruits:?}");

        fruits.sort();
        println!("sorted: {fruits:?}");
        println!("contains 'kiwi': {}", fruits.iter().any(|f| f == "kiwi"));

        // The exercise.
        let items = parse_items("milk, bread , eggs,");
        let list = render_shopping_list(&items, Some(&[2.50, 1.80, 3.20]));
        print!("{list}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_items_trims_and_drops_empties() {
        assert_eq!(parse_items("milk, bread , eggs,"), vec!["milk", "bread", "eggs"]);
        assert!(parse_items(" , ,").is_empty());
    }

    #[test]
    fn shopping_list_totals_prices() {
        let items = parse_items("milk,bread");
        let list = render_shopping_list(&items, Some(&[2.5, 1.5]));
        assert!(list.contains("1. milk"));
        assert!(list.contains("2. bread"));
        assert!(list.contains("Total cost: $4.00"));
    }

    #[test]
    fn shopping_list_without_prices() {
        let items = parse_items("milk");
        let list = render_shopping_list(&items, None);
        assert!(list.contains("No prices provided."));
    }
}
