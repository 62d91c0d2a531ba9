//! Day 5: Strings and text processing.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Strings;

/// Counts vowels, case-insensitively.
pub fn count_vowels(text: &str) -> usize {
    text.chars()
        .filter(|c| "aeiou".contains(c.to_ascii_lowercase()))
        .count()
}

/// Reverses the order of words, keeping the words themselves intact.
pub fn reverse_words(text: &str) -> String {
    text.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

#[async_trait]
impl Lesson for Strings {
    fn day(&self) -> u8 {
        5
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        let text = "Rust";
        println!("{}", text.to_uppercase());
        println!("{}", text.to_lowercase());
        println!("len in bytes: {}", text.len());
        println!("chars: {}", text.chars().count());

        // &str is a borrowed view; String owns its buffer.
        let owned = String::from("systems programming");
        let borrowed: &str = &owned;
        println!("owned: {owned}, borrowed view: {borrowed}");

        // The everyday methods.
        let sentence = "  Rust makes systems programming approachable  ";
        println!("trimmed: '{}'", sentence.trim());
        println!("contains 'systems': {}", sentence.contains("systems"));
        println!("replaced: {}", sentence.trim().replace("approachable", "fun"));
        println!("starts with 'Rust': {}", sentence.trim().starts_with("Rust"));

        // Splitting and joining.
        let csv_line = "apple,banana,cherry";
        let parts: Vec<&str> = csv_line.split(',').collect();
        println!("split into {parts:?}");
        println!("joined back: {}", parts.join(" + "));

        // Building strings with format! and push_str.
        let name = "Alice";
        let greeting = format!("Hello, {name}!");
        let mut message = String::new();
        message.push_str(&greeting);
        message.push_str(" Welcome to day 5.");
        println!("{message}");

        // Little exercises.
        println!("vowels in 'programming': {}", count_vowels("programming"));
        println!("reversed words: {}", reverse_words("learn rust daily"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_vowels_ignoring_case() {
        assert_eq!(count_vowels("programming"), 3);
        assert_eq!(count_vowels("AEIOU"), 5);
        assert_eq!(count_vowels("xyz"), 0);
    }

    #[test]
    fn reverses_word_order() {
        assert_eq!(reverse_words("learn rust daily"), "daily rust learn");
        assert_eq!(reverse_words("single"), "single");
        assert_eq!(reverse_words(""), "");
    }
}
