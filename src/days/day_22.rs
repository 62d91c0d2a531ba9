//! Day 22: Creating and using your own modules.
//!
//! The `text_tools` and `security` modules below are the exercise: a
//! module groups related functions behind a small public surface.

use async_trait::async_trait;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct OwnModules;

pub mod text_tools {
    /// Character, word and sentence counts for a piece of text.
    #[derive(Debug, PartialEq, Eq)]
    pub struct TextReport {
        pub chars: usize,
        pub words: usize,
        pub sentences: usize,
    }

    pub fn analyze(text: &str) -> TextReport {
        let enders = text
            .chars()
            .filter(|c| matches!(c, '.' | '!' | '?'))
            .count();
        TextReport {
            chars: text.chars().filter(|c| !c.is_whitespace()).count(),
            words: text.split_whitespace().count(),
            sentences: enders.max(usize::from(!text.trim().is_empty())),
        }
    }

    pub fn title_case(text: &str) -> String {
        text.split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub mod security {
    use rand::Rng;

    const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    const DIGITS: &str = "0123456789";
    const SPECIAL: &str = "!@#$%^&*";

    /// Random password of `length` characters drawn from letters and
    /// digits, plus specials when requested.
    pub fn generate_password(length: usize, include_special: bool) -> String {
        let mut alphabet: Vec<char> = LETTERS.chars().chain(DIGITS.chars()).collect();
        if include_special {
            alphabet.extend(SPECIAL.chars());
        }
        let mut rng = rand::thread_rng();
        (0..length)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
            .collect()
    }
}

#[async_trait]
impl Lesson for OwnModules {
    fn day(&self) -> u8 {
        22
    }

    async fn run(&self, _ctx: &LessonContext) -> Result<()> {
        // Calling into a module with its path.
        let report = text_tools::analyze("Modules group code. Paths find it!");
        println!("analysis: {report:?}");

        // Or bring the items into scope first.
        use text_tools::title_case;
        println!("{}", title_case("rust modules made simple"));

        let password = security::generate_password(12, true);
        println!("generated password: {password}");
        println!("(don't actually print passwords)");

        println!();
        println!("On disk, a module is usually a file:");
        println!("    src/days/mod.rs declares `pub mod day_22;`");
        println!("    this file is src/days/day_22.rs");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::text_tools::{analyze, title_case, TextReport};
    use super::security::generate_password;

    #[test]
    fn analyze_counts_text() {
        let report = analyze("One two. Three!");
        assert_eq!(
            report,
            TextReport {
                chars: 13,
                words: 3,
                sentences: 2
            }
        );
    }

    #[test]
    fn analyze_empty_text() {
        let report = analyze("");
        assert_eq!(report.sentences, 0);
        assert_eq!(report.words, 0);
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("hello rust world"), "Hello Rust World");
    }

    #[test]
    fn passwords_have_the_requested_length() {
        assert_eq!(generate_password(12, true).chars().count(), 12);
        assert_eq!(generate_password(0, false), "");
        let plain = generate_password(64, false);
        assert!(plain.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
