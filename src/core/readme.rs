//! Renders the course README from the catalog.
//!
//! The layout is fixed: a title, a welcome paragraph, one `### Day N`
//! section per core day with file, overview and exercise bullets, a
//! bonus-day list, and a closing tip. Only the title, welcome and tip
//! texts are configurable.

use crate::core::catalog::Catalog;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub const DEFAULT_TITLE: &str = "30-Day Beginner Rust Challenge 🦀";

pub const DEFAULT_WELCOME: &str = "Welcome to the 30-day Rust programming challenge! \
This challenge is designed to help beginners learn Rust step-by-step through short \
lessons and exercises.";

pub const DEFAULT_TIP: &str = "Run each day with `cargo run -- run --day N` and try \
modifying the examples to understand them better. Keep a notebook or markdown file \
to track what you learn every day.";

#[derive(Debug, Clone)]
pub struct ReadmeBuilder {
    title: String,
    welcome: String,
    tip: String,
}

impl Default for ReadmeBuilder {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            welcome: DEFAULT_WELCOME.to_string(),
            tip: DEFAULT_TIP.to_string(),
        }
    }
}

impl ReadmeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_welcome(mut self, welcome: impl Into<String>) -> Self {
        self.welcome = welcome.into();
        self
    }

    pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = tip.into();
        self
    }

    /// Renders the full README as a markdown string.
    pub fn render(&self, catalog: &Catalog) -> String {
        let mut out = String::with_capacity(24 * 1024);

        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("{}\n\n", self.welcome));
        out.push_str("## 📅 Daily Topics and Exercises\n\n");

        for day in catalog.core_days() {
            out.push_str(&format!("### Day {}: {}\n", day.number, day.title));
            out.push_str(&format!("- **File**: `{}`\n", day.module));
            out.push_str(&format!("- **Overview**: {}\n", day.overview));
            out.push_str(&format!(
                "- **Exercise**:\n```rust\n{}\n```\n\n",
                day.exercise
            ));
        }

        let bonus: Vec<_> = catalog.bonus_days().collect();
        if !bonus.is_empty() {
            out.push_str("## 🎁 Bonus Days\n\n");
            out.push_str(
                "Three extra days for when the first thirty feel comfortable.\n\n",
            );
            for day in bonus {
                out.push_str(&format!(
                    "- **Day {}**: {} in `{}`\n",
                    day.number, day.title, day.module
                ));
            }
            out.push('\n');
        }

        out.push_str("---\n");
        out.push_str(&format!("💡 **Tip**: {}\n\n", self.tip));
        out.push_str("Happy coding! 🚀\n");
        out
    }

    /// Renders the README and writes it through the given storage backend.
    pub async fn write_to<S: Storage>(
        &self,
        storage: &S,
        path: &str,
        catalog: &Catalog,
    ) -> Result<()> {
        let content = self.render(catalog);
        storage.write_file(path, content.as_bytes()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::LocalStorage;
    use tempfile::TempDir;

    #[test]
    fn renders_thirty_core_sections() {
        let readme = ReadmeBuilder::new().render(&Catalog::standard());
        assert_eq!(readme.matches("### Day ").count(), 30);
        assert!(readme.starts_with("# 30-Day Beginner Rust Challenge 🦀\n"));
        assert!(readme.ends_with("Happy coding! 🚀\n"));
    }

    #[test]
    fn lists_bonus_days_without_snippets() {
        let readme = ReadmeBuilder::new().render(&Catalog::standard());
        assert!(readme.contains("## 🎁 Bonus Days"));
        assert!(readme.contains("- **Day 31**:"));
        assert!(!readme.contains("### Day 31"));
    }

    #[test]
    fn custom_title_and_tip_are_rendered() {
        let readme = ReadmeBuilder::new()
            .with_title("My Course")
            .with_tip("Take notes.")
            .render(&Catalog::standard());
        assert!(readme.starts_with("# My Course\n"));
        assert!(readme.contains("💡 **Tip**: Take notes.\n"));
    }

    #[tokio::test]
    async fn write_to_creates_the_file() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());
        ReadmeBuilder::new()
            .write_to(&storage, "README.md", &Catalog::standard())
            .await
            .unwrap();
        let written = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(written.contains("### Day 30:"));
    }
}
