//! Regenerates the course README from the built-in day catalog.
//!
//! Usage: `cargo run --bin auto-readme [OUTPUT]` (defaults to README.md).

use anyhow::Context;
use rust_roadmap::{Catalog, ReadmeBuilder};

fn main() -> anyhow::Result<()> {
    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "README.md".to_string());

    let content = ReadmeBuilder::new().render(&Catalog::standard());
    std::fs::write(&output, content).with_context(|| format!("failed to write {}", output))?;

    println!("✅ {} has been generated", output);
    Ok(())
}
