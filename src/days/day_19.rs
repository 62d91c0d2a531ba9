//! Day 19: Working with files.
//!
//! Plain text first, then line-by-line reading, then a structured CSV
//! gradebook. Everything is written into the run's workspace directory.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::domain::ports::{Lesson, LessonContext};
use crate::utils::error::Result;

pub struct Files;

/// Counts log lines per level. Expects `DATE TIME LEVEL message` lines.
pub fn analyze_log(content: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for line in content.lines() {
        if let Some(level) = line.split_whitespace().nth(2) {
            *counts.entry(level.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub name: String,
    pub score: u32,
}

pub fn write_gradebook(path: &Path, records: &[GradeRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_gradebook(path: &Path) -> Result<Vec<GradeRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

pub fn average_score(records: &[GradeRecord]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    let sum: u32 = records.iter().map(|r| r.score).sum();
    Some(f64::from(sum) / records.len() as f64)
}

#[async_trait]
impl Lesson for Files {
    fn day(&self) -> u8 {
        19
    }

    async fn run(&self, ctx: &LessonContext) -> Result<()> {
        ctx.ensure_workspace()?;

        // Write and read a whole file.
        let sample = ctx.scratch_path("sample.txt");
        fs::write(&sample, "Hello File\n")?;
        let text = fs::read_to_string(&sample)?;
        print!("read back: {text}");

        // Appending keeps what is already there.
        let mut file = OpenOptions::new().append(true).open(&sample)?;
        writeln!(file, "A second line")?;
        drop(file);

        // Line-by-line with a buffered reader.
        let reader = BufReader::new(fs::File::open(&sample)?);
        for (i, line) in reader.lines().enumerate() {
            println!("line {}: {}", i + 1, line?);
        }

        // A small log analysis.
        let log_path = ctx.scratch_path("app.log");
        fs::write(
            &log_path,
            "2026-08-25 09:00:01 INFO service started\n\
             2026-08-25 09:00:04 WARNING disk space low\n\
             2026-08-25 09:00:09 ERROR request timed out\n\
             2026-08-25 09:00:12 INFO request served\n",
        )?;
        let counts = analyze_log(&fs::read_to_string(&log_path)?);
        println!("log levels: {counts:?}");

        // Structured records in CSV.
        let grades = vec![
            GradeRecord { name: "Alice".into(), score: 92 },
            GradeRecord { name: "Bob".into(), score: 85 },
            GradeRecord { name: "Carol".into(), score: 78 },
        ];
        let csv_path = ctx.scratch_path("grades.csv");
        write_gradebook(&csv_path, &grades)?;
        let reloaded = read_gradebook(&csv_path)?;
        println!("reloaded {} grade records from grades.csv", reloaded.len());
        if let Some(average) = average_score(&reloaded) {
            println!("class average: {average:.1}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn log_levels_are_counted() {
        let counts = analyze_log(
            "d t INFO a\n\
             d t ERROR b\n\
             d t INFO c\n",
        );
        assert_eq!(counts.get("INFO"), Some(&2));
        assert_eq!(counts.get("ERROR"), Some(&1));
        assert_eq!(counts.get("WARNING"), None);
    }

    #[test]
    fn gradebook_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("grades.csv");
        let grades = vec![
            GradeRecord { name: "Alice".into(), score: 90 },
            GradeRecord { name: "Bob".into(), score: 80 },
        ];
        write_gradebook(&path, &grades).unwrap();
        let reloaded = read_gradebook(&path).unwrap();
        assert_eq!(reloaded, grades);
    }

    #[test]
    fn average_of_scores() {
        let grades = vec![
            GradeRecord { name: "A".into(), score: 90 },
            GradeRecord { name: "B".into(), score: 80 },
        ];
        assert_eq!(average_score(&grades), Some(85.0));
        assert_eq!(average_score(&[]), None);
    }
}
