use crate::utils::error::{Result, RoadmapError};
use crate::utils::validation::validate_day_number;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Course phase a day belongs to, mirroring the three study guides the
/// course grew out of plus the bonus material appended after day 30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Foundations,
    Intermediate,
    Advanced,
    Bonus,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Foundations => "Foundations",
            Phase::Intermediate => "Intermediate",
            Phase::Advanced => "Advanced",
            Phase::Bonus => "Bonus",
        }
    }

    /// Phase for a given day number. Days 1-12 build the foundations,
    /// 13-22 the intermediate block, 23-30 the advanced block, and
    /// 31-33 are bonus days.
    pub fn of_day(day: u8) -> Phase {
        match day {
            1..=12 => Phase::Foundations,
            13..=22 => Phase::Intermediate,
            23..=30 => Phase::Advanced,
            _ => Phase::Bonus,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Phase {
    type Err = RoadmapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "foundations" => Ok(Phase::Foundations),
            "intermediate" => Ok(Phase::Intermediate),
            "advanced" => Ok(Phase::Advanced),
            "bonus" => Ok(Phase::Bonus),
            other => Err(RoadmapError::InvalidConfigValue {
                field: "phase".to_string(),
                value: other.to_string(),
                reason: "expected foundations, intermediate, advanced or bonus".to_string(),
            }),
        }
    }
}

/// One curriculum entry: everything the README generator and the CLI need
/// to describe a day without running it.
#[derive(Debug, Clone, Serialize)]
pub struct Day {
    pub number: u8,
    pub title: &'static str,
    pub overview: &'static str,
    /// Short Rust snippet rendered into the README exercise block.
    pub exercise: &'static str,
    pub phase: Phase,
    /// Path of the lesson module, used for the README "File:" line.
    pub module: &'static str,
}

/// What `roadmap run` should execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Day(u8),
    Phase(Phase),
    All,
}

impl Selection {
    /// Builds a selection from the CLI flags. Exactly one of the three
    /// modes must be requested.
    pub fn from_cli(day: Option<u8>, phase: Option<&str>, all: bool) -> Result<Selection> {
        let chosen = usize::from(day.is_some()) + usize::from(phase.is_some()) + usize::from(all);
        if chosen != 1 {
            return Err(RoadmapError::InvalidConfigValue {
                field: "run".to_string(),
                value: format!("day={:?} phase={:?} all={}", day, phase, all),
                reason: "pick exactly one of --day, --phase or --all".to_string(),
            });
        }

        if let Some(day) = day {
            validate_day_number(day)?;
            return Ok(Selection::Day(day));
        }
        if let Some(phase) = phase {
            return Ok(Selection::Phase(phase.parse()?));
        }
        Ok(Selection::All)
    }
}

/// Outcome of an engine run. A failing day is recorded here instead of
/// aborting the rest of the selection.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub days_run: Vec<u8>,
    pub failures: Vec<(u8, String)>,
}

impl RunSummary {
    pub fn record_success(&mut self, day: u8) {
        self.days_run.push(day);
    }

    pub fn record_failure(&mut self, day: u8, message: String) {
        self.days_run.push(day);
        self.failures.push((day, message));
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_of_day_covers_the_whole_course() {
        assert_eq!(Phase::of_day(1), Phase::Foundations);
        assert_eq!(Phase::of_day(12), Phase::Foundations);
        assert_eq!(Phase::of_day(13), Phase::Intermediate);
        assert_eq!(Phase::of_day(22), Phase::Intermediate);
        assert_eq!(Phase::of_day(23), Phase::Advanced);
        assert_eq!(Phase::of_day(30), Phase::Advanced);
        assert_eq!(Phase::of_day(31), Phase::Bonus);
        assert_eq!(Phase::of_day(33), Phase::Bonus);
    }

    #[test]
    fn phase_parses_case_insensitively() {
        assert_eq!("Foundations".parse::<Phase>().unwrap(), Phase::Foundations);
        assert_eq!("BONUS".parse::<Phase>().unwrap(), Phase::Bonus);
        assert!("weekend".parse::<Phase>().is_err());
    }

    #[test]
    fn selection_requires_exactly_one_mode() {
        assert!(Selection::from_cli(None, None, false).is_err());
        assert!(Selection::from_cli(Some(3), None, true).is_err());
        assert_eq!(
            Selection::from_cli(Some(3), None, false).unwrap(),
            Selection::Day(3)
        );
        assert_eq!(
            Selection::from_cli(None, Some("bonus"), false).unwrap(),
            Selection::Phase(Phase::Bonus)
        );
        assert_eq!(Selection::from_cli(None, None, true).unwrap(), Selection::All);
    }

    #[test]
    fn selection_rejects_out_of_range_days() {
        assert!(Selection::from_cli(Some(0), None, false).is_err());
        assert!(Selection::from_cli(Some(34), None, false).is_err());
    }

    #[test]
    fn summary_tracks_failures() {
        let mut summary = RunSummary::default();
        summary.record_success(1);
        summary.record_failure(2, "boom".to_string());
        assert!(!summary.is_success());
        assert_eq!(summary.days_run, vec![1, 2]);
    }
}
