//! Runs lessons and reports how the run went.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::core::catalog::Catalog;
use crate::days;
use crate::domain::model::{RunSummary, Selection};
use crate::domain::ports::LessonContext;
use crate::utils::error::{Result, RoadmapError};

/// Drives one or more lessons against a shared [`LessonContext`].
///
/// A failing lesson does not abort the run; it is recorded in the
/// [`RunSummary`] and the engine moves on to the next day.
pub struct CourseEngine {
    catalog: Catalog,
    ctx: LessonContext,
}

impl CourseEngine {
    pub fn new(catalog: Catalog, ctx: LessonContext) -> Self {
        Self { catalog, ctx }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs every day the selection expands to, in day order.
    pub async fn run(&self, selection: &Selection) -> Result<RunSummary> {
        let days = self.catalog.select(selection)?;
        self.ctx.ensure_workspace()?;

        let mut summary = RunSummary::default();
        let started = Instant::now();
        info!(days = days.len(), "starting course run");

        for day in days {
            println!();
            println!("📘 Day {:02}: {}", day.number, day.title);
            println!("{}", "─".repeat(66));

            let lesson = days::lesson_for(day.number)
                .ok_or(RoadmapError::UnknownDay(day.number))?;
            debug_assert_eq!(lesson.day(), day.number);

            debug!(day = day.number, module = day.module, "running lesson");
            match lesson.run(&self.ctx).await {
                Ok(()) => summary.record_success(day.number),
                Err(e) => {
                    warn!(day = day.number, error = %e, "lesson failed");
                    summary.record_failure(day.number, e.to_string());
                }
            }
        }

        info!(
            completed = summary.days_run.len(),
            failed = summary.failures.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "course run finished"
        );
        Ok(summary)
    }
}
