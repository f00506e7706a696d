//! Shared test utilities for studyplan integration tests.
//!
//! Provides date and course fixtures, a throwaway data directory for the
//! file-backed stores, and collaborator doubles for failure paths.

use anyhow::{Result, bail};
use chrono::{Days, NaiveDate};
use tempfile::TempDir;

use studyplan_core::{Availability, Course, PlanSink, WeeklyPlan};
use studyplan_store::StoreConfig;

/// Parse a `YYYY-MM-DD` date, panicking on bad input.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_else(|e| panic!("bad date {s:?}: {e}"))
}

/// A course whose exam is `days` after `today`.
pub fn course_due_in(
    name: &str,
    today: NaiveDate,
    days: u64,
    difficulty: u8,
    weight: u8,
) -> Course {
    let exam = today
        .checked_add_days(Days::new(days))
        .unwrap_or_else(|| panic!("exam date overflow for {name}"));
    Course::new(name, exam, difficulty, weight)
}

/// The same number of hours on every day of the week.
pub fn uniform_availability(hours: f64) -> Availability {
    Availability::from_hours([hours; 7])
}

/// A temporary data directory that is deleted on drop.
pub struct TestStore {
    _dir: TempDir,
    config: StoreConfig,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap_or_else(|e| panic!("failed to create temp dir: {e}"));
        let config = StoreConfig::new(dir.path().join("data"));
        Self { _dir: dir, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

/// A plan sink that rejects every write.
#[derive(Debug, Default)]
pub struct FailingSink;

impl PlanSink for FailingSink {
    fn replace(&mut self, _plan: &WeeklyPlan) -> Result<()> {
        bail!("sink unavailable")
    }

    fn clear(&mut self) -> Result<()> {
        bail!("sink unavailable")
    }
}
