//! Collaborator interfaces around the planner.
//!
//! The planner reads course and availability snapshots, asks a clock for
//! "today", and hands finished plans to a sink. Each of these is a trait so
//! the CLI can plug in file-backed stores and tests can plug in plain
//! values. All traits are object-safe.

use anyhow::Result;
use chrono::NaiveDate;

use crate::model::{Availability, AvailabilityByWeek, Course, WeekKey, WeeklyPlan};

/// Supplies the current list of courses.
pub trait CourseSource {
    fn courses(&self) -> Result<Vec<Course>>;
}

/// Supplies availability records by week.
pub trait AvailabilitySource {
    /// Availability for `week`, or `None` when nothing has been set.
    fn availability(&self, week: WeekKey) -> Result<Option<Availability>>;
}

/// Durable home for the generated plan.
pub trait PlanSink {
    /// Atomically replace any stored plan with `plan`.
    fn replace(&mut self, plan: &WeeklyPlan) -> Result<()>;

    /// Remove the stored plan, if any.
    fn clear(&mut self) -> Result<()>;
}

/// Source of the current date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl CourseSource for Vec<Course> {
    fn courses(&self) -> Result<Vec<Course>> {
        Ok(self.clone())
    }
}

impl AvailabilitySource for AvailabilityByWeek {
    fn availability(&self, week: WeekKey) -> Result<Option<Availability>> {
        Ok(self.get(&week).cloned())
    }
}

/// Keeps the latest plan in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink(Option<WeeklyPlan>);

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored plan, if any.
    pub fn plan(&self) -> Option<&WeeklyPlan> {
        self.0.as_ref()
    }
}

impl PlanSink for MemorySink {
    fn replace(&mut self, plan: &WeeklyPlan) -> Result<()> {
        self.0 = Some(plan.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.0 = None;
        Ok(())
    }
}

const _: () = {
    fn _assert_object_safe(
        _: &dyn CourseSource,
        _: &dyn AvailabilitySource,
        _: &dyn PlanSink,
        _: &dyn Clock,
    ) {
    }
};
