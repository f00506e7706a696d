//! Plan generation service: precondition checks plus hand-off to the sink.
//!
//! A refused generation is a no-op. Nothing reaches the [`PlanSink`]
//! unless all seven days were built, so a previously stored plan survives
//! every error path.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::model::{Availability, Course, WeekKey, WeeklyPlan};
use crate::policy::PlanPolicy;
use crate::source::{AvailabilitySource, Clock, CourseSource, PlanSink};
use crate::week::build_week;

/// Reasons a plan could not be generated or stored.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no courses to plan for")]
    NoCourses,

    #[error("no availability set for the week of {week}")]
    MissingAvailability { week: WeekKey },

    #[error("availability for the week of {week} has no study time")]
    NoStudyTime { week: WeekKey },

    #[error("failed to read planner inputs: {0:#}")]
    Source(anyhow::Error),

    #[error("failed to store plan: {0:#}")]
    Sink(anyhow::Error),
}

impl GenerateError {
    /// True when generation was refused because of missing inputs rather
    /// than an I/O failure.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NoCourses | Self::MissingAvailability { .. } | Self::NoStudyTime { .. }
        )
    }
}

/// Check that a plan can be generated for `week`.
///
/// Returns the week's availability on success.
pub fn check_ready<'a>(
    courses: &[Course],
    availability: Option<&'a Availability>,
    week: WeekKey,
) -> Result<&'a Availability, GenerateError> {
    if courses.is_empty() {
        return Err(GenerateError::NoCourses);
    }
    let availability = availability.ok_or(GenerateError::MissingAvailability { week })?;
    if availability.total_minutes() == 0 {
        return Err(GenerateError::NoStudyTime { week });
    }
    Ok(availability)
}

/// Generates weekly plans under a fixed [`PlanPolicy`].
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator {
    policy: PlanPolicy,
}

impl PlanGenerator {
    pub fn new(policy: PlanPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PlanPolicy {
        &self.policy
    }

    /// Build the plan for `week` as of `today` without storing it.
    pub fn preview<C, A>(
        &self,
        courses: &C,
        availability: &A,
        week: WeekKey,
        today: NaiveDate,
    ) -> Result<WeeklyPlan, GenerateError>
    where
        C: CourseSource + ?Sized,
        A: AvailabilitySource + ?Sized,
    {
        let courses = courses.courses().map_err(GenerateError::Source)?;
        let week_availability = availability
            .availability(week)
            .map_err(GenerateError::Source)?;
        let week_availability = check_ready(&courses, week_availability.as_ref(), week)?;

        Ok(build_week(
            &courses,
            week_availability,
            week,
            today,
            &self.policy,
        ))
    }

    /// Build the plan for `week` and replace whatever `sink` holds.
    pub fn generate<C, A, S, K>(
        &self,
        courses: &C,
        availability: &A,
        sink: &mut S,
        clock: &K,
        week: WeekKey,
    ) -> Result<WeeklyPlan, GenerateError>
    where
        C: CourseSource + ?Sized,
        A: AvailabilitySource + ?Sized,
        S: PlanSink + ?Sized,
        K: Clock + ?Sized,
    {
        let today = clock.today();
        let plan = self.preview(courses, availability, week, today)?;
        sink.replace(&plan).map_err(GenerateError::Sink)?;
        info!(%week, %today, total_minutes = plan.total_minutes(), "generated weekly plan");
        Ok(plan)
    }

    /// Remove any stored plan.
    pub fn clear<S>(&self, sink: &mut S) -> Result<(), GenerateError>
    where
        S: PlanSink + ?Sized,
    {
        sink.clear().map_err(GenerateError::Sink)?;
        info!("cleared stored plan");
        Ok(())
    }
}
