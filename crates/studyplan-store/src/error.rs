use studyplan_core::{CourseId, WeekKey};
use thiserror::Error;

/// Store failures callers may want to match on.
///
/// I/O and JSON failures are reported through `anyhow` with the offending
/// path attached; these are the domain-level cases.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("course {0} not found")]
    CourseNotFound(CourseId),

    #[error("no stored week before {0} to copy from")]
    NoPreviousWeek(WeekKey),
}
