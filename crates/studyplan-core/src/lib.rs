//! Core planning logic for studyplan.
//!
//! Turns a snapshot of courses and one week's availability into a 7-day
//! study plan. Everything in this crate is a pure function of its inputs;
//! storage and the wall clock live behind the traits in [`source`].

pub mod allocate;
pub mod explain;
pub mod generate;
pub mod model;
pub mod policy;
pub mod score;
pub mod session;
pub mod source;
pub mod week;

pub use allocate::{ScoredCourse, allocate_day};
pub use explain::{CourseExplanation, explain_courses};
pub use generate::{GenerateError, PlanGenerator, check_ready};
pub use model::{
    Availability, AvailabilityByWeek, Course, CourseId, DayOfWeek, DayPlan, PlanItem, WeekKey,
    WeekKeyError, WeeklyPlan,
};
pub use policy::{DriftCorrection, PlanPolicy};
pub use score::{UrgencyLabel, days_until, need_score, urgency};
pub use session::{dropped_remainder, to_sessions};
pub use source::{
    AvailabilitySource, Clock, CourseSource, FixedClock, MemorySink, PlanSink, SystemClock,
};
pub use week::build_week;
