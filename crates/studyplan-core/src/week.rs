//! Weekly plan assembly.

use chrono::NaiveDate;
use tracing::debug;

use crate::allocate::{ScoredCourse, allocate_day};
use crate::model::{Availability, Course, DayPlan, WeekKey, WeeklyPlan};
use crate::policy::PlanPolicy;
use crate::score::need_score;

/// Build the seven-day plan for `week`.
///
/// Scores depend only on `today`, which is fixed for the run, so they are
/// computed once and reused for every day. Callers are expected to have
/// checked that `courses` is non-empty and that `availability` belongs to
/// `week` (see [`crate::generate::check_ready`]).
pub fn build_week(
    courses: &[Course],
    availability: &Availability,
    week: WeekKey,
    today: NaiveDate,
    policy: &PlanPolicy,
) -> WeeklyPlan {
    let scored: Vec<ScoredCourse<'_>> = courses
        .iter()
        .map(|c| ScoredCourse::new(c, need_score(c, today, policy)))
        .collect();

    let days = week
        .dates()
        .map(|(day, date)| {
            let items = allocate_day(availability.hours(day), &scored, policy);
            debug!(%date, %day, items = items.len(), "planned day");
            DayPlan { date, items }
        })
        .collect();

    WeeklyPlan {
        week,
        generated_on: today,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DayOfWeek;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn produces_seven_contiguous_days() {
        let today = date("2026-10-14");
        let courses = vec![Course::new("Algebra", date("2026-10-30"), 3, 3)];
        let availability = Availability::from_hours([1.0; 7]);
        let week = WeekKey::containing(today);

        let plan = build_week(&courses, &availability, week, today, &PlanPolicy::default());

        assert_eq!(plan.days.len(), 7);
        assert_eq!(plan.week, week);
        assert_eq!(plan.generated_on, today);
        for (i, day) in plan.days.iter().enumerate() {
            assert_eq!(day.date, week.date_of(DayOfWeek::ALL[i]));
            assert_eq!(day.planned_minutes(), 60);
        }
    }

    #[test]
    fn zero_hour_days_are_rest_days() {
        let today = date("2026-10-14");
        let courses = vec![Course::new("Algebra", date("2026-10-30"), 3, 3)];
        let availability = Availability::new()
            .with(DayOfWeek::Mon, 2.0)
            .with(DayOfWeek::Sun, 0.0);
        let week = WeekKey::containing(today);

        let plan = build_week(&courses, &availability, week, today, &PlanPolicy::default());

        assert!(!plan.day(DayOfWeek::Mon).unwrap().is_rest_day());
        assert!(plan.day(DayOfWeek::Tue).unwrap().is_rest_day());
        assert!(plan.day(DayOfWeek::Sun).unwrap().is_rest_day());
        assert_eq!(plan.total_minutes(), 120);
    }
}
