//! Need scoring: how much study time a course deserves right now.
//!
//! `score = urgency × difficulty × weight`, where urgency is the inverse of
//! the days left until the exam, capped at the policy's urgency horizon.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::Course;
use crate::policy::PlanPolicy;

/// Days from `today` until `exam_date`, never less than one.
///
/// An exam today or in the past counts as due tomorrow: maximal urgency,
/// never a zero or negative divisor.
pub fn days_until(exam_date: NaiveDate, today: NaiveDate) -> u32 {
    let days = (exam_date - today).num_days();
    u32::try_from(days.max(1)).unwrap_or(u32::MAX)
}

/// Urgency for an exam `days` away.
///
/// Rises smoothly as the exam approaches and saturates at
/// `1 / urgency_horizon_days` for anything at or beyond the horizon.
pub fn urgency(days: u32, policy: &PlanPolicy) -> f64 {
    let horizon = policy.urgency_horizon_days.max(1);
    1.0 / f64::from(days.clamp(1, horizon))
}

/// Need score for `course` as of `today`. Strictly positive whenever
/// difficulty and weight are at least one.
pub fn need_score(course: &Course, today: NaiveDate, policy: &PlanPolicy) -> f64 {
    let days = days_until(course.exam_date, today);
    urgency(days, policy) * f64::from(course.difficulty) * f64::from(course.weight)
}

/// Coarse bucket for how close an exam is, used in plan explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLabel {
    VerySoon,
    Soon,
    Upcoming,
    Later,
}

impl UrgencyLabel {
    pub fn for_days(days: u32) -> Self {
        match days {
            0..=7 => Self::VerySoon,
            8..=14 => Self::Soon,
            15..=30 => Self::Upcoming,
            _ => Self::Later,
        }
    }
}

impl fmt::Display for UrgencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::VerySoon => "very soon",
            Self::Soon => "soon",
            Self::Upcoming => "upcoming",
            Self::Later => "later",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn course(exam: &str, difficulty: u8, weight: u8) -> Course {
        Course::new("c", date(exam), difficulty, weight)
    }

    #[test]
    fn days_until_counts_calendar_days() {
        assert_eq!(days_until(date("2026-10-23"), date("2026-10-18")), 5);
        assert_eq!(days_until(date("2026-10-19"), date("2026-10-18")), 1);
    }

    #[test]
    fn days_until_is_at_least_one() {
        let today = date("2026-10-18");
        assert_eq!(days_until(today, today), 1);
        assert_eq!(days_until(date("2026-09-01"), today), 1);
    }

    #[test]
    fn urgency_saturates_at_horizon() {
        let policy = PlanPolicy::default();
        let floor = 1.0 / 30.0;
        assert_eq!(urgency(30, &policy), floor);
        assert_eq!(urgency(31, &policy), floor);
        assert_eq!(urgency(400, &policy), floor);
    }

    #[test]
    fn urgency_non_increasing_within_horizon() {
        let policy = PlanPolicy::default();
        for d in 1..30 {
            assert!(urgency(d, &policy) > urgency(d + 1, &policy), "at {d}");
        }
    }

    #[test]
    fn scenario_a_scores() {
        let policy = PlanPolicy::default();
        let today = date("2026-10-18");
        let a = course("2026-10-23", 4, 4);
        let b = course("2026-11-27", 3, 2);
        assert!((need_score(&a, today, &policy) - 3.2).abs() < 1e-9);
        assert!((need_score(&b, today, &policy) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn score_is_positive_and_monotonic() {
        let policy = PlanPolicy::default();
        let today = date("2026-10-18");
        let base = need_score(&course("2026-10-28", 2, 2), today, &policy);
        assert!(base > 0.0);
        assert!(need_score(&course("2026-10-28", 3, 2), today, &policy) > base);
        assert!(need_score(&course("2026-10-28", 2, 3), today, &policy) > base);
        assert!(need_score(&course("2026-10-25", 2, 2), today, &policy) > base);
        // Minimum inputs with a far-off exam still score above zero.
        assert!(need_score(&course("2028-01-01", 1, 1), today, &policy) > 0.0);
    }

    #[test]
    fn urgency_labels() {
        assert_eq!(UrgencyLabel::for_days(1), UrgencyLabel::VerySoon);
        assert_eq!(UrgencyLabel::for_days(7), UrgencyLabel::VerySoon);
        assert_eq!(UrgencyLabel::for_days(14), UrgencyLabel::Soon);
        assert_eq!(UrgencyLabel::for_days(30), UrgencyLabel::Upcoming);
        assert_eq!(UrgencyLabel::for_days(31), UrgencyLabel::Later);
        assert_eq!(UrgencyLabel::VerySoon.to_string(), "very soon");
    }
}
