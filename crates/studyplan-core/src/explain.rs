//! "Why this plan?" breakdown of per-course need scores.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::Course;
use crate::policy::PlanPolicy;
use crate::score::{UrgencyLabel, days_until, need_score};

/// One course's contribution to the plan, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseExplanation {
    pub name: String,
    pub days_until: u32,
    pub urgency: UrgencyLabel,
    pub difficulty: u8,
    pub weight: u8,
    pub score: f64,
    /// Score relative to the highest score, 0-100. Scores below 1 are
    /// measured against 1 so that uniformly small scores stay small.
    pub percent: u32,
}

/// Explain every course's need score as of `today`, highest score first.
pub fn explain_courses(
    courses: &[Course],
    today: NaiveDate,
    policy: &PlanPolicy,
) -> Vec<CourseExplanation> {
    let scored: Vec<(&Course, u32, f64)> = courses
        .iter()
        .map(|c| {
            (
                c,
                days_until(c.exam_date, today),
                need_score(c, today, policy),
            )
        })
        .collect();

    let max_score = scored.iter().map(|(_, _, s)| *s).fold(1.0_f64, f64::max);

    let mut out: Vec<CourseExplanation> = scored
        .into_iter()
        .map(|(c, days, score)| CourseExplanation {
            name: c.name.clone(),
            days_until: days,
            urgency: UrgencyLabel::for_days(days),
            difficulty: c.difficulty,
            weight: c.weight,
            score,
            percent: (score / max_score * 100.0).round() as u32,
        })
        .collect();

    out.sort_by(|a, b| b.score.total_cmp(&a.score));
    out
}
