//! Per-day time allocation.
//!
//! Splits one day's budget across courses in proportion to their need
//! scores, drops allocations too short to act on, keeps the largest few,
//! and trims rounding overflow.

use tracing::{debug, warn};

use crate::model::{Course, PlanItem, hours_to_minutes};
use crate::policy::{DriftCorrection, PlanPolicy};

/// A course paired with its need score for the current generation run.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCourse<'a> {
    pub course: &'a Course,
    pub score: f64,
}

impl<'a> ScoredCourse<'a> {
    pub fn new(course: &'a Course, score: f64) -> Self {
        Self { course, score }
    }
}

/// Allocate one day's minutes across `scored`.
///
/// Returned items are ordered largest allocation first. Ties keep the
/// order of `scored`. An empty result means a rest day.
pub fn allocate_day(
    available_hours: f64,
    scored: &[ScoredCourse<'_>],
    policy: &PlanPolicy,
) -> Vec<PlanItem> {
    let minutes_available = hours_to_minutes(available_hours);

    let total: f64 = scored.iter().map(|s| s.score).sum();
    // Unreachable with positive scores; guards the division below.
    let total = if total > 0.0 { total } else { 1.0 };

    let mut items: Vec<PlanItem> = scored
        .iter()
        .map(|s| {
            let share = s.score / total;
            let raw = f64::from(minutes_available) * share;
            PlanItem {
                course_id: s.course.id,
                course_name: s.course.name.clone(),
                minutes: round_to_step(raw, policy.rounding_step_minutes),
            }
        })
        .filter(|item| item.minutes >= policy.min_allocation_minutes)
        .collect();

    // `sort_by` is stable, so equal allocations keep their input order.
    items.sort_by(|a, b| b.minutes.cmp(&a.minutes));
    items.truncate(policy.max_courses_per_day);

    correct_drift(&mut items, minutes_available, policy);

    debug!(
        minutes_available,
        kept = items.len(),
        candidates = scored.len(),
        "allocated day"
    );

    items
}

/// Round `minutes` to the nearest multiple of `step`, ties rounding up.
fn round_to_step(minutes: f64, step: u32) -> u32 {
    let step = step.max(1);
    let units = (minutes / f64::from(step) + 0.5).floor();
    // Negative and NaN inputs saturate to zero in the cast.
    (units as u32).saturating_mul(step)
}

/// Pull the day's total back under `minutes_available` after rounding.
fn correct_drift(items: &mut [PlanItem], minutes_available: u32, policy: &PlanPolicy) {
    let used: u32 = items.iter().map(|i| i.minutes).sum();
    if used <= minutes_available || items.is_empty() {
        return;
    }

    let floor = policy.min_allocation_minutes;
    let overflow = used - minutes_available;

    let remaining = match policy.drift_correction {
        DriftCorrection::LargestOnly => {
            let largest = &mut items[0];
            let trimmed = largest.minutes.saturating_sub(overflow).max(floor);
            let cut = largest.minutes.saturating_sub(trimmed);
            largest.minutes = trimmed;
            overflow.saturating_sub(cut)
        }
        DriftCorrection::Redistribute => {
            let mut overflow = overflow;
            for item in items.iter_mut() {
                if overflow == 0 {
                    break;
                }
                let cut = item.minutes.saturating_sub(floor).min(overflow);
                item.minutes -= cut;
                overflow -= cut;
            }
            overflow
        }
    };

    if remaining > 0 {
        warn!(
            minutes_available,
            over_by = remaining,
            "drift correction could not bring the day within budget"
        );
    }
}
