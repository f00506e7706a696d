//! Tunable planning policy.
//!
//! Every threshold the planner uses lives in [`PlanPolicy`], so the
//! algorithms never embed literals. The struct deserializes from the
//! `[policy]` table of the config file; missing keys fall back to the
//! defaults below.

use serde::{Deserialize, Serialize};

/// How the allocator reacts when rounding pushes a day over budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftCorrection {
    /// Trim only the largest item, never below the minimum allocation.
    /// The day can remain over budget when the overflow is larger than the
    /// slack in that one item.
    #[default]
    LargestOnly,
    /// Trim items largest-first, each floored at the minimum allocation,
    /// until the overflow is absorbed or every item is at the floor.
    Redistribute,
}

/// Planning thresholds shared by the scorer, allocator and session splitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanPolicy {
    /// Length of a full study session in minutes.
    pub session_minutes: u32,
    /// Shortest leftover that still becomes its own session.
    pub min_session_remainder_minutes: u32,
    /// Shortest per-course allocation worth scheduling on a day.
    pub min_allocation_minutes: u32,
    /// Maximum number of courses on a single day.
    pub max_courses_per_day: usize,
    /// Days-until-exam beyond which urgency stops decaying.
    pub urgency_horizon_days: u32,
    /// Allocations are rounded to a multiple of this many minutes.
    pub rounding_step_minutes: u32,
    /// Over-budget handling after rounding.
    pub drift_correction: DriftCorrection,
}

impl Default for PlanPolicy {
    fn default() -> Self {
        Self {
            session_minutes: 50,
            min_session_remainder_minutes: 20,
            min_allocation_minutes: 15,
            max_courses_per_day: 3,
            urgency_horizon_days: 30,
            rounding_step_minutes: 5,
            drift_correction: DriftCorrection::LargestOnly,
        }
    }
}

impl PlanPolicy {
    /// Set the full session length.
    pub fn session_minutes(mut self, minutes: u32) -> Self {
        self.session_minutes = minutes;
        self
    }

    /// Set the shortest leftover kept as a session.
    pub fn min_session_remainder_minutes(mut self, minutes: u32) -> Self {
        self.min_session_remainder_minutes = minutes;
        self
    }

    /// Set the minimum actionable allocation.
    pub fn min_allocation_minutes(mut self, minutes: u32) -> Self {
        self.min_allocation_minutes = minutes;
        self
    }

    /// Set the daily course cap.
    pub fn max_courses_per_day(mut self, cap: usize) -> Self {
        self.max_courses_per_day = cap;
        self
    }

    /// Set the urgency horizon.
    pub fn urgency_horizon_days(mut self, days: u32) -> Self {
        self.urgency_horizon_days = days;
        self
    }

    /// Set the rounding granularity.
    pub fn rounding_step_minutes(mut self, minutes: u32) -> Self {
        self.rounding_step_minutes = minutes;
        self
    }

    /// Set the drift correction strategy.
    pub fn drift_correction(mut self, strategy: DriftCorrection) -> Self {
        self.drift_correction = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let policy = PlanPolicy::default();
        assert_eq!(policy.session_minutes, 50);
        assert_eq!(policy.min_session_remainder_minutes, 20);
        assert_eq!(policy.min_allocation_minutes, 15);
        assert_eq!(policy.max_courses_per_day, 3);
        assert_eq!(policy.urgency_horizon_days, 30);
        assert_eq!(policy.rounding_step_minutes, 5);
        assert_eq!(policy.drift_correction, DriftCorrection::LargestOnly);
    }

    #[test]
    fn builder_overrides_fields() {
        let policy = PlanPolicy::default()
            .session_minutes(25)
            .max_courses_per_day(2)
            .drift_correction(DriftCorrection::Redistribute);
        assert_eq!(policy.session_minutes, 25);
        assert_eq!(policy.max_courses_per_day, 2);
        assert_eq!(policy.drift_correction, DriftCorrection::Redistribute);
        // Untouched fields keep their defaults.
        assert_eq!(policy.min_allocation_minutes, 15);
    }

    #[test]
    fn deserialize_partial_table_fills_defaults() {
        let toml_str = r#"
session_minutes = 45
drift_correction = "redistribute"
"#;
        let policy: PlanPolicy = toml::from_str(toml_str).expect("should parse");
        assert_eq!(policy.session_minutes, 45);
        assert_eq!(policy.drift_correction, DriftCorrection::Redistribute);
        assert_eq!(policy.urgency_horizon_days, 30);
    }

    #[test]
    fn deserialize_rejects_unknown_strategy() {
        let toml_str = r#"drift_correction = "spread_evenly""#;
        let result: Result<PlanPolicy, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }
}
