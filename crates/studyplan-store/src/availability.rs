//! Availability store: hours per weekday, keyed by week.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use studyplan_core::{
    Availability, AvailabilityByWeek, AvailabilitySource, DayOfWeek, WeekKey,
};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::files::{read_json, write_json_atomic};

/// Most hours that can be booked on a single day.
pub const MAX_DAILY_HOURS: f64 = 10.0;

/// Starting point for a week that has not been edited yet:
/// two hours on weekdays and Sunday, three on Saturday.
pub fn default_week() -> Availability {
    Availability::from_hours([2.0, 2.0, 2.0, 2.0, 2.0, 3.0, 2.0])
}

/// Clamp user input into `[0, MAX_DAILY_HOURS]`. Non-finite input becomes 0.
pub fn clamp_hours(hours: f64) -> f64 {
    if hours.is_finite() {
        hours.clamp(0.0, MAX_DAILY_HOURS)
    } else {
        0.0
    }
}

/// Persistent availability records, one per week.
#[derive(Debug, Clone)]
pub struct AvailabilityStore {
    path: PathBuf,
}

impl AvailabilityStore {
    pub fn open(config: &StoreConfig) -> Self {
        Self {
            path: config.availability_path(),
        }
    }

    /// Every stored week.
    pub fn load_all(&self) -> Result<AvailabilityByWeek> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    /// The stored record for `week`, if any.
    pub fn get(&self, week: WeekKey) -> Result<Option<Availability>> {
        Ok(self.load_all()?.remove(&week))
    }

    /// The stored record for `week`, or [`default_week`] when unset.
    pub fn effective(&self, week: WeekKey) -> Result<Availability> {
        Ok(self.get(week)?.unwrap_or_else(default_week))
    }

    /// Set one day's hours, clamped. An unset week starts from the default.
    pub fn set_hours(&self, week: WeekKey, day: DayOfWeek, hours: f64) -> Result<Availability> {
        let mut all = self.load_all()?;
        let entry = all.entry(week).or_insert_with(default_week);
        entry.set(day, clamp_hours(hours));
        let updated = entry.clone();
        write_json_atomic(&self.path, &all)?;
        info!(%week, %day, hours = updated.hours(day), "set availability");
        Ok(updated)
    }

    /// Store a whole week. Every day is clamped.
    pub fn set_week(&self, week: WeekKey, availability: &Availability) -> Result<Availability> {
        let clamped = DayOfWeek::ALL
            .into_iter()
            .fold(Availability::new(), |acc, day| {
                acc.with(day, clamp_hours(availability.hours(day)))
            });
        let mut all = self.load_all()?;
        all.insert(week, clamped.clone());
        write_json_atomic(&self.path, &all)?;
        info!(%week, total_hours = clamped.total_hours(), "stored week availability");
        Ok(clamped)
    }

    /// Overwrite `week` with [`default_week`].
    pub fn reset_week(&self, week: WeekKey) -> Result<Availability> {
        self.set_week(week, &default_week())
    }

    /// Copy the latest stored week before `week` into `week`.
    ///
    /// Returns the week that was copied from.
    pub fn copy_previous(&self, week: WeekKey) -> Result<WeekKey> {
        let mut all = self.load_all()?;
        let (source, availability) = all
            .range(..week)
            .next_back()
            .map(|(k, v)| (*k, v.clone()))
            .ok_or(StoreError::NoPreviousWeek(week))?;
        all.insert(week, availability);
        write_json_atomic(&self.path, &all)?;
        info!(%week, from = %source, "copied availability");
        Ok(source)
    }
}

impl AvailabilitySource for AvailabilityStore {
    fn availability(&self, week: WeekKey) -> Result<Option<Availability>> {
        self.get(week)
    }
}
