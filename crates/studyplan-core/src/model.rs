//! Plan data model: courses, weekly availability, and generated plans.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

/// Opaque, collision-resistant course identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(Uuid);

impl CourseId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CourseId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for CourseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A course being prepared for, as seen by the planner.
///
/// `difficulty` and `weight` are on a 1-5 scale; the course store enforces
/// the range before a course ever reaches the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub exam_date: NaiveDate,
    pub difficulty: u8,
    pub weight: u8,
}

impl Course {
    /// Create a course with a freshly generated id.
    pub fn new(name: impl Into<String>, exam_date: NaiveDate, difficulty: u8, weight: u8) -> Self {
        Self {
            id: CourseId::new(),
            name: name.into(),
            exam_date,
            difficulty,
            weight,
        }
    }
}

// ---------------------------------------------------------------------------
// Weekdays and week keys
// ---------------------------------------------------------------------------

/// Canonical weekday labels, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayOfWeek {
    /// All seven days in plan order.
    pub const ALL: [DayOfWeek; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Zero-based offset from Monday.
    pub fn offset(self) -> u64 {
        self as u64
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        };
        f.write_str(s)
    }
}

impl FromStr for DayOfWeek {
    type Err = DayOfWeekParseError;

    /// Accepts short or full English names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mon" | "monday" => Ok(Self::Mon),
            "tue" | "tuesday" => Ok(Self::Tue),
            "wed" | "wednesday" => Ok(Self::Wed),
            "thu" | "thursday" => Ok(Self::Thu),
            "fri" | "friday" => Ok(Self::Fri),
            "sat" | "saturday" => Ok(Self::Sat),
            "sun" | "sunday" => Ok(Self::Sun),
            _ => Err(DayOfWeekParseError(s.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`DayOfWeek`] string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid weekday: {0:?} (expected Mon, Tue, Wed, Thu, Fri, Sat or Sun)")]
pub struct DayOfWeekParseError(pub String);

/// Errors raised when building a [`WeekKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekKeyError {
    #[error("week key {0} is not a Monday")]
    NotMonday(NaiveDate),

    #[error("invalid week key date: {0}")]
    InvalidDate(String),
}

/// The Monday that identifies a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct WeekKey(NaiveDate);

impl WeekKey {
    /// The week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let back = u64::from(date.weekday().num_days_from_monday());
        // Only fails at the very start of chrono's representable range.
        Self(date.checked_sub_days(Days::new(back)).unwrap_or(date))
    }

    pub fn monday(&self) -> NaiveDate {
        self.0
    }

    /// Calendar date of `day` within this week.
    pub fn date_of(&self, day: DayOfWeek) -> NaiveDate {
        self.0
            .checked_add_days(Days::new(day.offset()))
            .unwrap_or(self.0)
    }

    /// The seven dates of this week, Monday first.
    pub fn dates(&self) -> impl Iterator<Item = (DayOfWeek, NaiveDate)> + '_ {
        DayOfWeek::ALL.into_iter().map(|d| (d, self.date_of(d)))
    }

    /// The following week.
    pub fn next(&self) -> Self {
        Self(self.0.checked_add_days(Days::new(7)).unwrap_or(self.0))
    }
}

impl TryFrom<NaiveDate> for WeekKey {
    type Error = WeekKeyError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if date.weekday().num_days_from_monday() != 0 {
            return Err(WeekKeyError::NotMonday(date));
        }
        Ok(Self(date))
    }
}

impl From<WeekKey> for NaiveDate {
    fn from(key: WeekKey) -> Self {
        key.0
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for WeekKey {
    type Err = WeekKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| WeekKeyError::InvalidDate(format!("{s}: {e}")))?;
        Self::try_from(date)
    }
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

/// Hours available per weekday for one week.
///
/// Days that are absent count as zero hours.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability(BTreeMap<DayOfWeek, f64>);

impl Availability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from seven hour values, Monday first.
    pub fn from_hours(hours: [f64; 7]) -> Self {
        Self(DayOfWeek::ALL.into_iter().zip(hours).collect())
    }

    pub fn hours(&self, day: DayOfWeek) -> f64 {
        self.0.get(&day).copied().unwrap_or(0.0)
    }

    /// Whole minutes available on `day`, rounded to the nearest minute.
    pub fn minutes(&self, day: DayOfWeek) -> u32 {
        hours_to_minutes(self.hours(day))
    }

    pub fn set(&mut self, day: DayOfWeek, hours: f64) {
        self.0.insert(day, hours);
    }

    /// Builder-style variant of [`Availability::set`].
    pub fn with(mut self, day: DayOfWeek, hours: f64) -> Self {
        self.set(day, hours);
        self
    }

    pub fn total_hours(&self) -> f64 {
        DayOfWeek::ALL.iter().map(|d| self.hours(*d)).sum()
    }

    /// Sum of the per-day rounded minutes.
    pub fn total_minutes(&self) -> u32 {
        DayOfWeek::ALL.iter().map(|d| self.minutes(*d)).sum()
    }
}

/// Availability records addressed by week.
pub type AvailabilityByWeek = BTreeMap<WeekKey, Availability>;

/// Convert hours to minutes, rounding half up.
pub(crate) fn hours_to_minutes(hours: f64) -> u32 {
    // Negative and NaN inputs saturate to zero in the cast.
    (hours * 60.0 + 0.5).floor() as u32
}

// ---------------------------------------------------------------------------
// Plans
// ---------------------------------------------------------------------------

/// Minutes assigned to one course on one day.
///
/// `course_name` is a snapshot taken at generation time so that later
/// renames or deletions do not alter stored plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    pub course_id: CourseId,
    pub course_name: String,
    pub minutes: u32,
}

/// One calendar day of a plan. Items are in allocation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    #[serde(default)]
    pub items: Vec<PlanItem>,
}

impl DayPlan {
    pub fn planned_minutes(&self) -> u32 {
        self.items.iter().map(|i| i.minutes).sum()
    }

    /// A day with nothing scheduled.
    pub fn is_rest_day(&self) -> bool {
        self.items.is_empty()
    }
}

/// A generated week: exactly seven contiguous days, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub week: WeekKey,
    /// The "today" the plan was scored against.
    pub generated_on: NaiveDate,
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    pub fn total_minutes(&self) -> u32 {
        self.days.iter().map(DayPlan::planned_minutes).sum()
    }

    pub fn day(&self, day: DayOfWeek) -> Option<&DayPlan> {
        self.days.get(day.offset() as usize)
    }
}
