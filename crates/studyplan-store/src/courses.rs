//! Course store: validation, ids, and the `courses.json` document.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{Days, NaiveDate};
use thiserror::Error;
use tracing::info;

use studyplan_core::{Course, CourseId, CourseSource};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::files::{read_json, remove_if_exists, write_json_atomic};

/// Lowest and highest accepted difficulty / weight.
const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Errors raised when a new course fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseValidationError {
    #[error("course name must not be empty")]
    EmptyName,

    #[error("difficulty {0} is out of range (expected 1-5)")]
    DifficultyOutOfRange(u8),

    #[error("weight {0} is out of range (expected 1-5)")]
    WeightOutOfRange(u8),
}

/// A course as entered by the user, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub exam_date: NaiveDate,
    pub difficulty: u8,
    pub weight: u8,
}

impl NewCourse {
    pub fn new(name: impl Into<String>, exam_date: NaiveDate, difficulty: u8, weight: u8) -> Self {
        Self {
            name: name.into(),
            exam_date,
            difficulty,
            weight,
        }
    }

    /// Validate and assign a fresh id. The name is trimmed.
    pub fn validate(self) -> Result<Course, CourseValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CourseValidationError::EmptyName);
        }
        if !RATING_RANGE.contains(&self.difficulty) {
            return Err(CourseValidationError::DifficultyOutOfRange(self.difficulty));
        }
        if !RATING_RANGE.contains(&self.weight) {
            return Err(CourseValidationError::WeightOutOfRange(self.weight));
        }
        Ok(Course {
            id: CourseId::new(),
            name: name.to_owned(),
            exam_date: self.exam_date,
            difficulty: self.difficulty,
            weight: self.weight,
        })
    }
}

/// Persistent list of courses, newest first.
#[derive(Debug, Clone)]
pub struct CourseStore {
    path: PathBuf,
}

impl CourseStore {
    pub fn open(config: &StoreConfig) -> Self {
        Self {
            path: config.courses_path(),
        }
    }

    /// All courses in storage order (newest first).
    pub fn list(&self) -> Result<Vec<Course>> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    /// All courses ordered by exam date, earliest first.
    pub fn list_by_exam_date(&self) -> Result<Vec<Course>> {
        let mut courses = self.list()?;
        courses.sort_by_key(|c| c.exam_date);
        Ok(courses)
    }

    /// Look up a course by id.
    pub fn get(&self, id: CourseId) -> Result<Option<Course>> {
        Ok(self.list()?.into_iter().find(|c| c.id == id))
    }

    /// Validate `new` and prepend it to the list.
    pub fn add(&self, new: NewCourse) -> Result<Course> {
        let course = new.validate()?;
        let mut courses = self.list()?;
        courses.insert(0, course.clone());
        write_json_atomic(&self.path, &courses)?;
        info!(id = %course.id, name = %course.name, "added course");
        Ok(course)
    }

    /// Remove the course with `id` and return it.
    pub fn remove(&self, id: CourseId) -> Result<Course> {
        let mut courses = self.list()?;
        let pos = courses
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::CourseNotFound(id))?;
        let removed = courses.remove(pos);
        write_json_atomic(&self.path, &courses)?;
        info!(id = %removed.id, name = %removed.name, "removed course");
        Ok(removed)
    }

    /// Delete every course.
    pub fn clear(&self) -> Result<()> {
        remove_if_exists(&self.path)?;
        info!("cleared courses");
        Ok(())
    }

    /// Replace the list with three sample courses whose exams fall 10, 18
    /// and 14 days after `today`.
    pub fn load_sample(&self, today: NaiveDate) -> Result<Vec<Course>> {
        let sample = [
            ("Discrete Math", 10, 4, 4),
            ("Algorithms", 18, 5, 5),
            ("Databases", 14, 3, 3),
        ];
        let courses = sample
            .into_iter()
            .map(|(name, days, difficulty, weight)| {
                let exam = today.checked_add_days(Days::new(days)).unwrap_or(today);
                NewCourse::new(name, exam, difficulty, weight).validate()
            })
            .collect::<Result<Vec<_>, _>>()?;
        write_json_atomic(&self.path, &courses)?;
        info!(count = courses.len(), "loaded sample courses");
        Ok(courses)
    }
}

impl CourseSource for CourseStore {
    fn courses(&self) -> Result<Vec<Course>> {
        self.list()
    }
}
