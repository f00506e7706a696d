//! File-backed stores for courses, weekly availability, and the generated
//! plan.
//!
//! Each store owns one JSON document under the configured data directory.
//! Writes go through a temp file and a rename so a reader never sees a
//! half-written document.

pub mod availability;
pub mod config;
pub mod courses;
pub mod error;
pub mod files;
pub mod plans;

pub use availability::{AvailabilityStore, clamp_hours, default_week};
pub use config::StoreConfig;
pub use courses::{CourseStore, CourseValidationError, NewCourse};
pub use error::StoreError;
pub use plans::PlanStore;
