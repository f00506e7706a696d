//! Plan store: the single most recently generated plan.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use studyplan_core::{PlanSink, WeeklyPlan};

use crate::config::StoreConfig;
use crate::files::{read_json, remove_if_exists, write_json_atomic};

/// Holds at most one [`WeeklyPlan`]. Generation replaces it wholesale;
/// clearing deletes it.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    pub fn open(config: &StoreConfig) -> Self {
        Self {
            path: config.plan_path(),
        }
    }

    /// The stored plan, if one has been generated.
    pub fn load(&self) -> Result<Option<WeeklyPlan>> {
        read_json(&self.path)
    }
}

impl PlanSink for PlanStore {
    fn replace(&mut self, plan: &WeeklyPlan) -> Result<()> {
        write_json_atomic(&self.path, plan)?;
        info!(week = %plan.week, "stored plan");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if remove_if_exists(&self.path)? {
            info!("removed stored plan");
        }
        Ok(())
    }
}
