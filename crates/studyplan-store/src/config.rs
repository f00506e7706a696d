use std::env;
use std::path::{Path, PathBuf};

/// Storage configuration.
///
/// Reads from the `STUDYPLAN_DATA_DIR` environment variable, falling back
/// to the platform data directory (e.g. `~/.local/share/studyplan`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding the JSON documents.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Environment variable that overrides the data directory.
    pub const ENV_VAR: &'static str = "STUDYPLAN_DATA_DIR";

    const COURSES_FILE: &'static str = "courses.json";
    const AVAILABILITY_FILE: &'static str = "availability.json";
    const PLAN_FILE: &'static str = "plan.json";

    /// Build a config from the environment.
    ///
    /// Priority: `STUDYPLAN_DATA_DIR` env var, then [`StoreConfig::default_data_dir`].
    pub fn from_env() -> Self {
        let data_dir = env::var_os(Self::ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_data_dir);
        Self { data_dir }
    }

    /// Build a config from an explicit directory (useful for tests and CLI flags).
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// `<platform data dir>/studyplan`, or `./.studyplan` when the platform
    /// has no data directory.
    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("studyplan"))
            .unwrap_or_else(|| PathBuf::from(".studyplan"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn courses_path(&self) -> PathBuf {
        self.data_dir.join(Self::COURSES_FILE)
    }

    pub fn availability_path(&self) -> PathBuf {
        self.data_dir.join(Self::AVAILABILITY_FILE)
    }

    pub fn plan_path(&self) -> PathBuf {
        self.data_dir.join(Self::PLAN_FILE)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_new() {
        let cfg = StoreConfig::new("/tmp/plans");
        assert_eq!(cfg.data_dir(), Path::new("/tmp/plans"));
    }

    #[test]
    fn document_paths_live_in_data_dir() {
        let cfg = StoreConfig::new("/srv/studyplan");
        assert_eq!(
            cfg.courses_path(),
            PathBuf::from("/srv/studyplan/courses.json")
        );
        assert_eq!(
            cfg.availability_path(),
            PathBuf::from("/srv/studyplan/availability.json")
        );
        assert_eq!(cfg.plan_path(), PathBuf::from("/srv/studyplan/plan.json"));
    }

    #[test]
    fn default_data_dir_is_named_for_the_app() {
        let dir = StoreConfig::default_data_dir();
        assert!(
            dir.ends_with("studyplan") || dir.ends_with(".studyplan"),
            "unexpected data dir: {}",
            dir.display()
        );
    }
}
