//! Integration tests for the `studyplan` binary.
//!
//! Each test runs the real binary against its own temporary data directory
//! and an empty config directory, so no user config leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use studyplan_test_utils::TestStore;

/// Isolated data and config directories for one test.
struct Sandbox {
    config_home: TempDir,
    store: TestStore,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            config_home: TempDir::new().expect("failed to create config dir"),
            store: TestStore::new(),
        }
    }

    fn studyplan(&self) -> Command {
        let mut cmd = Command::cargo_bin("studyplan").expect("binary should be built");
        cmd.env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("STUDYPLAN_DATA_DIR")
            .env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.store.config().data_dir());
        cmd
    }

    /// Sample courses scored from 2026-10-18 and default hours for the
    /// week of 2026-10-19.
    fn seed(&self) {
        self.studyplan()
            .args(["course", "sample", "--today", "2026-10-18"])
            .assert()
            .success();
        self.studyplan()
            .args(["availability", "reset", "--week", "2026-10-19"])
            .assert()
            .success();
    }
}

#[test]
fn show_without_plan_says_so() {
    let sandbox = Sandbox::new();
    sandbox
        .studyplan()
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plan generated yet"));
}

#[test]
fn generate_prints_the_week() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    sandbox
        .studyplan()
        .args(["plan", "generate", "--week", "2026-10-19", "--today", "2026-10-18"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Week of 2026-10-19 (scored on 2026-10-18)",
        ))
        .stdout(predicate::str::contains("Sat, Oct 24  180 min"))
        .stdout(predicate::str::contains("Discrete Math"));
}

#[test]
fn generate_defaults_to_the_week_of_today() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    sandbox
        .studyplan()
        .args(["plan", "generate", "--today", "2026-10-21"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Week of 2026-10-19 (scored on 2026-10-21)",
        ));
}

#[test]
fn generate_without_courses_points_at_course_add() {
    let sandbox = Sandbox::new();
    sandbox
        .studyplan()
        .args(["availability", "reset", "--week", "2026-10-19"])
        .assert()
        .success();

    sandbox
        .studyplan()
        .args(["plan", "generate", "--week", "2026-10-19", "--today", "2026-10-18"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plan not generated"))
        .stderr(predicate::str::contains("studyplan course add"))
        .stderr(predicate::str::contains("no courses to plan for"));
}

#[test]
fn refused_generation_keeps_stored_plan() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    sandbox
        .studyplan()
        .args(["plan", "generate", "--week", "2026-10-19", "--today", "2026-10-18"])
        .assert()
        .success();

    sandbox
        .studyplan()
        .args(["plan", "generate", "--week", "2026-10-26", "--today", "2026-10-18"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("studyplan availability set"))
        .stderr(predicate::str::contains(
            "no availability set for the week of 2026-10-26",
        ));

    sandbox
        .studyplan()
        .args(["plan", "show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"week\": \"2026-10-19\""));
}

#[test]
fn refused_generation_is_logged_at_info() {
    let sandbox = Sandbox::new();

    sandbox
        .studyplan()
        .env("RUST_LOG", "info")
        .args(["plan", "generate", "--week", "2026-10-19", "--today", "2026-10-18"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("plan generation refused"));
}

#[test]
fn clear_then_show_reports_no_plan() {
    let sandbox = Sandbox::new();
    sandbox.seed();
    sandbox
        .studyplan()
        .args(["plan", "generate", "--week", "2026-10-19", "--today", "2026-10-18"])
        .assert()
        .success();

    sandbox
        .studyplan()
        .args(["plan", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan cleared."));
    sandbox
        .studyplan()
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No plan generated yet"));
}

#[test]
fn explain_ranks_sample_courses() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    sandbox
        .studyplan()
        .args(["plan", "explain", "--today", "2026-10-18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Why this plan?"))
        .stdout(predicate::str::contains(
            "Discrete Math  exam in 10 days (soon)",
        ));
}
