//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::{ActionRun, HookRun, RunStatus};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 3, 4, 10, 0, 0)
            .single()
            .unwrap_or_default()
    }

    // =========================================================================
    // Run Fixtures
    // =========================================================================

    /// Create a finished run with the given status.
    ///
    /// The commit id is derived from the run id (`commit-<run_id>`).
    pub fn run(run_id: &str, branch: &str, status: RunStatus) -> ActionRun {
        let start_time = Self::base_time();
        ActionRun {
            run_id: run_id.to_string(),
            branch: branch.to_string(),
            commit_id: format!("commit-{run_id}"),
            status,
            event_type: "pre-commit".to_string(),
            start_time,
            end_time: Some(start_time + Duration::seconds(3)),
        }
    }

    /// Create a run whose hooks all succeeded.
    pub fn completed_run(run_id: &str, branch: &str) -> ActionRun {
        Self::run(run_id, branch, RunStatus::Completed)
    }

    /// Create a run with at least one failed hook.
    pub fn failed_run(run_id: &str, branch: &str) -> ActionRun {
        Self::run(run_id, branch, RunStatus::Failed)
    }

    // =========================================================================
    // Hook Fixtures
    // =========================================================================

    /// Create a hook run.
    pub fn hook_run(hook_run_id: &str, action: &str, hook_id: &str, status: RunStatus) -> HookRun {
        let start_time = Self::base_time();
        HookRun {
            hook_run_id: hook_run_id.to_string(),
            action: action.to_string(),
            hook_id: hook_id.to_string(),
            status,
            start_time,
            end_time: Some(start_time + Duration::milliseconds(250)),
        }
    }

    /// Create `count` completed hook runs with ids `0000_0000`, `0000_0001`, ...
    pub fn hook_runs(count: usize) -> Vec<HookRun> {
        (0..count)
            .map(|i| {
                Self::hook_run(
                    &format!("0000_{i:04}"),
                    "validate_tables",
                    &format!("check_{i}"),
                    RunStatus::Completed,
                )
            })
            .collect()
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related resources.
pub struct DefaultScenario {
    pub repository: String,
    pub runs: Vec<ActionRun>,
    pub hooks: Vec<(String, Vec<HookRun>)>,
    pub outputs: Vec<(String, String, Vec<u8>)>,
}

impl DefaultScenario {
    fn new() -> Self {
        let repository = "repo1".to_string();

        let runs = vec![
            Fixtures::completed_run("run1", "main"),
            Fixtures::failed_run("run2", "dev"),
            Fixtures::completed_run("run3", "main"),
        ];

        let mut failing_hooks = Fixtures::hook_runs(1);
        failing_hooks.push(Fixtures::hook_run(
            "0000_0001",
            "validate_tables",
            "check_schema",
            RunStatus::Failed,
        ));

        let hooks = vec![
            ("run1".to_string(), Fixtures::hook_runs(12)),
            ("run2".to_string(), failing_hooks),
        ];

        let outputs = vec![
            (
                "run1".to_string(),
                "0000_0000".to_string(),
                b"hook check_0 started\nhook check_0 finished\n".to_vec(),
            ),
            (
                "run2".to_string(),
                "0000_0001".to_string(),
                b"schema mismatch: column 'id' expected int64\n".to_vec(),
            ),
        ];

        Self {
            repository,
            runs,
            hooks,
            outputs,
        }
    }
}
