//! Mock server state management.
//!
//! Provides the in-memory data store for the mock lakeFS Actions server.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::pagination::{Page, Pagination, DEFAULT_AMOUNT, MAX_AMOUNT};
use crate::{ActionRun, HookRun};

/// Shared state for the mock server.
///
/// Runs and hook runs are kept ordered by id so cursor pagination is
/// stable. It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Known repositories. Requests for other repositories return 404.
    pub repositories: BTreeSet<String>,

    /// Runs indexed by repository, then run id.
    pub runs: HashMap<String, BTreeMap<String, ActionRun>>,

    /// Hook runs indexed by (repository, run id), then hook run id.
    pub hooks: HashMap<(String, String), BTreeMap<String, HookRun>>,

    /// Hook output indexed by (repository, run id, hook run id).
    pub outputs: HashMap<(String, String, String), Vec<u8>>,

    /// Optional authorization header value. If set, requests must send it.
    pub required_authorization: Option<String>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add an empty repository.
    pub fn with_repository(mut self, repository: &str) -> Self {
        self.repositories.insert(repository.to_string());
        self
    }

    /// Add a run (and its repository) to the state.
    pub fn with_run(mut self, repository: &str, run: ActionRun) -> Self {
        self.insert_run(repository, run);
        self
    }

    /// Add hook runs for a run.
    pub fn with_hooks(mut self, repository: &str, run_id: &str, hooks: Vec<HookRun>) -> Self {
        let entry = self
            .hooks
            .entry((repository.to_string(), run_id.to_string()))
            .or_default();
        for hook in hooks {
            entry.insert(hook.hook_run_id.clone(), hook);
        }
        self
    }

    /// Set the output of a hook run.
    pub fn with_output(
        mut self,
        repository: &str,
        run_id: &str,
        hook_run_id: &str,
        output: impl Into<Vec<u8>>,
    ) -> Self {
        self.outputs.insert(
            (
                repository.to_string(),
                run_id.to_string(),
                hook_run_id.to_string(),
            ),
            output.into(),
        );
        self
    }

    /// Require a bearer token on every request.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_authorization = Some(format!("Bearer {token}"));
        self
    }

    /// Insert a run, creating the repository if needed.
    pub fn insert_run(&mut self, repository: &str, run: ActionRun) {
        self.repositories.insert(repository.to_string());
        self.runs
            .entry(repository.to_string())
            .or_default()
            .insert(run.run_id.clone(), run);
    }

    /// Whether the repository exists.
    pub fn has_repository(&self, repository: &str) -> bool {
        self.repositories.contains(repository)
    }

    /// Get a run by id.
    pub fn get_run(&self, repository: &str, run_id: &str) -> Option<&ActionRun> {
        self.runs.get(repository).and_then(|runs| runs.get(run_id))
    }

    /// Get the output of a hook run.
    pub fn get_output(&self, repository: &str, run_id: &str, hook_run_id: &str) -> Option<&[u8]> {
        self.outputs
            .get(&(
                repository.to_string(),
                run_id.to_string(),
                hook_run_id.to_string(),
            ))
            .map(Vec::as_slice)
    }

    /// List a page of runs, optionally filtered by branch and commit.
    pub fn list_runs(
        &self,
        repository: &str,
        branch: Option<&str>,
        commit: Option<&str>,
        after: Option<&str>,
        amount: Option<u32>,
    ) -> Page<ActionRun> {
        let runs = self
            .runs
            .get(repository)
            .into_iter()
            .flat_map(|runs| runs.values())
            .filter(|r| branch.map_or(true, |b| r.branch == b))
            .filter(|r| commit.map_or(true, |c| r.commit_id == c));

        paginate(runs, |r| r.run_id.as_str(), after, amount)
    }

    /// List a page of hook runs of a run.
    pub fn list_hooks(
        &self,
        repository: &str,
        run_id: &str,
        after: Option<&str>,
        amount: Option<u32>,
    ) -> Page<HookRun> {
        let hooks = self
            .hooks
            .get(&(repository.to_string(), run_id.to_string()))
            .into_iter()
            .flat_map(|hooks| hooks.values());

        paginate(hooks, |h| h.hook_run_id.as_str(), after, amount)
    }
}

/// Cursor-paginate items already sorted by `key`.
///
/// Takes one item more than requested to learn whether another page
/// exists; the cursor is the key of the last returned item.
fn paginate<'a, T, I, K>(items: I, key: K, after: Option<&str>, amount: Option<u32>) -> Page<T>
where
    T: Clone + 'a,
    I: Iterator<Item = &'a T>,
    K: Fn(&T) -> &str,
{
    let amount = match amount {
        None | Some(0) => DEFAULT_AMOUNT,
        Some(a) => a.min(MAX_AMOUNT),
    } as usize;
    let after = after.filter(|a| !a.is_empty());

    let mut results: Vec<T> = items
        .filter(|item| after.map_or(true, |a| key(*item) > a))
        .take(amount + 1)
        .cloned()
        .collect();

    let has_more = results.len() > amount;
    results.truncate(amount);

    let next_offset = if has_more {
        results.last().map(|item| key(item).to_string()).unwrap_or_default()
    } else {
        String::new()
    };

    let count = results.len() as u32;
    Page::new(
        results,
        Pagination {
            has_more,
            next_offset,
            results: count,
            max_per_page: MAX_AMOUNT,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    fn state_with_runs(count: usize) -> MockState {
        (0..count).fold(MockState::new(), |state, i| {
            state.with_run("repo1", Fixtures::completed_run(&format!("run{i:02}"), "main"))
        })
    }

    #[test]
    fn test_state_add_and_get_run() {
        let state = MockState::new().with_run("repo1", Fixtures::completed_run("run1", "main"));

        assert!(state.has_repository("repo1"));
        let run = state.get_run("repo1", "run1");
        assert!(run.is_some());
        assert_eq!(run.unwrap().run_id, "run1");
        assert!(state.get_run("repo1", "missing").is_none());
        assert!(state.get_run("other", "run1").is_none());
    }

    #[test]
    fn test_paginate_pages_are_disjoint_and_complete() {
        let state = state_with_runs(7);

        let first = state.list_runs("repo1", None, None, None, Some(3));
        assert_eq!(first.len(), 3);
        assert!(first.has_more());
        assert_eq!(first.pagination.next_offset, "run02");

        let second = state.list_runs("repo1", None, None, Some("run02"), Some(3));
        assert_eq!(second.results[0].run_id, "run03");
        assert!(second.has_more());

        let third = state.list_runs("repo1", None, None, Some("run05"), Some(3));
        assert_eq!(third.len(), 1);
        assert!(!third.has_more());
        assert_eq!(third.pagination.next_offset, "");
    }

    #[test]
    fn test_paginate_exact_fit_has_no_more() {
        let state = state_with_runs(3);
        let page = state.list_runs("repo1", None, None, None, Some(3));
        assert_eq!(page.len(), 3);
        assert!(!page.has_more());
    }

    #[test]
    fn test_paginate_defaults_and_clamps_amount() {
        let state = state_with_runs(5);
        assert_eq!(state.list_runs("repo1", None, None, None, None).len(), 5);
        assert_eq!(state.list_runs("repo1", None, None, None, Some(0)).len(), 5);
    }

    #[test]
    fn test_list_runs_filters() {
        let state = MockState::new()
            .with_run("repo1", Fixtures::completed_run("run1", "main"))
            .with_run("repo1", Fixtures::failed_run("run2", "dev"))
            .with_run("repo1", Fixtures::completed_run("run3", "dev"));

        let dev = state.list_runs("repo1", Some("dev"), None, None, None);
        assert_eq!(dev.len(), 2);

        let commit = state.list_runs("repo1", Some("dev"), Some("commit-run3"), None, None);
        assert_eq!(commit.len(), 1);
        assert_eq!(commit.results[0].run_id, "run3");
    }
}
