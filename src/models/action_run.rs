//! Action run model and trait implementations.
//!
//! An action run is one execution of the hooks a repository has configured
//! for an event (commit, merge, branch creation, ...).

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{segment, LakeClient};
use crate::error::{LakeError, Result};
use crate::pagination::{Page, PaginationParams};
use crate::traits::{Get, List};
use crate::validate::{non_blank, require_id};

/// Outcome of an action run or a hook run.
///
/// Values other than `completed` and `failed` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunStatus {
    Completed,
    Failed,
    Other(String),
}

impl RunStatus {
    /// The wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for RunStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Other(value),
        }
    }
}

impl From<RunStatus> for String {
    fn from(value: RunStatus) -> Self {
        match value {
            RunStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One execution of a repository's configured hooks.
///
/// Produced by the server; read-only to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRun {
    /// Unique run identifier.
    pub run_id: String,

    /// Branch the triggering event happened on.
    pub branch: String,

    /// Commit the run is associated with.
    #[serde(default)]
    pub commit_id: String,

    /// Run outcome.
    pub status: RunStatus,

    /// Triggering event (e.g., "pre-commit", "post-merge").
    #[serde(default)]
    pub event_type: String,

    /// When the run started.
    pub start_time: DateTime<Utc>,

    /// When the run finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// A page of action runs.
pub type ActionRunList = Page<ActionRun>;

/// Key of a single run: `(repository, run_id)`.
pub type RunKey = (String, String);

impl ActionRun {
    /// Check if every hook in the run succeeded.
    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }

    /// Check if at least one hook in the run failed.
    pub fn is_failed(&self) -> bool {
        self.status == RunStatus::Failed
    }

    /// Wall-clock duration, if the run has finished.
    pub fn duration(&self) -> Option<Duration> {
        self.end_time.map(|end| end - self.start_time)
    }

    /// Get all hook runs of this run.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let run = get_run(&client, "repo1", "run1").await?;
    /// for hook in run.hooks(&client, "repo1").await? {
    ///     println!("  {} {}", hook.hook_id, hook.status);
    /// }
    /// ```
    pub async fn hooks(
        &self,
        client: &LakeClient,
        repository: &str,
    ) -> Result<Vec<crate::models::hook_run::HookRun>> {
        crate::models::hook_run::list_all_run_hooks(client, repository, &self.run_id).await
    }
}

/// Scope and filters for listing runs of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionRunListQuery {
    /// Repository to list runs for (path parameter).
    #[serde(skip_serializing)]
    pub repository: String,

    /// Only runs triggered on this branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Only runs associated with this commit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

impl ActionRunListQuery {
    /// List every run of `repository`.
    pub fn new(repository: &str) -> Self {
        Self {
            repository: repository.to_string(),
            ..Default::default()
        }
    }

    /// Restrict to runs on `branch`.
    #[must_use]
    pub fn with_branch(mut self, branch: &str) -> Self {
        self.branch = non_blank(Some(branch));
        self
    }

    /// Restrict to runs for `commit`.
    #[must_use]
    pub fn with_commit(mut self, commit: &str) -> Self {
        self.commit = non_blank(Some(commit));
        self
    }
}

fn runs_path(repository: &str) -> String {
    format!("repositories/{}/actions/runs", segment(repository))
}

#[async_trait]
impl Get for ActionRun {
    type Id = RunKey;

    #[tracing::instrument(skip(client))]
    async fn get(client: &LakeClient, id: RunKey) -> Result<Self> {
        let (repository, run_id) = id;
        require_id("repository", &repository)?;
        require_id("run_id", &run_id)?;

        let path = format!("{}/{}", runs_path(&repository), segment(&run_id));

        let response = client.get(&path).await?;
        let run: ActionRun = response.json().await.map_err(LakeError::HttpError)?;
        Ok(run)
    }
}

#[async_trait]
impl List for ActionRun {
    type Query = ActionRunListQuery;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &LakeClient,
        query: &Self::Query,
        params: &PaginationParams,
    ) -> Result<Page<Self>> {
        require_id("repository", &query.repository)?;
        params.validate()?;

        #[derive(Serialize)]
        struct RequestParams<'a> {
            #[serde(flatten)]
            query: &'a ActionRunListQuery,
            #[serde(flatten)]
            params: &'a PaginationParams,
        }

        let path = runs_path(&query.repository);
        let response = client
            .get_with_query(&path, &RequestParams { query, params })
            .await?;
        let page: ActionRunList = response.json().await.map_err(LakeError::HttpError)?;
        Ok(page)
    }
}

// Convenience functions for working with runs

/// Get a single run.
///
/// # Arguments
///
/// * `client` - The lakeFS API client
/// * `repository` - Repository name
/// * `run_id` - Run identifier
///
/// # Example
///
/// ```ignore
/// use lakeapi::{get_run, LakeClient};
///
/// let client = LakeClient::from_env()?;
/// let run = get_run(&client, "repo1", "run1").await?;
/// println!("Run status: {}", run.status);
/// ```
pub async fn get_run(client: &LakeClient, repository: &str, run_id: &str) -> Result<ActionRun> {
    ActionRun::get(client, (repository.to_string(), run_id.to_string())).await
}

/// Fetch a single page of runs for a repository.
///
/// # Arguments
///
/// * `client` - The lakeFS API client
/// * `repository` - Repository name
/// * `after` - Cursor from the previous page (`None` or empty to start)
/// * `amount` - Page size (`None` for the server default)
/// * `branch` - Optional branch filter
/// * `commit` - Optional commit filter
pub async fn list_repository_runs(
    client: &LakeClient,
    repository: &str,
    after: Option<&str>,
    amount: Option<u32>,
    branch: Option<&str>,
    commit: Option<&str>,
) -> Result<ActionRunList> {
    let query = ActionRunListQuery {
        repository: repository.to_string(),
        branch: non_blank(branch),
        commit: non_blank(commit),
    };
    ActionRun::list_page(client, &query, &PaginationParams::new(after, amount)).await
}

/// Fetch every run matching the query, following cursors.
pub async fn list_all_repository_runs(
    client: &LakeClient,
    query: &ActionRunListQuery,
) -> Result<Vec<ActionRun>> {
    ActionRun::list_all(client, query).await
}
