//! Hook run model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{segment, LakeClient};
use crate::error::{LakeError, Result};
use crate::models::action_run::RunStatus;
use crate::pagination::{Page, PaginationParams};
use crate::traits::List;
use crate::validate::require_id;

/// One hook's execution within an action run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookRun {
    /// Unique hook run identifier within the run.
    pub hook_run_id: String,

    /// Name of the action the hook belongs to.
    pub action: String,

    /// Hook identifier inside the action definition.
    pub hook_id: String,

    /// Hook outcome.
    pub status: RunStatus,

    /// When the hook started.
    pub start_time: DateTime<Utc>,

    /// When the hook finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// A page of hook runs.
pub type HookRunList = Page<HookRun>;

impl HookRun {
    /// Check if the hook failed.
    pub fn is_failed(&self) -> bool {
        self.status == RunStatus::Failed
    }
}

/// Scope for listing the hooks of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookRunListQuery {
    /// Repository the run belongs to.
    pub repository: String,
    /// Run whose hooks are listed.
    pub run_id: String,
}

impl HookRunListQuery {
    /// Hooks of `run_id` in `repository`.
    pub fn new(repository: &str, run_id: &str) -> Self {
        Self {
            repository: repository.to_string(),
            run_id: run_id.to_string(),
        }
    }
}

pub(crate) fn hooks_path(repository: &str, run_id: &str) -> String {
    format!(
        "repositories/{}/actions/runs/{}/hooks",
        segment(repository),
        segment(run_id)
    )
}

#[async_trait]
impl List for HookRun {
    type Query = HookRunListQuery;

    #[tracing::instrument(skip(client))]
    async fn list_page(
        client: &LakeClient,
        query: &Self::Query,
        params: &PaginationParams,
    ) -> Result<Page<Self>> {
        require_id("repository", &query.repository)?;
        require_id("run_id", &query.run_id)?;
        params.validate()?;

        let path = hooks_path(&query.repository, &query.run_id);
        let response = client.get_with_query(&path, params).await?;
        let page: HookRunList = response.json().await.map_err(LakeError::HttpError)?;
        Ok(page)
    }
}

/// Fetch a single page of hook runs for a run.
///
/// # Arguments
///
/// * `client` - The lakeFS API client
/// * `repository` - Repository name
/// * `run_id` - Run identifier
/// * `after` - Cursor from the previous page (`None` or empty to start)
/// * `amount` - Page size (`None` for the server default)
pub async fn list_run_hooks(
    client: &LakeClient,
    repository: &str,
    run_id: &str,
    after: Option<&str>,
    amount: Option<u32>,
) -> Result<HookRunList> {
    HookRun::list_page(
        client,
        &HookRunListQuery::new(repository, run_id),
        &PaginationParams::new(after, amount),
    )
    .await
}

/// Fetch every hook run of a run, following cursors.
pub async fn list_all_run_hooks(
    client: &LakeClient,
    repository: &str,
    run_id: &str,
) -> Result<Vec<HookRun>> {
    HookRun::list_all(client, &HookRunListQuery::new(repository, run_id)).await
}
