//! Resource client for the Actions API group.

use crate::client::LakeClient;
use crate::error::Result;
use crate::models::{
    self, ActionRun, ActionRunList, ActionRunListQuery, HookOutput, HookRun, HookRunList,
};

/// Typed façade exposing one method per Actions operation.
///
/// Every method validates its ids locally before sending a request, and
/// none of them modify server state.
///
/// # Example
///
/// ```no_run
/// use lakeapi::{ActionsApi, LakeClient};
///
/// # async fn example() -> lakeapi::Result<()> {
/// let api = ActionsApi::new(LakeClient::from_env()?);
///
/// let page = api.list_repository_runs("repo1", None, Some(10), Some("main"), None).await?;
/// for run in &page {
///     println!("{} {}", run.run_id, run.status);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ActionsApi {
    client: LakeClient,
}

impl ActionsApi {
    /// Wrap a client.
    pub fn new(client: LakeClient) -> Self {
        Self { client }
    }

    /// Create from environment variables (see [`LakeClient::from_env`]).
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(LakeClient::from_env()?))
    }

    /// The underlying transport.
    pub fn client(&self) -> &LakeClient {
        &self.client
    }

    /// Get a run.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for empty ids, `NotFound` if the repository or run
    /// does not exist.
    pub async fn get_run(&self, repository: &str, run_id: &str) -> Result<ActionRun> {
        models::get_run(&self.client, repository, run_id).await
    }

    /// Open the output of a hook run as a byte stream.
    pub async fn get_run_hook_output(
        &self,
        repository: &str,
        run_id: &str,
        hook_run_id: &str,
    ) -> Result<HookOutput> {
        models::get_run_hook_output(&self.client, repository, run_id, hook_run_id).await
    }

    /// List one page of runs, optionally filtered by branch and commit.
    pub async fn list_repository_runs(
        &self,
        repository: &str,
        after: Option<&str>,
        amount: Option<u32>,
        branch: Option<&str>,
        commit: Option<&str>,
    ) -> Result<ActionRunList> {
        models::list_repository_runs(&self.client, repository, after, amount, branch, commit)
            .await
    }

    /// List one page of hook runs for a run.
    pub async fn list_run_hooks(
        &self,
        repository: &str,
        run_id: &str,
        after: Option<&str>,
        amount: Option<u32>,
    ) -> Result<HookRunList> {
        models::list_run_hooks(&self.client, repository, run_id, after, amount).await
    }

    /// List every run matching the query.
    pub async fn list_all_repository_runs(
        &self,
        query: &ActionRunListQuery,
    ) -> Result<Vec<ActionRun>> {
        models::list_all_repository_runs(&self.client, query).await
    }

    /// List every hook run of a run.
    pub async fn list_all_run_hooks(&self, repository: &str, run_id: &str) -> Result<Vec<HookRun>> {
        models::list_all_run_hooks(&self.client, repository, run_id).await
    }
}
