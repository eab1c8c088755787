//! Get trait for fetching single resources.

use async_trait::async_trait;

use crate::client::LakeClient;
use crate::error::Result;

/// Fetch a single resource by ID.
///
/// Implement this trait for resource types that can be fetched
/// individually by a key scoped to a repository.
///
/// # Example
///
/// ```ignore
/// use lakeapi::{ActionRun, Get, LakeClient};
///
/// let client = LakeClient::from_env()?;
/// let run = ActionRun::get(&client, ("repo1".to_string(), "run1".to_string())).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this resource (e.g., repository + run id).
    type Id: Send;

    /// Fetch the resource by ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The lakeFS API client
    /// * `id` - The resource identifier
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for empty ids, `NotFound` if the resource
    /// does not exist, or another error if the request fails.
    async fn get(client: &LakeClient, id: Self::Id) -> Result<Self>;
}
